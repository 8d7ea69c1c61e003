//! Create user command + compute cache.
//!
//! On success the command invalidates the users query cache and pushes a
//! success notification; failures surface only through [`CreateUserResult`].

use std::any::Any;

use super::api;
use super::cache::{USERS_CACHE_SCOPE, UsersQueryCache};
use super::{CreateUserPayload, User};
use crate::{BusinessConfig, Notifications};

use insider_states::{
    Command, CommandSnapshot, Compute, ComputeDeps, Dep, SnapshotClone, State, Updater,
    assign_impl, state_assign_impl,
};
use log::{error, info};

/// Set the payload before dispatching [`CreateUserCommand`]; `None` means
/// no creation is intended and the command skips.
#[derive(Default, Debug, Clone)]
pub struct CreateUserInput {
    pub payload: Option<CreateUserPayload>,
}

impl SnapshotClone for CreateUserInput {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl State for CreateUserInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

#[derive(Debug, Clone, Default)]
pub enum CreateUserResult {
    #[default]
    Idle,
    Pending,
    Success(User),
    Error(String),
}

/// Compute-shaped cache for the latest create outcome; `compute()` is a no-op.
#[derive(Default, Debug, Clone)]
pub struct CreateUserCompute {
    pub result: CreateUserResult,
}

impl CreateUserCompute {
    pub fn is_success(&self) -> bool {
        matches!(self.result, CreateUserResult::Success(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.result, CreateUserResult::Pending)
    }

    pub fn error_message(&self) -> Option<&str> {
        if let CreateUserResult::Error(ref msg) = self.result {
            Some(msg)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.result = CreateUserResult::Idle;
    }
}

impl SnapshotClone for CreateUserCompute {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl Compute for CreateUserCompute {
    fn deps(&self) -> ComputeDeps {
        (&[], &[])
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {
        // Intentionally no-op.
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

impl State for CreateUserCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

/// Dispatch explicitly via `ctx.dispatch::<CreateUserCommand>()`.
#[derive(Default, Debug)]
pub struct CreateUserCommand;

impl Command for CreateUserCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: tokio_util::sync::CancellationToken,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send>> {
        let input: CreateUserInput = snap.state::<CreateUserInput>().clone();
        let config: BusinessConfig = snap.state::<BusinessConfig>().clone();

        Box::pin(async move {
            let Some(payload) = input.payload else {
                info!("CreateUserCommand: no payload set, skipping");
                return;
            };

            // The payload is opaque here; the server owns validation.
            info!("CreateUserCommand: creating user '{}'", payload.email);
            updater.set(CreateUserCompute {
                result: CreateUserResult::Pending,
            });

            match api::create_user(config.api_url().as_str(), &payload).await {
                Ok(user) => {
                    info!("CreateUserCommand: user '{}' created", user.user_id);
                    updater.update::<UsersQueryCache>(|cache| {
                        cache.invalidate(USERS_CACHE_SCOPE);
                    });
                    updater.update::<Notifications>(|notifications| {
                        notifications.push_success("User added successfully");
                    });
                    updater.set(CreateUserCompute {
                        result: CreateUserResult::Success(user),
                    });
                }
                Err(err) => {
                    error!("CreateUserCommand: {err}");
                    updater.set(CreateUserCompute {
                        result: CreateUserResult::Error(err.to_string()),
                    });
                }
            }
        })
    }
}
