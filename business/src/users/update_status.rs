//! Update user status command + compute cache.

use std::any::Any;

use super::api;
use super::cache::{USERS_CACHE_SCOPE, UsersQueryCache};
use super::{UpdateUserStatusPayload, User, UserStatus};
use crate::{BusinessConfig, Notifications};

use insider_states::{
    Command, CommandSnapshot, Compute, ComputeDeps, Dep, SnapshotClone, State, Updater,
    assign_impl, state_assign_impl,
};
use log::{error, info};
use ustr::Ustr;

/// Target account and desired status; `user_id: None` means no change is
/// intended and the command skips.
#[derive(Default, Debug, Clone)]
pub struct UpdateUserStatusInput {
    pub user_id: Option<Ustr>,
    pub status: UserStatus,
}

impl SnapshotClone for UpdateUserStatusInput {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl State for UpdateUserStatusInput {
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
pub enum UpdateUserStatusResult {
    #[default]
    Idle,
    Pending,
    Success(User),
    Error(String),
}

/// Compute-shaped cache for the latest status update; `compute()` is a no-op.
#[derive(Default, Debug, Clone)]
pub struct UpdateUserStatusCompute {
    pub result: UpdateUserStatusResult,
}

impl UpdateUserStatusCompute {
    pub fn is_success(&self) -> bool {
        matches!(self.result, UpdateUserStatusResult::Success(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.result, UpdateUserStatusResult::Pending)
    }

    pub fn error_message(&self) -> Option<&str> {
        if let UpdateUserStatusResult::Error(ref msg) = self.result {
            Some(msg)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.result = UpdateUserStatusResult::Idle;
    }
}

impl SnapshotClone for UpdateUserStatusCompute {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl Compute for UpdateUserStatusCompute {
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

impl State for UpdateUserStatusCompute {
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

/// Dispatch explicitly via `ctx.dispatch::<UpdateUserStatusCommand>()`.
#[derive(Default, Debug)]
pub struct UpdateUserStatusCommand;

impl Command for UpdateUserStatusCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: tokio_util::sync::CancellationToken,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send>> {
        let input: UpdateUserStatusInput = snap.state::<UpdateUserStatusInput>().clone();
        let config: BusinessConfig = snap.state::<BusinessConfig>().clone();

        Box::pin(async move {
            let Some(user_id) = input.user_id else {
                info!("UpdateUserStatusCommand: no user set, skipping");
                return;
            };

            info!(
                "UpdateUserStatusCommand: setting '{}' to {}",
                user_id,
                input.status.label()
            );
            updater.set(UpdateUserStatusCompute {
                result: UpdateUserStatusResult::Pending,
            });

            let payload = UpdateUserStatusPayload {
                status: input.status,
            };
            match api::update_user_status(config.api_url().as_str(), user_id.as_str(), &payload)
                .await
            {
                Ok(user) => {
                    info!("UpdateUserStatusCommand: '{}' updated", user.user_id);
                    updater.update::<UsersQueryCache>(|cache| {
                        cache.invalidate(USERS_CACHE_SCOPE);
                    });
                    updater.update::<Notifications>(|notifications| {
                        notifications.push_success("User status updated successfully");
                    });
                    updater.set(UpdateUserStatusCompute {
                        result: UpdateUserStatusResult::Success(user),
                    });
                }
                Err(err) => {
                    error!("UpdateUserStatusCommand: {err}");
                    updater.set(UpdateUserStatusCompute {
                        result: UpdateUserStatusResult::Error(err.to_string()),
                    });
                }
            }
        })
    }
}
