//! Delete user command + compute cache.

use std::any::Any;

use super::api;
use super::cache::{USERS_CACHE_SCOPE, UsersQueryCache};
use crate::{BusinessConfig, Notifications};

use insider_states::{
    Command, CommandSnapshot, Compute, ComputeDeps, Dep, SnapshotClone, State, Updater,
    assign_impl, state_assign_impl,
};
use log::{error, info};
use ustr::Ustr;

/// Account to delete; `None` means no deletion is intended and the command
/// skips.
#[derive(Default, Debug, Clone)]
pub struct DeleteUserInput {
    pub user_id: Option<Ustr>,
}

impl SnapshotClone for DeleteUserInput {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl State for DeleteUserInput {
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
pub enum DeleteUserResult {
    #[default]
    Idle,
    Pending,
    /// Holds the id of the deleted account.
    Success(Ustr),
    Error(String),
}

/// Compute-shaped cache for the latest delete outcome; `compute()` is a no-op.
#[derive(Default, Debug, Clone)]
pub struct DeleteUserCompute {
    pub result: DeleteUserResult,
}

impl DeleteUserCompute {
    pub fn is_success(&self) -> bool {
        matches!(self.result, DeleteUserResult::Success(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.result, DeleteUserResult::Pending)
    }

    pub fn error_message(&self) -> Option<&str> {
        if let DeleteUserResult::Error(ref msg) = self.result {
            Some(msg)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.result = DeleteUserResult::Idle;
    }
}

impl SnapshotClone for DeleteUserCompute {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl Compute for DeleteUserCompute {
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

impl State for DeleteUserCompute {
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

/// Dispatch explicitly via `ctx.dispatch::<DeleteUserCommand>()`.
#[derive(Default, Debug)]
pub struct DeleteUserCommand;

impl Command for DeleteUserCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: tokio_util::sync::CancellationToken,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send>> {
        let input: DeleteUserInput = snap.state::<DeleteUserInput>().clone();
        let config: BusinessConfig = snap.state::<BusinessConfig>().clone();

        Box::pin(async move {
            let Some(user_id) = input.user_id else {
                info!("DeleteUserCommand: no user set, skipping");
                return;
            };

            info!("DeleteUserCommand: deleting '{}'", user_id);
            updater.set(DeleteUserCompute {
                result: DeleteUserResult::Pending,
            });

            match api::delete_user(config.api_url().as_str(), user_id.as_str()).await {
                Ok(()) => {
                    info!("DeleteUserCommand: '{}' deleted", user_id);
                    updater.update::<UsersQueryCache>(|cache| {
                        cache.invalidate(USERS_CACHE_SCOPE);
                    });
                    updater.update::<Notifications>(|notifications| {
                        notifications.push_success("User deleted successfully");
                    });
                    updater.set(DeleteUserCompute {
                        result: DeleteUserResult::Success(user_id),
                    });
                }
                Err(err) => {
                    error!("DeleteUserCommand: {err}");
                    updater.set(DeleteUserCompute {
                        result: DeleteUserResult::Error(err.to_string()),
                    });
                }
            }
        })
    }
}
