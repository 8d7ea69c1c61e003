//! List users command + compute cache.
//!
//! The command consults [`UsersQueryCache`] first: a fresh entry for the
//! requested `(page, filters)` key resolves without any network traffic. On a
//! miss (or stale entry) it fetches, stores the page back into the cache
//! through `Updater::update`, and publishes the result.

use std::any::Any;

use super::api;
use super::cache::{UsersQueryCache, UsersQueryKey};
use super::{PaginatedResponse, User, UserFilters};
use crate::BusinessConfig;

use insider_states::{
    Command, CommandSnapshot, Compute, ComputeDeps, Dep, SnapshotClone, State, Updater,
    assign_impl, state_assign_impl,
};
use log::{error, info};

/// Which page and filters the next dispatch should load.
#[derive(Debug, Clone)]
pub struct ListUsersInput {
    pub page: u32,
    pub filters: UserFilters,
}

impl Default for ListUsersInput {
    fn default() -> Self {
        Self {
            page: 1,
            filters: UserFilters::default(),
        }
    }
}

impl ListUsersInput {
    pub fn key(&self) -> UsersQueryKey {
        UsersQueryKey {
            page: self.page,
            filters: self.filters.clone(),
        }
    }
}

impl SnapshotClone for ListUsersInput {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl State for ListUsersInput {
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
pub enum ListUsersResult {
    #[default]
    Idle,
    Pending,
    Success {
        response: PaginatedResponse<User>,
        from_cache: bool,
    },
    Error(String),
}

/// Compute-shaped cache for the latest list outcome. `compute()` is a no-op;
/// updates arrive from [`ListUsersCommand`].
#[derive(Default, Debug, Clone)]
pub struct ListUsersCompute {
    pub result: ListUsersResult,
}

impl ListUsersCompute {
    pub fn users(&self) -> Option<&[User]> {
        if let ListUsersResult::Success { ref response, .. } = self.result {
            Some(&response.data)
        } else {
            None
        }
    }

    pub fn response(&self) -> Option<&PaginatedResponse<User>> {
        if let ListUsersResult::Success { ref response, .. } = self.result {
            Some(response)
        } else {
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.result, ListUsersResult::Pending)
    }

    pub fn error_message(&self) -> Option<&str> {
        if let ListUsersResult::Error(ref msg) = self.result {
            Some(msg)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.result = ListUsersResult::Idle;
    }
}

impl SnapshotClone for ListUsersCompute {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl Compute for ListUsersCompute {
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

impl State for ListUsersCompute {
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

/// Dispatch explicitly via `ctx.dispatch::<ListUsersCommand>()`.
#[derive(Default, Debug)]
pub struct ListUsersCommand;

impl Command for ListUsersCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: tokio_util::sync::CancellationToken,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send>> {
        let input: ListUsersInput = snap.state::<ListUsersInput>().clone();
        let config: BusinessConfig = snap.state::<BusinessConfig>().clone();
        let cached = snap
            .state::<UsersQueryCache>()
            .fresh(&input.key())
            .cloned();

        Box::pin(async move {
            let key = input.key();

            if let Some(response) = cached {
                info!(
                    "ListUsersCommand: cache hit for page {} ({} users)",
                    key.page,
                    response.data.len()
                );
                updater.set(ListUsersCompute {
                    result: ListUsersResult::Success {
                        response,
                        from_cache: true,
                    },
                });
                return;
            }

            info!("ListUsersCommand: fetching page {}", key.page);
            updater.set(ListUsersCompute {
                result: ListUsersResult::Pending,
            });

            match api::list_users(config.api_url().as_str(), input.page, &input.filters).await {
                Ok(response) => {
                    if cancel.is_cancelled() {
                        info!("ListUsersCommand: cancelled, dropping page {}", key.page);
                        return;
                    }
                    info!(
                        "ListUsersCommand: fetched page {} ({} users)",
                        key.page,
                        response.data.len()
                    );
                    let stored = response.clone();
                    updater.update::<UsersQueryCache>(move |cache| {
                        cache.insert(key, stored);
                    });
                    updater.set(ListUsersCompute {
                        result: ListUsersResult::Success {
                            response,
                            from_cache: false,
                        },
                    });
                }
                Err(err) => {
                    error!("ListUsersCommand: {err}");
                    updater.set(ListUsersCompute {
                        result: ListUsersResult::Error(err.to_string()),
                    });
                }
            }
        })
    }
}
