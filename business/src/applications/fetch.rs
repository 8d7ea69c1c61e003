//! Fetch the role-scoped application list.
//!
//! Network IO lives in `ListApplicationsCommand`, which is dispatched
//! explicitly; `ListApplicationsCompute` is a compute-shaped cache the command
//! writes into via `Updater`, read each frame with
//! `ctx.cached::<ListApplicationsCompute>()`.

use std::any::Any;

use crate::BusinessConfig;
use crate::application::Application;
use crate::http::Client;

use insider_states::{
    Command, CommandSnapshot, Compute, ComputeDeps, Dep, SnapshotClone, State, Updater,
    assign_impl, state_assign_impl,
};
use log::{error, info};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct ListApplicationsResponse {
    applications: Vec<Application>,
}

#[derive(Debug, Clone, Default)]
pub enum ListApplicationsResult {
    #[default]
    Idle,
    Pending,
    Success(Vec<Application>),
    Error(String),
}

/// Compute-shaped cache holding the latest fetch outcome.
///
/// Its `compute()` is a deliberate no-op; only the command writes here.
#[derive(Default, Debug, Clone)]
pub struct ListApplicationsCompute {
    pub result: ListApplicationsResult,
    /// Bumped every time a fetch finishes, so consumers can tell a fresh
    /// result from one they already adopted.
    pub generation: u64,
}

impl ListApplicationsCompute {
    pub fn applications(&self) -> Option<&[Application]> {
        if let ListApplicationsResult::Success(ref applications) = self.result {
            Some(applications)
        } else {
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.result, ListApplicationsResult::Pending)
    }

    pub fn error_message(&self) -> Option<&str> {
        if let ListApplicationsResult::Error(ref msg) = self.result {
            Some(msg)
        } else {
            None
        }
    }
}

impl SnapshotClone for ListApplicationsCompute {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl Compute for ListApplicationsCompute {
    fn deps(&self) -> ComputeDeps {
        // Updated by a command, not derived from other state.
        (&[], &[])
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {
        // Intentionally no-op; side effects must not run inside computes.
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

impl State for ListApplicationsCompute {
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

/// Dispatch explicitly via `ctx.dispatch::<ListApplicationsCommand>()`.
#[derive(Default, Debug)]
pub struct ListApplicationsCommand;

impl Command for ListApplicationsCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: tokio_util::sync::CancellationToken,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send>> {
        let config: BusinessConfig = snap.state::<BusinessConfig>().clone();
        let generation = snap.compute::<ListApplicationsCompute>().generation;

        Box::pin(async move {
            info!("ListApplicationsCommand: fetching applications");
            // Pending keeps the previous generation; only a finished fetch
            // bumps it.
            updater.set(ListApplicationsCompute {
                result: ListApplicationsResult::Pending,
                generation,
            });

            let url = format!("{}/applications", config.api_url().as_str());
            let result = match Client::get(&url).send().await {
                Ok(response) if response.is_success() => {
                    match response.json::<ListApplicationsResponse>() {
                        Ok(parsed) => {
                            info!(
                                "ListApplicationsCommand: fetched {} applications",
                                parsed.applications.len()
                            );
                            ListApplicationsResult::Success(parsed.applications)
                        }
                        Err(e) => {
                            error!("ListApplicationsCommand: failed to parse response: {e}");
                            ListApplicationsResult::Error(format!("Parse error: {e}"))
                        }
                    }
                }
                Ok(response) => {
                    let msg = format!("API returned status: {}", response.status);
                    error!("ListApplicationsCommand: {msg}");
                    ListApplicationsResult::Error(msg)
                }
                Err(err) => {
                    error!("ListApplicationsCommand: request failed: {err}");
                    ListApplicationsResult::Error(err.to_string())
                }
            };

            if cancel.is_cancelled() {
                info!("ListApplicationsCommand: cancelled, dropping result");
                return;
            }
            updater.set(ListApplicationsCompute {
                result,
                generation: generation + 1,
            });
        })
    }
}
