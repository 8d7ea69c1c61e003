use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, Updater};

/// A manual-only side effect (network IO), dispatched explicitly via
/// `StateCtx::dispatch` or `StateCtx::enqueue_command`, never run implicitly.
///
/// `run` is called synchronously with a snapshot of the registered state and
/// must return the actual work as a `Send` future; the context spawns it on the
/// platform runtime. Results are reported through `updater` and land in state
/// on the next `StateCtx::sync_computes` call.
///
/// `cancel` is triggered when a newer command of the same type is dispatched;
/// long-running commands should check it before publishing results.
pub trait Command: Any {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>>;
}
