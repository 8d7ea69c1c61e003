//! Minimal state/compute/command runtime shared by the business and UI crates.
//!
//! The model is deliberately small:
//! - [`State`]: plain mutable application state, registered once in a [`StateCtx`].
//! - [`Compute`]: a cache that is either derived from other state (re-run when a
//!   dependency changes) or written by commands via [`Updater`].
//! - [`Command`]: a manual-only side effect (network IO). Commands receive a
//!   [`CommandSnapshot`] of the registered state, an [`Updater`] to report results,
//!   and a `CancellationToken`; dispatching a command cancels the previous
//!   in-flight command of the same type.
//!
//! All write-backs from commands/computes travel through a flume channel and are
//! applied by [`StateCtx::sync_computes`], which the app calls once per frame.

mod command;
mod compute;
mod ctx;
mod dep;
mod runtime;
mod snapshot;
mod state;
mod updater;

pub use command::Command;
pub use compute::{Compute, ComputeDeps, assign_impl};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use snapshot::CommandSnapshot;
pub use state::{SnapshotClone, State, state_assign_impl};
pub use updater::Updater;

#[cfg(test)]
mod tests {
    use std::any::{Any, TypeId};
    use std::pin::Pin;

    use super::*;

    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    struct Counter {
        value: i32,
    }

    impl SnapshotClone for Counter {
        fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
            Some(Box::new(self.clone()))
        }
    }

    impl State for Counter {
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

    /// Derived compute: doubles `Counter`.
    #[derive(Debug, Default)]
    struct Doubled {
        value: i32,
    }

    impl SnapshotClone for Doubled {}

    impl Compute for Doubled {
        fn deps(&self) -> ComputeDeps {
            const STATE_IDS: [TypeId; 1] = [TypeId::of::<Counter>()];
            (&STATE_IDS, &[])
        }

        fn compute(&self, deps: Dep<'_>, updater: Updater) {
            let counter = deps.get_state_ref::<Counter>();
            updater.set(Doubled {
                value: counter.value * 2,
            });
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

    #[derive(Debug, Default)]
    struct IncrementCommand;

    impl Command for IncrementCommand {
        fn run(
            &self,
            snap: CommandSnapshot,
            updater: Updater,
            _cancel: tokio_util::sync::CancellationToken,
        ) -> Pin<Box<dyn Future<Output = ()> + Send>> {
            let current = snap.state::<Counter>().clone();
            Box::pin(async move {
                updater.set(Counter {
                    value: current.value + 1,
                });
            })
        }
    }

    #[test]
    fn updater_set_is_applied_by_sync() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter::default());

        ctx.updater().set(Counter { value: 7 });
        ctx.sync_computes();

        assert_eq!(ctx.state::<Counter>().value, 7);
    }

    #[test]
    fn updater_update_mutates_in_place() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter { value: 3 });

        ctx.updater().update::<Counter>(|c| c.value += 10);
        ctx.sync_computes();

        assert_eq!(ctx.state::<Counter>().value, 13);
    }

    #[test]
    fn derived_compute_reruns_when_dependency_changes() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter::default());
        ctx.record_compute(Doubled::default());

        ctx.updater().set(Counter { value: 21 });
        ctx.sync_computes();

        let doubled = ctx.cached::<Doubled>().expect("Doubled is registered");
        assert_eq!(doubled.value, 42);
    }

    #[test]
    fn direct_mutation_with_mark_dirty_reruns_computes() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter::default());
        ctx.record_compute(Doubled::default());

        ctx.update::<Counter>(|c| c.value = 5);
        ctx.mark_dirty::<Counter>();
        ctx.sync_computes();

        let doubled = ctx.cached::<Doubled>().expect("Doubled is registered");
        assert_eq!(doubled.value, 10);
    }

    #[tokio::test]
    async fn dispatched_command_updates_state() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter { value: 1 });
        ctx.record_command(IncrementCommand);

        ctx.dispatch::<IncrementCommand>();

        // The command future runs on the runtime; poll until its write-back lands.
        for _ in 0..100 {
            ctx.sync_computes();
            if ctx.state::<Counter>().value == 2 {
                return;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        panic!("command result never arrived");
    }

    #[tokio::test]
    async fn enqueued_command_runs_on_next_sync() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter { value: 0 });
        ctx.record_command(IncrementCommand);

        ctx.enqueue_command::<IncrementCommand>();
        // Enqueuing twice collapses to one dispatch.
        ctx.enqueue_command::<IncrementCommand>();

        for _ in 0..100 {
            ctx.sync_computes();
            if ctx.state::<Counter>().value == 1 {
                return;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        panic!("command result never arrived");
    }
}
