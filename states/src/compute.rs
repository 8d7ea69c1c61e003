use std::any::{Any, TypeId};

use crate::{Dep, SnapshotClone, Updater};

/// Dependency declaration for a compute: (state type ids, compute type ids).
pub type ComputeDeps = (&'static [TypeId], &'static [TypeId]);

/// A cache slot managed by the [`crate::StateCtx`].
///
/// Two flavors exist:
/// - **Derived**: declares dependencies via [`Compute::deps`] and recomputes in
///   [`Compute::compute`] whenever a dependency changed during a sync pass.
/// - **Command-fed**: declares no dependencies and leaves `compute` a no-op;
///   commands write results into it through [`Updater::set`]. Side effects must
///   not live in `compute` itself because computes can run implicitly.
pub trait Compute: Any + SnapshotClone {
    fn deps(&self) -> ComputeDeps {
        (&[], &[])
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Replaces `self` with a value delivered through the [`Updater`] channel.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Default `assign_box` body for concrete compute types.
pub fn assign_impl<T: Compute + Sized>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(new_self) => *this = *new_self,
        Err(_) => log::error!(
            "assign_impl: type mismatch assigning into {}",
            std::any::type_name::<T>()
        ),
    }
}
