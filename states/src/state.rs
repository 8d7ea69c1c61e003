use std::any::Any;

/// Cloning hook used when building a [`crate::CommandSnapshot`].
///
/// States and computes that commands need to read must return `Some`; everything
/// else (UI-affine state holding textures, large caches nobody snapshots) can
/// keep the default `None` and simply won't appear in snapshots.
pub trait SnapshotClone {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        None
    }
}

/// Plain mutable application state, registered once via `StateCtx::add_state`.
pub trait State: Any + SnapshotClone {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Replaces `self` with a value delivered through the [`crate::Updater`] channel.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Default `assign_box` body for concrete state types.
pub fn state_assign_impl<T: State + Sized>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(new_self) => *this = *new_self,
        Err(_) => log::error!(
            "state_assign_impl: type mismatch assigning into {}",
            std::any::type_name::<T>()
        ),
    }
}
