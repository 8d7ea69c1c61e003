use std::any::{Any, TypeId};

/// Write-back message routed to a registered state or compute by `TypeId`.
pub(crate) enum UpdateMsg {
    Set(TypeId, Box<dyn Any + Send>),
    Mutate(TypeId, Box<dyn FnOnce(&mut dyn Any) + Send>),
}

/// Cloneable, `Send` handle that commands and computes use to publish results.
///
/// Messages are buffered in a flume channel and applied by
/// `StateCtx::sync_computes` on the UI thread, so there is never concurrent
/// mutation of state.
#[derive(Clone)]
pub struct Updater {
    send: flume::Sender<UpdateMsg>,
}

impl Updater {
    pub(crate) fn new(send: flume::Sender<UpdateMsg>) -> Self {
        Self { send }
    }

    /// Replaces the registered value of type `T` wholesale.
    pub fn set<T: Any + Send>(&self, value: T) {
        // A send error means the ctx is gone; drop the update silently.
        let _ = self
            .send
            .send(UpdateMsg::Set(TypeId::of::<T>(), Box::new(value)));
    }

    /// Applies `f` to the registered value of type `T` in place.
    ///
    /// Prefer this over read-modify-`set` from command futures: two in-flight
    /// commands mutating the same state otherwise race on a stale copy.
    pub fn update<T: Any + Send>(&self, f: impl FnOnce(&mut T) + Send + 'static) {
        let mutate = move |any: &mut dyn Any| match any.downcast_mut::<T>() {
            Some(value) => f(value),
            None => log::error!(
                "Updater::update: type mismatch for {}",
                std::any::type_name::<T>()
            ),
        };
        let _ = self
            .send
            .send(UpdateMsg::Mutate(TypeId::of::<T>(), Box::new(mutate)));
    }
}
