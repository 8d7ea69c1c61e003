use std::any::{Any, TypeId};
use std::collections::BTreeMap;

use crate::{Compute, State};

/// An owned, `Send` snapshot of the registered state, taken synchronously at
/// dispatch time and moved into the command future.
///
/// Only types whose `SnapshotClone::clone_boxed` returns `Some` appear here.
pub struct CommandSnapshot {
    values: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl CommandSnapshot {
    pub(crate) fn new(values: BTreeMap<TypeId, Box<dyn Any + Send>>) -> Self {
        Self { values }
    }

    /// # Panics
    /// Panics if the state was not registered or does not opt into snapshots.
    pub fn state<T: State>(&self) -> &T {
        self.get::<T>().unwrap_or_else(|| {
            panic!(
                "CommandSnapshot: state not snapshotted: {}",
                std::any::type_name::<T>()
            )
        })
    }

    /// # Panics
    /// Panics if the compute was not registered or does not opt into snapshots.
    pub fn compute<T: Compute>(&self) -> &T {
        self.get::<T>().unwrap_or_else(|| {
            panic!(
                "CommandSnapshot: compute not snapshotted: {}",
                std::any::type_name::<T>()
            )
        })
    }

    fn get<T: Any>(&self) -> Option<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref::<T>())
    }
}
