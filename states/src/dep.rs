use std::any::TypeId;
use std::collections::BTreeMap;

use crate::{Compute, State};

/// Read-only view over the registered states and computes, handed to
/// [`Compute::compute`] while a sync pass runs.
pub struct Dep<'a> {
    states: &'a BTreeMap<TypeId, Box<dyn State>>,
    computes: &'a BTreeMap<TypeId, Box<dyn Compute>>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(
        states: &'a BTreeMap<TypeId, Box<dyn State>>,
        computes: &'a BTreeMap<TypeId, Box<dyn Compute>>,
    ) -> Self {
        Self { states, computes }
    }

    /// # Panics
    /// Panics if the state type was never registered; registration is part of
    /// app setup, so a miss is a programmer error.
    pub fn get_state_ref<T: State>(&self) -> &'a T {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| {
                panic!("Dep: state not registered: {}", std::any::type_name::<T>())
            })
    }

    /// # Panics
    /// Panics if the compute type was never registered.
    pub fn get_compute_ref<T: Compute>(&self) -> &'a T {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| {
                panic!(
                    "Dep: compute not registered: {}",
                    std::any::type_name::<T>()
                )
            })
    }
}
