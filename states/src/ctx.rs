use std::any::TypeId;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use tokio_util::sync::CancellationToken;

use crate::updater::UpdateMsg;
use crate::{Command, CommandSnapshot, Compute, Dep, State, Updater, runtime};

/// Upper bound on drain/recompute passes per sync, guards against compute cycles.
const MAX_SYNC_PASSES: usize = 8;

/// Owner of all registered states, computes and commands.
///
/// Single-threaded by construction: every read and mutation happens on the
/// thread that owns the ctx (the UI thread); background work communicates
/// exclusively through the [`Updater`] channel.
pub struct StateCtx {
    send: flume::Sender<UpdateMsg>,
    recv: flume::Receiver<UpdateMsg>,

    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, Box<dyn Compute>>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,

    /// Commands enqueued during widget rendering, flushed at the next sync.
    queued: Vec<TypeId>,
    /// Cancellation tokens of in-flight commands, keyed by command type.
    inflight: HashMap<TypeId, CancellationToken>,
    /// States mutated in place this frame, see [`StateCtx::mark_dirty`].
    dirty: BTreeSet<TypeId>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            send,
            recv,
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            queued: Vec::new(),
            inflight: HashMap::new(),
            dirty: BTreeSet::new(),
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.computes.insert(TypeId::of::<T>(), Box::new(compute));
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Box::new(command));
    }

    /// # Panics
    /// Panics if the state type was never registered.
    pub fn state<T: State>(&self) -> &T {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| {
                panic!(
                    "StateCtx: state not registered: {}",
                    std::any::type_name::<T>()
                )
            })
    }

    /// # Panics
    /// Panics if the state type was never registered.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| {
                panic!(
                    "StateCtx: state not registered: {}",
                    std::any::type_name::<T>()
                )
            })
    }

    /// Mutates a registered state in place on the owning thread.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    /// Reads a compute's cached value, `None` when the type is not registered.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any().downcast_ref::<T>())
    }

    /// Mutates a compute's cached value in place, e.g. to reset a command-fed
    /// cache once its result has been consumed.
    ///
    /// # Panics
    /// Panics if the compute type was never registered.
    pub fn update_cached<T: Compute>(&mut self, f: impl FnOnce(&mut T)) {
        let compute = self
            .computes
            .get_mut(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| {
                panic!(
                    "StateCtx: compute not registered: {}",
                    std::any::type_name::<T>()
                )
            });
        f(compute);
        self.dirty.insert(TypeId::of::<T>());
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    /// Flags an in-place mutated state so dependent computes re-run at the
    /// next sync. Channel write-backs are tracked automatically; only direct
    /// `state_mut`/`update` mutations need this.
    pub fn mark_dirty<T: State>(&mut self) {
        self.dirty.insert(TypeId::of::<T>());
    }

    /// Dispatches a command immediately, cancelling any in-flight run of the
    /// same command type.
    pub fn dispatch<T: Command>(&mut self) {
        self.dispatch_id(TypeId::of::<T>());
    }

    /// Queues a command for dispatch at the start of the next sync. Useful from
    /// widget code that holds borrows; duplicate enqueues collapse.
    pub fn enqueue_command<T: Command>(&mut self) {
        let id = TypeId::of::<T>();
        if !self.queued.contains(&id) {
            self.queued.push(id);
        }
    }

    /// Applies pending write-backs and re-runs computes whose dependencies
    /// changed. Call once per frame, before rendering.
    pub fn sync_computes(&mut self) {
        let queued = std::mem::take(&mut self.queued);
        for id in queued {
            self.dispatch_id(id);
        }

        for _ in 0..MAX_SYNC_PASSES {
            let mut changed = std::mem::take(&mut self.dirty);
            changed.append(&mut self.drain());
            if changed.is_empty() {
                break;
            }
            self.run_dirty(&changed);
        }
    }

    fn dispatch_id(&mut self, id: TypeId) {
        if let Some(previous) = self.inflight.remove(&id) {
            previous.cancel();
        }

        let cancel = CancellationToken::new();
        self.inflight.insert(id, cancel.clone());

        let Some(command) = self.commands.get(&id) else {
            log::error!("StateCtx: dispatched unregistered command: {id:?}");
            return;
        };

        let snap = self.take_snapshot();
        let fut = command.run(snap, Updater::new(self.send.clone()), cancel);
        runtime::spawn(fut);
    }

    fn drain(&mut self) -> BTreeSet<TypeId> {
        let mut changed = BTreeSet::new();
        while let Ok(msg) = self.recv.try_recv() {
            match msg {
                UpdateMsg::Set(id, boxed) => {
                    if let Some(state) = self.states.get_mut(&id) {
                        state.assign_box(boxed);
                        changed.insert(id);
                    } else if let Some(compute) = self.computes.get_mut(&id) {
                        compute.assign_box(boxed);
                        changed.insert(id);
                    } else {
                        log::error!("StateCtx: write-back for unregistered type: {id:?}");
                    }
                }
                UpdateMsg::Mutate(id, mutate) => {
                    if let Some(state) = self.states.get_mut(&id) {
                        mutate(state.as_any_mut());
                        changed.insert(id);
                    } else if let Some(compute) = self.computes.get_mut(&id) {
                        mutate(compute.as_any_mut());
                        changed.insert(id);
                    } else {
                        log::error!("StateCtx: write-back for unregistered type: {id:?}");
                    }
                }
            }
        }
        changed
    }

    fn run_dirty(&self, changed: &BTreeSet<TypeId>) {
        for compute in self.computes.values() {
            let (state_deps, compute_deps) = compute.deps();
            let is_dirty = state_deps
                .iter()
                .chain(compute_deps.iter())
                .any(|id| changed.contains(id));
            if is_dirty {
                compute.compute(
                    Dep::new(&self.states, &self.computes),
                    Updater::new(self.send.clone()),
                );
            }
        }
    }

    fn take_snapshot(&self) -> CommandSnapshot {
        let mut values = BTreeMap::new();
        for (id, state) in &self.states {
            if let Some(boxed) = state.clone_boxed() {
                values.insert(*id, boxed);
            }
        }
        for (id, compute) in &self.computes {
            if let Some(boxed) = compute.clone_boxed() {
                values.insert(*id, boxed);
            }
        }
        CommandSnapshot::new(values)
    }
}
