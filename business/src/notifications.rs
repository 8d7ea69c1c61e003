use insider_states::{SnapshotClone, State, state_assign_impl};
use std::any::Any;

/// Transient success notices shown in the notification strip.
///
/// Commands push a notice after a mutation succeeds; failures surface through
/// the operation's own result state instead.
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    notices: Vec<String>,
}

impl Notifications {
    pub fn push_success(&mut self, message: impl Into<String>) {
        self.notices.push(message.into());
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.notices.len() {
            self.notices.remove(index);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.notices.iter().map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

impl SnapshotClone for Notifications {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl State for Notifications {
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
