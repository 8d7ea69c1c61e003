use super::CreateUserPayload;
use insider_states::{SnapshotClone, State, state_assign_impl};
use std::any::Any;
use ustr::Ustr;

/// UI-affine state of the users management panel: the create modal and its
/// draft, plus the pending delete confirmation.
#[derive(Debug, Clone, Default)]
pub struct UsersPanelState {
    pub create_modal_open: bool,
    pub create_draft: CreateUserPayload,
    pub confirm_delete: Option<Ustr>,
}

impl UsersPanelState {
    pub fn open_create_modal(&mut self) {
        self.create_modal_open = true;
        self.create_draft = CreateUserPayload::default();
    }

    pub fn close_create_modal(&mut self) {
        self.create_modal_open = false;
        self.create_draft = CreateUserPayload::default();
    }
}

impl SnapshotClone for UsersPanelState {}

impl State for UsersPanelState {
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
