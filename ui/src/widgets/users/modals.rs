//! Modal dialogs of the user management panel.

use egui::{Color32, ComboBox, Ui};
use insider_business::{
    CreateUserCommand, CreateUserCompute, CreateUserInput, DeleteUserCommand, DeleteUserInput,
    Role, UsersPanelState,
};
use insider_states::StateCtx;

use crate::utils::colors::COLOR_RED;

/// Form for adding a new user. Submission goes through [`CreateUserCommand`];
/// the panel closes the modal once the compute reports success.
pub fn show_create_user_modal(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let (is_pending, error) = {
        let compute = state_ctx.cached::<CreateUserCompute>();
        (
            compute.is_some_and(CreateUserCompute::is_pending),
            compute
                .and_then(CreateUserCompute::error_message)
                .map(str::to_owned),
        )
    };

    let mut submit = false;
    let mut cancel = false;

    let panel_state = state_ctx.state_mut::<UsersPanelState>();
    egui::Window::new("Add User")
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            let draft = &mut panel_state.create_draft;

            egui::Grid::new("create_user_form")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Full name:");
                    ui.text_edit_singleline(&mut draft.full_name);
                    ui.end_row();

                    ui.label("Email:");
                    ui.text_edit_singleline(&mut draft.email);
                    ui.end_row();

                    ui.label("Role:");
                    let selected = Role::parse(&draft.role)
                        .map_or("Select role", Role::label);
                    ComboBox::from_id_salt("create_user_role")
                        .selected_text(selected)
                        .show_ui(ui, |ui| {
                            for role in Role::ALL {
                                ui.selectable_value(
                                    &mut draft.role,
                                    role.label().to_lowercase(),
                                    role.label(),
                                );
                            }
                        });
                    ui.end_row();
                });

            if let Some(error) = &error {
                ui.colored_label(COLOR_RED, error);
            }

            ui.separator();
            ui.horizontal(|ui| {
                let complete = !draft.full_name.trim().is_empty()
                    && !draft.email.trim().is_empty()
                    && !draft.role.is_empty();
                if is_pending {
                    ui.spinner();
                    ui.label("Creating...");
                } else {
                    submit = ui
                        .add_enabled(complete, egui::Button::new("Create"))
                        .clicked();
                    cancel = ui.button("Cancel").clicked();
                }
            });
        });

    if submit {
        let payload = state_ctx.state_mut::<UsersPanelState>().create_draft.clone();
        state_ctx.update::<CreateUserInput>(move |input| input.payload = Some(payload));
        state_ctx.dispatch::<CreateUserCommand>();
    }
    if cancel {
        state_ctx.update::<UsersPanelState>(UsersPanelState::close_create_modal);
        state_ctx.update::<CreateUserInput>(|input| input.payload = None);
    }
}

/// Asks for confirmation before an account is removed. Deletion is not
/// recoverable, so nothing happens until the red button is clicked.
pub fn show_delete_confirm_modal(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let Some(user_id) = state_ctx.state_mut::<UsersPanelState>().confirm_delete else {
        return;
    };

    let mut confirm = false;
    let mut cancel = false;

    egui::Window::new("Confirm Deletion")
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.label(format!(
                "Delete user '{user_id}'? This cannot be undone."
            ));
            ui.separator();
            ui.horizontal(|ui| {
                let delete_button =
                    egui::Button::new(egui::RichText::new("Delete").color(Color32::WHITE))
                        .fill(COLOR_RED);
                confirm = ui.add(delete_button).clicked();
                cancel = ui.button("Cancel").clicked();
            });
        });

    if confirm {
        state_ctx.update::<DeleteUserInput>(move |input| input.user_id = Some(user_id));
        state_ctx.update::<UsersPanelState>(|panel| panel.confirm_delete = None);
        state_ctx.dispatch::<DeleteUserCommand>();
    }
    if cancel {
        state_ctx.update::<UsersPanelState>(|panel| panel.confirm_delete = None);
    }
}
