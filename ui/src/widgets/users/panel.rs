//! User management panel: paginated list, status changes, create and delete.
//!
//! All data flows through commands; the panel only reads computes, renders,
//! and dispatches. Mutation results are consumed here: once a create, status
//! or delete command reports success, its compute is reset and the list is
//! re-fetched (the command already invalidated the query cache).

use egui::{ComboBox, Response, Ui};
use insider_business::{
    CreateUserCompute, DeleteUserCompute, DeleteUserInput, ListUsersCommand, ListUsersCompute,
    ListUsersInput, PaginatedResponse, UpdateUserStatusCommand, UpdateUserStatusCompute,
    UpdateUserStatusInput, User, UserStatus, UsersPanelState,
};
use insider_states::StateCtx;

use super::modals::{show_create_user_modal, show_delete_confirm_modal};
use crate::utils::colors::COLOR_RED;

pub fn users_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    consume_mutation_results(state_ctx);

    let (is_pending, list_error, page_data) = {
        let compute = state_ctx.cached::<ListUsersCompute>();
        (
            compute.is_some_and(ListUsersCompute::is_pending),
            compute
                .and_then(ListUsersCompute::error_message)
                .map(str::to_owned),
            compute.and_then(ListUsersCompute::response).cloned(),
        )
    };

    // Kick off the initial fetch once, when nothing has been loaded yet.
    if !is_pending && list_error.is_none() && page_data.is_none() {
        state_ctx.enqueue_command::<ListUsersCommand>();
    }

    let response = ui.vertical(|ui| {
        render_toolbar(state_ctx, is_pending, ui);

        if let Some(error) = &list_error {
            ui.colored_label(COLOR_RED, format!("Error: {error}"));
        }

        ui.add_space(8.0);

        if let Some(page_data) = &page_data {
            render_users_grid(state_ctx, page_data, ui);
            ui.add_space(8.0);
            render_pagination(state_ctx, page_data, ui);
        } else if !is_pending && list_error.is_none() {
            ui.label("No users loaded yet.");
        }
    });

    let (create_modal_open, confirm_delete) = {
        let panel_state = state_ctx.state_mut::<UsersPanelState>();
        (panel_state.create_modal_open, panel_state.confirm_delete)
    };
    if create_modal_open {
        show_create_user_modal(state_ctx, ui);
    }
    if confirm_delete.is_some() {
        show_delete_confirm_modal(state_ctx, ui);
    }

    response.response
}

/// Folds finished mutation commands back into panel state: reset the compute
/// and queue a list refresh so the invalidated cache is repopulated.
fn consume_mutation_results(state_ctx: &mut StateCtx) {
    let created = state_ctx
        .cached::<CreateUserCompute>()
        .is_some_and(CreateUserCompute::is_success);
    if created {
        state_ctx.update_cached::<CreateUserCompute>(CreateUserCompute::reset);
        state_ctx.update::<UsersPanelState>(UsersPanelState::close_create_modal);
        state_ctx.update_cached::<ListUsersCompute>(ListUsersCompute::reset);
        state_ctx.enqueue_command::<ListUsersCommand>();
    }

    let status_updated = state_ctx
        .cached::<UpdateUserStatusCompute>()
        .is_some_and(UpdateUserStatusCompute::is_success);
    if status_updated {
        state_ctx.update_cached::<UpdateUserStatusCompute>(UpdateUserStatusCompute::reset);
        state_ctx.update::<UpdateUserStatusInput>(|input| input.user_id = None);
        state_ctx.update_cached::<ListUsersCompute>(ListUsersCompute::reset);
        state_ctx.enqueue_command::<ListUsersCommand>();
    }

    let deleted = state_ctx
        .cached::<DeleteUserCompute>()
        .is_some_and(DeleteUserCompute::is_success);
    if deleted {
        state_ctx.update_cached::<DeleteUserCompute>(DeleteUserCompute::reset);
        state_ctx.update::<DeleteUserInput>(|input| input.user_id = None);
        state_ctx.update_cached::<ListUsersCompute>(ListUsersCompute::reset);
        state_ctx.enqueue_command::<ListUsersCommand>();
    }
}

fn render_toolbar(state_ctx: &mut StateCtx, is_pending: bool, ui: &mut Ui) {
    let mut search = state_ctx
        .state_mut::<ListUsersInput>()
        .filters
        .search
        .clone()
        .unwrap_or_default();

    let (add_clicked, search_changed, refresh_clicked) = ui
        .horizontal(|ui| {
            let add_clicked = ui.button("➕ Add User").clicked();
            ui.separator();
            ui.label("Search:");
            let search_changed = ui.text_edit_singleline(&mut search).lost_focus()
                && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let refresh_clicked = ui.button("🔄 Refresh").clicked() && !is_pending;
            if is_pending {
                ui.spinner();
            }
            (add_clicked, search_changed, refresh_clicked)
        })
        .inner;

    if add_clicked {
        state_ctx.update::<UsersPanelState>(UsersPanelState::open_create_modal);
        state_ctx.update_cached::<CreateUserCompute>(CreateUserCompute::reset);
    }
    if search_changed {
        let trimmed = search.trim().to_owned();
        state_ctx.update::<ListUsersInput>(move |input| {
            input.page = 1;
            input.filters.search = (!trimmed.is_empty()).then_some(trimmed);
        });
        state_ctx.update_cached::<ListUsersCompute>(ListUsersCompute::reset);
        state_ctx.enqueue_command::<ListUsersCommand>();
    }
    if refresh_clicked {
        state_ctx.update_cached::<ListUsersCompute>(ListUsersCompute::reset);
        state_ctx.enqueue_command::<ListUsersCommand>();
    }
}

fn render_users_grid(state_ctx: &mut StateCtx, page_data: &PaginatedResponse<User>, ui: &mut Ui) {
    let mut status_change: Option<(ustr::Ustr, UserStatus)> = None;
    let mut delete_request: Option<ustr::Ustr> = None;

    egui::Grid::new("users_grid")
        .num_columns(5)
        .striped(true)
        .spacing([16.0, 6.0])
        .show(ui, |ui| {
            ui.strong("Name");
            ui.strong("Email");
            ui.strong("Role");
            ui.strong("Status");
            ui.strong("Actions");
            ui.end_row();

            for user in &page_data.data {
                ui.label(&user.full_name);
                ui.label(&user.email);
                ui.label(&user.role);

                let mut status = user.status;
                ComboBox::from_id_salt(("user_status", &user.user_id))
                    .selected_text(status.label())
                    .show_ui(ui, |ui| {
                        for candidate in UserStatus::ALL {
                            ui.selectable_value(&mut status, candidate, candidate.label());
                        }
                    });
                if status != user.status {
                    status_change = Some((ustr::Ustr::from(&user.user_id), status));
                }

                if ui.small_button("🗑 Delete").clicked() {
                    delete_request = Some(ustr::Ustr::from(&user.user_id));
                }
                ui.end_row();
            }
        });

    if let Some((user_id, status)) = status_change {
        state_ctx.update::<UpdateUserStatusInput>(move |input| {
            input.user_id = Some(user_id);
            input.status = status;
        });
        state_ctx.dispatch::<UpdateUserStatusCommand>();
    }
    if let Some(user_id) = delete_request {
        state_ctx.update::<UsersPanelState>(move |panel| panel.confirm_delete = Some(user_id));
    }
}

fn render_pagination(state_ctx: &mut StateCtx, page_data: &PaginatedResponse<User>, ui: &mut Ui) {
    let total_pages = page_data.total_pages.max(1);
    let page = state_ctx.state_mut::<ListUsersInput>().page;

    let step = ui
        .horizontal(|ui| {
            let mut step = 0i64;
            if ui
                .add_enabled(page > 1, egui::Button::new("Previous"))
                .clicked()
            {
                step = -1;
            }
            ui.label(format!("Page {page} of {total_pages} ({} users)", page_data.total));
            if ui
                .add_enabled(page < total_pages, egui::Button::new("Next"))
                .clicked()
            {
                step = 1;
            }
            step
        })
        .inner;

    if step != 0 {
        state_ctx.update::<ListUsersInput>(move |input| {
            input.page = input.page.saturating_add_signed(step as i32);
        });
        state_ctx.update_cached::<ListUsersCompute>(ListUsersCompute::reset);
        state_ctx.enqueue_command::<ListUsersCommand>();
    }
}
