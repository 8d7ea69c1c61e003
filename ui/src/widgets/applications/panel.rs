//! Main panel for the applications table.
//!
//! The panel is a pure render of [`ApplicationsTableState`] plus the record
//! list: the visible column set is re-derived from role and available width
//! every frame, so resizing the window never disturbs filter, sort, or
//! selection.

use egui::{Response, Ui};
use insider_business::{
    Application, ApplicationsTableState, ListApplicationsCommand, ListApplicationsCompute, Role,
    RowAction, TableModal, columns_for,
};
use insider_states::StateCtx;

use super::modals::{show_edit_modal, show_view_modal};
use crate::utils::colors::COLOR_RED;
use super::table::applications_table;

pub fn applications_panel(
    state_ctx: &mut StateCtx,
    role: Option<Role>,
    records: &mut Vec<Application>,
    ui: &mut Ui,
) -> Response {
    let (is_pending, fetch_error) = {
        let compute = state_ctx.cached::<ListApplicationsCompute>();
        (
            compute.is_some_and(ListApplicationsCompute::is_pending),
            compute
                .and_then(ListApplicationsCompute::error_message)
                .map(str::to_owned),
        )
    };

    let response = ui.vertical(|ui| {
        // Toolbar: global filter, refresh, loading indicator.
        let refresh_clicked = {
            let table_state = state_ctx.state_mut::<ApplicationsTableState>();
            ui.horizontal(|ui| {
                ui.label("Filter:");
                let filter_edit = ui.text_edit_singleline(&mut table_state.filter);
                if filter_edit.changed() {
                    table_state.page = 0;
                }
                let clicked = ui.button("🔄 Refresh").clicked() && !is_pending;
                if is_pending {
                    ui.spinner();
                    ui.label("Loading...");
                }
                clicked
            })
            .inner
        };
        if refresh_clicked {
            state_ctx.enqueue_command::<ListApplicationsCommand>();
        }

        if let Some(error) = &fetch_error {
            ui.colored_label(COLOR_RED, format!("Error: {error}"));
        }

        ui.add_space(8.0);

        // Derive columns from the current viewport width, then filter, sort
        // and page the records.
        let width = ui.available_width();
        let columns = columns_for(role, width);

        let table_state = state_ctx.state_mut::<ApplicationsTableState>();
        let all_rows = table_state.visible_rows(records, &columns);
        table_state.clamp_page(all_rows.len());
        let page_rows = &all_rows[table_state.page_range(all_rows.len())];

        let event = applications_table(ui, table_state, &columns, records, page_rows);

        if let Some(key) = event.sort_clicked {
            table_state.toggle_sort(key);
        }
        if let Some((action, record_index)) = event.action {
            let record = records[record_index].clone();
            match action {
                RowAction::View => table_state.open_view(record),
                RowAction::Edit => table_state.open_edit(record),
            }
        }

        ui.add_space(8.0);

        // Pagination: prev/next with page indicator, disabled at boundaries.
        ui.horizontal(|ui| {
            let row_count = all_rows.len();
            if ui
                .add_enabled(table_state.can_previous(), egui::Button::new("Previous"))
                .clicked()
            {
                table_state.page -= 1;
            }
            ui.label(format!(
                "Page {} of {}",
                table_state.page + 1,
                ApplicationsTableState::page_count(row_count)
            ));
            if ui
                .add_enabled(table_state.can_next(row_count), egui::Button::new("Next"))
                .clicked()
            {
                table_state.page += 1;
            }
        });
    });

    // Modals live outside the table so they survive row re-rendering.
    let table_state = state_ctx.state_mut::<ApplicationsTableState>();
    match table_state.open_modal {
        TableModal::View => show_view_modal(table_state, ui),
        TableModal::Edit => {
            if let Some(updated) = show_edit_modal(table_state, ui)
                && let Some(record) = records
                    .iter_mut()
                    .find(|r| r.application_id == updated.application_id)
            {
                *record = updated;
            }
        }
        TableModal::None => {}
    }

    response.response
}
