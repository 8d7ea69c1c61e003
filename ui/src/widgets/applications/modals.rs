//! View and edit modals for application records.

use egui::{Grid, Ui, Window};
use insider_business::{
    Application, ApplicationStatus, ApplicationsTableState, application, cell_text,
    column_policy::ColumnKey,
};

/// Shows the read-only details modal for the selected record.
pub fn show_view_modal(table_state: &mut ApplicationsTableState, ui: &mut Ui) {
    let Some(record) = table_state.selected.clone() else {
        table_state.close_modal();
        return;
    };
    let mut open = true;

    Window::new(format!("Application - {}", record.client_name))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            Grid::new("application_details")
                .num_columns(2)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    detail_row(ui, "Application ID", &record.application_id);
                    detail_row(ui, "Client Name", &record.client_name);
                    detail_row(ui, "Email", &record.client_email);
                    detail_row(ui, "Phone", &record.phone_number);
                    detail_row(ui, "Status", record.application_status.label());
                    detail_row(
                        ui,
                        "Created",
                        &application::format_timestamp(&record.created_at),
                    );
                    detail_row(
                        ui,
                        "Updated",
                        &application::format_timestamp(&record.updated_at),
                    );
                    detail_row(
                        ui,
                        "Preferred Locations",
                        &application::format_list(record.preferred_locations.as_deref()),
                    );
                    detail_row(
                        ui,
                        "Preferred Colleges",
                        &application::format_list(record.preferred_colleges.as_deref()),
                    );
                    detail_row(
                        ui,
                        "Planned Courses",
                        &application::format_list(record.planned_courses.as_deref()),
                    );
                    detail_row(ui, "Completed Course", &record.completed_course);
                    let counselor =
                        cell_text(&record, ColumnKey::Counselor).unwrap_or_default();
                    detail_row(ui, "Counselor", &counselor);
                });

            ui.add_space(8.0);
            if ui.button("Close").clicked() {
                table_state.close_modal();
            }
        });

    if !open {
        table_state.close_modal();
    }
}

fn detail_row(ui: &mut Ui, label: &str, value: &str) {
    ui.strong(label);
    ui.label(value);
    ui.end_row();
}

/// Shows the edit modal over the draft copy. Returns the updated record when
/// the user saves; the caller applies it to the record list.
pub fn show_edit_modal(table_state: &mut ApplicationsTableState, ui: &mut Ui) -> Option<Application> {
    if table_state.edit_draft.is_none() {
        table_state.close_modal();
        return None;
    }
    let mut open = true;
    let mut saved = None;
    let mut cancelled = false;

    let title = table_state
        .selected
        .as_ref()
        .map_or_else(|| "Edit Application".to_owned(), |r| {
            format!("Edit Application - {}", r.client_name)
        });

    Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            let Some(draft) = table_state.edit_draft.as_mut() else {
                return;
            };

            Grid::new("application_edit")
                .num_columns(2)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    ui.strong("Client Name");
                    ui.text_edit_singleline(&mut draft.client_name);
                    ui.end_row();

                    ui.strong("Email");
                    ui.text_edit_singleline(&mut draft.client_email);
                    ui.end_row();

                    ui.strong("Phone");
                    ui.text_edit_singleline(&mut draft.phone_number);
                    ui.end_row();

                    ui.strong("Status");
                    egui::ComboBox::from_id_salt("edit_status")
                        .selected_text(draft.application_status.label())
                        .show_ui(ui, |ui| {
                            for status in ApplicationStatus::ALL {
                                ui.selectable_value(
                                    &mut draft.application_status,
                                    status,
                                    status.label(),
                                );
                            }
                        });
                    ui.end_row();
                });

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                let can_save = !draft.client_name.trim().is_empty();
                if ui
                    .add_enabled(can_save, egui::Button::new("Save"))
                    .clicked()
                {
                    saved = Some(draft.clone());
                }
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
            });

            if let Some(error) = validation_hint(draft) {
                ui.add_space(4.0);
                ui.colored_label(crate::utils::colors::COLOR_RED, error);
            }
        });

    if saved.is_some() || cancelled || !open {
        table_state.close_modal();
    }
    saved
}

fn validation_hint(draft: &Application) -> Option<&'static str> {
    if draft.client_name.trim().is_empty() {
        Some("Client name is required")
    } else {
        None
    }
}
