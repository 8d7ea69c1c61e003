//! Cell rendering for the applications table.

use egui::{Color32, CornerRadius, Frame, Margin, RichText, Ui};
use insider_business::{ApplicationStatus, RowAction};

use crate::utils::colors::badge_fill;

pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(text);
    });
}

/// Renders the status as a filled pill badge.
pub fn render_status_badge(ui: &mut Ui, status: ApplicationStatus) {
    let fill = badge_fill(status.badge_color());
    ui.centered_and_justified(|ui| {
        Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(10))
            .inner_margin(Margin::symmetric(8, 2))
            .show(ui, |ui| {
                ui.label(RichText::new(status.label()).color(Color32::WHITE).small());
            });
    });
}

/// Renders the per-row action buttons. Returns the clicked action.
pub fn render_action_buttons(ui: &mut Ui, actions: &[RowAction]) -> Option<RowAction> {
    let mut clicked = None;
    ui.horizontal(|ui| {
        for action in actions {
            let label = match action {
                RowAction::View => "View",
                RowAction::Edit => "Edit",
            };
            if ui.small_button(label).clicked() {
                clicked = Some(*action);
            }
        }
    });
    clicked
}
