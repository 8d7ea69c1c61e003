//! Row rendering for the applications table.

use egui_extras::TableRow;
use insider_business::{Application, CellRule, RowAction, cell_text};

use super::cells;

/// Renders one record across the visible columns. Returns the action clicked
/// in the actions column, if any.
pub fn render_row(
    row: &mut TableRow<'_, '_>,
    columns: &[insider_business::ColumnSpec],
    record: &Application,
) -> Option<RowAction> {
    let mut clicked = None;
    for spec in columns {
        row.col(|ui| match spec.rule {
            CellRule::Actions(actions) => {
                if let Some(action) = cells::render_action_buttons(ui, actions) {
                    clicked = Some(action);
                }
            }
            CellRule::StatusBadge => {
                cells::render_status_badge(ui, record.application_status);
            }
            _ => {
                let text = cell_text(record, spec.key).unwrap_or_default();
                cells::render_text_cell(ui, &text);
            }
        });
    }
    clicked
}
