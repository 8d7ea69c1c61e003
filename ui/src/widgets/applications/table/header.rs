//! Header rendering with sort indicators for the applications table.

use egui::{Button, RichText, Ui};
use egui_extras::TableRow;
use insider_business::{CellRule, ColumnKey, ColumnSpec, SortDirection, SortState};

/// Renders the header row. Returns the key of a clicked sortable column.
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    columns: &[ColumnSpec],
    sort: Option<SortState>,
) -> Option<ColumnKey> {
    let mut clicked = None;
    for spec in columns {
        header.col(|ui| {
            if render_header_cell(ui, spec, sort) {
                clicked = Some(spec.key);
            }
        });
    }
    clicked
}

fn render_header_cell(ui: &mut Ui, spec: &ColumnSpec, sort: Option<SortState>) -> bool {
    // The actions column is not sortable.
    if matches!(spec.rule, CellRule::Actions(_)) {
        ui.centered_and_justified(|ui| {
            ui.strong(spec.label);
        });
        return false;
    }

    let arrow = match sort {
        Some(SortState { key, direction }) if key == spec.key => match direction {
            SortDirection::Ascending => " ⬆",
            SortDirection::Descending => " ⬇",
        },
        _ => "",
    };
    ui.centered_and_justified(|ui| {
        ui.add(Button::new(RichText::new(format!("{}{arrow}", spec.label)).strong()).frame(false))
            .clicked()
    })
    .inner
}
