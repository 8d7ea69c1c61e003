//! Table rendering for the applications panel, split into focused components:
//! - `columns`: column layout and sizing
//! - `header`: header row with sort indicators
//! - `row`: one record across the visible columns
//! - `cells`: individual cell content

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::Ui;
use egui_extras::TableBuilder;
use insider_business::{Application, ApplicationsTableState, ColumnKey, ColumnSpec, RowAction};

/// What the user did to the table this frame.
#[derive(Debug, Default)]
pub struct TableEvent {
    /// Header of a sortable column was clicked.
    pub sort_clicked: Option<ColumnKey>,
    /// A row action was clicked, with the index into `records`.
    pub action: Option<(RowAction, usize)>,
}

/// Renders the table for the given visible columns and row indices.
///
/// `rows` are indices into `records`, already filtered, sorted, and sliced to
/// the current page. An empty `rows` renders the placeholder row.
pub fn applications_table(
    ui: &mut Ui,
    table_state: &ApplicationsTableState,
    table_columns: &[ColumnSpec],
    records: &[Application],
    rows: &[usize],
) -> TableEvent {
    let mut event = TableEvent::default();

    let mut builder = TableBuilder::new(ui).striped(true);
    for spec in table_columns {
        builder = builder.column(columns::column_layout(spec));
    }

    builder
        .header(columns::HEADER_HEIGHT, |mut header_row| {
            event.sort_clicked =
                header::render_table_header(&mut header_row, table_columns, table_state.sort);
        })
        .body(|mut body| {
            if rows.is_empty() {
                body.row(columns::ROW_HEIGHT, |mut table_row| {
                    // No colspan in egui tables: put the placeholder into the
                    // first cell and leave the rest empty.
                    for (index, _) in table_columns.iter().enumerate() {
                        table_row.col(|ui| {
                            if index == 0 {
                                ui.label("No results found");
                            }
                        });
                    }
                });
                return;
            }

            for &record_index in rows {
                body.row(columns::ROW_HEIGHT, |mut table_row| {
                    if let Some(action) =
                        row::render_row(&mut table_row, table_columns, &records[record_index])
                    {
                        event.action = Some((action, record_index));
                    }
                });
            }
        });

    event
}
