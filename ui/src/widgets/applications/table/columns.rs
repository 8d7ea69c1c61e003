//! Column layout for the applications table.

use egui_extras::Column;
use insider_business::{CellRule, ColumnSpec};

pub const STATUS_WIDTH: f32 = 150.0;
pub const TIMESTAMP_WIDTH: f32 = 170.0;
pub const SHORT_ID_WIDTH: f32 = 110.0;
pub const ACTIONS_WIDTH: f32 = 120.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Maps a column spec onto an `egui_extras` layout column. Fixed-content
/// columns get exact widths; text columns share the remaining space.
pub fn column_layout(spec: &ColumnSpec) -> Column {
    match spec.rule {
        CellRule::StatusBadge => Column::exact(STATUS_WIDTH),
        CellRule::Timestamp => Column::exact(TIMESTAMP_WIDTH),
        CellRule::ShortId => Column::exact(SHORT_ID_WIDTH),
        CellRule::Actions(_) => Column::exact(ACTIONS_WIDTH),
        CellRule::Text | CellRule::JoinedList => Column::remainder().at_least(100.0),
    }
}
