//! Application listing: fetch command plus the table's interaction state.

pub mod fetch;
pub mod table_state;
