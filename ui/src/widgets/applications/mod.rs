//! The role-scoped applications table: panel, table rendering, and the
//! view/edit modals.

pub mod modals;
pub mod panel;
pub mod table;
