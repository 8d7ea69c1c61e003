pub mod modals;
pub mod panel;
