pub mod applications;
pub mod notifications;
pub mod users;

pub use applications::panel::applications_panel;
pub use notifications::notifications_strip;
pub use users::panel::users_panel;
