//! Business layer of the Admission Insider dashboard.
//!
//! UI code is kept "dumb": it reads states and computes, renders, and
//! dispatches commands. Everything with behavior lives here:
//! - the application record model and its rendering rules
//! - the column policy (role + viewport width -> ordered column list)
//! - table view state (filter / sort / pagination)
//! - user account operations (commands over the REST boundary plus an
//!   explicit query cache with prefix invalidation)

pub mod application;
pub mod applications;
pub mod column_policy;
pub mod http;
pub mod users;

mod config;
mod notifications;

pub use application::{Application, ApplicationStatus, BadgeColor};
pub use applications::fetch::{
    ListApplicationsCommand, ListApplicationsCompute, ListApplicationsResult,
};
pub use applications::table_state::{
    ApplicationsTableState, PAGE_SIZE, SortDirection, SortState, TableModal,
};
pub use column_policy::{CellRule, ColumnKey, ColumnSpec, Role, RowAction, cell_text, columns_for};
pub use config::BusinessConfig;
pub use notifications::Notifications;
pub use users::cache::{UsersQueryCache, UsersQueryKey};
pub use users::create_user::{CreateUserCommand, CreateUserCompute, CreateUserInput, CreateUserResult};
pub use users::delete_user::{DeleteUserCommand, DeleteUserCompute, DeleteUserInput, DeleteUserResult};
pub use users::list_users::{ListUsersCommand, ListUsersCompute, ListUsersInput, ListUsersResult};
pub use users::panel_state::UsersPanelState;
pub use users::update_status::{
    UpdateUserStatusCommand, UpdateUserStatusCompute, UpdateUserStatusInput, UpdateUserStatusResult,
};
pub use users::{CreateUserPayload, PaginatedResponse, UpdateUserStatusPayload, User, UserFilters, UserStatus};
