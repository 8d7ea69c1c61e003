//! Role and viewport driven column selection for the applications table.
//!
//! Every role has a declarative table of column specs; a spec either always
//! shows or is gated behind a minimum viewport width. [`columns_for`] is pure:
//! same role and width in, same ordered column list out, and the UI calls it
//! every frame with the current available width so resizes re-derive the
//! visible set without touching filter, sort, or selection state.

use crate::application::{Application, format_list, format_timestamp, truncate_id};

/// Viewer roles known to the platform. Unknown role strings fall back to the
/// common three-column view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Agent,
    Counselor,
    Client,
}

impl Role {
    pub const ALL: [Self; 4] = [Self::Admin, Self::Agent, Self::Counselor, Self::Client];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "admin" => Some(Self::Admin),
            "agent" => Some(Self::Agent),
            "counselor" => Some(Self::Counselor),
            "client" => Some(Self::Client),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Agent => "Agent",
            Self::Counselor => "Counselor",
            Self::Client => "Client",
        }
    }
}

/// Width thresholds a column can be gated behind. A gated column shows only
/// when the viewport strictly exceeds its threshold.
pub const BREAKPOINT_SM: f32 = 768.0;
pub const BREAKPOINT_MD: f32 = 1024.0;
pub const BREAKPOINT_LG: f32 = 1280.0;
pub const BREAKPOINT_XL: f32 = 1440.0;

/// Identity of a table column, used for sort state and header rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKey {
    ApplicationId,
    ClientName,
    Email,
    Phone,
    Status,
    CreatedAt,
    Locations,
    Colleges,
    PlannedCourses,
    CompletedCourse,
    Counselor,
    Actions,
}

/// Per-row actions a role's actions column exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
}

/// How a cell derives its content from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRule {
    Text,
    Timestamp,
    JoinedList,
    StatusBadge,
    ShortId,
    Actions(&'static [RowAction]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub key: ColumnKey,
    pub label: &'static str,
    pub rule: CellRule,
}

struct Gated {
    gate: Option<f32>,
    spec: ColumnSpec,
}

const fn always(spec: ColumnSpec) -> Gated {
    Gated { gate: None, spec }
}

const fn over(gate: f32, spec: ColumnSpec) -> Gated {
    Gated {
        gate: Some(gate),
        spec,
    }
}

const CLIENT_NAME: ColumnSpec = ColumnSpec {
    key: ColumnKey::ClientName,
    label: "Client Name",
    rule: CellRule::Text,
};
const STATUS: ColumnSpec = ColumnSpec {
    key: ColumnKey::Status,
    label: "Status",
    rule: CellRule::StatusBadge,
};
const CREATED_AT: ColumnSpec = ColumnSpec {
    key: ColumnKey::CreatedAt,
    label: "Created",
    rule: CellRule::Timestamp,
};
const APPLICATION_ID: ColumnSpec = ColumnSpec {
    key: ColumnKey::ApplicationId,
    label: "Application ID",
    rule: CellRule::ShortId,
};
const EMAIL: ColumnSpec = ColumnSpec {
    key: ColumnKey::Email,
    label: "Email",
    rule: CellRule::Text,
};
const PHONE: ColumnSpec = ColumnSpec {
    key: ColumnKey::Phone,
    label: "Phone",
    rule: CellRule::Text,
};
const LOCATIONS: ColumnSpec = ColumnSpec {
    key: ColumnKey::Locations,
    label: "Preferred Locations",
    rule: CellRule::JoinedList,
};
const COLLEGES: ColumnSpec = ColumnSpec {
    key: ColumnKey::Colleges,
    label: "Preferred Colleges",
    rule: CellRule::JoinedList,
};
const PLANNED_COURSES: ColumnSpec = ColumnSpec {
    key: ColumnKey::PlannedCourses,
    label: "Planned Courses",
    rule: CellRule::JoinedList,
};
const COMPLETED_COURSE: ColumnSpec = ColumnSpec {
    key: ColumnKey::CompletedCourse,
    label: "Completed Course",
    rule: CellRule::Text,
};
const COUNSELOR: ColumnSpec = ColumnSpec {
    key: ColumnKey::Counselor,
    label: "Counselor",
    rule: CellRule::Text,
};
const ADMIN_ACTIONS: ColumnSpec = ColumnSpec {
    key: ColumnKey::Actions,
    label: "Actions",
    rule: CellRule::Actions(&[RowAction::View, RowAction::Edit]),
};
const VIEW_ACTIONS: ColumnSpec = ColumnSpec {
    key: ColumnKey::Actions,
    label: "Actions",
    rule: CellRule::Actions(&[RowAction::View]),
};

// Column order within each table is fixed; only gating varies with width.
const ADMIN_COLUMNS: [Gated; 7] = [
    always(CLIENT_NAME),
    always(STATUS),
    always(CREATED_AT),
    over(BREAKPOINT_SM, LOCATIONS),
    over(BREAKPOINT_MD, COLLEGES),
    over(BREAKPOINT_LG, COUNSELOR),
    always(ADMIN_ACTIONS),
];

const AGENT_COLUMNS: [Gated; 7] = [
    always(CLIENT_NAME),
    always(STATUS),
    always(CREATED_AT),
    over(BREAKPOINT_SM, EMAIL),
    over(BREAKPOINT_MD, PHONE),
    over(BREAKPOINT_LG, LOCATIONS),
    always(VIEW_ACTIONS),
];

const COUNSELOR_COLUMNS: [Gated; 8] = [
    always(CLIENT_NAME),
    always(STATUS),
    always(CREATED_AT),
    over(BREAKPOINT_SM, COMPLETED_COURSE),
    over(BREAKPOINT_MD, PLANNED_COURSES),
    over(BREAKPOINT_LG, LOCATIONS),
    over(BREAKPOINT_XL, COLLEGES),
    always(VIEW_ACTIONS),
];

const CLIENT_COLUMNS: [Gated; 8] = [
    always(APPLICATION_ID),
    always(CLIENT_NAME),
    always(STATUS),
    always(CREATED_AT),
    over(BREAKPOINT_SM, PLANNED_COURSES),
    over(BREAKPOINT_MD, LOCATIONS),
    over(BREAKPOINT_LG, COLLEGES),
    always(VIEW_ACTIONS),
];

const COMMON_COLUMNS: [Gated; 3] = [always(CLIENT_NAME), always(STATUS), always(CREATED_AT)];

/// Derives the ordered list of visible columns for a role at a viewport width.
/// An unrecognized role (`None`) gets the common three-column view.
pub fn columns_for(role: Option<Role>, width: f32) -> Vec<ColumnSpec> {
    let table: &[Gated] = match role {
        Some(Role::Admin) => &ADMIN_COLUMNS,
        Some(Role::Agent) => &AGENT_COLUMNS,
        Some(Role::Counselor) => &COUNSELOR_COLUMNS,
        Some(Role::Client) => &CLIENT_COLUMNS,
        None => &COMMON_COLUMNS,
    };
    table
        .iter()
        .filter(|gated| gated.gate.is_none_or(|gate| width > gate))
        .map(|gated| gated.spec)
        .collect()
}

/// Text content of one cell, or `None` for columns rendered as widgets
/// (the actions column).
pub fn cell_text(app: &Application, key: ColumnKey) -> Option<String> {
    let text = match key {
        ColumnKey::ApplicationId => truncate_id(Some(&app.application_id)),
        ColumnKey::ClientName => app.client_name.clone(),
        ColumnKey::Email => app.client_email.clone(),
        ColumnKey::Phone => app.phone_number.clone(),
        ColumnKey::Status => app.application_status.label().to_owned(),
        ColumnKey::CreatedAt => format_timestamp(&app.created_at),
        ColumnKey::Locations => format_list(app.preferred_locations.as_deref()),
        ColumnKey::Colleges => format_list(app.preferred_colleges.as_deref()),
        ColumnKey::PlannedCourses => format_list(app.planned_courses.as_deref()),
        ColumnKey::CompletedCourse => app.completed_course.clone(),
        ColumnKey::Counselor => match (&app.counselor_name, &app.counselor_id) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => truncate_id(Some(id)),
            (None, None) => "Unassigned".to_owned(),
        },
        ColumnKey::Actions => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationStatus;
    use chrono::Utc;

    fn sample() -> Application {
        Application {
            application_id: "app-12345678".to_owned(),
            client_name: "Alice Zhang".to_owned(),
            client_email: "alice@example.com".to_owned(),
            phone_number: "+61 400 000 000".to_owned(),
            application_status: ApplicationStatus::Processing,
            preferred_locations: Some(vec!["Sydney".to_owned(), "Brisbane".to_owned()]),
            preferred_colleges: None,
            planned_courses: Some(vec!["IT".to_owned()]),
            completed_course: "Year 12".to_owned(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            agent_id: None,
            counselor_id: Some("c-9876543210".to_owned()),
            counselor_name: None,
        }
    }

    fn keys(columns: &[ColumnSpec]) -> Vec<ColumnKey> {
        columns.iter().map(|c| c.key).collect()
    }

    #[test]
    fn unknown_role_gets_common_columns_only() {
        for width in [320.0, 768.0, 1024.0, 1920.0] {
            assert_eq!(
                keys(&columns_for(None, width)),
                vec![ColumnKey::ClientName, ColumnKey::Status, ColumnKey::CreatedAt],
            );
        }
    }

    #[test]
    fn same_inputs_give_same_columns() {
        let a = columns_for(Some(Role::Counselor), 1100.0);
        let b = columns_for(Some(Role::Counselor), 1100.0);
        assert_eq!(a, b);
    }

    #[test]
    fn gates_require_strictly_exceeding_the_threshold() {
        // At exactly 768 the gated column stays hidden.
        let at = columns_for(Some(Role::Admin), BREAKPOINT_SM);
        assert!(!keys(&at).contains(&ColumnKey::Locations));
        let just_over = columns_for(Some(Role::Admin), BREAKPOINT_SM + 1.0);
        assert!(keys(&just_over).contains(&ColumnKey::Locations));
    }

    #[test]
    fn wide_admin_view_is_superset_of_narrow() {
        let narrow = columns_for(Some(Role::Admin), 700.0);
        let wide = columns_for(Some(Role::Admin), 1500.0);
        for column in &narrow {
            assert!(wide.contains(column));
        }
        let extra: Vec<ColumnKey> = wide
            .iter()
            .map(|c| c.key)
            .filter(|k| !narrow.iter().any(|c| c.key == *k))
            .collect();
        assert_eq!(
            extra,
            vec![ColumnKey::Locations, ColumnKey::Colleges, ColumnKey::Counselor],
        );
    }

    #[test]
    fn column_order_is_stable_as_width_grows() {
        let wide = columns_for(Some(Role::Client), 2000.0);
        for width in [400.0, 900.0, 1100.0, 1300.0] {
            let subset = columns_for(Some(Role::Client), width);
            let mut cursor = wide.iter();
            for column in &subset {
                assert!(
                    cursor.any(|c| c == column),
                    "column set at width {width} is not ordered like the wide set",
                );
            }
        }
    }

    #[test]
    fn admin_gets_edit_action_others_view_only() {
        let admin = columns_for(Some(Role::Admin), 2000.0);
        let last = admin.last().expect("admin table is non-empty");
        assert_eq!(
            last.rule,
            CellRule::Actions(&[RowAction::View, RowAction::Edit])
        );
        let agent = columns_for(Some(Role::Agent), 2000.0);
        let last = agent.last().expect("agent table is non-empty");
        assert_eq!(last.rule, CellRule::Actions(&[RowAction::View]));
    }

    #[test]
    fn counselor_cell_falls_back_to_id_then_placeholder() {
        let mut app = sample();
        assert_eq!(
            cell_text(&app, ColumnKey::Counselor),
            Some("c-987654…".to_owned())
        );
        app.counselor_name = Some("Sam Rivera".to_owned());
        assert_eq!(
            cell_text(&app, ColumnKey::Counselor),
            Some("Sam Rivera".to_owned())
        );
        app.counselor_name = None;
        app.counselor_id = None;
        assert_eq!(
            cell_text(&app, ColumnKey::Counselor),
            Some("Unassigned".to_owned())
        );
    }

    #[test]
    fn actions_column_has_no_text() {
        assert_eq!(cell_text(&sample(), ColumnKey::Actions), None);
    }

    #[test]
    fn absent_list_cells_render_none() {
        assert_eq!(
            cell_text(&sample(), ColumnKey::Colleges),
            Some("None".to_owned())
        );
        assert_eq!(
            cell_text(&sample(), ColumnKey::Locations),
            Some("Sydney, Brisbane".to_owned())
        );
    }
}
