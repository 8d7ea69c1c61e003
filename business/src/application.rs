//! The application record model and its rendering rules.
//!
//! Records are immutable from the table's point of view; edits happen in a
//! modal collaborator which reports an updated record back to the caller.
//! Missing optional fields never fail rendering, they degrade to placeholder
//! strings ("None" for lists, "N/A" for identifiers).

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of an application.
///
/// Earlier revisions of the platform used a different set (`pending`,
/// `ACCEPTED`, `REVIEW`); those now deserialize into [`Self::Unknown`] and
/// render with a neutral badge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    #[default]
    Started,
    Processing,
    DocumentsSubmitted,
    PaymentsProcessed,
    Completed,
    #[serde(other)]
    Unknown,
}

/// Abstract badge color; the UI maps these onto concrete theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Green,
    Yellow,
    Blue,
    Orange,
    Purple,
    Neutral,
}

impl ApplicationStatus {
    /// The five recognized statuses, in lifecycle order. `Unknown` is excluded
    /// on purpose: it is a decode fallback, not a state an operator can pick.
    pub const ALL: [Self; 5] = [
        Self::Started,
        Self::Processing,
        Self::DocumentsSubmitted,
        Self::PaymentsProcessed,
        Self::Completed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Started => "STARTED",
            Self::Processing => "PROCESSING",
            Self::DocumentsSubmitted => "DOCUMENTS_SUBMITTED",
            Self::PaymentsProcessed => "PAYMENTS_PROCESSED",
            Self::Completed => "COMPLETED",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Pure status -> badge color mapping, independent of any UI theme.
    pub fn badge_color(self) -> BadgeColor {
        match self {
            Self::Started => BadgeColor::Blue,
            Self::Processing => BadgeColor::Yellow,
            Self::DocumentsSubmitted => BadgeColor::Orange,
            Self::PaymentsProcessed => BadgeColor::Purple,
            Self::Completed => BadgeColor::Green,
            Self::Unknown => BadgeColor::Neutral,
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One application record, rendered as a table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub application_id: String,
    pub client_name: String,
    pub client_email: String,
    pub phone_number: String,
    pub application_status: ApplicationStatus,
    #[serde(default)]
    pub preferred_locations: Option<Vec<String>>,
    #[serde(default)]
    pub preferred_colleges: Option<Vec<String>>,
    #[serde(default)]
    pub planned_courses: Option<Vec<String>>,
    #[serde(default)]
    pub completed_course: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub agent_id: Option<String>,
    #[serde(default)]
    pub counselor_id: Option<String>,
    #[serde(default)]
    pub counselor_name: Option<String>,
}

/// Comma-joins a list-valued field; absent lists render as `"None"`.
pub fn format_list(list: Option<&[String]>) -> String {
    match list {
        Some(items) => items.join(", "),
        None => "None".to_owned(),
    }
}

/// Shortens an identifier to its first 8 characters plus an ellipsis;
/// absent identifiers render as `"N/A"`.
pub fn truncate_id(id: Option<&str>) -> String {
    match id {
        Some(id) => {
            let short: String = id.chars().take(8).collect();
            format!("{short}…")
        }
        None => "N/A".to_owned(),
    }
}

/// Formats a timestamp using the viewer's local date/time conventions.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%c").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_colors_are_a_pure_mapping() {
        assert_eq!(
            ApplicationStatus::Completed.badge_color(),
            BadgeColor::Green
        );
        assert_eq!(
            ApplicationStatus::Processing.badge_color(),
            BadgeColor::Yellow
        );
        assert_eq!(ApplicationStatus::Unknown.badge_color(), BadgeColor::Neutral);
    }

    #[test]
    fn legacy_status_values_decode_to_unknown() {
        for legacy in ["\"pending\"", "\"ACCEPTED\"", "\"REVIEW\""] {
            let status: ApplicationStatus =
                serde_json::from_str(legacy).expect("status decode never fails");
            assert_eq!(status, ApplicationStatus::Unknown);
            assert_eq!(status.badge_color(), BadgeColor::Neutral);
        }
    }

    #[test]
    fn current_status_values_round_trip() {
        let status: ApplicationStatus =
            serde_json::from_str("\"DOCUMENTS_SUBMITTED\"").expect("valid status");
        assert_eq!(status, ApplicationStatus::DocumentsSubmitted);
        assert_eq!(
            serde_json::to_string(&status).expect("status encode never fails"),
            "\"DOCUMENTS_SUBMITTED\""
        );
    }

    #[test]
    fn absent_list_renders_none() {
        assert_eq!(format_list(None), "None");
        let lists = vec!["Sydney".to_owned(), "Melbourne".to_owned()];
        assert_eq!(format_list(Some(&lists)), "Sydney, Melbourne");
    }

    #[test]
    fn identifiers_truncate_to_eight_chars() {
        assert_eq!(truncate_id(Some("abcdef1234567890")), "abcdef12…");
        assert_eq!(truncate_id(Some("short")), "short…");
        assert_eq!(truncate_id(None), "N/A");
    }
}
