//! Shared color constants for the UI.

use egui::Color32;
use insider_business::BadgeColor;

/// Forest green for completed/success states.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red for error/failed states.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber for in-progress states.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Blue for just-started states.
pub const COLOR_BLUE: Color32 = Color32::from_rgb(13, 110, 253);

/// Orange for documents-submitted states.
pub const COLOR_ORANGE: Color32 = Color32::from_rgb(253, 126, 20);

/// Purple for payments-processed states.
pub const COLOR_PURPLE: Color32 = Color32::from_rgb(111, 66, 193);

/// Gray for unrecognized states.
pub const COLOR_NEUTRAL: Color32 = Color32::from_rgb(108, 117, 125);

/// Maps the abstract badge color onto a concrete theme color.
pub fn badge_fill(color: BadgeColor) -> Color32 {
    match color {
        BadgeColor::Green => COLOR_GREEN,
        BadgeColor::Yellow => COLOR_AMBER,
        BadgeColor::Blue => COLOR_BLUE,
        BadgeColor::Orange => COLOR_ORANGE,
        BadgeColor::Purple => COLOR_PURPLE,
        BadgeColor::Neutral => COLOR_NEUTRAL,
    }
}
