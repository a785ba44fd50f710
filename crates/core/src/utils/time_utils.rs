use chrono::{DateTime, Local};

use crate::constants::{LAST_UPDATED_FORMAT, NEVER_REFRESHED_MESSAGE};

/// Renders a refresh timestamp as `dd/mm/YYYY HH:MM:SS`.
pub fn format_last_updated(instant: &DateTime<Local>) -> String {
    instant.format(LAST_UPDATED_FORMAT).to_string()
}

/// Display label for an optional refresh timestamp.
pub fn last_updated_label(instant: Option<&DateTime<Local>>) -> String {
    match instant {
        Some(ts) => format_last_updated(ts),
        None => NEVER_REFRESHED_MESSAGE.to_string(),
    }
}
