//! "code - description" labels used by selectors and the condition column.

use crate::constants::LABEL_SEPARATOR;

/// Joins a code and its description with [`LABEL_SEPARATOR`].
///
/// A blank description still produces the separator (`"001 - "`).
pub fn combined_label(code: &str, description: &str) -> String {
    format!("{}{}{}", code, LABEL_SEPARATOR, description)
}

/// Recovers the code from a combined label: everything before the first
/// separator, or the whole label when there is none.
pub fn label_code(label: &str) -> &str {
    match label.find(LABEL_SEPARATOR) {
        Some(idx) => &label[..idx],
        None => label,
    }
}
