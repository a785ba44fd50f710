/// Separator between a code and its description in every combined label.
pub const LABEL_SEPARATOR: &str = " - ";

/// Rows per grid page.
pub const GRID_PAGE_SIZE: usize = 20;

/// Decimal places money is rounded to.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Display format of the last-updated timestamp.
pub const LAST_UPDATED_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Page title shown above the grid.
pub const PAGE_TITLE: &str = "Price Table Lookup";

/// Warning shown instead of the grid when the price table is empty.
pub const NO_DATA_MESSAGE: &str = "No price table found in the API.";

/// Label shown when no refresh timestamp exists yet.
pub const NEVER_REFRESHED_MESSAGE: &str = "Data has not been refreshed manually yet";

