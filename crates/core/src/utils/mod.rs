pub mod labels;
pub mod time_utils;
