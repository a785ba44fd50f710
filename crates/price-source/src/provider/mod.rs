//! Dataset providers.

pub mod protheus;
mod traits;

pub use traits::PriceSource;
