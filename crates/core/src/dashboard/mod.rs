//! Dashboard module: cached fetchers, refresh controller and per-session
//! state.
//!
//! # Architecture
//!
//! ```text
//! DashboardSession ──> CachedFetchers ──> PriceSource (remote API)
//!        │                  │
//!        │            MemoCache (per dataset)
//!        ▼
//!   DerivedTable ──> filters ──> DashboardView
//! ```
//!
//! - **Models** (`dashboard_model.rs`) - Notices, refresh status, page view
//! - **Fetchers** (`fetchers.rs`) - Memoized dataset reads that degrade to
//!   empty tables with an error notice
//! - **Session** (`session.rs`) - Event handlers for refresh, table and
//!   product selection

mod dashboard_model;
mod fetchers;
mod session;


pub use dashboard_model::{DashboardView, Notice, NoticeLevel, RefreshStatus};
pub use fetchers::{CachedFetchers, FetchOutcome};
pub use session::{DashboardSession, DerivedTable};
