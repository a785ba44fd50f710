//! Session-scoped dashboard context.
//!
//! One `DashboardSession` per operator holds the fetch caches, the derived
//! table, the current selection and the last-updated timestamp. Each control
//! has a handler that re-runs only the stages downstream of it:
//!
//! ```text
//! refresh          -> invalidate caches -> fetch -> derive -> filter -> view
//! select_table     ->                                         filter -> view
//! select_products  ->                                         filter -> view
//! ```

use chrono::{DateTime, Local};
use log::{debug, info, warn};
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::Mutex;

use pricedesk_price_source::PriceSource;

use crate::constants::{NO_DATA_MESSAGE, PAGE_TITLE};
use crate::errors::{Error, Result};
use crate::filters::{
    apply_filters, list_tables, product_options_for, FilterSelection, ProductOption, TableOption,
};
use crate::grid::GridView;
use crate::pricing::{derive, DerivedPriceRow};

use super::dashboard_model::{DashboardView, Notice, RefreshStatus};
use super::fetchers::CachedFetchers;

/// The joined table plus everything derived once per fetch.
#[derive(Debug, Clone, Default)]
pub struct DerivedTable {
    pub rows: Vec<DerivedPriceRow>,
    pub tables: Vec<TableOption>,
    pub notices: Vec<Notice>,
}

impl DerivedTable {
    pub fn has_data(&self) -> bool {
        !self.rows.is_empty()
    }
}

#[derive(Default)]
struct SessionState {
    last_updated: Option<DateTime<Local>>,
    derived: Option<Arc<DerivedTable>>,
    selection: FilterSelection,
}

pub struct DashboardSession {
    fetchers: CachedFetchers,
    state: Mutex<SessionState>,
}

impl DashboardSession {
    pub fn new(source: Arc<dyn PriceSource>) -> Self {
        Self::with_fetchers(CachedFetchers::new(source))
    }

    pub fn with_fetchers(fetchers: CachedFetchers) -> Self {
        Self {
            fetchers,
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Renders the page. The first call of a session behaves like a refresh.
    pub async fn load(&self) -> DashboardView {
        self.load_at(Local::now()).await
    }

    pub async fn load_at(&self, now: DateTime<Local>) -> DashboardView {
        let mut state = self.state.lock().await;
        if state.last_updated.is_none() {
            info!("First load of session; starting from empty caches");
            self.reset(&mut state, now).await;
        }
        let derived = self.ensure_derived(&mut state).await;
        build_view(&state, &derived)
    }

    /// Invalidates every cache, stamps the time and reloads.
    pub async fn refresh(&self) -> DashboardView {
        self.refresh_at(Local::now()).await
    }

    pub async fn refresh_at(&self, now: DateTime<Local>) -> DashboardView {
        let mut state = self.state.lock().await;
        info!("Manual refresh requested");
        self.reset(&mut state, now).await;
        let derived = self.ensure_derived(&mut state).await;
        build_view(&state, &derived)
    }

    /// Selects a price table by its option label, or clears the selection.
    ///
    /// Product selections not offered under the new table are dropped.
    pub async fn select_table(&self, label: Option<String>) -> Result<DashboardView> {
        let mut state = self.state.lock().await;
        self.ensure_started(&mut state).await;
        let derived = self.ensure_derived(&mut state).await;

        if let Some(label) = &label {
            if !derived.tables.iter().any(|t| &t.label == label) {
                warn!("Rejected unknown price table '{}'", label);
                return Err(Error::invalid_selection(format!(
                    "unknown price table '{}'",
                    label
                )));
            }
        }

        debug!("Table selection: {:?}", label);
        state.selection.table = label;
        prune_products(&mut state.selection, &derived);
        Ok(build_view(&state, &derived))
    }

    /// Replaces the product selection. An empty list shows every product.
    pub async fn select_products(&self, labels: Vec<String>) -> Result<DashboardView> {
        let mut state = self.state.lock().await;
        self.ensure_started(&mut state).await;
        let derived = self.ensure_derived(&mut state).await;

        let offered: BTreeSet<String> =
            product_options_for(&derived.rows, state.selection.table.as_deref())
                .into_iter()
                .map(|p| p.label)
                .collect();
        if let Some(unknown) = labels.iter().find(|l| !offered.contains(*l)) {
            warn!("Rejected unknown product '{}'", unknown);
            return Err(Error::invalid_selection(format!(
                "unknown product '{}'",
                unknown
            )));
        }

        debug!("Product selection: {} labels", labels.len());
        state.selection.products = labels.into_iter().collect();
        Ok(build_view(&state, &derived))
    }

    pub async fn tables(&self) -> Vec<TableOption> {
        self.load().await.tables
    }

    pub async fn products(&self) -> Vec<ProductOption> {
        self.load().await.products
    }

    /// The grid input for the current selection; `None` when there is no data.
    pub async fn grid(&self) -> Option<GridView> {
        self.load().await.grid
    }

    /// Reads the timestamp without loading anything.
    pub async fn status(&self) -> RefreshStatus {
        RefreshStatus::new(self.state.lock().await.last_updated)
    }

    pub async fn selection(&self) -> FilterSelection {
        self.state.lock().await.selection.clone()
    }

    async fn ensure_started(&self, state: &mut SessionState) {
        if state.last_updated.is_none() {
            self.reset(state, Local::now()).await;
        }
    }

    async fn reset(&self, state: &mut SessionState, now: DateTime<Local>) {
        self.fetchers.invalidate_all().await;
        state.derived = None;
        state.last_updated = Some(now);
    }

    async fn ensure_derived(&self, state: &mut SessionState) -> Arc<DerivedTable> {
        if let Some(derived) = &state.derived {
            return derived.clone();
        }

        let prices = self.fetchers.price_table().await;
        let conditions = self.fetchers.payment_conditions().await;

        let mut notices: Vec<Notice> = [&prices.notice, &conditions.notice]
            .into_iter()
            .flatten()
            .cloned()
            .collect();

        let derived = if prices.rows.is_empty() {
            notices.push(Notice::warning(NO_DATA_MESSAGE));
            DerivedTable {
                notices,
                ..DerivedTable::default()
            }
        } else {
            let derivation = derive(&prices.rows, &conditions.rows);
            notices.extend(
                derivation
                    .out_of_range
                    .iter()
                    .map(|label| Notice::warning(price_out_of_range_message(label))),
            );
            let rows = derivation.rows;
            let tables = list_tables(&rows);
            DerivedTable {
                rows,
                tables,
                notices,
            }
        };

        let derived = Arc::new(derived);
        reconcile_selection(&mut state.selection, &derived);
        state.derived = Some(derived.clone());
        derived
    }
}

fn price_out_of_range_message(product_label: &str) -> String {
    format!(
        "Price of {} is out of range; showing the base price without markup or tax.",
        product_label
    )
}

/// Drops a table selection that no longer exists, then prunes products.
fn reconcile_selection(selection: &mut FilterSelection, derived: &DerivedTable) {
    if let Some(label) = &selection.table {
        if !derived.tables.iter().any(|t| &t.label == label) {
            debug!("Selected table '{}' vanished after reload", label);
            selection.table = None;
        }
    }
    prune_products(selection, derived);
}

fn prune_products(selection: &mut FilterSelection, derived: &DerivedTable) {
    if selection.products.is_empty() {
        return;
    }
    let offered: BTreeSet<String> =
        product_options_for(&derived.rows, selection.table.as_deref())
            .into_iter()
            .map(|p| p.label)
            .collect();
    selection.products.retain(|label| offered.contains(label));
}

fn build_view(state: &SessionState, derived: &DerivedTable) -> DashboardView {
    let (products, grid) = if derived.has_data() {
        let products = product_options_for(&derived.rows, state.selection.table.as_deref());
        let filtered = apply_filters(&derived.rows, &state.selection);
        (products, Some(GridView::from_rows(&filtered)))
    } else {
        (Vec::new(), None)
    };

    DashboardView {
        title: PAGE_TITLE.to_string(),
        status: RefreshStatus::new(state.last_updated),
        notices: derived.notices.clone(),
        tables: derived.tables.clone(),
        selection: state.selection.clone(),
        products,
        grid,
    }
}
