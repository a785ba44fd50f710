use std::sync::Arc;

use anyhow::Context;

use pricedesk_price_source::{PriceSource, ProtheusRestSource};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{config::Config, sessions::SessionRegistry};

pub struct AppState {
    pub sessions: SessionRegistry,
    pub source_id: &'static str,
}

pub fn init_tracing() {
    let log_format = std::env::var("PD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    tracing::info!(
        "Price table endpoint: {}, conditions endpoint: {}",
        config.price_table_url,
        config.conditions_url
    );
    if config.api_user.trim().is_empty() {
        tracing::warn!("PD_API_USER is not set; requests will be sent without Basic Auth");
    }

    let source = ProtheusRestSource::with_timeout(
        config.endpoints(),
        config.credentials(),
        config.fetch_timeout,
    )
    .context("Failed to build the price source HTTP client")?;
    let source: Arc<dyn PriceSource> = Arc::new(source);
    let source_id = source.id();
    let sessions =
        SessionRegistry::with_limits(source, config.session_idle_ttl, config.max_sessions);
    Ok(Arc::new(AppState {
        sessions,
        source_id,
    }))
}

/// State over an arbitrary price source, with default session limits.
pub fn build_state_with_source(source: Arc<dyn PriceSource>) -> Arc<AppState> {
    let source_id = source.id();
    Arc::new(AppState {
        sessions: SessionRegistry::new(source),
        source_id,
    })
}
