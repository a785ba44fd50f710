use std::{net::SocketAddr, time::Duration};

use pricedesk_price_source::{BasicCredentials, SourceEndpoints};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:1807/rest/api/v1/calccomponentesorc2022";

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    pub price_table_url: String,
    pub conditions_url: String,
    pub api_user: String,
    pub api_password: String,
    pub fetch_timeout: Duration,
    pub session_idle_ttl: Duration,
    pub max_sessions: usize,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("PD_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid PD_LISTEN_ADDR");
        let cors_allow = std::env::var("PD_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("PD_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let static_dir = std::env::var("PD_STATIC_DIR").unwrap_or_else(|_| "dist".into());

        let base_url =
            std::env::var("PD_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.into());
        let defaults = SourceEndpoints::from_base(&base_url);
        let price_table_url =
            std::env::var("PD_PRICE_TABLE_URL").unwrap_or(defaults.price_table_url);
        let conditions_url = std::env::var("PD_CONDITIONS_URL").unwrap_or(defaults.conditions_url);

        let api_user = std::env::var("PD_API_USER").unwrap_or_default();
        let api_password = std::env::var("PD_API_PASSWORD").unwrap_or_default();
        let fetch_timeout_secs: u64 = std::env::var("PD_FETCH_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .unwrap_or(30);

        let session_idle_secs: u64 = std::env::var("PD_SESSION_IDLE_SECS")
            .unwrap_or_else(|_| "1800".into())
            .parse()
            .unwrap_or(1800);
        let max_sessions: usize = std::env::var("PD_MAX_SESSIONS")
            .unwrap_or_else(|_| "1000".into())
            .parse()
            .unwrap_or(1000);

        Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            price_table_url,
            conditions_url,
            api_user,
            api_password,
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),
            session_idle_ttl: Duration::from_secs(session_idle_secs),
            max_sessions,
        }
    }

    pub fn endpoints(&self) -> SourceEndpoints {
        SourceEndpoints {
            price_table_url: self.price_table_url.clone(),
            conditions_url: self.conditions_url.clone(),
        }
    }

    pub fn credentials(&self) -> BasicCredentials {
        BasicCredentials::new(&self.api_user, &self.api_password)
    }
}
