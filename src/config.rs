use std::env;

#[derive(Clone)]
pub struct Config {
    pub graphql_endpoint: String,
    pub musician_id: String,
    pub live_base_url: String,
    pub site_base_url: String,
    pub output_dir: String,
    pub static_dir: String,
    pub templates_dir: String,
    pub revalidate_secs: u64,
    pub rust_log: String,
}

impl Config {
    /// Every setting has a published default, so a bare environment builds
    /// the production page.
    pub fn from_env() -> Self {
        Self {
            graphql_endpoint: env::var("GRAPHQL_ENDPOINT")
                .unwrap_or_else(|_| "https://indistreet.graphcdn.app/graphql".to_string()),
            musician_id: env::var("MUSICIAN_ID").unwrap_or_else(|_| "1".to_string()),
            live_base_url: env::var("LIVE_BASE_URL")
                .unwrap_or_else(|_| "https://indistreet.com".to_string()),
            site_base_url: env::var("SITE_BASE_URL")
                .unwrap_or_else(|_| "https://live.idiots.band".to_string()),
            output_dir: env::var("OUTPUT_DIR").unwrap_or_else(|_| "dist".to_string()),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
            templates_dir: env::var("TEMPLATES_DIR").unwrap_or_else(|_| "templates".to_string()),
            revalidate_secs: env::var("REVALIDATE_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60 * 50),
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "debug".into()),
        }
    }
}
