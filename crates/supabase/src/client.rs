use crate::config::SupabaseConfig;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Url};
use std::sync::OnceLock;
use tracing::{error, info, warn};

/// Errors that can occur while building a Supabase client handle.
#[derive(Debug, thiserror::Error)]
pub enum SupabaseError {
    #[error("Supabase is not configured")]
    NotConfigured,
    #[error("Invalid Supabase URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Invalid Supabase key: {0}")]
    InvalidKey(#[from] reqwest::header::InvalidHeaderValue),
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Handle to a Supabase project.
///
/// Holds the resolved config and an HTTP client whose default headers
/// already carry the project key. Building one performs no I/O.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    config: SupabaseConfig,
    base_url: Url,
    http: Client,
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Result<Self, SupabaseError> {
        if !config.is_configured() {
            return Err(SupabaseError::NotConfigured);
        }

        let base_url = Url::parse(&config.url)?;

        let mut apikey = HeaderValue::from_str(&config.anon_key)?;
        apikey.set_sensitive(true);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.anon_key))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", apikey);
        headers.insert(AUTHORIZATION, bearer);

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            config,
            base_url,
            http,
        })
    }

    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    /// URL of a deployed edge function.
    pub fn functions_url(&self, name: &str) -> Result<Url, SupabaseError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}/functions/v1/{}", base, name))?)
    }
}

/// Process-wide client slot. Written at most once.
static CLIENT: OnceLock<SupabaseClient> = OnceLock::new();

/// Check the environment config at startup.
///
/// See [`initialize_with`].
pub fn initialize() -> bool {
    initialize_with(&SupabaseConfig::from_env())
}

/// Report whether `config` is complete enough to start.
///
/// This only validates and logs: it does not build or install a handle, so
/// [`client`] keeps returning `None` after a successful call. Callers that
/// need a handle construct one with [`SupabaseClient::new`] and own it.
pub fn initialize_with(config: &SupabaseConfig) -> bool {
    if !config.is_configured() {
        error!("Cannot initialize Supabase: missing configuration");
        return false;
    }

    info!(url = %config.url, "Supabase client initialized");
    true
}

/// The process-wide client, if one has been installed.
pub fn client() -> Option<&'static SupabaseClient> {
    let client = CLIENT.get();
    if client.is_none() {
        warn!("Supabase client not initialized");
    }
    client
}
