use std::fmt;
use tracing::warn;

/// Environment variable holding the project endpoint.
pub const URL_ENV: &str = "SUPABASE_URL";
/// Environment variable holding the public (anon) API key.
pub const ANON_KEY_ENV: &str = "SUPABASE_ANON_KEY";

/// Endpoint and key needed to address the Supabase project.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

impl SupabaseConfig {
    /// Resolve the config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve the config through an arbitrary variable lookup.
    ///
    /// Unset and empty values are both treated as missing. If either one is
    /// missing the result is the empty config, never a partial one.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(URL_ENV).filter(|v| !v.is_empty());
        let anon_key = lookup(ANON_KEY_ENV).filter(|v| !v.is_empty());

        match (url, anon_key) {
            (Some(url), Some(anon_key)) => Self { url, anon_key },
            (url, anon_key) => {
                warn!(
                    url_set = url.is_some(),
                    anon_key_set = anon_key.is_some(),
                    "Missing Supabase environment variables, auth will not work"
                );
                Self::default()
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }
}

impl fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.anon_key.is_empty() { "" } else { "***" };
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url)
            .field("anon_key", &key)
            .finish()
    }
}

/// Whether both Supabase variables are present in the environment.
pub fn is_supabase_configured() -> bool {
    SupabaseConfig::from_env().is_configured()
}
