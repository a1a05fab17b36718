//! Repository configuration.
//!
//! # Responsibility
//! - Read the optional remote API base URL from the environment.
//! - Normalize it so downstream code never sees blank or slash-suffixed
//!   values.
//!
//! # Invariants
//! - The API base selects remote mode in name only: nothing in this crate
//!   issues a network call, every operation uses the local slot.

use std::env;

/// Preferred environment variable naming the remote API base.
pub const API_BASE_ENV: &str = "OCEANNOTES_API_BASE";
/// Fallback environment variable consulted when the preferred one is blank.
pub const BACKEND_URL_ENV: &str = "OCEANNOTES_BACKEND_URL";

/// Construction-time repository settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoConfig {
    api_base: Option<String>,
}

impl RepoConfig {
    /// Creates a local-only configuration.
    pub fn local() -> Self {
        Self::default()
    }

    /// Creates a configuration from an explicit API base candidate.
    pub fn with_api_base(raw: impl AsRef<str>) -> Self {
        Self {
            api_base: normalize_api_base(raw.as_ref()),
        }
    }

    /// Reads the API base from the environment, preferring
    /// [`API_BASE_ENV`] over [`BACKEND_URL_ENV`].
    pub fn from_env() -> Self {
        let api_base = env::var(API_BASE_ENV)
            .ok()
            .and_then(|raw| normalize_api_base(&raw))
            .or_else(|| {
                env::var(BACKEND_URL_ENV)
                    .ok()
                    .and_then(|raw| normalize_api_base(&raw))
            });
        Self { api_base }
    }

    /// Returns the normalized API base, if configured. Reserved for a
    /// future remote backend; never dialed today.
    pub fn api_base(&self) -> Option<&str> {
        self.api_base.as_deref()
    }
}

/// Normalizes a raw API base: trims whitespace, strips trailing slashes,
/// blank becomes `None`.
pub fn normalize_api_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
