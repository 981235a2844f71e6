//! Settings resolution.
//!
//! Precedence: process environment, then an optional `.env` file in the
//! working directory (or a parent), then the fallback constants below.

use std::env;

use crate::error::AuditError;

/// Bucket to inventory when `E_FORM_BUCKET` is not set.
const FALLBACK_BUCKET: &str = "crm-berglicht-e-formulare-mit-fotos";

/// Region when `AWS_REGION` is not set.
const FALLBACK_REGION: &str = "eu-north-1";

// Manual credentials for runs without environment or `.env`. Normally empty.
const MANUAL_ACCESS_KEY_ID: &str = "";
const MANUAL_SECRET_ACCESS_KEY: &str = "";
const MANUAL_SESSION_TOKEN: &str = "";

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub bucket: String,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl Settings {
    /// Resolve all settings, failing before any network call when the access
    /// key or the secret is still empty afterwards.
    pub fn load() -> Result<Self, AuditError> {
        // Existing process variables win over the `.env` file.
        dotenvy::dotenv().ok();

        let bucket = resolve(env::var("E_FORM_BUCKET").ok(), FALLBACK_BUCKET);
        let region = resolve(env::var("AWS_REGION").ok(), FALLBACK_REGION);
        let access_key_id = resolve(env::var("AWS_ACCESS_KEY_ID").ok(), MANUAL_ACCESS_KEY_ID);
        let secret_access_key = resolve(
            env::var("AWS_SECRET_ACCESS_KEY").ok(),
            MANUAL_SECRET_ACCESS_KEY,
        );

        if access_key_id.is_empty() || secret_access_key.is_empty() {
            return Err(AuditError::MissingCredentials);
        }

        let session_token = {
            let token = resolve(env::var("AWS_SESSION_TOKEN").ok(), MANUAL_SESSION_TOKEN);
            (!token.is_empty()).then_some(token)
        };

        Ok(Settings {
            bucket,
            region,
            access_key_id,
            secret_access_key,
            session_token,
        })
    }
}

/// Pick the environment value unless it is missing or all whitespace.
fn resolve(env_value: Option<String>, fallback: &str) -> String {
    match env_value {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => fallback.to_string(),
    }
}
