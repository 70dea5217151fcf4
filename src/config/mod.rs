use crate::core::{Currency, PaymobError, Result};
use serde::Deserialize;
use std::env;

/// Paymob merchant credentials and settings.
///
/// Values are captured verbatim at construction and never mutated. No
/// format validation is performed on the secrets; an invalid key or HMAC
/// secret surfaces later as a gateway authentication failure or an HMAC
/// mismatch on callbacks.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymobConfig {
    pub api_key: String,
    pub integration_id: String,
    pub iframe_id: String,
    pub hmac_secret: String,
    pub currency: Currency,
}

impl PaymobConfig {
    pub fn new(
        api_key: impl Into<String>,
        integration_id: impl Into<String>,
        iframe_id: impl Into<String>,
        hmac_secret: impl Into<String>,
        currency: Currency,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            integration_id: integration_id.into(),
            iframe_id: iframe_id.into(),
            hmac_secret: hmac_secret.into(),
            currency,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Ok(PaymobConfig {
            api_key: env::var("PAYMOB_API_KEY")
                .map_err(|_| PaymobError::configuration("PAYMOB_API_KEY not set"))?,
            integration_id: env::var("PAYMOB_INTEGRATION_ID")
                .map_err(|_| PaymobError::configuration("PAYMOB_INTEGRATION_ID not set"))?,
            iframe_id: env::var("PAYMOB_IFRAME_ID")
                .map_err(|_| PaymobError::configuration("PAYMOB_IFRAME_ID not set"))?,
            hmac_secret: env::var("PAYMOB_HMAC_SECRET")
                .map_err(|_| PaymobError::configuration("PAYMOB_HMAC_SECRET not set"))?,
            currency: env::var("PAYMOB_CURRENCY")
                .unwrap_or_else(|_| "EGP".to_string())
                .parse()
                .map_err(|e: String| PaymobError::configuration(e))?,
        })
    }
}
