use reqwest::header::{HeaderValue, ACCEPT};
use serde_json::Value;

use crate::core::config::RegistryConfig;
use crate::core::error::{AppError, Result};
use crate::features::ruc::models::TaxpayerRecord;
use crate::shared::constants::{MSG_INVALID_RUC, MSG_NOT_FOUND, RUC_LENGTH};

/// Path of the full RUC lookup on the registry API
const LOOKUP_PATH: &str = "/v2/sunat/ruc/full";

/// Service for looking up taxpayers in the external SUNAT registry API.
///
/// Each call performs exactly one upstream request: no retries, no caching and
/// the client's default timeouts.
pub struct RucService {
    client: reqwest::Client,
    base_url: String,
}

impl RucService {
    pub fn new(config: &RegistryConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("ConsultaRuc/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn lookup_url(&self, ruc: &str) -> String {
        format!(
            "{}{}?numero={}",
            self.base_url,
            LOOKUP_PATH,
            urlencoding::encode(ruc)
        )
    }

    /// Look up a RUC and map the registry payload onto a [`TaxpayerRecord`].
    ///
    /// Errors:
    /// - `Validation` when `ruc` is not 11 characters (no request is made)
    /// - `NotFound` when the registry answers with a non-success status
    /// - `Upstream` on transport failures or an unparseable body
    pub async fn lookup(&self, ruc: &str) -> Result<TaxpayerRecord> {
        if ruc.chars().count() != RUC_LENGTH {
            return Err(AppError::Validation(MSG_INVALID_RUC.to_string()));
        }

        let url = self.lookup_url(ruc);
        tracing::debug!("RUC lookup: {} -> {}", ruc, url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Error fetching RUC data: {:?}", e);
                AppError::Upstream(format!("Registry request failed: {}", e))
            })?;

        if !response.status().is_success() {
            tracing::warn!(
                "Registry returned status {} for RUC {}",
                response.status(),
                ruc
            );
            return Err(AppError::NotFound(MSG_NOT_FOUND.to_string()));
        }

        let payload: Value = response.json().await.map_err(|e| {
            tracing::error!("Error fetching RUC data: failed to parse response: {:?}", e);
            AppError::Upstream(format!("Failed to parse registry response: {}", e))
        })?;

        // Property access on `null` has no sensible reading
        if payload.is_null() {
            tracing::error!("Error fetching RUC data: registry returned a null body");
            return Err(AppError::Upstream(
                "Registry returned a null body".to_string(),
            ));
        }

        Ok(TaxpayerRecord::from_upstream(ruc, &payload))
    }
}
