//! One-time checkout sessions via the Stripe HTTP API.

use serde::Deserialize;
use stratus_core::config::payment::PaymentConfig;
use stratus_core::error::{AppError, ErrorKind};
use stratus_core::result::AppResult;

const CHECKOUT_SESSIONS_URL: &str = "https://api.stripe.com/v1/checkout/sessions";

#[derive(Debug, Deserialize)]
struct CheckoutSessionResponse {
    url: String,
}

/// Creates hosted checkout sessions for the premium storage product.
pub struct CheckoutService {
    http: reqwest::Client,
    config: PaymentConfig,
}

impl CheckoutService {
    /// Creates a new checkout service.
    pub fn new(config: PaymentConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Creates a one-time payment session and returns its hosted URL.
    ///
    /// The optional file ID is attached as session metadata so the
    /// frontend can correlate the purchase after redirect.
    pub async fn create_checkout_session(&self, file_id: Option<&str>) -> AppResult<String> {
        if self.config.stripe_secret_key.is_empty() {
            return Err(AppError::new(
                ErrorKind::Configuration,
                "Stripe secret key is not configured",
            ));
        }

        let params = self.session_params(file_id);
        let response = self
            .http
            .post(CHECKOUT_SESSIONS_URL)
            .bearer_auth(&self.config.stripe_secret_key)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Payment provider unreachable", e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, body, "checkout session rejected");
            return Err(AppError::new(
                ErrorKind::ExternalService,
                "Failed to create checkout session",
            ));
        }

        let session: CheckoutSessionResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                "Invalid payment provider response",
                e,
            )
        })?;
        Ok(session.url)
    }

    /// Builds the form-encoded session parameters.
    fn session_params(&self, file_id: Option<&str>) -> Vec<(String, String)> {
        let mut params = vec![
            ("mode".to_string(), "payment".to_string()),
            (
                "payment_method_types[0]".to_string(),
                "card".to_string(),
            ),
            (
                "line_items[0][price_data][currency]".to_string(),
                self.config.currency.clone(),
            ),
            (
                "line_items[0][price_data][product_data][name]".to_string(),
                self.config.product_name.clone(),
            ),
            (
                "line_items[0][price_data][product_data][description]".to_string(),
                self.config.product_description.clone(),
            ),
            (
                "line_items[0][price_data][unit_amount]".to_string(),
                self.config.unit_amount.to_string(),
            ),
            ("line_items[0][quantity]".to_string(), "1".to_string()),
            (
                // Stripe substitutes the placeholder so the frontend can
                // look up the completed session after redirect.
                "success_url".to_string(),
                format!(
                    "{}/payment-success?session_id={{CHECKOUT_SESSION_ID}}",
                    self.config.frontend_url
                ),
            ),
            (
                "cancel_url".to_string(),
                format!("{}/payment-cancel", self.config.frontend_url),
            ),
        ];
        if let Some(file_id) = file_id {
            params.push(("metadata[fileId]".to_string(), file_id.to_string()));
        }
        params
    }
}
