//! Payment provider configuration.

use serde::{Deserialize, Serialize};

/// Stripe checkout configuration for the one-time premium storage product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Stripe secret key.
    #[serde(default)]
    pub stripe_secret_key: String,
    /// Currency code for the checkout session.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Price in the currency's smallest unit.
    #[serde(default = "default_unit_amount")]
    pub unit_amount: u64,
    /// Product display name.
    #[serde(default = "default_product_name")]
    pub product_name: String,
    /// Product description shown on the checkout page.
    #[serde(default = "default_product_description")]
    pub product_description: String,
    /// Frontend base URL for success/cancel redirects.
    #[serde(default = "default_frontend_url")]
    pub frontend_url: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            stripe_secret_key: String::new(),
            currency: default_currency(),
            unit_amount: default_unit_amount(),
            product_name: default_product_name(),
            product_description: default_product_description(),
            frontend_url: default_frontend_url(),
        }
    }
}

fn default_currency() -> String {
    "inr".to_string()
}

fn default_unit_amount() -> u64 {
    19_900
}

fn default_product_name() -> String {
    "Premium Storage (One-time)".to_string()
}

fn default_product_description() -> String {
    "Unlock premium storage features".to_string()
}

fn default_frontend_url() -> String {
    "http://localhost:3000".to_string()
}
