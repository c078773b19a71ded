use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

const PAYMENT_INTENTS_URL: &str = "https://api.stripe.com/v1/payment_intents";

/// Converts a decimal price into the provider's integer minor units.
pub fn to_minor_units(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

/// Thin client for the payment provider. Only mints payment intents; it is
/// not involved in any other business logic.
#[derive(Clone)]
pub struct PaymentClient {
    client: Client,
    secret_key: String,
}

#[derive(Debug, Deserialize)]
struct PaymentIntent {
    client_secret: String,
}

impl PaymentClient {
    pub fn new(secret_key: String) -> Self {
        Self {
            client: Client::new(),
            secret_key,
        }
    }

    /// Requests a payment intent for `amount` minor units and returns the
    /// client-usable secret.
    pub async fn create_payment_intent(&self, amount: i64, currency: &str) -> Result<String> {
        let params = [
            ("amount", amount.to_string()),
            ("currency", currency.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .client
            .post(PAYMENT_INTENTS_URL)
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await
            .context("Failed to reach payment provider")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Payment provider error ({status}): {body}");
        }

        let intent: PaymentIntent = response
            .json()
            .await
            .context("Malformed payment provider response")?;

        Ok(intent.client_secret)
    }
}
