use common::Config;
use jsonwebtoken::{DecodingKey, EncodingKey};
use sea_orm::DatabaseConnection;

use crate::services::payment::PaymentClient;

/// Per-process dependencies shared by all handlers: the single database
/// connection, the token keys, and the payment provider client. Built once
/// at startup from [`Config`] and cloned into the router.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    jwt_encoding_key: EncodingKey,
    jwt_decoding_key: DecodingKey,
    jwt_duration_minutes: i64,
    payments: PaymentClient,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        jwt_secret: &str,
        jwt_duration_minutes: i64,
        payments: PaymentClient,
    ) -> Self {
        Self {
            db,
            jwt_encoding_key: EncodingKey::from_secret(jwt_secret.as_bytes()),
            jwt_decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
            jwt_duration_minutes,
            payments,
        }
    }

    pub fn from_config(db: DatabaseConnection, config: &Config) -> Self {
        Self::new(
            db,
            &config.jwt_secret,
            config.jwt_duration_minutes as i64,
            PaymentClient::new(config.payment_secret_key.clone()),
        )
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.jwt_encoding_key
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.jwt_decoding_key
    }

    pub fn jwt_duration_minutes(&self) -> i64 {
        self.jwt_duration_minutes
    }

    pub fn payments(&self) -> &PaymentClient {
        &self.payments
    }
}
