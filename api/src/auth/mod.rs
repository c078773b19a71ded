pub mod claims;
pub mod extractors;
pub mod guards;
pub mod middleware;

pub use claims::{AuthUser, Claims};

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

/// Signs a token for the given identity and returns it with its expiry.
/// The key and lifetime come from configuration via `AppState`; nothing here
/// reads the environment.
pub fn generate_jwt(email: &str, key: &EncodingKey, duration_minutes: i64) -> (String, String) {
    let expiry = Utc::now() + Duration::minutes(duration_minutes);

    let claims = Claims {
        sub: email.to_owned(),
        exp: expiry.timestamp() as usize,
    };

    let token = encode(&Header::default(), &claims, key).expect("Token encoding failed");

    (token, expiry.to_rfc3339())
}
