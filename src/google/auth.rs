use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::google;

const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const CALENDAR_SCOPE: &str = "https://www.googleapis.com/auth/calendar.readonly";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
// Google rejects assertions that claim more than an hour.
const ASSERTION_LIFETIME_SECS: i64 = 3600;

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchange a signed service-account assertion for a read-only access token.
#[instrument(skip_all)]
pub(crate) async fn fetch_access_token(
    client: &reqwest::Client,
    service_account: &str,
    private_key: &str,
) -> Result<String> {
    let assertion = sign_assertion(service_account, private_key, Utc::now().timestamp())?;
    let request = client
        .post(TOKEN_URL)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", &assertion)]);
    let token: TokenResponse = google::send_and_decode(request, TOKEN_URL).await?;
    debug!(service_account, "obtained calendar access token");
    Ok(token.access_token)
}

fn sign_assertion(service_account: &str, private_key: &str, issued_at: i64) -> Result<String> {
    let claims = Claims {
        iss: service_account,
        scope: CALENDAR_SCOPE,
        aud: TOKEN_URL,
        iat: issued_at,
        exp: issued_at + ASSERTION_LIFETIME_SECS,
    };
    let key = EncodingKey::from_rsa_pem(private_key.as_bytes())?;
    Ok(encode(&Header::new(Algorithm::RS256), &claims, &key)?)
}
