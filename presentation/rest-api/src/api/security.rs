use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use jsonwebtoken::{Algorithm, DecodingKey, Header, Validation, decode, decode_header};
use once_cell::sync::Lazy;
use poem::Request;
use poem::http::header;
use poem_openapi::SecurityScheme;
use serde::Deserialize;

use business::domain::shared::value_objects::UserId;

use crate::config::firebase_config::FirebaseConfig;

const GOOGLE_CERTS_URL: &str =
    "https://www.googleapis.com/robot/v1/metadata/x509/securetoken@system.gserviceaccount.com";
const CACHE_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct FirebaseClaims {
    sub: String,
    email: Option<String>,
    iss: String,
    aud: String,
    exp: u64,
    iat: u64,
}

struct CachedCerts {
    keys: HashMap<String, DecodingKey>,
    fetched_at: Instant,
}

static CERTS_CACHE: Lazy<RwLock<Option<CachedCerts>>> = Lazy::new(|| RwLock::new(None));

async fn fetch_google_certs() -> Result<HashMap<String, DecodingKey>, String> {
    let response: HashMap<String, String> = reqwest::get(GOOGLE_CERTS_URL)
        .await
        .map_err(|e| format!("auth.certs_fetch_failed: {e}"))?
        .json()
        .await
        .map_err(|e| format!("auth.certs_parse_failed: {e}"))?;

    let mut keys = HashMap::new();
    for (kid, pem) in response {
        let key = DecodingKey::from_rsa_pem(pem.as_bytes())
            .map_err(|e| format!("auth.cert_decode_failed: {e}"))?;
        keys.insert(kid, key);
    }

    Ok(keys)
}

async fn get_decoding_keys() -> Result<HashMap<String, DecodingKey>, String> {
    // Check cache first
    {
        let cache = CERTS_CACHE
            .read()
            .map_err(|e| format!("auth.cache_read_failed: {e}"))?;
        if let Some(cached) = cache.as_ref()
            && cached.fetched_at.elapsed() < CACHE_TTL
        {
            return Ok(cached.keys.clone());
        }
    }

    // Fetch fresh certs
    let keys = fetch_google_certs().await?;

    // Update cache
    {
        let mut cache = CERTS_CACHE
            .write()
            .map_err(|e| format!("auth.cache_write_failed: {e}"))?;
        *cache = Some(CachedCerts {
            keys: keys.clone(),
            fetched_at: Instant::now(),
        });
    }

    Ok(keys)
}

fn extract_uid_from_token(token: &str) -> Result<String, String> {
    // We need the kid from the header to find the right cert
    let header: Header =
        decode_header(token).map_err(|e| format!("auth.invalid_token_header: {e}"))?;

    let kid = header.kid.ok_or("auth.missing_kid")?;

    // This is called from an async context, but we need sync access to cached keys.
    // The caller must ensure keys are pre-fetched.
    let cache = CERTS_CACHE
        .read()
        .map_err(|e| format!("auth.cache_read_failed: {e}"))?;
    let cached = cache.as_ref().ok_or("auth.certs_not_loaded")?;

    let decoding_key = cached.keys.get(&kid).ok_or("auth.unknown_kid")?;

    let config =
        FirebaseConfig::from_env().map_err(|e| format!("auth.project_not_configured: {e}"))?;
    let expected_issuer = format!("https://securetoken.google.com/{}", config.project_id);

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[&config.project_id]);
    validation.set_issuer(&[&expected_issuer]);
    validation.validate_exp = true;

    let token_data = decode::<FirebaseClaims>(token, decoding_key, &validation)
        .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

    Ok(token_data.claims.sub)
}

async fn verify_token(token: &str) -> Result<String, String> {
    // Ensure certs are loaded/refreshed
    get_decoding_keys().await?;
    extract_uid_from_token(token)
}

/// Extracts the token from an `Authorization` header value.
/// `Ok(None)` means no header at all.
fn bearer_token(value: Option<&str>) -> Result<Option<&str>, String> {
    let Some(value) = value else {
        return Ok(None);
    };
    let token = value
        .strip_prefix("Bearer ")
        .ok_or("auth.invalid_scheme")?
        .trim();
    if token.is_empty() {
        return Err("auth.empty_token".to_string());
    }
    Ok(Some(token))
}

/// Optional identification for routes that also serve anonymous visitors.
///
/// No `Authorization` header means anonymous; a header that does not carry a
/// valid Firebase token is an error, never a silent fallback to anonymous.
pub async fn identify(req: &Request) -> Result<Option<UserId>, String> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .map(|value| value.to_str().map_err(|_| "auth.invalid_header".to_string()))
        .transpose()?;

    match bearer_token(value)? {
        Some(token) => verify_token(token).await.map(|uid| Some(UserId::new(uid))),
        None => Ok(None),
    }
}

/// Firebase Bearer token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    bearer_format = "JWT",
    checker = "firebase_bearer_checker"
)]
#[allow(dead_code)]
pub struct FirebaseBearer(pub String);

async fn firebase_bearer_checker(
    _req: &Request,
    bearer: poem_openapi::auth::Bearer,
) -> Option<String> {
    match verify_token(&bearer.token).await {
        Ok(uid) => Some(uid),
        Err(e) => {
            tracing::warn!("Firebase auth failed: {e}");
            None
        }
    }
}
