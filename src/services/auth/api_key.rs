/*
 * Responsibility
 * - Authorization ヘッダから `ApiKey <credential>` を取り出す (pure function)
 * - 失敗理由を NoAuthHeader / MalformedHeader の 2 種類に分ける
 * - HTTP status への変換やログ出力は呼び出し側 (middleware) の責務
 */
use axum::http::{HeaderMap, header};
use thiserror::Error;

/// Scheme token expected in front of the credential. Matched case-sensitively.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiKeyError {
    #[error("no authorization header included")]
    NoAuthHeader,
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// Extract the API key from `Authorization: ApiKey <credential>`.
///
/// Only the first `Authorization` value is considered. The credential is
/// returned as-is after the whitespace that follows the scheme token;
/// trailing whitespace is kept.
pub fn get_api_key(headers: &HeaderMap) -> Result<String, ApiKeyError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(ApiKeyError::NoAuthHeader)?;

    // non-visible-ASCII values can't carry a scheme token
    let value = value.to_str().map_err(|_| ApiKeyError::MalformedHeader)?;

    let (scheme, rest) = value
        .split_once(char::is_whitespace)
        .ok_or(ApiKeyError::MalformedHeader)?;

    if scheme != API_KEY_SCHEME {
        return Err(ApiKeyError::MalformedHeader);
    }

    let credential = rest.trim_start();
    if credential.trim_end().is_empty() {
        return Err(ApiKeyError::MalformedHeader);
    }

    Ok(credential.to_string())
}
