/*
 * Responsibility
 * - Handler から見える「API key 付きリクエストのコンテキスト」の型
 * - middleware が header を parse して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - key の照合 (store lookup) はここでは行わない。形式が正しいことだけが保証される
 */
use std::fmt;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use sha2::{Digest, Sha256};

/// Credential presented via `Authorization: ApiKey <credential>`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKeyCtx {
    api_key: String,
}

impl ApiKeyCtx {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// base64url(SHA-256(api_key)), no padding. Safe to log or return.
    pub fn fingerprint(&self) -> String {
        URL_SAFE_NO_PAD.encode(Sha256::digest(self.api_key.as_bytes()))
    }
}

impl fmt::Debug for ApiKeyCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyCtx")
            .field("api_key", &"<redacted>")
            .finish()
    }
}
