use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

use super::ApiKeyCtx;

/// `middleware::auth::api_key` が parse 済みの API key を handler 引数として取り出す。
///
/// header は再度読まない。ApiKeyCtx が無いのは middleware を通っていないルートなので、
/// AppError::Unauthorized (JSON body + `WWW-Authenticate: ApiKey`) で拒否する。
pub struct ApiKeyCtxExtractor(pub ApiKeyCtx);

impl FromRequestParts<AppState> for ApiKeyCtxExtractor
where
    AppState: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ApiKeyCtx>()
            .cloned()
            .map(ApiKeyCtxExtractor)
            .ok_or(AppError::Unauthorized)
    }
}
