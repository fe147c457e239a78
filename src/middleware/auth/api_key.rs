//! `Authorization: ApiKey <credential>` の抽出 → ApiKeyCtx を extensions に入れる
//!
//! - header の parse は `services::auth::api_key::get_api_key` に委譲する
//! - 失敗時は 401 (NoAuthHeader / MalformedHeader をクライアントには区別させない)
//! - key の照合 (store lookup) はここでは行わない

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::ApiKeyCtx;
use crate::error::AppError;
use crate::services::auth::get_api_key;
use crate::state::AppState;

/// 渡された Router の全ルートに API key の抽出を掛ける。
///
/// 例：
/// ```ignore
/// let protected = Router::new().route("/whoami", get(whoami));
/// let protected = middleware::auth::api_key::apply(protected);
/// ```
pub fn apply(router: Router<AppState>) -> Router<AppState> {
    router.layer(middleware::from_fn(api_key_middleware))
}

async fn api_key_middleware(mut req: Request<Body>, next: Next) -> Result<Response, AppError> {
    let api_key = match get_api_key(req.headers()) {
        Ok(api_key) => api_key,
        Err(err) => {
            // header の値そのものはログに出さない
            tracing::warn!(
                error = %err,
                method = %req.method(),
                path = %req.uri().path(),
                "api key extraction failed"
            );
            return Err(err.into());
        }
    };

    let ctx = ApiKeyCtx::new(api_key);
    tracing::debug!(fingerprint = %ctx.fingerprint(), "api key accepted");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}
