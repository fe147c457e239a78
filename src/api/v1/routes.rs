/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health は認証なし、それ以外は API key middleware を通す
 */
use axum::{Router, routing::get};

use crate::middleware;
use crate::state::AppState;

use crate::api::v1::handlers::{health::health, whoami::whoami};

pub fn routes() -> Router<AppState> {
    // layer は「その時点で登録済みのルート」にだけ掛かるので、先に protected を組み立てる
    let protected = Router::new().route("/whoami", get(whoami));
    let protected = middleware::auth::api_key::apply(protected);

    Router::new().route("/health", get(health)).merge(protected)
}
