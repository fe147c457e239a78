/*
 * Responsibility
 * - tracing / panic hook の初期化
 * - Config読み込み → 依存生成 → Router 組み立て
 * - Middleware の適用 (http / security headers / API key)
 * - axum::serve() で起動
 */
use std::{panic, process};

use anyhow::Result;
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{api, config::Config, error::AppError, middleware, state::AppState};

fn init_tracing() {
    // RUST_LOG があれば優先。例:
    // RUST_LOG=info,api_key_auth=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // development では即落として気付けるようにする
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = AppState::new();
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .nest("/api/v1", api::v1::routes())
        .fallback(|| async { AppError::not_found("route") })
        .with_state(state);

    let router = middleware::security_headers::apply(router);
    middleware::http::apply(router, config)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{
        body::{Body, Bytes, to_bytes},
        http::{Request, StatusCode, header},
        response::Response,
        routing::{get, post},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::config::AppEnv;

    fn test_config() -> Config {
        Config {
            addr: "127.0.0.1:0".parse().unwrap(),
            app_env: AppEnv::Development,
            request_timeout: Duration::from_secs(5),
            request_body_limit_bytes: 1024,
        }
    }

    fn test_router() -> Router {
        build_router(AppState::new(), &test_config())
    }

    async fn send(path: &str, authorization: Option<&str>) -> Response {
        let mut builder = Request::builder().uri(path);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        test_router()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_needs_no_api_key() {
        let response = send("/api/v1/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
        assert_eq!(json_body(response).await, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn whoami_without_header_is_unauthorized() {
        let response = send("/api/v1/whoami", None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[header::WWW_AUTHENTICATE], "ApiKey");
        assert_eq!(
            json_body(response).await,
            json!({"error": {"code": "UNAUTHORIZED", "message": "unauthorized"}})
        );
    }

    #[tokio::test]
    async fn whoami_with_malformed_header_is_unauthorized() {
        for value in ["Bearer my-secret-api-key", "ApiKey", "ApiKey ", ""] {
            let response = send("/api/v1/whoami", Some(value)).await;
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{value:?}");
        }
    }

    #[tokio::test]
    async fn whoami_returns_fingerprint() {
        let response = send("/api/v1/whoami", Some("ApiKey my-secret-api-key")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"fingerprint": "Ml7e3Ww7mYj2I8f5ZKu5sBa3aw-LNHTfD318I7lBOB8"})
        );
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = send("/api/v1/nope", Some("ApiKey my-secret-api-key")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn slow_handler_times_out() {
        let config = Config {
            request_timeout: Duration::from_millis(20),
            ..test_config()
        };
        let router = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(1)).await;
                "late"
            }),
        );
        let router = middleware::http::apply(router, &config);

        let response = router
            .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let config = test_config();

        let oversized = vec![b'a'; config.request_body_limit_bytes + 1];
        let request = Request::builder()
            .method("POST")
            .uri("/echo")
            .header(header::CONTENT_LENGTH, oversized.len())
            .body(Body::from(oversized))
            .unwrap();
        let response = echo_router(&config).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let request = Request::builder()
            .method("POST")
            .uri("/echo")
            .body(Body::from("small"))
            .unwrap();
        let response = echo_router(&config).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    fn echo_router(config: &Config) -> Router {
        let router = Router::new().route("/echo", post(|body: Bytes| async move { body }));
        middleware::http::apply(router, config)
    }
}
