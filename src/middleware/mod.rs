/*
 * Responsibility
 * - middleware の公開インターフェース
 * - http (request id / trace / limit / timeout), security_headers, auth (API key)
 */
pub mod auth;
pub mod http;
pub mod security_headers;
