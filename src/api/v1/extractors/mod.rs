/*
 * Responsibility
 * - handler 向け extractor の公開インターフェース
 */
pub mod api_key;

pub use api_key::{ApiKeyCtx, ApiKeyCtxExtractor};
