/*
 * Responsibility
 * - Router / handler から独立したドメイン処理 (auth など) の公開インターフェース
 */
pub mod auth;
