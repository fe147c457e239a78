/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - API key の照合 (key store) はこのサービスの責務外なので、今は空
 * - key store などを足すときはここに Clone 可能な形で持たせる
 */
#[derive(Clone, Debug, Default)]
pub struct AppState;

impl AppState {
    pub fn new() -> Self {
        Self
    }
}
