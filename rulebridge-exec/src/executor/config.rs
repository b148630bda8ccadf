use std::time::Duration;

/// Transport limits handed to the [`HttpClient`](crate::executor::HttpClient) for every request.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub max_response_bytes: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_response_bytes: 4 * 1024 * 1024, // 4MB
        }
    }
}
