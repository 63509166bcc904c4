use serde::{Deserialize, Serialize};

/// Request payload for /chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Free-text prompt, forwarded verbatim to the provider. Non-emptiness
    /// is the caller's contract; the relay does not validate it.
    pub prompt: String,
}

/// Response payload for /chat.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Full text of the first completion.
    pub response: String,
}
