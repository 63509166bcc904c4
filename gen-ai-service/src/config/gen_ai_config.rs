/// Configuration for a Gemini model invocation.
///
/// # Fields
///
/// - `model`: the model identifier (e.g. `"gemini-1.5-pro-latest"`).
/// - `endpoint`: API base URL (normally the public Gemini endpoint; tests
///   point it at a local stub).
/// - `api_key`: provider credential. Always sourced from the environment,
///   never embedded in code.
/// - `timeout_secs`: optional request timeout in seconds.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    /// Model identifier string.
    pub model: String,

    /// Inference endpoint base URL.
    pub endpoint: String,

    /// Provider API key.
    pub api_key: String,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}
