//! Session chat transcript and the relay client behind the chat widget.
//!
//! The transcript is append-only and session-scoped: nothing is persisted,
//! and turns past a fixed cap are evicted from the front so a long session
//! cannot grow without bound. Prompts go to the relay one at a time with no
//! prior turns attached; the transcript exists purely for display.

use std::{collections::VecDeque, time::Duration};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CountryDataError, Result};

/// Reply appended when the relay call fails, whatever the cause.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't get a response.";

/// Upper bound on kept turns; the oldest are evicted beyond it.
pub const MAX_TURNS: usize = 200;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One transcript entry. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub sender: Sender,
    pub text: String,
}

/// Bounded, append-only sequence of chat turns.
#[derive(Debug, Default)]
pub struct Transcript {
    turns: VecDeque<ChatTurn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns in order, oldest first.
    pub fn turns(&self) -> impl Iterator<Item = &ChatTurn> {
        self.turns.iter()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.push(Sender::User, text.into());
    }

    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.push(Sender::Bot, text.into());
    }

    fn push(&mut self, sender: Sender, text: String) {
        self.turns.push_back(ChatTurn { sender, text });
        while self.turns.len() > MAX_TURNS {
            self.turns.pop_front();
        }
    }
}

/// Client for the chat relay endpoint (`POST {base}/chat`).
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: reqwest::Client,
    url_chat: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    response: String,
}

impl RelayClient {
    /// Creates a client for the relay at `base_url`.
    ///
    /// # Errors
    /// - [`CountryDataError::InvalidEndpoint`] if `base_url` is empty or
    ///   not http(s)
    /// - [`CountryDataError::Transport`] if the HTTP client cannot be built
    pub fn new(base_url: &str, timeout_secs: Option<u64>) -> Result<Self> {
        let base = base_url.trim();
        if base.is_empty() || !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(CountryDataError::InvalidEndpoint(base_url.to_string()));
        }

        let timeout = timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(60));

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url_chat: format!("{}/chat", base.trim_end_matches('/')),
        })
    }

    /// Sends one prompt and returns the relay's reply text.
    ///
    /// # Errors
    /// - [`CountryDataError::HttpStatus`] for non-2xx responses (the relay
    ///   answers provider failures with an error status)
    /// - [`CountryDataError::Transport`] for client errors
    /// - [`CountryDataError::Decode`] if the body isn't `{"response": …}`
    pub async fn ask(&self, prompt: &str) -> Result<String> {
        debug!("POST {}", self.url_chat);
        let resp = self
            .client
            .post(&self.url_chat)
            .json(&ChatRequest { prompt })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let snippet = text.chars().take(240).collect::<String>();
            return Err(CountryDataError::HttpStatus {
                status,
                url: self.url_chat.clone(),
                snippet,
            });
        }

        let reply: ChatReply = resp
            .json()
            .await
            .map_err(|e| CountryDataError::Decode(format!("serde error: {e}")))?;

        Ok(reply.response)
    }
}

/// Chat widget state: the transcript plus the sending flow.
#[derive(Debug, Default)]
pub struct ChatSession {
    transcript: Transcript,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Sends one user message through the relay.
    ///
    /// Blank input is ignored entirely (no turn appended, no call made,
    /// returns `false`). Otherwise the user turn is appended first; a relay
    /// failure is logged and answered with [`FALLBACK_REPLY`] so the
    /// transcript always gains a bot turn per sent message.
    pub async fn send(&mut self, input: &str, relay: &RelayClient) -> bool {
        if input.trim().is_empty() {
            return false;
        }

        self.transcript.push_user(input);

        match relay.ask(input).await {
            Ok(reply) => self.transcript.push_bot(reply),
            Err(err) => {
                warn!("relay call failed: {err}");
                self.transcript.push_bot(FALLBACK_REPLY);
            }
        }

        true
    }
}
