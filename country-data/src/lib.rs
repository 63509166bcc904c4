//! Core of the country explorer's data view.
//!
//! The crate owns everything between the public REST Countries API and a
//! rendering layer:
//!
//! - [`model`] — typed country records as delivered by REST Countries v3.1,
//! - [`client`] — the async fetch client ([`RestCountriesClient`]),
//! - [`filter`] — client-side continent/region filtering and the derived
//!   filter option sets,
//! - [`explorer`] — the fetch/display state machine ([`Explorer`]): loading
//!   flag, notices with suppression, manual-search validation, and
//!   request-token sequencing for overlapping fetches,
//! - [`chat`] — the session chat transcript and the relay client the chat
//!   widget talks through.
//!
//! Rendering, styling, and layout live elsewhere; this crate only produces
//! the state a renderer reads.

pub mod chat;
pub mod client;
pub mod error;
pub mod explorer;
pub mod filter;
pub mod model;

pub use chat::{ChatSession, ChatTurn, RelayClient, Sender, Transcript};
pub use client::RestCountriesClient;
pub use error::{CountryDataError, Result};
pub use explorer::{Completion, CountrySource, Explorer, FetchPlan, Notice, Phase, Ticket};
pub use filter::FilterState;
pub use model::CountryRecord;
