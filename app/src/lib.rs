//! View and state layer for the salon client directory.
//!
//! # Overview
//! Drives the salon-core API client from user actions: list the collection,
//! create, edit, and delete records, and render the results into a list view
//! rebuilt from scratch after every successful mutation. The server is the
//! sole owner of the data; nothing is cached between syncs.
//!
//! # Design
//! - `SalonApp` owns the view-binding object and two injected seams: a
//!   `Transport` that executes the core's requests and a `ConfirmPrompt`
//!   for the delete guardrail.
//! - The edit surface is a two-state machine (hidden / one open session),
//!   opened only by a successful fetch-by-id.
//! - User-visible status goes through `FeedbackPanel`, which hides a message
//!   five seconds after it was shown.
//! - Handler failures are never fatal; each is traced and reported, leaving
//!   the app usable.

pub mod app;
pub mod feedback;
pub mod prompt;
pub mod session;
pub mod transport;
pub mod view;

pub use app::{AppConfig, SalonApp, ViewState};
pub use feedback::{FeedbackPanel, Severity, HIDE_DELAY};
pub use prompt::ConfirmPrompt;
pub use session::{EditSession, EditSurface};
pub use transport::{Transport, TransportError, UreqTransport};
pub use view::{ClientRow, FormFields, ListView};
