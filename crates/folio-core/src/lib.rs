// ABOUTME: Core library for folio - types, catalog, router, sessions, forms
// ABOUTME: Shared between the TUI and the non-interactive subcommands

pub mod auth;
pub mod board;
pub mod catalog;
pub mod request;
pub mod responder;
pub mod router;
pub mod session;
pub mod settings;
pub mod types;

pub use auth::{AuthError, Authenticator, StubAuthenticator};
pub use catalog::{catalog, categories, filter, AgentDescriptor, AgentStatus, Capability};
pub use request::{CustomAgentRequest, DataSource, IntakeSink, ValidationError};
pub use responder::ResponderRegistry;
pub use router::{reduce, Action, AppState, AppView};
pub use session::{Delivery, LatencyRange, Session};
pub use settings::AgentSettings;
pub use types::{ChatMessage, MessageStatus, Role, TaskResult, User};
