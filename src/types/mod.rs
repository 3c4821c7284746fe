//! Parameter and result records for every endpoint.
//!
//! Result records derive `Deserialize` with container-level
//! `#[serde(default)]`: the declared field set acts as a projection over
//! whatever the server returns, so new server fields never break decoding and
//! missing fields fall back to the type's default. Parameter records derive
//! `Serialize` and travel either as a query string or as a JSON body.

mod bot;
mod common;
mod dialog;
mod group;
mod message;
mod project;
mod system;
mod task;
mod user;

pub use bot::*;
pub use common::Paginated;
pub use dialog::*;
pub use group::*;
pub use message::*;
pub use project::*;
pub use system::*;
pub use task::*;
pub use user::*;
