//! Endpoint surface, one `impl DooTaskClient` block per domain.
//!
//! Every method accepts a parameter record (or a scalar shorthand for
//! single-field operations), applies its documented default substitutions,
//! and issues exactly one request through the shared encoder/decoder —
//! `send_message_to_user` is the lone two-round-trip exception.

mod bots;
mod columns;
mod dialogs;
mod groups;
mod messages;
mod projects;
mod system;
mod tasks;
mod users;
