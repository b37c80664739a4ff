// src/application/commands/mod.rs
//
// Form command handlers
//
// - Commands are thin adapters between the forms and the services
// - Mutations answer with the refreshed table so the form can redraw it
// - Failures come back as ErrorResponse, never as panics
// - No business logic here

pub mod booking_commands;
pub mod record_commands;
pub mod report_commands;

pub use booking_commands::*;
pub use record_commands::*;
pub use report_commands::*;
