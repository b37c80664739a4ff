// src/application/mod.rs
//
// Application Layer
//
// The boundary between the form screens and the services. It translates
// store refusals and database failures into ErrorResponse values.

pub mod commands;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use error_handling::{CommandResult, ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
