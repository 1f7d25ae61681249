//!
//! Module with all dtos that are passed between server and users
//!

pub mod input;
pub mod output;
mod ticket_status;

pub use ticket_status::*;
