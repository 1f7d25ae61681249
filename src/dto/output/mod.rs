mod error_detail;
mod health;
mod ticket;

pub use error_detail::*;
pub use health::*;
pub use ticket::*;
