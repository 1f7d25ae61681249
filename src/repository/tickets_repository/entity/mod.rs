mod ticket_find_entity;
mod ticket_update_entity;

pub use ticket_find_entity::*;
pub use ticket_update_entity::*;
