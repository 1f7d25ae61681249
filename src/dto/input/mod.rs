mod ticket_create;
mod ticket_update;

pub use ticket_create::*;
pub use ticket_update::*;

use super::output::ValidationDetail;

pub const TITLE_MAX_LEN: usize = 255;

///
/// Checks performed after successful deserialization.
/// Returns one entry per offending field
///
pub trait Validate {
    fn validate(&self) -> Vec<ValidationDetail>;
}

fn validate_title(title: &str) -> Option<ValidationDetail> {
    if title.is_empty() {
        return Some(ValidationDetail::new(
            &["body", "title"],
            "title must not be empty",
        ));
    }

    if title.chars().count() > TITLE_MAX_LEN {
        return Some(ValidationDetail::new(
            &["body", "title"],
            format!("title must be at most {TITLE_MAX_LEN} characters"),
        ));
    }

    None
}
