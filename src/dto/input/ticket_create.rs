use super::{validate_title, Validate};
use crate::dto::output::ValidationDetail;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TicketCreate {
    pub title: String,
    pub description: Option<String>,
}

impl Validate for TicketCreate {
    fn validate(&self) -> Vec<ValidationDetail> {
        validate_title(&self.title).into_iter().collect()
    }
}
