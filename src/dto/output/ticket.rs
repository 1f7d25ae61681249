use crate::{dto::TicketStatus, repository};
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticket {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: TicketStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<repository::Ticket> for Ticket {
    fn from(value: repository::Ticket) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            status: value.status,
            created_at: value.created_at,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::{json, Value};
    use time::macros::datetime;

    #[test]
    fn ticket_json_serialize_ok() {
        let ticket = Ticket {
            id: 7,
            title: "Printer on fire".to_string(),
            description: None,
            status: TicketStatus::Stalled,
            created_at: datetime!(2024-05-01 10:20:30.123 UTC),
        };

        let json = serde_json::to_value(&ticket).unwrap();

        assert_eq!(
            json,
            json!({
                "id": 7,
                "title": "Printer on fire",
                "description": Value::Null,
                "status": "stalled",
                "created_at": "2024-05-01T10:20:30.123Z",
            })
        );
    }
}
