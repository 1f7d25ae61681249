use super::{validate_title, Validate};
use crate::dto::{output::ValidationDetail, TicketStatus};
use serde::Deserialize;

///
/// Merge-patch of a ticket. `None` means the field was not sent
/// and stays unchanged.
///
/// `description` distinguishes an absent field (`None`)
/// from an explicit null (`Some(None)`) which clears it
///
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TicketUpdate {
    pub title: Option<String>,
    #[serde(default, with = "de_present")]
    pub description: Option<Option<String>>,
    pub status: Option<TicketStatus>,
}

impl Validate for TicketUpdate {
    fn validate(&self) -> Vec<ValidationDetail> {
        self.title
            .as_deref()
            .and_then(validate_title)
            .into_iter()
            .collect()
    }
}

mod de_present {
    //!
    //! Wraps any value that is present in JSON in Some,
    //! including null, so absent fields can rely on serde default
    //!

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        T::deserialize(d).map(Some)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ticket_update_json_empty() {
        let update = serde_json::from_str::<TicketUpdate>("{}").unwrap();

        assert_eq!(update, TicketUpdate::default());
    }

    #[test]
    fn ticket_update_json_status_only() {
        let update = serde_json::from_str::<TicketUpdate>(r#"{ "status": "stalled" }"#).unwrap();

        assert_eq!(update.title, None);
        assert_eq!(update.description, None);
        assert_eq!(update.status, Some(TicketStatus::Stalled));
    }

    #[test]
    fn ticket_update_json_description_null() {
        let update =
            serde_json::from_str::<TicketUpdate>(r#"{ "description": null }"#).unwrap();

        assert_eq!(update.description, Some(None));
    }

    #[test]
    fn ticket_update_json_description_set() {
        let update =
            serde_json::from_str::<TicketUpdate>(r#"{ "description": "text" }"#).unwrap();

        assert_eq!(update.description, Some(Some("text".to_string())));
    }

    #[test]
    fn ticket_update_json_status_invalid() {
        let update = serde_json::from_str::<TicketUpdate>(r#"{ "status": "reopened" }"#);

        assert!(update.is_err());
    }

    #[test]
    fn validate_title_absent() {
        assert!(TicketUpdate::default().validate().is_empty());
    }

    #[test]
    fn validate_title_empty() {
        let update = TicketUpdate {
            title: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(update.validate().len(), 1);
    }
}
