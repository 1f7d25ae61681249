use crate::dto::input;

///
/// Bind values of a merge-patch. `None` keeps the stored column.
///
/// `description_present` separates an absent description
/// from an explicit null that clears the column
///
pub struct TicketUpdateEntity<'a> {
    pub title: Option<&'a str>,

    pub description_present: bool,
    pub description: Option<&'a str>,

    pub status: Option<&'a str>,
}

impl<'a> From<&'a input::TicketUpdate> for TicketUpdateEntity<'a> {
    fn from(value: &'a input::TicketUpdate) -> Self {
        Self {
            title: value.title.as_deref(),
            description_present: value.description.is_some(),
            description: value.description.as_ref().and_then(Option::as_deref),
            status: value.status.as_ref().map(|status| status.as_ref()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dto::TicketStatus;

    #[test]
    fn from_empty_update() {
        let update = input::TicketUpdate::default();

        let entity = TicketUpdateEntity::from(&update);

        assert_eq!(entity.title, None);
        assert!(!entity.description_present);
        assert_eq!(entity.description, None);
        assert_eq!(entity.status, None);
    }

    #[test]
    fn from_description_cleared() {
        let update = input::TicketUpdate {
            description: Some(None),
            ..Default::default()
        };

        let entity = TicketUpdateEntity::from(&update);

        assert!(entity.description_present);
        assert_eq!(entity.description, None);
    }

    #[test]
    fn from_all_fields() {
        let update = input::TicketUpdate {
            title: Some("New Title".to_string()),
            description: Some(Some("New Description".to_string())),
            status: Some(TicketStatus::Stalled),
        };

        let entity = TicketUpdateEntity::from(&update);

        assert_eq!(entity.title, Some("New Title"));
        assert!(entity.description_present);
        assert_eq!(entity.description, Some("New Description"));
        assert_eq!(entity.status, Some("stalled"));
    }
}
