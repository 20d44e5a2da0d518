use crate::models::Catalog;

// Render-ready card, one per activity, in catalog order.
#[derive(Debug, Clone)]
pub struct ActivityCardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub spots_left: u32,
    pub availability_label: String,
    pub participants: Vec<ParticipantView>,
}

#[derive(Debug, Clone)]
pub struct ParticipantView {
    pub identifier: String,
    pub badge: String,
}

pub fn build_activity_cards(catalog: &Catalog) -> Vec<ActivityCardView> {
    catalog
        .iter()
        .map(|(name, record)| {
            let spots_left = record
                .max_participants
                .saturating_sub(record.participants.len() as u32);
            ActivityCardView {
                name: name.clone(),
                description: record.description.clone(),
                schedule: record.schedule.clone(),
                max_participants: record.max_participants,
                spots_left,
                availability_label: availability_label(spots_left),
                participants: record
                    .participants
                    .iter()
                    .map(|identifier| ParticipantView {
                        identifier: identifier.clone(),
                        badge: avatar_initial(identifier),
                    })
                    .collect(),
            }
        })
        .collect()
}

// Shared with the unregister patch, which relabels capacity in place.
pub fn availability_label(spots_left: u32) -> String {
    format!("{} spots left", spots_left)
}

// First letter of the email as the avatar initial, "?" when there is
// nothing printable to take.
pub fn avatar_initial(identifier: &str) -> String {
    match identifier.trim().chars().next() {
        Some(first) => first.to_uppercase().collect(),
        None => "?".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Catalog;

    fn catalog(raw: &str) -> Catalog {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn derives_spots_left_per_activity() {
        let cards = build_activity_cards(&catalog(
            r#"{"Chess Club": {"description": "Learn chess", "schedule": "Fridays", "max_participants": 2, "participants": ["a@x.com"]}}"#,
        ));

        assert_eq!(cards.len(), 1);
        let card = &cards[0];
        assert_eq!(card.name, "Chess Club");
        assert_eq!(card.spots_left, 1);
        assert_eq!(card.availability_label, "1 spots left");
        assert_eq!(card.participants.len(), 1);
        assert_eq!(card.participants[0].identifier, "a@x.com");
        assert_eq!(card.participants[0].badge, "A");
    }

    #[test]
    fn cards_follow_catalog_order() {
        let cards = build_activity_cards(&catalog(
            r#"{
                "Zebra Watching": {"description": "d", "schedule": "s", "max_participants": 1, "participants": []},
                "Art Studio": {"description": "d", "schedule": "s", "max_participants": 1, "participants": []},
                "Band": {"description": "d", "schedule": "s", "max_participants": 1, "participants": []}
            }"#,
        ));

        let names: Vec<&str> = cards.iter().map(|card| card.name.as_str()).collect();
        assert_eq!(names, ["Zebra Watching", "Art Studio", "Band"]);
    }

    #[test]
    fn overfull_activity_clamps_spots_to_zero() {
        let cards = build_activity_cards(&catalog(
            r#"{"Chess Club": {"description": "d", "schedule": "s", "max_participants": 2, "participants": ["a@x.com", "b@x.com", "c@x.com"]}}"#,
        ));

        assert_eq!(cards[0].spots_left, 0);
        assert_eq!(cards[0].availability_label, "0 spots left");
    }

    #[test]
    fn empty_participants_builds_an_empty_list() {
        let cards = build_activity_cards(&catalog(
            r#"{"Chess Club": {"description": "d", "schedule": "s", "max_participants": 2, "participants": []}}"#,
        ));

        assert!(cards[0].participants.is_empty());
        assert_eq!(cards[0].spots_left, 2);
    }

    #[test]
    fn badge_uppercases_the_first_printable_character() {
        assert_eq!(avatar_initial("zoe@x.com"), "Z");
        assert_eq!(avatar_initial("  ben@x.com"), "B");
        assert_eq!(avatar_initial("émile@x.com"), "É");
    }

    #[test]
    fn badge_falls_back_for_blank_identifiers() {
        assert_eq!(avatar_initial(""), "?");
        assert_eq!(avatar_initial("   "), "?");
    }
}
