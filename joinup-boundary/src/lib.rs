use std::fmt;

use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Activity {
    pub name             : String,
    #[serde(default)]
    pub category         : String,
    pub description      : String,
    pub schedule         : String,
    pub date             : String,
    pub participants     : Vec<String>,
    pub max_participants : usize,
}

impl Activity {
    /// The participants count shown on a card, e.g. `"3/12"`.
    #[must_use]
    pub fn occupancy(&self) -> String {
        format!("{}/{}", self.participants.len(), self.max_participants)
    }
}

/// Activities as returned by the server: a JSON object keyed by activity
/// name, kept in response order.
#[derive(Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Activities(pub Vec<Activity>);

impl Activities {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.0.iter()
    }

    /// Distinct non-empty categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut categories = Vec::new();
        for activity in &self.0 {
            if !activity.category.is_empty() && !categories.contains(&activity.category) {
                categories.push(activity.category.clone());
            }
        }
        categories
    }
}

impl IntoIterator for Activities {
    type Item = Activity;
    type IntoIter = std::vec::IntoIter<Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for Activities {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for activity in &self.0 {
            map.serialize_entry(&activity.name, activity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Activities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ActivitiesVisitor;

        impl<'de> Visitor<'de> for ActivitiesVisitor {
            type Value = Activities;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of activity names to activities")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut activities = Vec::with_capacity(map.size_hint().unwrap_or(0));
                // The map key repeats the activity name; only the value is kept.
                while let Some((_, activity)) = map.next_entry::<String, Activity>()? {
                    activities.push(activity);
                }
                Ok(Activities(activities))
            }
        }

        deserializer.deserialize_map(ActivitiesVisitor)
    }
}

/// Body of a successful signup or unregister response.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct MessageResponse {
    pub message: String,
}

/// Body of a non-2xx API response. The backend may omit the detail text.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn chess_club() -> serde_json::Value {
        json!({
            "name": "Chess Club",
            "category": "Games",
            "description": "Learn strategies and compete in tournaments",
            "schedule": "Mondays, 3:30 PM",
            "date": "2026-09-07",
            "participants": ["michael@example.org", "daniel@example.org"],
            "max_participants": 12,
        })
    }

    #[test]
    fn deserializes_activities_in_response_order() {
        // Raw JSON: `json!` would sort the keys and hide ordering bugs.
        let body = r#"{
            "Chess Club": {
                "name": "Chess Club",
                "category": "Games",
                "description": "Learn strategies and compete in tournaments",
                "schedule": "Mondays, 3:30 PM",
                "date": "2026-09-07",
                "participants": ["michael@example.org", "daniel@example.org"],
                "max_participants": 12
            },
            "Art Workshop": {
                "name": "Art Workshop",
                "description": "Painting and drawing",
                "schedule": "Fridays, 4:00 PM",
                "date": "2026-09-11",
                "participants": [],
                "max_participants": 20
            }
        }"#;
        let activities: Activities = serde_json::from_str(body).unwrap();
        assert_eq!(activities.len(), 2);
        assert_eq!(activities.0[0].name, "Chess Club");
        assert_eq!(activities.0[1].name, "Art Workshop");
        // A missing category defaults to the empty string.
        assert_eq!(activities.0[1].category, "");
    }

    #[test]
    fn serializes_as_a_map_keyed_by_name() {
        let activities: Activities =
            serde_json::from_value(json!({ "Chess Club": chess_club() })).unwrap();
        let value = serde_json::to_value(&activities).unwrap();
        assert_eq!(value, json!({ "Chess Club": chess_club() }));
    }

    #[test]
    fn categories_are_distinct_and_skip_empty_ones() {
        let activities: Activities = serde_json::from_value(json!({
            "A": { "name": "A", "category": "Art", "description": "", "schedule": "", "date": "", "participants": [], "max_participants": 5 },
            "B": { "name": "B", "category": "Art", "description": "", "schedule": "", "date": "", "participants": [], "max_participants": 5 },
            "C": { "name": "C", "category": "", "description": "", "schedule": "", "date": "", "participants": [], "max_participants": 5 },
        }))
        .unwrap();
        assert_eq!(activities.categories(), vec!["Art".to_string()]);
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let activities: Activities = serde_json::from_value(json!({
            "A": { "name": "A", "category": "Sports", "description": "", "schedule": "", "date": "", "participants": [], "max_participants": 5 },
            "B": { "name": "B", "category": "Art", "description": "", "schedule": "", "date": "", "participants": [], "max_participants": 5 },
            "C": { "name": "C", "category": "Sports", "description": "", "schedule": "", "date": "", "participants": [], "max_participants": 5 },
        }))
        .unwrap();
        assert_eq!(
            activities.categories(),
            vec!["Sports".to_string(), "Art".to_string()]
        );
    }

    #[test]
    fn occupancy_shows_current_and_maximum() {
        let activity: Activity = serde_json::from_value(chess_club()).unwrap();
        assert_eq!(activity.occupancy(), "2/12");
    }

    #[test]
    fn error_detail_is_optional() {
        let with_detail: ErrorResponse =
            serde_json::from_value(json!({ "detail": "Activity not found" })).unwrap();
        assert_eq!(with_detail.detail.as_deref(), Some("Activity not found"));

        let without_detail: ErrorResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(without_detail.detail, None);
    }
}
