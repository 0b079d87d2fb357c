//! Contact request and response bodies.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Body sent when creating or updating a contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactInput {
    pub properties: HashMap<String, String>,
}

impl ContactInput {
    pub fn new(properties: HashMap<String, String>) -> ContactInput {
        ContactInput { properties }
    }

    /// Build an input with the standard contact properties filled in.
    pub fn with_details(
        first_name: &str,
        last_name: &str,
        email: &str,
        work_email: &str,
        company: &str,
    ) -> ContactInput {
        let properties = [
            ("firstname", first_name),
            ("lastname", last_name),
            ("email", email),
            ("work_email", work_email),
            ("company", company),
        ]
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

        ContactInput { properties }
    }
}

/// Contact record sent back from HubSpot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactOutput {
    pub id: String,

    #[serde(default, deserialize_with = "nullable_properties")]
    pub properties: HashMap<String, String>,

    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub updated_at: String,

    #[serde(default)]
    pub archived: bool,
}

// HubSpot sends `null` for properties that were requested but never set.
fn nullable_properties<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = HashMap::<String, Option<String>>::deserialize(deserializer)?;

    Ok(raw
        .into_iter()
        .map(|(name, value)| (name, value.unwrap_or_default()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_use_standard_property_names() {
        let input = ContactInput::with_details("Peter", "Parker", "pp@gmail.com", "pp@marvel.com", "Marvel");
        let body = serde_json::to_value(&input).unwrap();

        assert_eq!(body["properties"]["firstname"], "Peter");
        assert_eq!(body["properties"]["lastname"], "Parker");
        assert_eq!(body["properties"]["email"], "pp@gmail.com");
        assert_eq!(body["properties"]["work_email"], "pp@marvel.com");
        assert_eq!(body["properties"]["company"], "Marvel");
    }

    #[test]
    /// Tests that properties HubSpot sends as `null` are read as empty strings.
    fn null_properties_are_empty() {
        let body = r#"{
            "id": "3100",
            "properties": {
                "email": "matt@example.com",
                "firstname": null
            },
            "createdAt": "2020-10-14T18:01:05.763Z",
            "updatedAt": "2020-10-14T18:03:10.772Z",
            "archived": false
        }"#;

        let contact: ContactOutput = serde_json::from_str(body).unwrap();

        assert_eq!(contact.id, "3100");
        assert_eq!(contact.properties["firstname"], "");
        assert_eq!(contact.properties["email"], "matt@example.com");
        assert_eq!(contact.created_at, "2020-10-14T18:01:05.763Z");
        assert!(!contact.archived);
    }
}
