//! Association request and response bodies.

use serde::{Deserialize, Serialize};

/// Association type used when linking a contact to a company.
pub const ASSOCIATION_CONTACT_TO_COMPANY: &str = "contact_to_company";

/// Body sent to the batch association endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssociationInput {
    pub inputs: Vec<Association>,
}

impl AssociationInput {
    /// Build a single-item input linking a contact to a company.
    pub fn contact_to_company(contact_id: &str, company_id: &str) -> AssociationInput {
        AssociationInput {
            inputs: vec![Association::new(ASSOCIATION_CONTACT_TO_COMPANY, contact_id, company_id)],
        }
    }
}

/// One directed, typed link between two objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Association {
    #[serde(rename = "type")]
    pub association_type: String,

    pub from: AssociationId,

    pub to: AssociationId,
}

impl Association {
    pub fn new(association_type: &str, from_id: &str, to_id: &str) -> Association {
        Association {
            association_type: association_type.to_string(),
            from: AssociationId { id: from_id.to_string() },
            to: AssociationId { id: to_id.to_string() },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationId {
    pub id: String,
}

/// Response from a successful call to the batch association endpoint.
///
/// HubSpot creates the link in both directions, so `results` usually holds two entries for a
/// single input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationResults {
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub started_at: String,

    #[serde(default)]
    pub completed_at: String,

    #[serde(default)]
    pub results: Vec<Association>,
}
