//! # hubspot-crm
//!
//! Library to help interact with v3 of the HubSpot CRM API: create, update, read and delete
//! contacts, and associate CRM objects with each other.
//!
//! You can read more information about the HubSpot API here:
//! [https://developers.hubspot.com/docs/api/crm/contacts](https://developers.hubspot.com/docs/api/crm/contacts)
//!
//! Every operation returns a `Result`. Errors come in three kinds that are never mixed: the
//! request could not be built (`ClientError::InvalidInput`), it could not be executed
//! (`ClientError::Request`), or HubSpot rejected it (`ClientError::Api`, `ClientError::NotFound`,
//! `ClientError::Association`, all carrying the HTTP status code).
//!
//! ### Example
//!
//! ```no_run
//! use hubspot_crm::{AssociationInput, Client, ContactInput};
//!
//! let client = Client::new("YOUR_API_KEY").unwrap();
//!
//! let contact = ContactInput::with_details(
//!     "Peter",
//!     "Parker",
//!     "pp@gmail.com",
//!     "pp@marvel.com",
//!     "Marvel",
//! );
//! let contact = client.create_contact(&contact).unwrap();
//!
//! let association = AssociationInput::contact_to_company(&contact.id, "COMPANY_ID_HERE");
//! client.create_association(&association, "contact", "company").unwrap();
//!
//! match client.read_contact("pp@gmail.com", "firstname,email") {
//!     Ok(contact) => println!("found {}", contact.id),
//!     Err(error) if error.is_not_found() => println!("no such contact"),
//!     Err(error) => println!("HubSpot error: {}", error),
//! }
//! ```

mod api;
mod association;
mod client_error;
mod client;
mod config;
mod contact;
pub mod response;
pub mod transport;

pub use api::HubSpotApi;
pub use association::{
    Association, AssociationId, AssociationInput, AssociationResults, ASSOCIATION_CONTACT_TO_COMPANY,
};
pub use client::Client;
pub use client_error::ClientError;
pub use config::{Config, DEFAULT_API_BASE_URL, DEFAULT_API_VERSION};
pub use contact::{ContactInput, ContactOutput};
pub use response::{AssociationErrorResponse, ErrorResponse};
