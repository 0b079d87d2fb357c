use crate::association::{AssociationInput, AssociationResults};
use crate::client::Client;
use crate::client_error::ClientError;
use crate::contact::{ContactInput, ContactOutput};

/// Every operation the client offers. Code that depends on this trait instead of `Client` can
/// be tested with a fake.
pub trait HubSpotApi {
    fn create_association(
        &self,
        association: &AssociationInput,
        from_object: &str,
        to_object: &str,
    ) -> Result<AssociationResults, ClientError>;

    fn create_contact(&self, contact: &ContactInput) -> Result<ContactOutput, ClientError>;

    fn update_contact(&self, contact_id: &str, contact: &ContactInput) -> Result<ContactOutput, ClientError>;

    fn read_contact(&self, email: &str, properties: &str) -> Result<ContactOutput, ClientError>;

    fn delete_contact(&self, contact_id: &str) -> Result<(), ClientError>;
}

impl HubSpotApi for Client {
    fn create_association(
        &self,
        association: &AssociationInput,
        from_object: &str,
        to_object: &str,
    ) -> Result<AssociationResults, ClientError> {
        Client::create_association(self, association, from_object, to_object)
    }

    fn create_contact(&self, contact: &ContactInput) -> Result<ContactOutput, ClientError> {
        Client::create_contact(self, contact)
    }

    fn update_contact(&self, contact_id: &str, contact: &ContactInput) -> Result<ContactOutput, ClientError> {
        Client::update_contact(self, contact_id, contact)
    }

    fn read_contact(&self, email: &str, properties: &str) -> Result<ContactOutput, ClientError> {
        Client::read_contact(self, email, properties)
    }

    fn delete_contact(&self, contact_id: &str) -> Result<(), ClientError> {
        Client::delete_contact(self, contact_id)
    }
}
