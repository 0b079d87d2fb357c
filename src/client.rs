use crate::association::{AssociationInput, AssociationResults};
use crate::client_error::ClientError;
use crate::config::Config;
use crate::contact::{ContactInput, ContactOutput};
use crate::response::{AssociationErrorResponse, ErrorResponse};
use crate::transport::{default_sender, HttpRequest, HttpResponse, HttpSender, Method};
use log::{debug, error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Category given to a missing contact when HubSpot sends no error body with the 404.
const NOT_FOUND_CATEGORY: &str = "OBJECT_NOT_FOUND";

pub struct Client {
    config: Config,
    sender: Box<dyn HttpSender>,
}

impl Client {
    /// Create a new client with the default URL, API version and timeouts.
    pub fn new(api_key: &str) -> Result<Client, ClientError> {
        Client::with_config(Config::new(api_key))
    }

    /// Create a new client that talks to HubSpot over the default pooled HTTP client.
    pub fn with_config(config: Config) -> Result<Client, ClientError> {
        config.validate()?;
        let sender = default_sender(&config)?;

        Ok(Client {
            config,
            sender: Box::new(sender),
        })
    }

    /// Create a new client that sends every request through `sender`.
    pub fn with_sender<S: HttpSender + 'static>(config: Config, sender: S) -> Result<Client, ClientError> {
        config.validate()?;

        Ok(Client {
            config,
            sender: Box::new(sender),
        })
    }
}

impl Client {
    /// Get the API base URL.
    pub fn api_base_url(&self) -> &str {
        &self.config.api_base_url
    }

    /// Get the API version.
    pub fn api_version(&self) -> &str {
        &self.config.api_version
    }

    /// Get the timeout for API requests, in seconds.
    pub fn timeout(&self) -> u64 {
        self.config.timeout
    }

    /// Get the timeout for establishing a connection, in seconds.
    pub fn connect_timeout(&self) -> u64 {
        self.config.connect_timeout
    }

    /// Get an abbreviated version of the API key, safe to print.
    pub fn abbreviated_api_key(&self) -> String {
        let chars = self.config.api_key.chars().collect::<Vec<_>>();

        if chars.len() <= 8 {
            return String::from("****");
        }

        let prefix = chars[..4].iter().collect::<String>();
        let suffix = chars[chars.len() - 4..].iter().collect::<String>();

        format!("{}..{}", prefix, suffix)
    }
}

impl Client {
    /// Build the URL for the batch association endpoint. Both object types are trimmed and must
    /// not be blank.
    pub fn build_association_url(&self, from_object: &str, to_object: &str) -> Result<String, ClientError> {
        let from_object = from_object.trim();
        let to_object = to_object.trim();

        if from_object.is_empty() || to_object.is_empty() {
            return Err(ClientError::InvalidInput(String::from(
                "from and to object types require a value",
            )));
        }

        self.api_url(&["associations", from_object, to_object, "batch", "create"], &[])
    }

    /// Build a URL under `/crm/{version}/`, with the API key and `params` in the query string.
    /// Each of `segments` becomes one percent-encoded path segment.
    fn api_url(&self, segments: &[&str], params: &[(&str, &str)]) -> Result<String, ClientError> {
        let mut query = vec![("hapikey", self.config.api_key.as_str())];
        query.extend_from_slice(params);

        let mut url = reqwest::Url::parse(&self.config.api_base_url)
            .map_err(|err| ClientError::InvalidInput(format!("invalid API base URL: {}", err)))?;

        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidInput(String::from("API base URL cannot have a path")))?
            .pop_if_empty()
            .push("crm")
            .push(&self.config.api_version)
            .extend(segments);

        url.set_query(Some(&serde_urlencoded::to_string(&query)?));

        Ok(url.to_string())
    }

    /// Send one request and return whatever HubSpot answered.
    fn request(&self, method: Method, url: String, body: Option<Vec<u8>>) -> Result<HttpResponse, ClientError> {
        // the query string carries the API key
        let path = url.split('?').next().unwrap_or_default().to_string();
        debug!("{} {}", method.as_str(), path);

        match self.sender.send(HttpRequest { method, url, body }) {
            Ok(response) => {
                debug!("{} {} returned {}", method.as_str(), path, response.status);
                Ok(response)
            }
            Err(err) => {
                error!("unable to complete {} {}: {}", method.as_str(), path, err);
                Err(err)
            }
        }
    }
}

/// Serialize a request body before anything touches the network.
fn json_body<T: Serialize>(input: &T, name: &str) -> Result<Vec<u8>, ClientError> {
    serde_json::to_vec(input).map_err(|err| {
        error!("could not serialize the provided {} body: {}", name, err);
        ClientError::InvalidInput(format!("invalid {} input", name))
    })
}

/// Parse the body of a successful response.
fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ClientError> {
    serde_json::from_slice(&response.body).map_err(|err| {
        error!("could not decode HubSpot response: {}", err);
        ClientError::Decode(err.to_string())
    })
}

/// Parse an error body, falling back to a synthetic error when it is not JSON HubSpot would send.
fn error_response(response: &HttpResponse) -> ErrorResponse {
    match serde_json::from_slice::<ErrorResponse>(&response.body) {
        Ok(mut error) => {
            error.status_code = response.status;
            error
        }
        Err(err) => ErrorResponse::synthetic(
            response.status,
            "",
            format!("unable to decode error response: {}", err),
        ),
    }
}

fn association_error_response(response: &HttpResponse) -> AssociationErrorResponse {
    let mut error = match serde_json::from_slice::<AssociationErrorResponse>(&response.body) {
        Ok(error) => error,
        Err(err) => {
            return AssociationErrorResponse::synthetic(
                response.status,
                format!("unable to decode error response: {}", err),
            )
        }
    };
    error.status_code = response.status;

    // Auth and validation failures come back as a single top-level error.
    if error.errors.is_empty() {
        let top_level = error_response(response);
        if !top_level.category.is_empty() {
            error.errors.push(top_level);
            error.num_errors = error.errors.len();
        }
    }

    error
}

fn require(value: &str, name: &str) -> Result<(), ClientError> {
    if value.trim().is_empty() {
        return Err(ClientError::InvalidInput(format!("{} requires a value", name)));
    }

    Ok(())
}

impl Client {
    /// Create a new contact. HubSpot answers `201 Created` with the stored record.
    pub fn create_contact(&self, contact: &ContactInput) -> Result<ContactOutput, ClientError> {
        info!("attempting to create HubSpot contact");

        let body = json_body(contact, "contact")?;
        let url = self.api_url(&["objects", "contacts", ""], &[])?;
        let response = self.request(Method::Post, url, Some(body))?;

        if response.status != 201 {
            let error = error_response(&response);
            error!("unable to create HubSpot contact: {}", error);
            return Err(ClientError::Api(error));
        }

        let contact: ContactOutput = decode(&response)?;
        info!("HubSpot contact created successfully. Contact ID: {}", contact.id);

        Ok(contact)
    }

    /// Update the given properties of an existing contact.
    pub fn update_contact(&self, contact_id: &str, contact: &ContactInput) -> Result<ContactOutput, ClientError> {
        info!("attempting to update HubSpot contact {}", contact_id);

        require(contact_id, "contact id")?;
        let body = json_body(contact, "contact")?;
        let url = self.api_url(&["objects", "contacts", contact_id], &[])?;
        let response = self.request(Method::Patch, url, Some(body))?;

        if response.status != 200 {
            let error = error_response(&response);
            error!("unable to update HubSpot contact: {}", error);
            return Err(ClientError::Api(error));
        }

        let contact: ContactOutput = decode(&response)?;
        info!("HubSpot contact updated successfully. Contact ID: {}", contact.id);

        Ok(contact)
    }

    /// Read a contact by email address. `properties` is a comma-separated list of the properties
    /// to return, e.g. `"firstname,email"`.
    pub fn read_contact(&self, email: &str, properties: &str) -> Result<ContactOutput, ClientError> {
        info!("attempting to read HubSpot contact");

        require(email, "email")?;
        let url = self.api_url(
            &["objects", "contacts", email],
            &[("idProperty", "email"), ("properties", properties)],
        )?;
        let response = self.request(Method::Get, url, None)?;

        if response.status == 404 {
            let mut error = error_response(&response);
            if error.category.is_empty() {
                error = ErrorResponse::synthetic(
                    404,
                    NOT_FOUND_CATEGORY,
                    String::from("no contact exists with the given email"),
                );
            }
            info!("HubSpot contact not found");
            return Err(ClientError::NotFound(error));
        }

        if response.status != 200 {
            let error = error_response(&response);
            error!("unable to read HubSpot contact: {}", error);
            return Err(ClientError::Api(error));
        }

        let contact: ContactOutput = decode(&response)?;
        info!("HubSpot contact read successfully. Contact ID: {}", contact.id);

        Ok(contact)
    }

    /// Archive a contact. HubSpot answers `204 No Content`.
    pub fn delete_contact(&self, contact_id: &str) -> Result<(), ClientError> {
        info!("attempting to delete HubSpot contact {}", contact_id);

        require(contact_id, "contact id")?;
        let url = self.api_url(&["objects", "contacts", contact_id], &[])?;
        let response = self.request(Method::Delete, url, None)?;

        if response.status != 204 {
            let error = error_response(&response);
            error!("unable to delete HubSpot contact: {}", error);
            return Err(ClientError::Api(error));
        }

        info!("HubSpot contact deleted successfully. Contact ID: {}", contact_id);

        Ok(())
    }

    /// Relate objects of type `from_object` to objects of type `to_object`, e.g. `"contact"` to
    /// `"company"`.
    pub fn create_association(
        &self,
        association: &AssociationInput,
        from_object: &str,
        to_object: &str,
    ) -> Result<AssociationResults, ClientError> {
        info!("attempting to create HubSpot object association");

        let body = json_body(association, "association")?;
        let url = self.build_association_url(from_object, to_object)?;
        let response = self.request(Method::Post, url, Some(body))?;

        if response.status != 201 {
            let error = association_error_response(&response);
            error!("unable to associate HubSpot objects. Got {} error(s):", error.errors.len());
            for (i, item) in error.errors.iter().enumerate() {
                error!("error {}: {}", i + 1, item.message);
            }
            return Err(ClientError::Association(error));
        }

        let results: AssociationResults = decode(&response)?;
        if let Some(input) = association.inputs.first() {
            info!(
                "HubSpot association created successfully. From ID: {}; To ID: {}",
                input.from.id, input.to.id
            );
        }

        Ok(results)
    }
}
