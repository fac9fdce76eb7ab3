//! PokéAPI species adapter.

use url::Url;

use crate::{
    error::adapter::AdapterError,
    model::pokemon::Species,
    util::http::{endpoint, get_json},
};

/// Adapter for the PokéAPI `pokemon` endpoint.
#[derive(Clone)]
pub struct PokeApiService {
    http_client: reqwest::Client,
    base_url: Url,
}

impl PokeApiService {
    pub fn new(http_client: reqwest::Client, base_url: Url) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// Looks up a species by name.
    ///
    /// The name is trimmed and lower-cased before the request, so lookups are
    /// case-insensitive.
    ///
    /// # Arguments
    /// - `name` - Species name as typed by the user
    ///
    /// # Returns
    /// - `Ok(Species)` - Record with name, height and weight
    /// - `Err(AdapterError::InvalidArgument)` - Name is blank
    /// - `Err(AdapterError::NotFound)` - PokéAPI answered 404
    /// - `Err(AdapterError)` - Other transport, remote or decoding failure
    pub async fn fetch_species(&self, name: &str) -> Result<Species, AdapterError> {
        let lookup = name.trim().to_lowercase();
        if lookup.is_empty() {
            return Err(AdapterError::InvalidArgument(
                "species name must not be empty".to_string(),
            ));
        }

        let url = endpoint(&self.base_url, &["pokemon", lookup.as_str()])?;

        match get_json::<Species>(self.http_client.get(url.clone()), &url).await {
            Err(AdapterError::Remote { status: 404, .. }) => {
                Err(AdapterError::NotFound { name: lookup })
            }
            result => result,
        }
    }
}
