// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP implementation of [`PetsService`].
//!
//! Listings live at `{base_url}/{path}` and details at
//! `{base_url}/{path}/{id}`, where `path` is the pet type's collection name
//! (`dogs`, `smallmammals`, ...). Bodies are camelCase JSON. Listing items
//! carry no type of their own; it is stamped from the request.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use shelter_core::{Pet, PetDetails, PetType};

use crate::config::RemoteConfig;
use crate::error::{Error, Result};
use crate::service::{PetsService, ServiceError, ServiceFuture, ServiceResult};

/// Remote listing entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemotePet {
    id: i64,
    name: String,
    #[serde(default)]
    pic_url: String,
    #[serde(default)]
    sex: String,
    #[serde(default)]
    breed: String,
    #[serde(default)]
    age: String,
    #[serde(default)]
    in_foster_care: bool,
    #[serde(default)]
    adoption_pending: bool,
}

impl RemotePet {
    fn into_pet(self, pet_type: PetType) -> Pet {
        Pet {
            id: self.id,
            pet_type,
            name: self.name,
            pic_url: self.pic_url,
            sex: self.sex,
            breed: self.breed,
            age: self.age,
            in_foster_care: self.in_foster_care,
            adoption_pending: self.adoption_pending,
        }
    }
}

/// Remote details body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemotePetDetails {
    id: i64,
    name: String,
    #[serde(default)]
    pic_urls: Vec<String>,
    video_url: Option<String>,
    #[serde(default)]
    description: String,
    sex: Option<String>,
    breed: Option<String>,
    age: Option<String>,
    size: Option<String>,
    color: Option<String>,
    altered: Option<bool>,
    #[serde(default)]
    declawed: bool,
    #[serde(default)]
    in_foster_care: bool,
    #[serde(default)]
    adoption_pending: bool,
}

impl RemotePetDetails {
    fn into_details(self, pet_type: PetType) -> PetDetails {
        PetDetails {
            id: self.id,
            pet_type,
            name: self.name,
            pic_urls: self.pic_urls,
            video_url: self.video_url.filter(|url| !url.is_empty()),
            description: self.description,
            sex: self.sex,
            breed: self.breed,
            age: self.age,
            size: self.size,
            color: self.color,
            altered: self.altered,
            declawed: self.declawed,
            in_foster_care: self.in_foster_care,
            adoption_pending: self.adoption_pending,
        }
    }
}

/// Pets service backed by the shelter's REST API.
///
/// Holds a reusable `reqwest::Client`; the configured timeout applies to
/// every request.
pub struct HttpPetsService {
    http: reqwest::Client,
    base_url: String,
}

impl HttpPetsService {
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        if let Some(message) = config.validate_url() {
            return Err(Error::Config(message));
        }
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(HttpPetsService {
            http,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn list_url(&self, pet_type: PetType) -> String {
        format!("{}/{}", self.base_url, pet_type.path())
    }

    fn details_url(&self, pet_type: PetType, id: i64) -> String {
        format!("{}/{}/{}", self.base_url, pet_type.path(), id)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ServiceResult<T> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

impl PetsService for HttpPetsService {
    fn pets_list(&self, pet_type: PetType) -> ServiceFuture<'_, Vec<Pet>> {
        Box::pin(async move {
            let url = self.list_url(pet_type);
            let remote: Vec<RemotePet> = self.get_json(&url).await?;
            tracing::debug!(pet_type = %pet_type, count = remote.len(), "fetched pet listing");
            Ok(remote.into_iter().map(|p| p.into_pet(pet_type)).collect())
        })
    }

    fn pet_details(&self, pet_type: PetType, id: i64) -> ServiceFuture<'_, PetDetails> {
        Box::pin(async move {
            let url = self.details_url(pet_type, id);
            let remote: RemotePetDetails = match self.get_json(&url).await {
                Err(ServiceError::Status { status: 404, .. }) => {
                    return Err(ServiceError::NotFound { pet_type, id });
                }
                other => other?,
            };
            Ok(remote.into_details(pet_type))
        })
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
