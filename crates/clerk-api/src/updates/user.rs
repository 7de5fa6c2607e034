//! User update builders.

use serde::Serialize;

use super::Patch;
use crate::params::Metadata;

/// Profile fields accepted by `PATCH /users/{user_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_email_address_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_phone_number_id: Option<String>,
}

impl Patch for UserUpdate {
    const EMPTY_MESSAGE: &'static str =
        "At least one of first_name, last_name, username, profile_image_url, primary_email_address_id, or primary_phone_number_id must be provided";

    fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.username.is_none()
            && self.profile_image_url.is_none()
            && self.primary_email_address_id.is_none()
            && self.primary_phone_number_id.is_none()
    }
}

#[derive(Default)]
pub struct UserUpdateBuilder(UserUpdate);

impl UserUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn first_name(mut self, first_name: Option<String>) -> Self {
        self.0.first_name = Some(first_name);
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: Option<String>) -> Self {
        self.0.last_name = Some(last_name);
        self
    }

    #[must_use]
    pub fn username(mut self, username: Option<String>) -> Self {
        self.0.username = Some(username);
        self
    }

    #[must_use]
    pub fn profile_image_url(mut self, url: impl Into<String>) -> Self {
        self.0.profile_image_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn primary_email_address_id(mut self, id: impl Into<String>) -> Self {
        self.0.primary_email_address_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn primary_phone_number_id(mut self, id: impl Into<String>) -> Self {
        self.0.primary_phone_number_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn build(self) -> UserUpdate {
        self.0
    }
}

/// Metadata buckets accepted by `PATCH /users/{user_id}/metadata`.
///
/// Clerk deep-merges each bucket into the stored value; a key set to `null`
/// inside a bucket removes that key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserMetadataUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsafe_metadata: Option<Metadata>,
}

impl Patch for UserMetadataUpdate {
    const EMPTY_MESSAGE: &'static str =
        "At least one of public_metadata, private_metadata, or unsafe_metadata must be provided";

    fn is_empty(&self) -> bool {
        self.public_metadata.is_none()
            && self.private_metadata.is_none()
            && self.unsafe_metadata.is_none()
    }
}

#[derive(Default)]
pub struct UserMetadataUpdateBuilder(UserMetadataUpdate);

impl UserMetadataUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn public_metadata(mut self, metadata: Metadata) -> Self {
        self.0.public_metadata = Some(metadata);
        self
    }

    #[must_use]
    pub fn private_metadata(mut self, metadata: Metadata) -> Self {
        self.0.private_metadata = Some(metadata);
        self
    }

    #[must_use]
    pub fn unsafe_metadata(mut self, metadata: Metadata) -> Self {
        self.0.unsafe_metadata = Some(metadata);
        self
    }

    #[must_use]
    pub fn build(self) -> UserMetadataUpdate {
        self.0
    }
}
