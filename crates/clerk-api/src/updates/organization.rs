//! Organization update builder.

use serde::Serialize;

use super::Patch;
use crate::params::Metadata;

/// Fields accepted by `PATCH /organizations/{org_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrganizationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_allowed_memberships: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_metadata: Option<Metadata>,
}

impl Patch for OrganizationUpdate {
    const EMPTY_MESSAGE: &'static str =
        "At least one of name, slug, max_allowed_memberships, public_metadata, or private_metadata must be provided";

    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.slug.is_none()
            && self.max_allowed_memberships.is_none()
            && self.public_metadata.is_none()
            && self.private_metadata.is_none()
    }
}

#[derive(Default)]
pub struct OrganizationUpdateBuilder(OrganizationUpdate);

impl OrganizationUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.0.slug = Some(slug.into());
        self
    }

    /// `0` means unlimited on Clerk's side.
    #[must_use]
    pub const fn max_allowed_memberships(mut self, max: u32) -> Self {
        self.0.max_allowed_memberships = Some(max);
        self
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
    pub fn build(self) -> OrganizationUpdate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn only_supplied_fields_are_serialized() {
        let update = OrganizationUpdateBuilder::new()
            .slug("acme")
            .max_allowed_memberships(25)
            .build();
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"slug": "acme", "max_allowed_memberships": 25})
        );
    }

    #[test]
    fn default_is_empty() {
        assert!(OrganizationUpdate::default().is_empty());
        assert!(!OrganizationUpdateBuilder::new().name("Acme").build().is_empty());
    }
}
