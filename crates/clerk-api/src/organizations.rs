//! Organizations and memberships endpoints.

use serde::Serialize;
use serde_json::{Value, json};

use crate::client::{ClerkClient, patch_body, path_segment, required, to_body};
use crate::error::ClerkError;
use crate::params::{Metadata, Pagination};
use crate::query::Query;
use crate::updates::OrganizationUpdate;

/// Body of `POST /organizations`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// User that becomes the organization's first admin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_allowed_memberships: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_metadata: Option<Metadata>,
}

impl OrganizationCreate {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: None,
            created_by: None,
            max_allowed_memberships: None,
            public_metadata: None,
            private_metadata: None,
        }
    }
}

impl ClerkClient {
    /// # Errors
    ///
    /// Returns [`ClerkError::Api`] if the request fails.
    pub async fn list_organizations(
        &self,
        page: Pagination,
        query: Option<&str>,
    ) -> Result<Value, ClerkError> {
        let params = page
            .to_query()
            .optional("query", query.filter(|q| !q.is_empty()));
        self.get("/organizations", Some(&params)).await
    }

    /// Fetch one organization by id or slug.
    ///
    /// # Errors
    ///
    /// Returns [`ClerkError::Api`] if the request fails.
    pub async fn get_organization(
        &self,
        org_id: &str,
        include_members_count: bool,
    ) -> Result<Value, ClerkError> {
        let id = path_segment("org_id", org_id)?;
        let params = Query::new().optional("include_members_count", include_members_count.then_some(true));
        self.get(&format!("/organizations/{id}"), Some(&params))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClerkError::Validation`] if `name` is blank.
    pub async fn create_organization(
        &self,
        create: &OrganizationCreate,
    ) -> Result<Value, ClerkError> {
        let create = OrganizationCreate {
            name: required("name", &create.name)?.to_string(),
            ..create.clone()
        };
        let body = to_body(&create)?;
        self.post("/organizations", Some(&body), None).await
    }

    /// # Errors
    ///
    /// Returns [`ClerkError::Validation`] if `update` has no fields.
    pub async fn update_organization(
        &self,
        org_id: &str,
        update: &OrganizationUpdate,
    ) -> Result<Value, ClerkError> {
        let id = path_segment("org_id", org_id)?;
        let body = patch_body(update)?;
        self.patch(&format!("/organizations/{id}"), Some(&body))
            .await
    }

    /// Permanently delete an organization with its memberships and invitations.
    ///
    /// # Errors
    ///
    /// Returns [`ClerkError::Api`] if the request fails.
    pub async fn delete_organization(&self, org_id: &str) -> Result<Value, ClerkError> {
        let id = path_segment("org_id", org_id)?;
        tracing::info!(org_id = %id, "deleting organization");
        self.delete(&format!("/organizations/{id}")).await
    }

    /// # Errors
    ///
    /// Returns [`ClerkError::Api`] if the request fails.
    pub async fn list_memberships(
        &self,
        org_id: &str,
        page: Pagination,
    ) -> Result<Value, ClerkError> {
        let id = path_segment("org_id", org_id)?;
        self.get(
            &format!("/organizations/{id}/memberships"),
            Some(&page.to_query()),
        )
        .await
    }

    /// Add `user_id` to the organization with `role` (e.g. `org:admin`).
    ///
    /// # Errors
    ///
    /// Returns [`ClerkError::Validation`] if any argument is blank.
    pub async fn add_member(
        &self,
        org_id: &str,
        user_id: &str,
        role: &str,
    ) -> Result<Value, ClerkError> {
        let id = path_segment("org_id", org_id)?;
        let user_id = required("user_id", user_id)?;
        let role = required("role", role)?;
        let body = json!({ "user_id": user_id, "role": role });
        self.post(&format!("/organizations/{id}/memberships"), Some(&body), None)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClerkError::Validation`] if any argument is blank.
    pub async fn update_member(
        &self,
        org_id: &str,
        user_id: &str,
        role: &str,
    ) -> Result<Value, ClerkError> {
        let id = path_segment("org_id", org_id)?;
        let user = path_segment("user_id", user_id)?;
        let role = required("role", role)?;
        let body = json!({ "role": role });
        self.patch(
            &format!("/organizations/{id}/memberships/{user}"),
            Some(&body),
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`ClerkError::Api`] if the request fails.
    pub async fn remove_member(&self, org_id: &str, user_id: &str) -> Result<Value, ClerkError> {
        let id = path_segment("org_id", org_id)?;
        let user = path_segment("user_id", user_id)?;
        self.delete(&format!("/organizations/{id}/memberships/{user}"))
            .await
    }
}
