//! Users endpoints.

use serde_json::Value;

use crate::client::{ClerkClient, patch_body, path_segment};
use crate::error::ClerkError;
use crate::params::Pagination;
use crate::updates::{UserMetadataUpdate, UserUpdate};

impl ClerkClient {
    /// List users, optionally filtered by a search over email, name and username.
    ///
    /// # Errors
    ///
    /// Returns [`ClerkError::Api`] if the request fails.
    pub async fn list_users(
        &self,
        page: Pagination,
        query: Option<&str>,
    ) -> Result<Value, ClerkError> {
        let params = page
            .to_query()
            .optional("query", query.filter(|q| !q.is_empty()));
        self.get("/users", Some(&params)).await
    }

    /// # Errors
    ///
    /// Returns [`ClerkError::Validation`] for a blank id, [`ClerkError::Api`]
    /// if the request fails.
    pub async fn get_user(&self, user_id: &str) -> Result<Value, ClerkError> {
        let id = path_segment("user_id", user_id)?;
        self.get(&format!("/users/{id}"), None).await
    }

    /// Total number of users, as `{"object": "total_count", "total_count": N}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClerkError::Api`] if the request fails.
    pub async fn count_users(&self) -> Result<Value, ClerkError> {
        self.get("/users/count", None).await
    }

    /// Update profile fields. Only supplied fields are sent.
    ///
    /// # Errors
    ///
    /// Returns [`ClerkError::Validation`] if `update` has no fields, without
    /// sending anything.
    pub async fn update_user(
        &self,
        user_id: &str,
        update: &UserUpdate,
    ) -> Result<Value, ClerkError> {
        let id = path_segment("user_id", user_id)?;
        let body = patch_body(update)?;
        self.patch(&format!("/users/{id}"), Some(&body)).await
    }

    /// Merge into the public, private and unsafe metadata buckets.
    ///
    /// # Errors
    ///
    /// Returns [`ClerkError::Validation`] if no bucket was supplied.
    pub async fn update_user_metadata(
        &self,
        user_id: &str,
        update: &UserMetadataUpdate,
    ) -> Result<Value, ClerkError> {
        let id = path_segment("user_id", user_id)?;
        let body = patch_body(update)?;
        self.patch(&format!("/users/{id}/metadata"), Some(&body))
            .await
    }

    /// Permanently delete a user.
    ///
    /// # Errors
    ///
    /// Returns [`ClerkError::Api`] if the request fails.
    pub async fn delete_user(&self, user_id: &str) -> Result<Value, ClerkError> {
        let id = path_segment("user_id", user_id)?;
        tracing::info!(user_id = %id, "deleting user");
        self.delete(&format!("/users/{id}")).await
    }
}
