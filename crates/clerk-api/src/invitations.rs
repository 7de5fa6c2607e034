//! Organization invitation endpoints.

use serde::Serialize;
use serde_json::{Value, json};

use crate::client::{ClerkClient, path_segment, required, to_body};
use crate::error::ClerkError;
use crate::params::{InvitationStatus, Metadata, Pagination};

/// Body of `POST /organizations/{org_id}/invitations`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvitationCreate {
    pub email_address: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inviter_user_id: Option<String>,
    /// Where the invitee lands after accepting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_metadata: Option<Metadata>,
}

impl InvitationCreate {
    #[must_use]
    pub fn new(email_address: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
            role: role.into(),
            inviter_user_id: None,
            redirect_url: None,
            public_metadata: None,
        }
    }
}

impl ClerkClient {
    /// # Errors
    ///
    /// Returns [`ClerkError::Api`] if the request fails.
    pub async fn list_invitations(
        &self,
        org_id: &str,
        page: Pagination,
        status: Option<InvitationStatus>,
    ) -> Result<Value, ClerkError> {
        let id = path_segment("org_id", org_id)?;
        let params = page.to_query().optional("status", status);
        self.get(&format!("/organizations/{id}/invitations"), Some(&params))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClerkError::Api`] if the request fails.
    pub async fn get_invitation(
        &self,
        org_id: &str,
        invitation_id: &str,
    ) -> Result<Value, ClerkError> {
        let id = path_segment("org_id", org_id)?;
        let invitation = path_segment("invitation_id", invitation_id)?;
        self.get(&format!("/organizations/{id}/invitations/{invitation}"), None)
            .await
    }

    /// Invite an email address; Clerk sends the invitation email.
    ///
    /// # Errors
    ///
    /// Returns [`ClerkError::Validation`] if the email or role is blank.
    pub async fn create_invitation(
        &self,
        org_id: &str,
        create: &InvitationCreate,
    ) -> Result<Value, ClerkError> {
        let id = path_segment("org_id", org_id)?;
        let create = InvitationCreate {
            email_address: required("email_address", &create.email_address)?.to_string(),
            role: required("role", &create.role)?.to_string(),
            ..create.clone()
        };
        let body = to_body(&create)?;
        self.post(&format!("/organizations/{id}/invitations"), Some(&body), None)
            .await
    }

    /// Revoke a pending invitation. The body is only sent when a requesting
    /// user is given.
    ///
    /// # Errors
    ///
    /// Returns [`ClerkError::Api`] if the request fails.
    pub async fn revoke_invitation(
        &self,
        org_id: &str,
        invitation_id: &str,
        requesting_user_id: Option<&str>,
    ) -> Result<Value, ClerkError> {
        let id = path_segment("org_id", org_id)?;
        let invitation = path_segment("invitation_id", invitation_id)?;
        let body = requesting_user_id.map(|user| json!({ "requesting_user_id": user }));
        self.post(
            &format!("/organizations/{id}/invitations/{invitation}/revoke"),
            body.as_ref(),
            None,
        )
        .await
    }
}
