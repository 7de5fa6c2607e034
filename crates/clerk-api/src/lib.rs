//! # clerk-api
//!
//! Client for the Clerk Backend API.
//!
//! One request helper ([`ClerkClient::request`]) builds the URL, adds the
//! bearer token, serializes the body and maps non-2xx responses to
//! [`ClerkError::Api`]. Resource operations are thin wrappers over it:
//! - users (`/users`)
//! - organizations and memberships (`/organizations`)
//! - organization invitations (`/organizations/{id}/invitations`)
//!
//! Every operation returns the response document as an opaque
//! `serde_json::Value`.

pub mod invitations;
pub mod organizations;
pub mod params;
pub mod query;
pub mod updates;
pub mod users;

mod client;
mod error;
mod http;

pub use client::ClerkClient;
pub use error::ClerkError;
pub use invitations::InvitationCreate;
pub use organizations::OrganizationCreate;
pub use params::{InvitationStatus, Metadata, Pagination};
pub use query::Query;
pub use reqwest::Method;
