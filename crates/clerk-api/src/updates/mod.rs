//! Partial-update builders.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields are serialized, so the request body carries exactly the fields the
//! caller supplied. Nullable remote fields use `Option<Option<T>>`: the outer
//! `Some` means "supplied", an inner `None` is sent as `null` to clear it.

use serde::Serialize;

pub mod organization;
pub mod user;

pub use organization::{OrganizationUpdate, OrganizationUpdateBuilder};
pub use user::{UserMetadataUpdate, UserMetadataUpdateBuilder, UserUpdate, UserUpdateBuilder};

/// A partial update. Sending one with no supplied field is refused.
pub trait Patch: Serialize {
    /// Reported when no field was supplied.
    const EMPTY_MESSAGE: &'static str;

    /// True when no field was supplied. An empty metadata object still counts.
    fn is_empty(&self) -> bool;
}
