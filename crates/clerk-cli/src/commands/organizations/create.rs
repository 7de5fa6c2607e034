use clerk_api::{ClerkClient, OrganizationCreate};
use serde_json::Value;

use crate::commands::shared::parse::parse_optional_object;

pub struct Params<'a> {
    pub name: &'a str,
    pub slug: Option<&'a str>,
    pub created_by: Option<&'a str>,
    pub max_members: Option<u32>,
    pub public_metadata: Option<&'a str>,
    pub private_metadata: Option<&'a str>,
}

pub async fn run(params: &Params<'_>, client: &ClerkClient) -> anyhow::Result<Value> {
    let create = OrganizationCreate {
        slug: params.slug.map(String::from),
        created_by: params.created_by.map(String::from),
        max_allowed_memberships: params.max_members,
        public_metadata: parse_optional_object(params.public_metadata, "public-metadata")?,
        private_metadata: parse_optional_object(params.private_metadata, "private-metadata")?,
        ..OrganizationCreate::new(params.name)
    };
    Ok(client.create_organization(&create).await?)
}
