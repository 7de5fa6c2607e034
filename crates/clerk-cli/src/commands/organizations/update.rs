use clerk_api::ClerkClient;
use clerk_api::updates::OrganizationUpdateBuilder;
use serde_json::Value;

use crate::commands::shared::parse::parse_optional_object;

pub struct Params<'a> {
    pub org_id: &'a str,
    pub name: Option<&'a str>,
    pub slug: Option<&'a str>,
    pub max_members: Option<u32>,
    pub public_metadata: Option<&'a str>,
    pub private_metadata: Option<&'a str>,
}

pub async fn run(params: &Params<'_>, client: &ClerkClient) -> anyhow::Result<Value> {
    let mut builder = OrganizationUpdateBuilder::new();
    if let Some(name) = params.name {
        builder = builder.name(name);
    }
    if let Some(slug) = params.slug {
        builder = builder.slug(slug);
    }
    if let Some(max) = params.max_members {
        builder = builder.max_allowed_memberships(max);
    }
    if let Some(metadata) = parse_optional_object(params.public_metadata, "public-metadata")? {
        builder = builder.public_metadata(metadata);
    }
    if let Some(metadata) = parse_optional_object(params.private_metadata, "private-metadata")? {
        builder = builder.private_metadata(metadata);
    }

    Ok(client
        .update_organization(params.org_id, &builder.build())
        .await?)
}
