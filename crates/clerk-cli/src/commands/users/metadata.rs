use clerk_api::ClerkClient;
use clerk_api::updates::UserMetadataUpdateBuilder;
use serde_json::Value;

use crate::commands::shared::parse::parse_optional_object;

pub struct Params<'a> {
    pub user_id: &'a str,
    pub public: Option<&'a str>,
    pub private: Option<&'a str>,
    pub unsafe_: Option<&'a str>,
}

pub async fn run(params: &Params<'_>, client: &ClerkClient) -> anyhow::Result<Value> {
    let mut builder = UserMetadataUpdateBuilder::new();
    if let Some(public) = parse_optional_object(params.public, "public")? {
        builder = builder.public_metadata(public);
    }
    if let Some(private) = parse_optional_object(params.private, "private")? {
        builder = builder.private_metadata(private);
    }
    if let Some(unsafe_metadata) = parse_optional_object(params.unsafe_, "unsafe")? {
        builder = builder.unsafe_metadata(unsafe_metadata);
    }

    Ok(client
        .update_user_metadata(params.user_id, &builder.build())
        .await?)
}
