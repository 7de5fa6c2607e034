use clerk_api::ClerkClient;
use clerk_api::updates::UserUpdateBuilder;
use serde_json::Value;

pub struct Params<'a> {
    pub user_id: &'a str,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub username: Option<&'a str>,
    pub profile_image_url: Option<&'a str>,
    pub primary_email_address_id: Option<&'a str>,
    pub primary_phone_number_id: Option<&'a str>,
}

pub async fn run(params: &Params<'_>, client: &ClerkClient) -> anyhow::Result<Value> {
    let mut builder = UserUpdateBuilder::new();
    if let Some(first_name) = params.first_name {
        builder = builder.first_name(nullable(first_name));
    }
    if let Some(last_name) = params.last_name {
        builder = builder.last_name(nullable(last_name));
    }
    if let Some(username) = params.username {
        builder = builder.username(nullable(username));
    }
    if let Some(url) = params.profile_image_url {
        builder = builder.profile_image_url(url);
    }
    if let Some(id) = params.primary_email_address_id {
        builder = builder.primary_email_address_id(id);
    }
    if let Some(id) = params.primary_phone_number_id {
        builder = builder.primary_phone_number_id(id);
    }

    Ok(client.update_user(params.user_id, &builder.build()).await?)
}

/// Blank clears the field.
fn nullable(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
}
