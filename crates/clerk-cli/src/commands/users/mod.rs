mod metadata;
mod update;

use clerk_api::ClerkClient;
use serde_json::Value;

use crate::cli::{GlobalFlags, UserCommands};
use crate::output::output;

/// Handle `clerk-users`.
pub async fn handle(
    action: &UserCommands,
    client: &ClerkClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let value = execute(action, client).await?;
    output(&value, flags.format)
}

/// Run one users subcommand and return the response document.
pub async fn execute(action: &UserCommands, client: &ClerkClient) -> anyhow::Result<Value> {
    let value = match action {
        UserCommands::List { page, query } => {
            client.list_users((*page).into(), query.as_deref()).await?
        }
        UserCommands::Get { user_id } => client.get_user(user_id).await?,
        UserCommands::Count => client.count_users().await?,
        UserCommands::Update {
            user_id,
            first_name,
            last_name,
            username,
            profile_image_url,
            primary_email_address_id,
            primary_phone_number_id,
        } => {
            let params = update::Params {
                user_id,
                first_name: first_name.as_deref(),
                last_name: last_name.as_deref(),
                username: username.as_deref(),
                profile_image_url: profile_image_url.as_deref(),
                primary_email_address_id: primary_email_address_id.as_deref(),
                primary_phone_number_id: primary_phone_number_id.as_deref(),
            };
            update::run(&params, client).await?
        }
        UserCommands::UpdateMetadata {
            user_id,
            public_metadata,
            private_metadata,
            unsafe_metadata,
        } => {
            let params = metadata::Params {
                user_id,
                public: public_metadata.as_deref(),
                private: private_metadata.as_deref(),
                unsafe_: unsafe_metadata.as_deref(),
            };
            metadata::run(&params, client).await?
        }
        UserCommands::Delete { user_id } => client.delete_user(user_id).await?,
    };
    Ok(value)
}
