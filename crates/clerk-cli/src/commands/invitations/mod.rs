use clerk_api::{ClerkClient, InvitationCreate, InvitationStatus};
use serde_json::Value;

use crate::cli::{GlobalFlags, InvitationCommands};
use crate::commands::shared::parse::{parse_enum, parse_optional_object};
use crate::output::output;

/// Handle `clerk-invitations`.
pub async fn handle(
    action: &InvitationCommands,
    client: &ClerkClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let value = execute(action, client).await?;
    output(&value, flags.format)
}

/// Run one invitations subcommand and return the response document.
pub async fn execute(action: &InvitationCommands, client: &ClerkClient) -> anyhow::Result<Value> {
    let value = match action {
        InvitationCommands::List {
            org_id,
            page,
            status,
        } => {
            let status = status
                .as_deref()
                .map(|raw| parse_enum::<InvitationStatus>(raw, "status"))
                .transpose()?;
            client
                .list_invitations(org_id, (*page).into(), status)
                .await?
        }
        InvitationCommands::Get {
            org_id,
            invitation_id,
        } => client.get_invitation(org_id, invitation_id).await?,
        InvitationCommands::Create {
            org_id,
            email,
            role,
            inviter_user_id,
            redirect_url,
            public_metadata,
        } => {
            let create = InvitationCreate {
                inviter_user_id: inviter_user_id.clone(),
                redirect_url: redirect_url.clone(),
                public_metadata: parse_optional_object(
                    public_metadata.as_deref(),
                    "public-metadata",
                )?,
                ..InvitationCreate::new(email.as_str(), role.as_str())
            };
            client.create_invitation(org_id, &create).await?
        }
        InvitationCommands::Revoke {
            org_id,
            invitation_id,
            requesting_user_id,
        } => {
            client
                .revoke_invitation(org_id, invitation_id, requesting_user_id.as_deref())
                .await?
        }
    };
    Ok(value)
}
