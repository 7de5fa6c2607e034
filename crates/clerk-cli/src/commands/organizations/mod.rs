mod create;
mod update;

use clerk_api::ClerkClient;
use serde_json::Value;

use crate::cli::{GlobalFlags, OrgCommands};
use crate::output::output;

/// Handle `clerk-orgs`.
pub async fn handle(
    action: &OrgCommands,
    client: &ClerkClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let value = execute(action, client).await?;
    output(&value, flags.format)
}

/// Run one organizations subcommand and return the response document.
pub async fn execute(action: &OrgCommands, client: &ClerkClient) -> anyhow::Result<Value> {
    let value = match action {
        OrgCommands::List { page, query } => {
            client
                .list_organizations((*page).into(), query.as_deref())
                .await?
        }
        OrgCommands::Get {
            org_id,
            no_members_count,
        } => client.get_organization(org_id, !no_members_count).await?,
        OrgCommands::Create {
            name,
            slug,
            created_by,
            max_members,
            public_metadata,
            private_metadata,
        } => {
            let params = create::Params {
                name,
                slug: slug.as_deref(),
                created_by: created_by.as_deref(),
                max_members: *max_members,
                public_metadata: public_metadata.as_deref(),
                private_metadata: private_metadata.as_deref(),
            };
            create::run(&params, client).await?
        }
        OrgCommands::Update {
            org_id,
            name,
            slug,
            max_members,
            public_metadata,
            private_metadata,
        } => {
            let params = update::Params {
                org_id,
                name: name.as_deref(),
                slug: slug.as_deref(),
                max_members: *max_members,
                public_metadata: public_metadata.as_deref(),
                private_metadata: private_metadata.as_deref(),
            };
            update::run(&params, client).await?
        }
        OrgCommands::Delete { org_id } => client.delete_organization(org_id).await?,
        OrgCommands::ListMembers { org_id, page } => {
            client.list_memberships(org_id, (*page).into()).await?
        }
        OrgCommands::AddMember {
            org_id,
            user_id,
            role,
        } => client.add_member(org_id, user_id, role).await?,
        OrgCommands::UpdateMember {
            org_id,
            user_id,
            role,
        } => client.update_member(org_id, user_id, role).await?,
        OrgCommands::RemoveMember { org_id, user_id } => {
            client.remove_member(org_id, user_id).await?
        }
    };
    Ok(value)
}
