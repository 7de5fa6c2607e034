use clap::{Parser, Subcommand};

use super::{GlobalArgs, PageArgs};

/// Top-level CLI parser for the `clerk-orgs` binary.
#[derive(Debug, Parser)]
#[command(name = "clerk-orgs", version, about = "Manage Clerk organizations")]
pub struct OrgsCli {
    #[command(subcommand)]
    pub command: OrgCommands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Clone, Debug, Subcommand)]
pub enum OrgCommands {
    /// List organizations.
    List {
        #[command(flatten)]
        page: PageArgs,
        /// Search query
        #[arg(long)]
        query: Option<String>,
    },
    /// Get an organization by ID.
    Get {
        org_id: String,
        /// Skip the members count
        #[arg(long)]
        no_members_count: bool,
    },
    /// Create an organization.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        slug: Option<String>,
        /// Creator user ID
        #[arg(long)]
        created_by: Option<String>,
        #[arg(long, value_name = "N")]
        max_members: Option<u32>,
        #[arg(long, value_name = "JSON")]
        public_metadata: Option<String>,
        #[arg(long, value_name = "JSON")]
        private_metadata: Option<String>,
    },
    /// Update an organization.
    Update {
        org_id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long, value_name = "N")]
        max_members: Option<u32>,
        #[arg(long, value_name = "JSON")]
        public_metadata: Option<String>,
        #[arg(long, value_name = "JSON")]
        private_metadata: Option<String>,
    },
    /// Delete an organization.
    Delete { org_id: String },
    /// List organization members.
    ListMembers {
        org_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Add a member to an organization.
    AddMember {
        org_id: String,
        #[arg(long)]
        user_id: String,
        /// Role (e.g. org:admin)
        #[arg(long)]
        role: String,
    },
    /// Change a member's role.
    UpdateMember {
        org_id: String,
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        role: String,
    },
    /// Remove a member from an organization.
    RemoveMember {
        org_id: String,
        #[arg(long)]
        user_id: String,
    },
}
