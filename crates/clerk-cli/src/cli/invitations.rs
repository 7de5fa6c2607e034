use clap::{Parser, Subcommand};

use super::{GlobalArgs, PageArgs};

/// Top-level CLI parser for the `clerk-invitations` binary.
#[derive(Debug, Parser)]
#[command(
    name = "clerk-invitations",
    version,
    about = "Manage Clerk organization invitations"
)]
pub struct InvitationsCli {
    #[command(subcommand)]
    pub command: InvitationCommands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Clone, Debug, Subcommand)]
pub enum InvitationCommands {
    /// List an organization's invitations.
    List {
        org_id: String,
        #[command(flatten)]
        page: PageArgs,
        /// Filter by status: pending, accepted, revoked
        #[arg(long)]
        status: Option<String>,
    },
    /// Get an invitation.
    Get {
        org_id: String,
        #[arg(long)]
        invitation_id: String,
    },
    /// Invite an email address to an organization.
    Create {
        org_id: String,
        #[arg(long)]
        email: String,
        /// Role (e.g. org:member)
        #[arg(long)]
        role: String,
        #[arg(long)]
        inviter_user_id: Option<String>,
        /// Where the invitee lands after accepting
        #[arg(long)]
        redirect_url: Option<String>,
        #[arg(long, value_name = "JSON")]
        public_metadata: Option<String>,
    },
    /// Revoke a pending invitation.
    Revoke {
        org_id: String,
        #[arg(long)]
        invitation_id: String,
        #[arg(long)]
        requesting_user_id: Option<String>,
    },
}
