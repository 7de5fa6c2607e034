pub mod global;
pub mod invitations;
pub mod organizations;
pub mod users;

pub use global::{GlobalArgs, GlobalFlags, OutputFormat, PageArgs};
pub use invitations::{InvitationCommands, InvitationsCli};
pub use organizations::{OrgCommands, OrgsCli};
pub use users::{UserCommands, UsersCli};
