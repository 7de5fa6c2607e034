pub mod invitations;
pub mod organizations;
pub mod shared;
pub mod users;
