use clap::{Parser, Subcommand};

use super::{GlobalArgs, PageArgs};

/// Top-level CLI parser for the `clerk-users` binary.
#[derive(Debug, Parser)]
#[command(name = "clerk-users", version, about = "Manage Clerk users")]
pub struct UsersCli {
    #[command(subcommand)]
    pub command: UserCommands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// List users.
    List {
        #[command(flatten)]
        page: PageArgs,
        /// Search query
        #[arg(long)]
        query: Option<String>,
    },
    /// Get a user by ID.
    Get { user_id: String },
    /// Get the total user count.
    Count,
    /// Update a user. An empty value clears a name field.
    Update {
        user_id: String,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        profile_image_url: Option<String>,
        #[arg(long)]
        primary_email_address_id: Option<String>,
        #[arg(long)]
        primary_phone_number_id: Option<String>,
    },
    /// Merge JSON objects into a user's metadata.
    UpdateMetadata {
        user_id: String,
        /// Public metadata JSON
        #[arg(long = "public", value_name = "JSON")]
        public_metadata: Option<String>,
        /// Private metadata JSON
        #[arg(long = "private", value_name = "JSON")]
        private_metadata: Option<String>,
        /// Unsafe metadata JSON
        #[arg(long = "unsafe", value_name = "JSON")]
        unsafe_metadata: Option<String>,
    },
    /// Delete a user.
    Delete { user_id: String },
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{UserCommands, UsersCli};
    use crate::cli::OutputFormat;

    #[test]
    fn clap_command_tree_is_valid() {
        UsersCli::command().debug_assert();
    }

    #[test]
    fn list_defaults_to_first_page_of_ten() {
        let cli = UsersCli::try_parse_from(["clerk-users", "list"]).expect("cli should parse");
        let UserCommands::List { page, query } = cli.command else {
            panic!("expected list");
        };
        assert_eq!(page.limit, 10);
        assert_eq!(page.offset, 0);
        assert!(query.is_none());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = UsersCli::try_parse_from([
            "clerk-users",
            "get",
            "user_1",
            "--format",
            "raw",
            "--secret-key",
            "sk_test_x",
        ])
        .expect("cli should parse");

        assert_eq!(cli.global.format, OutputFormat::Raw);
        assert_eq!(cli.global.secret_key.as_deref(), Some("sk_test_x"));
        assert!(matches!(cli.command, UserCommands::Get { ref user_id } if user_id == "user_1"));
    }

    #[test]
    fn metadata_flags_use_short_bucket_names() {
        let cli = UsersCli::try_parse_from([
            "clerk-users",
            "update-metadata",
            "user_1",
            "--public",
            r#"{"plan":"pro"}"#,
            "--unsafe",
            "{}",
        ])
        .expect("cli should parse");

        let UserCommands::UpdateMetadata {
            public_metadata,
            private_metadata,
            unsafe_metadata,
            ..
        } = cli.command
        else {
            panic!("expected update-metadata");
        };
        assert_eq!(public_metadata.as_deref(), Some(r#"{"plan":"pro"}"#));
        assert!(private_metadata.is_none());
        assert_eq!(unsafe_metadata.as_deref(), Some("{}"));
    }

    #[test]
    fn get_requires_user_id() {
        assert!(UsersCli::try_parse_from(["clerk-users", "get"]).is_err());
    }
}
