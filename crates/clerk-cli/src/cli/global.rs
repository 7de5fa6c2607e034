use clap::{Args, ValueEnum};
use clerk_api::Pagination;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Raw,
}

/// Flags accepted by every binary, before or after the subcommand.
#[derive(Clone, Debug, Args)]
pub struct GlobalArgs {
    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Clerk secret key (overrides CLERK_SECRET_KEY)
    #[arg(long, global = true, value_name = "KEY")]
    pub secret_key: Option<String>,

    /// Quiet mode (errors only in the log)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            secret_key: self.secret_key.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub secret_key: Option<String>,
    pub quiet: bool,
    pub verbose: bool,
}

/// `--limit` / `--offset` pair for list subcommands.
#[derive(Clone, Copy, Debug, Args)]
pub struct PageArgs {
    /// Max results to return
    #[arg(long, default_value_t = Pagination::DEFAULT_LIMIT)]
    pub limit: u32,

    /// Results to skip
    #[arg(long, default_value_t = 0)]
    pub offset: u32,
}

impl From<PageArgs> for Pagination {
    fn from(page: PageArgs) -> Self {
        Self::new(page.limit, page.offset)
    }
}
