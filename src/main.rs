//! gitbounty - resolve GitHub issue bounties from the command line

mod cli;

use anstream::eprintln;
use clap::{Args, Parser, Subcommand};
use cli::context::Overrides;
use cli::style::Stylize;
use cli::{ResolveOptions, init_tracing, run_query, run_resolve};
use gitbounty_oracle::Strategy;
use gitbounty_oracle::auth::redact_tokens;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "gitbounty")]
#[command(version)]
#[command(about = "Resolve GitHub issue bounties to the contributor who fixed them", long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to oracle.toml
    #[arg(long, global = true, env = "GITBOUNTY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// The tracked issue, as positional arguments
#[derive(Args)]
struct IssueArgs {
    /// Repository owner
    owner: String,
    /// Repository name
    repo: String,
    /// Issue number
    issue: String,
}

impl IssueArgs {
    fn into_array(self) -> [String; 3] {
        [self.owner, self.repo, self.issue]
    }
}

#[derive(Args)]
struct OverrideArgs {
    /// Resolution strategy (merged-pr or issue-state)
    #[arg(long)]
    strategy: Option<Strategy>,

    /// GitHub API base URL
    #[arg(long, env = "GITBOUNTY_API_BASE")]
    api_base: Option<String>,
}

impl From<OverrideArgs> for Overrides {
    fn from(args: OverrideArgs) -> Self {
        Self {
            strategy: args.strategy,
            api_base: args.api_base,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve an issue and print the payload (login or not_found)
    Resolve {
        #[command(flatten)]
        issue: IssueArgs,

        #[command(flatten)]
        overrides: OverrideArgs,

        /// JSON secret bundle (defaults to $GITBOUNTY_SECRETS)
        #[arg(long)]
        secrets: Option<PathBuf>,

        /// Serve GitHub responses from a recorded fixture file
        #[arg(long)]
        replay: Option<PathBuf>,

        /// Print the payload as 0x-prefixed hex
        #[arg(long)]
        hex: bool,

        /// Describe each resolution stage on stderr
        #[arg(long)]
        explain: bool,
    },

    /// Print the first GitHub URL a resolution would request
    Query {
        #[command(flatten)]
        issue: IssueArgs,

        #[command(flatten)]
        overrides: OverrideArgs,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Resolve {
            issue,
            overrides,
            secrets,
            replay,
            hex,
            explain,
        } => {
            let options = ResolveOptions {
                config: cli.config,
                secrets,
                overrides: overrides.into(),
                replay,
                hex,
                explain,
            };
            run_resolve(issue.into_array(), options).await
        }
        Commands::Query { issue, overrides } => {
            run_query(cli.config.as_deref(), &overrides.into(), issue.into_array())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".error(), redact_tokens(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}
