//! Resolve command - run the oracle and emit the payload

use crate::cli::context::{Overrides, build_oracle, resolve_config};
use crate::cli::style::{Stylize, arrow, check, cross};
use anstream::eprintln;
use gitbounty_oracle::auth::Secrets;
use gitbounty_oracle::encode;
use gitbounty_oracle::error::Result;
use std::io::Write;
use std::path::PathBuf;

/// Options for the resolve command
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Config file path
    pub config: Option<PathBuf>,
    /// Secret bundle file; falls back to the environment
    pub secrets: Option<PathBuf>,
    /// Config overrides
    pub overrides: Overrides,
    /// Serve responses from a fixture file instead of GitHub
    pub replay: Option<PathBuf>,
    /// Print the payload as 0x-prefixed hex
    pub hex: bool,
    /// Describe each resolution stage on stderr
    pub explain: bool,
}

/// Run the resolve command
pub async fn run_resolve(args: [String; 3], options: ResolveOptions) -> Result<()> {
    let config = resolve_config(options.config.as_deref(), &options.overrides)?;
    let secrets = match &options.secrets {
        Some(path) => Secrets::from_file(path)?,
        None => Secrets::from_env()?,
    };
    let oracle = build_oracle(config, options.replay.as_deref())?;

    let resolution = oracle.run(&args[..], &secrets).await?;

    if options.explain {
        eprintln!(
            "{} {}",
            "Resolving".emphasis(),
            format!("{}/{}#{} ({})", args[0], args[1], args[2], oracle.config().strategy).muted()
        );
        for line in &resolution.trace {
            eprintln!("  {} {line}", arrow());
        }
        let mark = if resolution.result.winner().is_some() {
            check()
        } else {
            cross()
        };
        eprintln!("{mark} {}", resolution.result);
    }

    let payload = encode(&resolution.result);
    let mut stdout = std::io::stdout().lock();
    if options.hex {
        writeln!(stdout, "{}", payload.to_hex())?;
    } else {
        stdout.write_all(payload.as_bytes())?;
    }
    stdout.flush()?;

    Ok(())
}
