//! Query command - show the request a resolution would start with

use crate::cli::context::{Overrides, resolve_config};
use anstream::println;
use gitbounty_oracle::error::Result;
use gitbounty_oracle::resolver::query::{issue_url, search_url};
use gitbounty_oracle::{ResolutionRequest, Strategy};
use std::path::Path;

/// Print the first URL the configured strategy would fetch
pub fn run_query(
    config_path: Option<&Path>,
    overrides: &Overrides,
    args: [String; 3],
) -> Result<()> {
    let config = resolve_config(config_path, overrides)?;
    let request = ResolutionRequest::from_args(&args[..])?;

    let url = match config.strategy {
        Strategy::MergedPr => search_url(&config.api_base, &request),
        Strategy::IssueState => issue_url(&config.api_base, &request),
    };
    println!("{url}");
    Ok(())
}
