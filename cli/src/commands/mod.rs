pub mod export;
pub mod inspect;

use std::path::Path;

use anyhow::{Context, Result};
use openmander_weights::{CountPolicy, GwtOptions, GwtReader};

use crate::cli::{Cli, CountPolicyArg};

/// Reader options from `--config`, with `--count-policy` applied on top.
pub(crate) fn load_options(cli: &Cli) -> Result<GwtOptions> {
    let mut options = match &cli.config {
        Some(path) => GwtOptions::from_json_file(path)
            .with_context(|| format!("Failed to load reader options from {}", path.display()))?,
        None => GwtOptions::default(),
    };

    if let Some(policy) = cli.count_policy {
        options.count_policy = match policy {
            CountPolicyArg::Ignore => CountPolicy::Ignore,
            CountPolicyArg::Warn => CountPolicy::Warn,
            CountPolicyArg::Strict => CountPolicy::Strict,
        };
    }
    Ok(options)
}

/// Open `path` for reading with the CLI's options.
pub(crate) fn open_reader(cli: &Cli, path: &Path) -> Result<GwtReader> {
    let options = load_options(cli)?;
    GwtReader::open_with(path, "r", options)
        .with_context(|| format!("Failed to open GWT file: {}", path.display()))
}
