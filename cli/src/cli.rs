use std::path::PathBuf;

/// Spatial weights CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "gwt", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reader options as JSON, e.g. {"count_policy": "strict"}
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// How to treat a header count that disagrees with the file (overrides --config)
    #[arg(long, global = true, value_enum)]
    pub count_policy: Option<CountPolicyArg>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Summarize a GWT file
    Inspect(InspectArgs),

    /// Convert a GWT file to JSON {weights, neighbors, ids}
    Export(ExportArgs),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum CountPolicyArg { Ignore, Warn, Strict }

#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    /// Input GWT file
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Input GWT file
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output JSON file, defaults to stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
