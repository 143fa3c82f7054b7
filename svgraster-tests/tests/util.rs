use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use svgraster::generate;

/// The repository root, a.k.a. the parent of "[...]/svgraster-tests".
///
/// Tests run concurrently within one process, so paths are resolved against
/// this instead of changing the working directory.
pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("No parent directory")
        .to_path_buf()
}

/// Runs the generator in-process as if invoked from the command line.
pub fn run(args: &str) -> Result<()> {
    generate::cli(generate::Cli::parse_from(args.split_whitespace()))
}
