use anyhow::Result;
use clap::Parser;
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use svgraster::generate::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    TermLogger::init(
        cli.log_level,
        Default::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    generate::cli(cli)
}
