use clap::Parser;
use relocate_cli::{Cli, Config, init_tracing};

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    init_tracing(&config, cli.verbose);
    tracing::debug!("cli: {cli:?}");

    cli.run(&config)
}
