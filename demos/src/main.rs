use clap::Parser;

use tilepath_demos::cli::{Cli, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();
    print!("{}", run(&cli)?);
    Ok(())
}
