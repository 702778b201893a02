use anyhow::Context;
use clap::Parser;
use yamdown_cli::{CliArgs, YamdownCli};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    YamdownCli::init_logging(args.verbose, args.quiet);

    let cli = YamdownCli::from_args(&args).context("failed to load settings")?;
    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    cli.run(args.command, &mut stdin, &mut stdout)?;
    Ok(())
}
