//! delay-wav - create a delayed copy of a WAV file

use std::process::ExitCode;

use clap::Parser;

use wavdelay::cli::{self, DelayArgs};
use wavdelay::{Result, ToolConfig};

fn main() -> ExitCode {
    let args = DelayArgs::parse();
    cli::init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cli::report_error("delay-wav", &err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(args: DelayArgs) -> Result<()> {
    let config = ToolConfig::load_or_default(args.config.as_deref())?;
    let options = args.into_options(&config);
    cli::delay_wav(&options)?;
    Ok(())
}
