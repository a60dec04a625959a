//! random-wav - create a WAV file of uniform noise

use std::process::ExitCode;

use clap::Parser;

use wavdelay::cli::{self, NoiseArgs};
use wavdelay::{Result, ToolConfig};

fn main() -> ExitCode {
    let args = NoiseArgs::parse();
    cli::init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cli::report_error("random-wav", &err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(args: NoiseArgs) -> Result<()> {
    let config = ToolConfig::load_or_default(args.config.as_deref())?;
    let options = args.into_options(&config);
    cli::random_wav(&options)?;
    Ok(())
}
