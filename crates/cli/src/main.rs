use std::io::{stdin, stdout};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, warn};
use termlib_core::config;
use termlib_core::emitter::Emitter;
use termlib_core::error::Result;

use termlib_cli::cli_args::Args;
use termlib_cli::dispatcher::Dispatcher;

fn execute() -> Result<()> {
    let args = Args::parse();
    if !args.ignored.is_empty() {
        warn!("Ignoring command-line arguments: {:?}", args.ignored);
    }

    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{}`", config_path);
    let config = config::load_config(&config_path)?;

    let emitter = Emitter::with_char_offset(stdout(), config.char_offset);
    let mut dispatcher = Dispatcher::new(stdin().lock(), emitter);

    dispatcher.run()
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
