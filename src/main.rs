//! `confcache` - load and validate JSON configuration files

use clap::Parser;

use confcache::cli::args::Cli;
use confcache::cli::commands;
use confcache::error::ExitCode;
use confcache::observability::init_logging;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here, on stdout
            let code = if e.use_stderr() {
                ExitCode::USAGE_ERROR
            } else {
                ExitCode::SUCCESS
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    init_logging(cli.log_format, cli.verbose, cli.quiet, cli.color);

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            tracing::error!(error = %e, "configuration error");
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
