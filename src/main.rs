use clap::Parser;
use jobscope::cli::{execute_command, get_log_level, Cli};
use jobscope::error::JobscopeError;
use tracing::{debug, error, trace};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(get_log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2)
        .with_line_number(cli.verbose >= 2)
        .init();

    debug!("jobscope started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = execute_command(cli, &mut out) {
        error!("Fatal error: {:#}", e);
        let exit_code = match e.downcast_ref::<JobscopeError>() {
            Some(err) => {
                eprintln!("Error: {}", err.user_message());
                err.exit_code()
            }
            None => {
                eprintln!("Error: {e:#}");
                1
            }
        };
        std::process::exit(exit_code);
    }
}
