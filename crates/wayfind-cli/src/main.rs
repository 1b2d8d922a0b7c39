use wayfind_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible.
    if let Err(err) = logging::init_logging() {
        eprintln!("wayfind: {:#}", err);
    }

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(err) => {
            eprintln!("wayfind error: starting runtime: {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = cli::block_on_detached(runtime, Cli::run_from_args()) {
        eprintln!("wayfind error: {:#}", err);
        std::process::exit(1);
    }
}
