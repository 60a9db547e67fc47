use clap::Parser;
use tracing::debug;

use folio_repl::{logging, Args, ReplConfig};

fn main() {
    let args = Args::parse();
    logging::init(args.log_level);
    debug!("Parsed CLI arguments: {args:?}");

    let config = ReplConfig::from(args);

    if let Err(e) = folio_repl::run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
