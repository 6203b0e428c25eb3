use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mohul", bin_name = "mohul", version)]
#[command(about = "Inventory and account manager for a small production shop", long_about = None)]
pub struct Cli {
    /// Directory holding users.txt, inventory.txt and mohul.json
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `--verbose`.
/// Output goes to stderr so it never interleaves with the menus.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
