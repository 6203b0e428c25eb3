use super::prompt::Console;
use super::render;
use super::session::Session;
use super::setup::{init_logging, Cli};
use clap::Parser;
use mohul::api::MohulApi;
use mohul::config::MohulConfig;
use mohul::error::Result;
use mohul::store::fs::FileStore;
use std::io;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = MohulConfig::load(&cli.data_dir)?;
    let store = FileStore::with_config(cli.data_dir.clone(), &config);
    debug!(
        users = %store.users_path().display(),
        inventory = %store.inventory_path().display(),
        "using data files"
    );

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    render::render_banner(console.out())?;

    let (api, loaded) = MohulApi::open(store, &config)?;
    render::render_messages(console.out(), &loaded.messages)?;

    Session::new(api, console).run()
}
