mod aggregate;
mod config;
mod models;
mod report;
mod run;
mod store;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let (config, args) = config::Config::from_args(args)?;
    log::debug!("Using data file {}", config.data_path.display());
    let store = store::RecordStore::new(&config.data_path);

    match args.len() {
        1 => run::as_menu(&store, &config),
        2.. => run::as_cli(&args, &store, &config),
        _ => {
            eprintln!("Usage: remittui [--data <file.json>] [command]");
            Ok(())
        }
    }
}
