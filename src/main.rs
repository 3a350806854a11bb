mod config;
mod engine;
mod error;
mod map;
mod tui;

use std::fs::OpenOptions;

use anyhow::Result;

use config::Config;
use engine::game_loop::run;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config);

    log::info!("Starting console-world v{}", env!("CARGO_PKG_VERSION"));

    let result = run(&config);
    if let Err(ref e) = result {
        log::error!("Exited with error: {:#}", e);
    }

    log::info!("Shut down");
    result
}

/// Log to a file; the terminal belongs to the game screen.
fn init_logging(config: &Config) {
    let target = match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&config.log_path)
    {
        Ok(file) => env_logger::Target::Pipe(Box::new(file)),
        Err(e) => {
            eprintln!("Logging disabled, cannot open {}: {e}", config.log_path.display());
            return;
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(target)
        .init();
}
