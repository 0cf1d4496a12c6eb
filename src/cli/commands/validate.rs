//! Validate configuration command.

use anyhow::Result;
use desk_config::load_config;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Default owner: {}", config.desk.default_owner);
            match &config.desk.state_file {
                Some(path) => println!("State file: {}", path.display()),
                None => println!("State file: (in-memory only)"),
            }
            if let Some(csv) = &config.desk.instruments_csv {
                println!("Instruments CSV: {}", csv.display());
            }
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
