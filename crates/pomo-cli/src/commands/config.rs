//! The `config` command: inspect the effective settings.

use std::error::Error;

use clap::Subcommand;

use crate::config::Settings;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective settings
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the settings file path
    Path,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn Error>> {
    match action {
        ConfigAction::Show { json } => {
            let settings = Settings::load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&settings)?);
            } else {
                println!("work:        {} min", settings.work);
                println!("short break: {} min", settings.short_break);
                println!("long break:  {} min", settings.long_break);
            }
        }
        ConfigAction::Path => match Settings::path() {
            Some(path) => println!("{}", path.display()),
            None => println!("no config directory on this platform"),
        },
    }
    Ok(())
}
