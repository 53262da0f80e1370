//! Config commands

use crate::config;
use crate::output::OutputFormat;
use crate::ConfigCommands;
use signup_form::FormConfig;

pub fn handle(
    action: ConfigCommands,
    profile: Option<&str>,
    current: &FormConfig,
    format: OutputFormat,
) -> Result<(), String> {
    match action {
        ConfigCommands::Init => {
            let path = config::save(&FormConfig::default(), profile)?;
            println!("Configuration initialized at {}", path.display());
        }
        ConfigCommands::Show => match format {
            OutputFormat::Table => {
                let text = toml::to_string_pretty(current).map_err(|e| e.to_string())?;
                print!("{}", text);
            }
            other => other.print(current),
        },
    }
    Ok(())
}
