//! CLI Configuration

use signup_form::FormConfig;
use std::fs;
use std::path::PathBuf;

/// Load the form configuration for a profile, defaults when no file exists
pub fn load(profile: Option<&str>) -> Result<FormConfig, String> {
    let path = config_path(profile)?;
    if path.exists() {
        FormConfig::load(&path).map_err(|e| format!("{}: {}", path.display(), e))
    } else {
        Ok(FormConfig::default())
    }
}

/// Write a configuration file, returning where it went
pub fn save(config: &FormConfig, profile: Option<&str>) -> Result<PathBuf, String> {
    let path = config_path(profile)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }
    let content = toml::to_string_pretty(config).map_err(|e| e.to_string())?;
    fs::write(&path, content).map_err(|e| e.to_string())?;
    Ok(path)
}

fn config_path(profile: Option<&str>) -> Result<PathBuf, String> {
    let home = dirs::home_dir().ok_or("Cannot find home directory")?;
    let filename = match profile {
        Some(p) => format!("config.{}.toml", p),
        None => "config.toml".to_string(),
    };
    Ok(home.join(".signup").join(filename))
}
