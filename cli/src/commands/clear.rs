//! Clear command

use super::open_form;
use signup_form::FormConfig;
use std::path::PathBuf;

pub fn handle(config: FormConfig, drafts_dir: Option<PathBuf>) -> Result<(), String> {
    let mut form = open_form(config, drafts_dir)?;
    form.clear();
    println!("Draft cleared");
    Ok(())
}
