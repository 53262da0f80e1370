//! Status command

use super::open_form;
use crate::output::{FormView, OutputFormat};
use signup_form::FormConfig;
use std::path::PathBuf;

pub fn handle(
    config: FormConfig,
    drafts_dir: Option<PathBuf>,
    format: OutputFormat,
) -> Result<(), String> {
    let mut form = open_form(config, drafts_dir)?;
    form.refresh_summary();
    FormView::capture(&form).print(format);
    Ok(())
}
