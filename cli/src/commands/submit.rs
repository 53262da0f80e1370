//! Submit command

use super::open_form;
use crate::output::{FormView, OutputFormat};
use colored::Colorize;
use signup_form::{FieldId, FormConfig, HttpTransport, SubmitOutcome};
use std::path::PathBuf;
use std::time::Instant;

pub async fn handle(
    honeypot: Option<String>,
    config: FormConfig,
    drafts_dir: Option<PathBuf>,
    format: OutputFormat,
) -> Result<(), String> {
    let transport = HttpTransport::new(&config).map_err(|e| e.to_string())?;
    let mut form = open_form(config, drafts_dir)?;
    if let Some(value) = honeypot {
        form.input(FieldId::Hp, value, Instant::now());
    }

    tracing::info!(endpoint = transport.endpoint(), "submitting signup");
    let outcome = form.submit(&transport).await;

    match format {
        OutputFormat::Table => {
            if let SubmitOutcome::Invalid { focus } = &outcome {
                FormView::capture(&form).print(format);
                if let Some(field) = focus {
                    println!("Check the {} field first.", field.label().to_lowercase());
                }
            }
            if let Some(notice) = outcome.notice() {
                if outcome.is_submitted() {
                    println!("{}", notice.green());
                } else {
                    println!("{}", notice.red());
                }
            }
        }
        other => other.print(&outcome),
    }

    if outcome.is_submitted() {
        Ok(())
    } else {
        Err("signup not submitted".into())
    }
}
