//! Fill command

use super::{open_form, settle};
use crate::output::{FormView, OutputFormat};
use crate::FillArgs;
use signup_form::{FieldId, FormConfig};
use std::path::PathBuf;
use std::time::Instant;

pub fn handle(
    args: FillArgs,
    config: FormConfig,
    drafts_dir: Option<PathBuf>,
    format: OutputFormat,
) -> Result<(), String> {
    let mut form = open_form(config, drafts_dir)?;
    let now = Instant::now();

    if let Some(active) = args.company_mode {
        form.set_company_mode(active, now);
    }

    let inputs = [
        (FieldId::Name, args.name),
        (FieldId::Email, args.email),
        (FieldId::Password, args.password),
        (FieldId::Phone, args.phone),
        (FieldId::Company, args.company),
    ];
    let mut phone_touched = false;
    for (field, value) in inputs {
        if let Some(value) = value {
            phone_touched |= field == FieldId::Phone;
            form.input(field, value, now);
        }
    }
    if phone_touched {
        form.blur_phone();
    }

    settle(&mut form);
    form.refresh_summary();
    FormView::capture(&form).print(format);
    Ok(())
}
