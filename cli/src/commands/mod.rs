//! CLI Commands

pub mod clear;
pub mod config;
pub mod fill;
pub mod phone;
pub mod status;
pub mod submit;

use signup_form::{FileStore, FormConfig, SignupForm};
use std::path::PathBuf;
use std::time::Instant;

/// Form backed by the on-disk draft store, with any stored draft loaded
pub fn open_form(
    config: FormConfig,
    drafts_dir: Option<PathBuf>,
) -> Result<SignupForm<FileStore>, String> {
    let dir = match drafts_dir {
        Some(dir) => dir,
        None => FileStore::default_dir().map_err(|e| e.to_string())?,
    };
    let mut form = SignupForm::new(config, FileStore::new(dir)).map_err(|e| e.to_string())?;
    if form.load() {
        tracing::debug!("resumed stored draft");
    }
    Ok(form)
}

/// Run every pending debounced action
///
/// One-shot commands have no idle time to wait for, so pending work is
/// fired at its own deadline straight away.
pub fn settle(form: &mut SignupForm<FileStore>) {
    while let Some(deadline) = form.next_deadline() {
        form.tick(deadline.max(Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signup_form::FieldId;

    #[test]
    fn test_settle_saves_and_validates() {
        let dir = tempfile::tempdir().unwrap();
        let mut form = open_form(FormConfig::default(), Some(dir.path().to_path_buf())).unwrap();
        form.input(FieldId::Name, "A", Instant::now());
        settle(&mut form);

        assert_eq!(form.next_deadline(), None);
        assert!(form.display(FieldId::Name).invalid);

        let reopened = open_form(FormConfig::default(), Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(reopened.value(FieldId::Name), "A");
    }
}
