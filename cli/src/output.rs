//! Output formatting

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use signup_form::{DraftStore, FieldId, SignupForm};
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn print<T: Serialize>(&self, data: &T) {
        match self {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
            OutputFormat::Yaml => {
                println!("{}", serde_yaml::to_string(data).unwrap_or_default());
            }
            OutputFormat::Table => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
        }
    }
}

/// Serializable view of the form
#[derive(Debug, Serialize)]
pub struct FormView {
    pub fields: Vec<FieldRow>,
    pub company_mode: bool,
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
pub struct FieldRow {
    pub field: &'static str,
    pub value: String,
    pub error: String,
}

impl FormView {
    pub fn capture<S: DraftStore>(form: &SignupForm<S>) -> Self {
        let fields = FieldId::VALIDATED
            .into_iter()
            .filter(|f| *f != FieldId::Company || form.is_company_mode_active())
            .map(|f| FieldRow {
                field: f.label(),
                value: match f {
                    FieldId::Password => mask(form.value(f)),
                    _ => form.value(f).to_string(),
                },
                error: form.display(f).error_text.clone(),
            })
            .collect();

        Self {
            fields,
            company_mode: form.is_company_mode_active(),
            errors: form.summary().items.clone(),
        }
    }

    pub fn print(&self, format: OutputFormat) {
        match format {
            OutputFormat::Table => {
                println!("{}", Table::new(&self.fields));
                if self.company_mode {
                    println!("Registering as a company");
                }
                if self.errors.is_empty() {
                    println!("{}", "Form is ready to submit".green());
                } else {
                    println!("{}", "Please fix the following:".red().bold());
                    for error in &self.errors {
                        println!("  - {}", error);
                    }
                }
            }
            other => other.print(self),
        }
    }
}

fn mask(value: &str) -> String {
    "*".repeat(value.chars().count())
}
