//! Phone normalization command

use signup_form::{phone, FormConfig};

pub fn handle(value: &str, config: &FormConfig) -> Result<(), String> {
    match phone::normalize(value, &config.country_code) {
        Some(normalized) => {
            println!("{}", normalized);
            Ok(())
        }
        None => Err(format!("no digits in {:?}", value)),
    }
}
