use crate::domain::model::FormInput;
use crate::utils::error::Result;
use std::path::Path;

/// Loads form fields from a TOML file, the CLI's stand-in for the rendering
/// surface. Missing keys default to empty strings so the validators report
/// them as required-field errors instead of the load failing.
pub fn load_form_input<P: AsRef<Path>>(path: P) -> Result<FormInput> {
    let content = std::fs::read_to_string(path)?;
    let input: FormInput = toml::from_str(&content)?;
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_keys_load_into_the_form() {
        let input: FormInput = toml::from_str(
            r#"
            full_name = "Jane Doe"
            contact_number = "(416) 555-0199"
            day = "15"
            month = "06"
            year = "1990"
            email = "jane@example.com"
            password = "Abcdef12"
            confirm_password = "Abcdef12"
            "#,
        )
        .unwrap();

        assert_eq!(input.full_name, "Jane Doe");
        assert_eq!(input.month, "06");
        assert_eq!(input.confirm_password, "Abcdef12");
    }

    #[test]
    fn missing_keys_default_to_empty() {
        let input: FormInput = toml::from_str(r#"full_name = "Jane Doe""#).unwrap();
        assert_eq!(input.full_name, "Jane Doe");
        assert!(input.email.is_empty());
        assert!(input.password.is_empty());
    }
}
