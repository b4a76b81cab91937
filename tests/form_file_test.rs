use regform::config::form_file::load_form_input;
use regform::FormError;
use std::io::Write;
use tempfile::TempDir;

fn write_form(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn loads_a_complete_form_file() {
    let dir = TempDir::new().unwrap();
    let path = write_form(
        &dir,
        "form.toml",
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
    );

    let input = load_form_input(&path).unwrap();
    assert_eq!(input.full_name, "Jane Doe");
    assert_eq!(input.day, "15");
    assert_eq!(input.email, "jane@example.com");
}

#[test]
fn partial_form_files_load_with_empty_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_form(&dir, "form.toml", r#"email = "jane@example.com""#);

    let input = load_form_input(&path).unwrap();
    assert_eq!(input.email, "jane@example.com");
    assert!(input.full_name.is_empty());
    assert!(input.confirm_password.is_empty());
}

#[test]
fn missing_file_surfaces_an_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");

    let err = load_form_input(&path).unwrap_err();
    assert!(matches!(err, FormError::IoError(_)));
}

#[test]
fn malformed_toml_surfaces_a_form_file_error() {
    let dir = TempDir::new().unwrap();
    let path = write_form(&dir, "form.toml", "full_name = not quoted");

    let err = load_form_input(&path).unwrap_err();
    assert!(matches!(err, FormError::FormFileError(_)));
}
