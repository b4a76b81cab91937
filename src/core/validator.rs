use crate::domain::model::{Field, FieldError, FormInput, RegistrationPayload};
use regex::Regex;

// Messages are surfaced verbatim on the rendering surface; one fixed string
// per rule.
pub const FULL_NAME_REQUIRED: &str = "Full name is required";
pub const FULL_NAME_INVALID: &str = "Full name must not contain numbers or special characters";
pub const CONTACT_NUMBER_REQUIRED: &str = "Contact number is required";
pub const CONTACT_NUMBER_INVALID: &str = "Invalid Canadian phone number format";
pub const DAY_REQUIRED: &str = "Day is required";
pub const MONTH_REQUIRED: &str = "Month is required";
pub const YEAR_REQUIRED: &str = "Year is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_INVALID: &str =
    "Password must contain 8 characters, at least one uppercase letter, one lowercase letter, and one number";
pub const PASSWORDS_MISMATCH: &str = "The passwords do not match";

const MONTHS: [&str; 12] = [
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12",
];

/// Per-field outcome: the normalized value, or the fixed rejection message.
pub type FieldResult = Result<String, &'static str>;

pub fn full_name(input: &str) -> FieldResult {
    if input.is_empty() {
        return Err(FULL_NAME_REQUIRED);
    }
    let re = Regex::new(r"^[A-Za-z ]+$").unwrap();
    if re.is_match(input) {
        Ok(input.to_string())
    } else {
        Err(FULL_NAME_INVALID)
    }
}

pub fn contact_number(input: &str) -> FieldResult {
    if input.is_empty() {
        return Err(CONTACT_NUMBER_REQUIRED);
    }
    let re = Regex::new(r"^\(?([0-9]{3})\)?[-. ]?([0-9]{3})[-. ]?([0-9]{4})$").unwrap();
    if re.is_match(input) {
        Ok(input.to_string())
    } else {
        Err(CONTACT_NUMBER_INVALID)
    }
}

/// Accepts 1..=31. Calendar validity against month/year is deliberately not
/// checked; day 31 passes for every month, including February.
pub fn day(input: &str) -> FieldResult {
    match input.parse::<u32>() {
        Ok(d) if (1..=31).contains(&d) => Ok(d.to_string()),
        _ => Err(DAY_REQUIRED),
    }
}

/// Accepts the twelve two-digit month codes only ("6" is rejected, "06" is
/// not), matching the select options on the rendering surface.
pub fn month(input: &str) -> FieldResult {
    if MONTHS.contains(&input) {
        Ok(input.to_string())
    } else {
        Err(MONTH_REQUIRED)
    }
}

/// Accepts years from `current_year` back through `current_year - 99`. The
/// caller supplies the current year so the validator stays pure.
pub fn year(input: &str, current_year: i32) -> FieldResult {
    match input.parse::<i32>() {
        Ok(y) if y <= current_year && y >= current_year - 99 => Ok(y.to_string()),
        _ => Err(YEAR_REQUIRED),
    }
}

pub fn email(input: &str) -> FieldResult {
    if input.is_empty() {
        return Err(EMAIL_REQUIRED);
    }
    let re = Regex::new(r"^\S+@\S+\.\S+$").unwrap();
    if re.is_match(input) {
        Ok(input.to_string())
    } else {
        Err(EMAIL_INVALID)
    }
}

/// Length >= 8 with at least one lowercase letter, one uppercase letter and
/// one digit, drawn from [A-Za-z0-9] only. The character-set restriction
/// means special characters are rejected even when every other requirement
/// is met; that is intentional (see DESIGN.md). Implemented as character
/// scans since the `regex` crate has no lookahead.
pub fn password(input: &str) -> FieldResult {
    if input.is_empty() {
        return Err(PASSWORD_REQUIRED);
    }
    let alphanumeric_only = input.chars().all(|c| c.is_ascii_alphanumeric());
    let has_lower = input.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = input.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = input.chars().any(|c| c.is_ascii_digit());
    if input.len() >= 8 && alphanumeric_only && has_lower && has_upper && has_digit {
        Ok(input.to_string())
    } else {
        Err(PASSWORD_INVALID)
    }
}

/// Cross-field rule: the sibling password value is passed in explicitly.
/// Equality is the only check; an empty pair is equal and therefore accepted
/// (the password field itself reports the missing value).
pub fn confirm_password(input: &str, password: &str) -> FieldResult {
    if input == password {
        Ok(input.to_string())
    } else {
        Err(PASSWORDS_MISMATCH)
    }
}

/// Zero-pads day and month to two digits and joins as `YYYY-MM-DD`. Purely
/// textual; "1990", "02", "31" composes "1990-02-31".
pub fn compose_date_of_birth(year: &str, month: &str, day: &str) -> String {
    format!("{}-{:0>2}-{:0>2}", year, month, day)
}

/// Runs every field validator and either returns all rejections in display
/// order, or builds the payload. The payload is only ever constructed from a
/// fully valid form.
pub fn validate(
    input: &FormInput,
    current_year: i32,
) -> Result<RegistrationPayload, Vec<FieldError>> {
    let mut errors = Vec::new();

    let full_name = collect(&mut errors, Field::FullName, full_name(&input.full_name));
    let contact_number = collect(
        &mut errors,
        Field::ContactNumber,
        contact_number(&input.contact_number),
    );
    let day = collect(&mut errors, Field::Day, day(&input.day));
    let month = collect(&mut errors, Field::Month, month(&input.month));
    let year = collect(&mut errors, Field::Year, year(&input.year, current_year));
    let email = collect(&mut errors, Field::Email, email(&input.email));
    let password = collect(&mut errors, Field::Password, password(&input.password));
    collect(
        &mut errors,
        Field::ConfirmPassword,
        confirm_password(&input.confirm_password, &input.password),
    );

    match (full_name, contact_number, day, month, year, email, password) {
        (
            Some(full_name),
            Some(contact_number),
            Some(day),
            Some(month),
            Some(year),
            Some(email),
            Some(password),
        ) if errors.is_empty() => Ok(RegistrationPayload {
            full_name,
            contact_number,
            date_of_birth: compose_date_of_birth(&year, &month, &day),
            email,
            password,
        }),
        _ => Err(errors),
    }
}

fn collect(errors: &mut Vec<FieldError>, field: Field, result: FieldResult) -> Option<String> {
    match result {
        Ok(value) => Some(value),
        Err(message) => {
            errors.push(FieldError { field, message });
            None
        }
    }
}
