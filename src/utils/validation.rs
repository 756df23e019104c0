use crate::domain::model::ContactForm;
use crate::utils::error::{Result, SiteError};
use std::fmt;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

// ---- load-time checks (config and catalog) ----

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SiteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_filled_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::InvalidContentError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range(field_name: &str, value: u8, min: u8, max: u8) -> Result<()> {
    if value < min || value > max {
        return Err(SiteError::InvalidContentError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

// ---- contact form checks ----
//
// These mirror what the page actually enforces on submission. The email check
// is deliberately weak (one '@' and one '.') and must stay that way.

pub fn is_non_empty(field: &str) -> bool {
    !field.is_empty()
}

pub fn is_plausible_email(s: &str) -> bool {
    s.contains('@') && s.contains('.')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::Name => write!(f, "name"),
            FormField::Email => write!(f, "email"),
            FormField::Message => write!(f, "message"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    MissingField(FormField),
    InvalidEmail,
}

impl FieldError {
    pub fn message(&self) -> String {
        match self {
            FieldError::MissingField(field) => {
                format!("Please fill in the required {} field", field)
            }
            FieldError::InvalidEmail => "Please enter a valid email address".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Ok,
    Invalid(Vec<FieldError>),
}

pub fn validate_contact_form(form: &ContactForm) -> ValidationResult {
    let mut errors = Vec::new();

    if !is_non_empty(&form.name) {
        errors.push(FieldError::MissingField(FormField::Name));
    }
    if !is_non_empty(&form.email) {
        errors.push(FieldError::MissingField(FormField::Email));
    } else if !is_plausible_email(&form.email) {
        errors.push(FieldError::InvalidEmail);
    }
    // Subject carries a default and can never be missing.
    if !is_non_empty(&form.message) {
        errors.push(FieldError::MissingField(FormField::Message));
    }

    if errors.is_empty() {
        ValidationResult::Ok
    } else {
        ValidationResult::Invalid(errors)
    }
}
