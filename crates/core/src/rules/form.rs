use thiserror::Error;

/// Why a contact form submission was blocked. The message is shown to the
/// visitor as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// A submission that passed client-side validation, with trimmed fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Optimistic confirmation shown after the browser submits the form.
    /// Delivery is not awaited.
    pub fn confirmation(&self) -> String {
        format!(
            "Thank you, {}! Your message has been sent. I'll get back to you shortly.",
            self.name
        )
    }
}

pub fn validate(name: &str, email: &str, message: &str) -> Result<ContactSubmission, FormError> {
    let (name, email, message) = (name.trim(), email.trim(), message.trim());
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(FormError::MissingFields);
    }
    if !is_plausible_email(email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(ContactSubmission {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

/// `local@domain.tld` shape: no whitespace, exactly one `@`, and a dot in the
/// domain with text on both sides of it.
pub fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
