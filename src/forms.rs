//! Form drafts for the newsletter and assessment booking forms.
//!
//! Submissions are validated and acknowledged in the browser only.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter your {0}")]
    Missing(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please select your bed capacity")]
    MissingBedCapacity,
}

/// Loose `local@domain.tld` check.
pub fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && tld.len() >= 2,
        None => false,
    }
}

fn require(value: &str, field: &'static str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(())
    }
}

fn require_email(email: &str, field: &'static str) -> Result<(), FormError> {
    require(email, field)?;
    if is_plausible_email(email) {
        Ok(())
    } else {
        Err(FormError::InvalidEmail)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterSignup {
    pub email: String,
}

impl NewsletterSignup {
    pub fn validate(&self) -> Result<(), FormError> {
        require_email(&self.email, "email address")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BedCapacity {
    Small,
    Medium,
    Large,
}

impl BedCapacity {
    pub const ALL: [BedCapacity; 3] = [BedCapacity::Small, BedCapacity::Medium, BedCapacity::Large];

    pub fn label(self) -> &'static str {
        match self {
            BedCapacity::Small => "50-100 Beds",
            BedCapacity::Medium => "100-300 Beds",
            BedCapacity::Large => "300+ Beds",
        }
    }

    /// Value used in the `<select>` options.
    pub fn key(self) -> &'static str {
        match self {
            BedCapacity::Small => "50-100",
            BedCapacity::Medium => "100-300",
            BedCapacity::Large => "300+",
        }
    }
}

impl fmt::Display for BedCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BedCapacity {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|capacity| capacity.key() == s)
            .ok_or(FormError::MissingBedCapacity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssessmentRequest {
    pub name: String,
    pub email: String,
    pub hospital: String,
    pub bed_capacity: Option<BedCapacity>,
    pub challenge: String,
}

impl AssessmentRequest {
    /// Reports the first problem in field order.
    pub fn validate(&self) -> Result<(), FormError> {
        require(&self.name, "name")?;
        require_email(&self.email, "work email")?;
        require(&self.hospital, "hospital name")?;
        if self.bed_capacity.is_none() {
            return Err(FormError::MissingBedCapacity);
        }
        Ok(())
    }
}

/// What a form shows under its submit button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Rejected(String),
    Received,
}

impl FormStatus {
    pub fn from_result(result: Result<(), FormError>) -> Self {
        match result {
            Ok(()) => FormStatus::Received,
            Err(err) => FormStatus::Rejected(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_request() -> AssessmentRequest {
        AssessmentRequest {
            name: "Dr. Mehta".into(),
            email: "mehta@cityhospital.in".into(),
            hospital: "City Hospital".into(),
            bed_capacity: Some(BedCapacity::Small),
            challenge: String::new(),
        }
    }

    #[test]
    fn email_check() {
        assert!(is_plausible_email("name@hospital.com"));
        assert!(is_plausible_email("  a.b@c.co.in "));
        assert!(!is_plausible_email("name@hospital"));
        assert!(!is_plausible_email("@hospital.com"));
        assert!(!is_plausible_email("name@@hospital.com"));
        assert!(!is_plausible_email("na me@hospital.com"));
        assert!(!is_plausible_email("name@.c"));
    }

    #[test]
    fn newsletter_requires_email() {
        assert_eq!(
            NewsletterSignup::default().validate(),
            Err(FormError::Missing("email address"))
        );
        let signup = NewsletterSignup {
            email: "not-an-email".into(),
        };
        assert_eq!(signup.validate(), Err(FormError::InvalidEmail));
    }

    #[test]
    fn complete_request_is_accepted() {
        assert_eq!(complete_request().validate(), Ok(()));
    }

    #[test]
    fn reports_first_missing_field() {
        let request = AssessmentRequest {
            name: " ".into(),
            hospital: String::new(),
            ..complete_request()
        };
        assert_eq!(request.validate(), Err(FormError::Missing("name")));

        let request = AssessmentRequest {
            email: String::new(),
            ..complete_request()
        };
        assert_eq!(request.validate(), Err(FormError::Missing("work email")));

        let request = AssessmentRequest {
            bed_capacity: None,
            ..complete_request()
        };
        assert_eq!(request.validate(), Err(FormError::MissingBedCapacity));
    }

    #[test]
    fn bed_capacity_parses_option_keys() {
        for capacity in BedCapacity::ALL {
            assert_eq!(capacity.key().parse::<BedCapacity>(), Ok(capacity));
        }
        assert!("".parse::<BedCapacity>().is_err());
    }

    #[test]
    fn status_from_result() {
        assert_eq!(FormStatus::from_result(Ok(())), FormStatus::Received);
        assert_eq!(
            FormStatus::from_result(Err(FormError::InvalidEmail)),
            FormStatus::Rejected("Please enter a valid email address".into())
        );
        assert_eq!(
            FormStatus::from_result(NewsletterSignup::default().validate()),
            FormStatus::Rejected("Please enter your email address".into())
        );
    }
}
