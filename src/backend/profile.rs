use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::{ValidationError, ValidationErrors};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Email regex pattern is valid")
});

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9(][0-9 ()-]{5,}[0-9]$").expect("Phone regex pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    pub name: String,
    pub bio: String,
    pub location: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileField {
    Name,
    Bio,
    Location,
    Email,
    Phone,
}

impl ProfileField {
    pub const ALL: [ProfileField; 5] = [
        ProfileField::Name,
        ProfileField::Bio,
        ProfileField::Location,
        ProfileField::Email,
        ProfileField::Phone,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Name",
            ProfileField::Bio => "Bio",
            ProfileField::Location => "Location",
            ProfileField::Email => "Email",
            ProfileField::Phone => "Phone",
        }
    }

    pub fn html_id(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Bio => "bio",
            ProfileField::Location => "location",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            ProfileField::Email => "email",
            ProfileField::Phone => "tel",
            _ => "text",
        }
    }
}

impl ProfileData {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Bio => &self.bio,
            ProfileField::Location => &self.location,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
        }
    }

    /// Returns a copy with one field replaced and the rest untouched.
    pub fn with(&self, field: ProfileField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match field {
            ProfileField::Name => &mut next.name,
            ProfileField::Bio => &mut next.bio,
            ProfileField::Location => &mut next.location,
            ProfileField::Email => &mut next.email,
            ProfileField::Phone => &mut next.phone,
        };
        *slot = value.into();
        next
    }

    /// Avatar fallback text, "JD" for "John Doe".
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }

    /// Email and phone with surrounding whitespace removed, as validated.
    pub fn normalized(mut self) -> Self {
        self.email = self.email.trim().to_string();
        self.phone = self.phone.trim().to_string();
        self
    }

    /// Name, bio and location accept any text; email and phone must be well formed.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if let Err(e) = validate_field(ProfileField::Email, &self.email) {
            errors.push(ProfileField::Email, e);
        }
        if let Err(e) = validate_field(ProfileField::Phone, &self.phone) {
            errors.push(ProfileField::Phone, e);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

pub fn validate_field(field: ProfileField, value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    match field {
        ProfileField::Email if !EMAIL_PATTERN.is_match(value) => Err(ValidationError::InvalidEmail),
        ProfileField::Phone if !PHONE_PATTERN.is_match(value) => Err(ValidationError::InvalidPhone),
        _ => Ok(()),
    }
}

/// Header summary. Supplied as-is rather than computed from the trip list,
/// since it covers trips beyond the ones listed on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_trips: u32,
    pub countries_visited: u32,
    pub total_budget: String,
    pub favorite_destination: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSince(pub NaiveDate);

impl MemberSince {
    pub fn label(&self) -> String {
        format!("Joined {}", self.0.format("%B %Y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::fixtures;

    #[test]
    fn test_with_replaces_single_field() {
        let original = fixtures::profile();
        for field in ProfileField::ALL {
            let edited = original.with(field, "changed");
            assert_eq!(edited.get(field), "changed");
            for other in ProfileField::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(edited.get(other), original.get(other), "{:?} changed", other);
            }
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(fixtures::profile().initials(), "JD");
        let single = fixtures::profile().with(ProfileField::Name, "  ada ");
        assert_eq!(single.initials(), "A");
        let empty = fixtures::profile().with(ProfileField::Name, "");
        assert_eq!(empty.initials(), "?");
    }

    #[test]
    fn test_fixture_profile_is_valid() {
        assert!(fixtures::profile().validate().is_ok());
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_field(ProfileField::Email, "a@b.co").is_ok());
        assert_eq!(
            validate_field(ProfileField::Email, "not-an-email"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_field(ProfileField::Email, ""),
            Err(ValidationError::InvalidEmail)
        );
        assert!(validate_field(ProfileField::Email, "a b@c.d").is_err());
    }

    #[test]
    fn test_phone_validation() {
        assert!(validate_field(ProfileField::Phone, "+91 98765 43210").is_ok());
        assert!(validate_field(ProfileField::Phone, "(555) 123-4567").is_ok());
        assert_eq!(
            validate_field(ProfileField::Phone, "call me"),
            Err(ValidationError::InvalidPhone)
        );
        assert!(validate_field(ProfileField::Phone, "12").is_err());
    }

    #[test]
    fn test_free_text_fields_accept_empty() {
        for field in [ProfileField::Name, ProfileField::Bio, ProfileField::Location] {
            assert!(validate_field(field, "").is_ok());
        }
    }

    #[test]
    fn test_validate_collects_both_errors() {
        let profile = fixtures::profile()
            .with(ProfileField::Email, "bad")
            .with(ProfileField::Phone, "bad");
        let errors = profile.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(ProfileField::Email), Some(&ValidationError::InvalidEmail));
        assert_eq!(errors.get(ProfileField::Phone), Some(&ValidationError::InvalidPhone));
    }

    #[test]
    fn test_member_since_label() {
        assert_eq!(fixtures::member_since().label(), "Joined March 2024");
    }
}
