use once_cell::sync::Lazy;
use regex::Regex;

use super::fields::ContactFields;

pub const NAME_REQUIRED: &str = "Name is required";
pub const INVALID_EMAIL: &str = "Invalid email";
pub const PHONE_TOO_SHORT: &str = "Phone number looks too short";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";

const MIN_PHONE_LEN: usize = 6;
const MIN_MESSAGE_LEN: usize = 10;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks the required fields in form order and returns one message per
/// failed check. An empty list means the submission is accepted.
/// `instagram` is free-form and never checked.
pub fn validate(fields: &ContactFields) -> Vec<String> {
    let mut errors = Vec::new();

    if fields.name.trim().is_empty() {
        errors.push(NAME_REQUIRED.to_string());
    }
    if !is_valid_email(fields.email.trim()) {
        errors.push(INVALID_EMAIL.to_string());
    }
    if fields.phone.trim().chars().count() < MIN_PHONE_LEN {
        errors.push(PHONE_TOO_SHORT.to_string());
    }
    if fields.message.trim().chars().count() < MIN_MESSAGE_LEN {
        errors.push(MESSAGE_TOO_SHORT.to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ana() -> ContactFields {
        ContactFields {
            name: "Ana".to_string(),
            email: "ana@mail.com".to_string(),
            phone: "08123456".to_string(),
            instagram: String::new(),
            message: "Hello, I am interested in the course.".to_string(),
        }
    }

    #[test]
    fn complete_submission_passes() {
        assert!(validate(&ana()).is_empty());
    }

    #[test]
    fn every_check_fails_in_field_order() {
        let fields = ContactFields {
            name: String::new(),
            email: "bad".to_string(),
            phone: "1".to_string(),
            instagram: String::new(),
            message: "short".to_string(),
        };
        assert_eq!(
            validate(&fields),
            vec![NAME_REQUIRED, INVALID_EMAIL, PHONE_TOO_SHORT, MESSAGE_TOO_SHORT]
        );
    }

    #[test]
    fn whitespace_only_name_is_missing() {
        let fields = ContactFields { name: "   ".to_string(), ..ana() };
        assert_eq!(validate(&fields), vec![NAME_REQUIRED]);
    }

    #[test]
    fn instagram_is_never_checked() {
        let fields = ContactFields { instagram: "not a handle at all @@".to_string(), ..ana() };
        assert!(validate(&fields).is_empty());
    }

    #[test]
    fn length_boundaries() {
        let fields = ContactFields {
            phone: "123456".to_string(),
            message: "0123456789".to_string(),
            ..ana()
        };
        assert!(validate(&fields).is_empty());

        let fields = ContactFields {
            phone: "12345".to_string(),
            message: "012345678".to_string(),
            ..ana()
        };
        assert_eq!(validate(&fields), vec![PHONE_TOO_SHORT, MESSAGE_TOO_SHORT]);
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("ana@mail"));
        assert!(!is_valid_email("ana mail@x.com"));
        assert!(!is_valid_email("@mail.com"));
        assert!(!is_valid_email("ana@@mail.com"));
        assert!(!is_valid_email(""));
    }

    proptest! {
        #[test]
        fn well_formed_input_is_accepted(
            name in "[A-Za-z]{1,20}",
            local in "[a-z0-9]{1,10}",
            domain in "[a-z]{1,10}",
            tld in "[a-z]{2,4}",
            phone in "[0-9]{6,14}",
            message in "[a-zA-Z ]{10,80}",
            instagram in ".{0,20}",
        ) {
            let fields = ContactFields {
                name,
                email: format!("{}@{}.{}", local, domain, tld),
                phone,
                instagram,
                message: format!("{}!", message.trim_end()).repeat(10),
            };
            prop_assert!(validate(&fields).is_empty());
        }

        #[test]
        fn missing_name_is_always_reported(
            email in ".{0,20}",
            phone in ".{0,20}",
            message in ".{0,40}",
        ) {
            let fields = ContactFields {
                name: String::new(),
                email,
                phone,
                instagram: String::new(),
                message,
            };
            let errors = validate(&fields);
            prop_assert_eq!(errors.first().map(String::as_str), Some(NAME_REQUIRED));
        }
    }
}
