//! Named, anchored input patterns shared by every form

use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+?61|0)?[2-478](?:[ -]?[0-9]){8}$").expect("phone pattern compiles")
});

static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s'-]{2,50}$").expect("name pattern compiles"));

/// Process-wide validation patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationPattern {
    /// `local@domain.tld`, no whitespace, one `@`
    Email,
    /// Australian number, optional `+61`/`61`/`0` prefix, spaces or dashes allowed
    AustralianPhone,
    /// 2-50 letters, spaces, apostrophes or hyphens
    HumanName,
}

impl ValidationPattern {
    pub fn regex(&self) -> &'static Regex {
        match self {
            Self::Email => &EMAIL,
            Self::AustralianPhone => &PHONE,
            Self::HumanName => &NAME,
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        let matched = self.regex().is_match(value);
        tracing::trace!(pattern = self.name(), matched, "Pattern check");
        matched
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::AustralianPhone => "phone",
            Self::HumanName => "name",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod email {
        use super::*;

        #[test]
        fn test_accepts_plain_address() {
            assert!(ValidationPattern::Email.matches("ada@example.com"));
            assert!(ValidationPattern::Email.matches("a.b+c@mail.example.com.au"));
        }

        #[test]
        fn test_rejects_missing_parts() {
            assert!(!ValidationPattern::Email.matches("ada@example"));
            assert!(!ValidationPattern::Email.matches("@example.com"));
            assert!(!ValidationPattern::Email.matches("ada.example.com"));
        }

        #[test]
        fn test_rejects_whitespace_and_double_at() {
            assert!(!ValidationPattern::Email.matches("ada lovelace@example.com"));
            assert!(!ValidationPattern::Email.matches("ada@@example.com"));
            assert!(!ValidationPattern::Email.matches("ada@ex@ample.com"));
        }

        #[test]
        fn test_is_anchored() {
            assert!(!ValidationPattern::Email.matches(" ada@example.com"));
            assert!(!ValidationPattern::Email.matches("x y@example.com z"));
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_accepts_local_formats() {
            assert!(ValidationPattern::AustralianPhone.matches("0412 345 678"));
            assert!(ValidationPattern::AustralianPhone.matches("0412345678"));
            assert!(ValidationPattern::AustralianPhone.matches("02-9876-5432"));
        }

        #[test]
        fn test_accepts_international_prefix() {
            assert!(ValidationPattern::AustralianPhone.matches("+61412345678"));
            assert!(ValidationPattern::AustralianPhone.matches("61412345678"));
        }

        #[test]
        fn test_rejects_bad_area_and_length() {
            assert!(!ValidationPattern::AustralianPhone.matches("0512 345 678"));
            assert!(!ValidationPattern::AustralianPhone.matches("0412 345 67"));
        }
    }

    mod name {
        use super::*;

        #[test]
        fn test_accepts_common_names() {
            assert!(ValidationPattern::HumanName.matches("Ada Lovelace"));
            assert!(ValidationPattern::HumanName.matches("O'Brien-Smith"));
            assert!(ValidationPattern::HumanName.matches("Jo"));
        }

        #[test]
        fn test_rejects_length_bounds() {
            assert!(!ValidationPattern::HumanName.matches("J"));
            assert!(!ValidationPattern::HumanName.matches(&"a".repeat(51)));
            assert!(ValidationPattern::HumanName.matches(&"a".repeat(50)));
        }

        #[test]
        fn test_rejects_digits_and_symbols() {
            assert!(!ValidationPattern::HumanName.matches("R2D2"));
            assert!(!ValidationPattern::HumanName.matches("ada@home"));
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(ValidationPattern::Email.name(), "email");
        assert_eq!(ValidationPattern::AustralianPhone.name(), "phone");
        assert_eq!(ValidationPattern::HumanName.name(), "name");
    }
}
