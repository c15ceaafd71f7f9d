//! Static seed data.
//!
//! Declaration order is preserved by the currency seeder, so log output
//! follows this table top to bottom.

/// ISO 4217 code and display name pairs seeded into every environment.
pub const CURRENCIES: &[(&str, &str)] = &[
    ("USD", "US Dollar"),
    ("EUR", "Euro"),
    ("GBP", "Pound Sterling"),
    ("JPY", "Japanese Yen"),
    ("CHF", "Swiss Franc"),
    ("CAD", "Canadian Dollar"),
    ("AUD", "Australian Dollar"),
    ("NZD", "New Zealand Dollar"),
    ("SEK", "Swedish Krona"),
    ("NOK", "Norwegian Krone"),
    ("DKK", "Danish Krone"),
    ("PLN", "Polish Zloty"),
    ("CZK", "Czech Koruna"),
    ("HUF", "Hungarian Forint"),
    ("CNY", "Chinese Yuan"),
    ("HKD", "Hong Kong Dollar"),
    ("SGD", "Singapore Dollar"),
    ("INR", "Indian Rupee"),
    ("BRL", "Brazilian Real"),
    ("MXN", "Mexican Peso"),
];

/// Field values for the fixed development user.
pub mod fixtures {
    pub const USER_EMAIL: &str = "lisa@simpson.com";
    pub const USER_FIRSTNAME: &str = "Lisa";
    pub const USER_LASTNAME: &str = "Simpson";

    /// bcrypt hash of the shared development password `secret42`.
    pub const USER_PASSWORD_HASH: &str =
        "$2b$10$EpRnTzVlqHNP0.fUbXUwSOyuiXe/QLSUG6xNekdHgTGmrpHEfIoxm";
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_currency_codes_are_unique() {
        let codes: HashSet<&str> = CURRENCIES.iter().map(|&(code, _)| code).collect();
        assert_eq!(codes.len(), CURRENCIES.len());
    }

    #[test]
    fn test_currency_entries_are_well_formed() {
        for &(code, name) in CURRENCIES {
            assert_eq!(code.len(), 3, "bad code: {code}");
            assert_eq!(code, code.to_uppercase());
            assert!(!name.is_empty());
        }
    }
}
