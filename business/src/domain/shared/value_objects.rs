use bigdecimal::{BigDecimal, RoundingMode};
use serde::{Deserialize, Serialize};

/// Represents an identified shopper (Firebase UID).
/// Anonymous visitors have no UserId and keep their basket in the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Formats a monetary amount with two decimal places ("10" -> "10.00").
pub fn format_money(amount: &BigDecimal) -> String {
    amount.with_scale_round(2, RoundingMode::HalfUp).to_string()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn should_create_user_id_from_str() {
        let user_id = UserId::new("firebase-uid-456");
        assert_eq!(user_id.as_str(), "firebase-uid-456");
    }

    #[test]
    fn should_display_user_id() {
        let user_id = UserId::new("test-user");
        assert_eq!(format!("{}", user_id), "test-user");
    }

    #[test]
    fn should_compare_user_ids_for_equality() {
        assert_eq!(UserId::new("same-user"), UserId::from("same-user"));
        assert_ne!(UserId::new("same-user"), UserId::from("other-user".to_string()));
    }

    #[test]
    fn should_format_whole_amount_with_two_decimals() {
        let amount = BigDecimal::from(10);
        assert_eq!(format_money(&amount), "10.00");
    }

    #[test]
    fn should_round_amount_half_up() {
        let amount = BigDecimal::from_str("3.145").unwrap();
        assert_eq!(format_money(&amount), "3.15");
    }
}
