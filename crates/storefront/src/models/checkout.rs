//! Checkout form data.
//!
//! These are plain form structs. Nothing here is transmitted anywhere; the
//! only validation is that required fields are filled in.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Country pre-selected on the shipping form.
pub const DEFAULT_COUNTRY: &str = "United States";

/// Shipping address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub full_name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Default for Address {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            street_address: String::new(),
            city: String::new(),
            state: String::new(),
            postal_code: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
            phone: None,
        }
    }
}

impl Address {
    /// The first required field that is blank, if any.
    #[must_use]
    pub fn first_missing_field(&self) -> Option<&'static str> {
        [
            ("full name", &self.full_name),
            ("street address", &self.street_address),
            ("city", &self.city),
            ("state", &self.state),
            ("postal code", &self.postal_code),
            ("country", &self.country),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }

    /// Whether every required field is filled in.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.first_missing_field().is_none()
    }
}

/// Card details from the payment form.
///
/// The number and CVV are held as secrets so they never show up in logs.
#[derive(Debug, Clone)]
pub struct CardInfo {
    pub number: SecretString,
    pub name: String,
    pub expiry: String,
    pub cvv: SecretString,
}

impl CardInfo {
    /// The first blank field, if any.
    #[must_use]
    pub fn first_missing_field(&self) -> Option<&'static str> {
        if self.number.expose_secret().trim().is_empty() {
            Some("card number")
        } else if self.name.trim().is_empty() {
            Some("name on card")
        } else if self.expiry.trim().is_empty() {
            Some("expiry")
        } else if self.cvv.expose_secret().trim().is_empty() {
            Some("cvv")
        } else {
            None
        }
    }

    /// Last four digits of the card number, for receipts.
    #[must_use]
    pub fn last_four(&self) -> String {
        let digits: Vec<char> = self
            .number
            .expose_secret()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        digits
            .iter()
            .skip(digits.len().saturating_sub(4))
            .collect()
    }
}

/// How the shopper pays.
#[derive(Debug, Clone)]
pub enum PaymentMethod {
    CreditCard(CardInfo),
    PayPal,
}

impl PaymentMethod {
    /// Form value identifying the method.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::CreditCard(_) => "credit-card",
            Self::PayPal => "paypal",
        }
    }

    /// The first blank required field, if any. `PayPal` has none.
    #[must_use]
    pub fn first_missing_field(&self) -> Option<&'static str> {
        match self {
            Self::CreditCard(card) => card.first_missing_field(),
            Self::PayPal => None,
        }
    }

    /// Receipt label, e.g. "Card ending 4242" or "PayPal".
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::CreditCard(card) => format!("Card ending {}", card.last_four()),
            Self::PayPal => "PayPal".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address {
            full_name: "Ada Lovelace".to_string(),
            street_address: "12 St James's Square".to_string(),
            city: "London".to_string(),
            state: "Greater London".to_string(),
            postal_code: "SW1Y 4JH".to_string(),
            ..Address::default()
        }
    }

    fn card() -> CardInfo {
        CardInfo {
            number: SecretString::from("4242 4242 4242 4242"),
            name: "Ada Lovelace".to_string(),
            expiry: "12/30".to_string(),
            cvv: SecretString::from("123"),
        }
    }

    #[test]
    fn test_default_address_country() {
        assert_eq!(Address::default().country, DEFAULT_COUNTRY);
        assert_eq!(Address::default().first_missing_field(), Some("full name"));
    }

    #[test]
    fn test_complete_address() {
        assert!(address().is_complete());
    }

    #[test]
    fn test_blank_field_counts_as_missing() {
        let mut addr = address();
        addr.city = "   ".to_string();
        assert_eq!(addr.first_missing_field(), Some("city"));
    }

    #[test]
    fn test_phone_is_optional() {
        let mut addr = address();
        addr.phone = None;
        assert!(addr.is_complete());
    }

    #[test]
    fn test_card_validation() {
        assert_eq!(card().first_missing_field(), None);

        let mut missing_cvv = card();
        missing_cvv.cvv = SecretString::from("");
        assert_eq!(missing_cvv.first_missing_field(), Some("cvv"));
    }

    #[test]
    fn test_card_debug_is_redacted() {
        let debug = format!("{:?}", card());
        assert!(!debug.contains("4242"));
        assert!(!debug.contains("123"));
    }

    #[test]
    fn test_last_four() {
        assert_eq!(card().last_four(), "4242");

        let mut short = card();
        short.number = SecretString::from("12");
        assert_eq!(short.last_four(), "12");
    }

    #[test]
    fn test_paypal_needs_no_fields() {
        assert_eq!(PaymentMethod::PayPal.first_missing_field(), None);
        assert_eq!(PaymentMethod::PayPal.kind(), "paypal");
        assert_eq!(
            PaymentMethod::CreditCard(card()).describe(),
            "Card ending 4242"
        );
    }
}
