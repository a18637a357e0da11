use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// A phone and its stored address, as exposed over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneAddress {
    pub phone: String,
    pub address: String,
}

impl PhoneAddress {
    pub fn new(phone: impl Into<String>, address: impl Into<String>) -> Self {
        Self { phone: phone.into(), address: address.into() }
    }
}

/// Body of a create request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewPhoneAddress {
    pub phone: String,
    pub address: String,
}

/// Body of an update request; the phone comes from the path.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateAddress {
    pub address: String,
}

/// Request-schema checks run before any store access.
pub trait Validate {
    fn validate(&self) -> Result<(), ServiceError>;
}

fn require_non_empty(field: &str, value: &str) -> Result<(), ServiceError> {
    if value.is_empty() {
        return Err(ServiceError::missing_field(field));
    }
    Ok(())
}

impl Validate for NewPhoneAddress {
    fn validate(&self) -> Result<(), ServiceError> {
        require_non_empty("phone", &self.phone)?;
        require_non_empty("address", &self.address)
    }
}

impl Validate for UpdateAddress {
    fn validate(&self) -> Result<(), ServiceError> {
        require_non_empty("address", &self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_fail_validation() {
        let ok = NewPhoneAddress { phone: "+1234567890".into(), address: "123 Main St".into() };
        assert!(ok.validate().is_ok());

        let no_phone = NewPhoneAddress { phone: String::new(), address: "x".into() };
        match no_phone.validate() {
            Err(ServiceError::Validation(msg)) => assert!(msg.starts_with("phone")),
            other => panic!("unexpected: {other:?}"),
        }

        assert!(UpdateAddress { address: String::new() }.validate().is_err());
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        // no normalization: a blank-looking value is still a value
        assert!(UpdateAddress { address: " ".into() }.validate().is_ok());
    }

    #[test]
    fn missing_or_mistyped_fields_do_not_deserialize() {
        assert!(serde_json::from_str::<NewPhoneAddress>(r#"{"phone":"+1"}"#).is_err());
        assert!(serde_json::from_str::<NewPhoneAddress>(r#"{"phone":1,"address":"a"}"#).is_err());
        let extra: UpdateAddress = serde_json::from_str(r#"{"address":"a","note":"ignored"}"#).unwrap();
        assert_eq!(extra.address, "a");
    }
}
