//! Enquiry model

use serde::{Deserialize, Serialize};

/// A customer-submitted contact request
///
/// Enquiries are created through the public contact form and read-only in
/// the admin panel. The worker selection and the submission date are
/// optional because older remote rows predate both columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enquiry {
    /// Identifier assigned by the store on creation
    pub id: String,
    pub name: String,
    pub phone: String,
    pub message: String,
    /// Worker the customer asked for, if any
    #[serde(default)]
    pub worker: Option<String>,
    /// ISO-formatted submission date, if recorded
    #[serde(default)]
    pub date: Option<String>,
}

/// Input for submitting a new enquiry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewEnquiry {
    pub name: String,
    pub phone: String,
    pub message: String,
    #[serde(default)]
    pub worker: Option<String>,
}

impl NewEnquiry {
    /// Check the required contact fields.
    pub fn validate(&self) -> Result<(), super::ValidationError> {
        if self.name.trim().is_empty() {
            return Err(super::ValidationError("Name is required".into()));
        }
        if self.phone.trim().is_empty() {
            return Err(super::ValidationError("Phone is required".into()));
        }
        if self.message.trim().is_empty() {
            return Err(super::ValidationError("Message is required".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_contact_fields() {
        let input = NewEnquiry {
            name: "Asha".into(),
            phone: "+91 90000 00000".into(),
            message: "Need a balcony slider.".into(),
            worker: None,
        };
        assert!(input.validate().is_ok());

        let empty = NewEnquiry::default();
        assert!(empty.validate().is_err());

        let no_phone = NewEnquiry {
            phone: " ".into(),
            ..input
        };
        assert!(no_phone.validate().is_err());
    }

    #[test]
    fn test_worker_is_optional() {
        let input = NewEnquiry {
            name: "Asha".into(),
            phone: "+91 90000 00000".into(),
            message: "Quote please".into(),
            worker: Some("Shankar Soni".into()),
        };
        assert!(input.validate().is_ok());
    }
}
