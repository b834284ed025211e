use serde::{Deserialize, Serialize};

use super::{check_length, validate_address, Entity};

/// A client company record with a website, phone number and mailing address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: Option<i32>, // None for new records before persistence
    pub company_name: String,
    pub website: String,
    pub phone: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Client {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        company_name: String,
        website: String,
        phone: String,
        street_address: String,
        city: String,
        state: String,
        zip_code: String,
    ) -> Self {
        Self {
            id: None,
            company_name,
            website,
            phone,
            street_address,
            city,
            state,
            zip_code,
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }
}

impl Entity for Client {
    fn entity_id(&self) -> Option<i32> {
        self.id
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        check_length(
            &self.company_name,
            1,
            100,
            "Required field company name : maximum length 100",
            &mut errors,
        );
        check_length(
            &self.website,
            1,
            255,
            "Required field website : maximum length 255",
            &mut errors,
        );
        check_length(
            &self.phone,
            10,
            15,
            "Required field phone : maximum length 15",
            &mut errors,
        );
        validate_address(
            &self.street_address,
            &self.city,
            &self.state,
            &self.zip_code,
            &mut errors,
        );
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> Client {
        Client::new(
            "Acme".into(),
            "acme.test".into(),
            "5551234567".into(),
            "1 Main St".into(),
            "Springfield".into(),
            "IL".into(),
            "62701".into(),
        )
    }

    #[test]
    fn valid_client_has_no_errors() {
        assert!(acme().validate().is_empty());
    }

    #[test]
    fn three_letter_state_is_rejected() {
        let mut client = acme();
        client.state = "ILL".into();
        assert_eq!(
            client.validate(),
            vec!["State is required as a two-letter code".to_string()]
        );
    }

    #[test]
    fn empty_company_name_is_rejected() {
        let mut client = acme();
        client.company_name.clear();
        assert_eq!(
            client.validate(),
            vec!["Required field company name : maximum length 100".to_string()]
        );
    }

    #[test]
    fn short_phone_is_rejected() {
        let mut client = acme();
        client.phone = "555123".into();
        assert_eq!(
            client.validate(),
            vec!["Required field phone : maximum length 15".to_string()]
        );
    }

    #[test]
    fn four_digit_zip_is_rejected() {
        let mut client = acme();
        client.zip_code = "6270".into();
        assert_eq!(
            client.validate(),
            vec!["Zip code is required as a five-digit code".to_string()]
        );
    }
}
