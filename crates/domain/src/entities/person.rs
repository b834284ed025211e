use serde::{Deserialize, Serialize};

use super::{check_length, validate_address, Entity};

/// A person record with contact details and a mailing address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: Option<i32>, // None for new records before persistence
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Person {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: String,
        last_name: String,
        email_address: String,
        street_address: String,
        city: String,
        state: String,
        zip_code: String,
    ) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            email_address,
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

impl Entity for Person {
    fn entity_id(&self) -> Option<i32> {
        self.id
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        check_length(
            &self.first_name,
            1,
            50,
            "First name is required with maximum length of 50",
            &mut errors,
        );
        check_length(
            &self.last_name,
            1,
            50,
            "Last name is required with maximum length of 50",
            &mut errors,
        );
        check_length(
            &self.email_address,
            1,
            50,
            "Email address is required with maximum length of 50",
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
