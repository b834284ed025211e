use serde::Deserialize;

/// Confirmation form posted from the delete and remove screens.
#[derive(Debug, Deserialize)]
pub struct ConfirmForm {
    pub entity_id: i32,
    pub command: String,
}

/// Command-only form posted from the association rows of the edit flow.
#[derive(Debug, Deserialize)]
pub struct CommandForm {
    pub command: String,
}

/// Form posted from an available-associations row.
#[derive(Debug, Deserialize)]
pub struct AddAssociationForm {
    pub entity_id: i32,
    pub referrer: String,
}
