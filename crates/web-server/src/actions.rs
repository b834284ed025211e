//! Closed set of user actions submitted by the HTML forms.
//!
//! The forms post plain button labels; everything the server branches on is
//! parsed into one of these enums up front so handler match arms stay
//! exhaustive.

/// Command string for delete confirmation
pub const COMMAND_DELETE: &str = "Delete";

/// Command string for remove confirmation
pub const COMMAND_REMOVE: &str = "Remove";

/// Command string for cancelling a confirmation
pub const COMMAND_CANCEL: &str = "Cancel";

/// Command strings on the client edit form
pub const ADD_CONTACT: &str = "Add Contact";
pub const REMOVE_CONTACT: &str = "Remove Contact";
pub const SEE_REMOVE_CONTACTS: &str = "See/Remove Contacts";

/// Command strings on the person edit form
pub const ADD_CLIENT: &str = "Add Client";
pub const REMOVE_CLIENT: &str = "Remove Client";
pub const SEE_REMOVE_CLIENTS: &str = "See/Remove Clients";

/// Referrer markers carried through the available/current association views
pub const EDIT_REFERRER: &str = "edit";
pub const VIEW_REFERRER: &str = "view";

/// What the user asked for when submitting an edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// Show entities not yet associated
    AddAssociations,
    /// Show current associations for removal
    SeeRemoveAssociations,
    /// Plain save, back to the listing
    Save,
}

impl EditAction {
    pub fn parse(command: &str) -> Self {
        if command.eq_ignore_ascii_case(ADD_CONTACT) || command.eq_ignore_ascii_case(ADD_CLIENT) {
            EditAction::AddAssociations
        } else if command.eq_ignore_ascii_case(SEE_REMOVE_CONTACTS)
            || command.eq_ignore_ascii_case(SEE_REMOVE_CLIENTS)
        {
            EditAction::SeeRemoveAssociations
        } else {
            EditAction::Save
        }
    }
}

/// Association mutation requested from within the edit flow. Unknown
/// commands are a no-op, matching the original form behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationAction {
    Add,
    Remove,
}

impl AssociationAction {
    pub fn parse(command: &str) -> Option<Self> {
        match command {
            ADD_CONTACT | ADD_CLIENT => Some(AssociationAction::Add),
            REMOVE_CONTACT | REMOVE_CLIENT => Some(AssociationAction::Remove),
            _ => None,
        }
    }
}

/// Outcome of a delete/remove confirmation screen. Anything that is not the
/// exact confirmation label counts as a cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Confirm,
    Cancel,
}

impl ConfirmAction {
    pub fn parse_delete(command: &str) -> Self {
        if command == COMMAND_DELETE {
            ConfirmAction::Confirm
        } else {
            ConfirmAction::Cancel
        }
    }

    pub fn parse_remove(command: &str) -> Self {
        if command == COMMAND_REMOVE {
            ConfirmAction::Confirm
        } else {
            ConfirmAction::Cancel
        }
    }
}

/// Where the user came from when adding an association, which decides the
/// redirect target afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Referrer {
    Edit,
    View,
}

impl Referrer {
    pub fn parse(referrer: &str) -> Self {
        if referrer.eq_ignore_ascii_case(EDIT_REFERRER) {
            Referrer::Edit
        } else {
            Referrer::View
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Referrer::Edit => EDIT_REFERRER,
            Referrer::View => VIEW_REFERRER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_action_recognizes_both_kinds_case_insensitively() {
        assert_eq!(EditAction::parse("Add Contact"), EditAction::AddAssociations);
        assert_eq!(EditAction::parse("add client"), EditAction::AddAssociations);
        assert_eq!(
            EditAction::parse("See/Remove Contacts"),
            EditAction::SeeRemoveAssociations
        );
        assert_eq!(
            EditAction::parse("see/remove clients"),
            EditAction::SeeRemoveAssociations
        );
        assert_eq!(EditAction::parse("Save"), EditAction::Save);
        assert_eq!(EditAction::parse(""), EditAction::Save);
    }

    #[test]
    fn association_action_ignores_unknown_commands() {
        assert_eq!(AssociationAction::parse("Add Contact"), Some(AssociationAction::Add));
        assert_eq!(
            AssociationAction::parse("Remove Client"),
            Some(AssociationAction::Remove)
        );
        assert_eq!(AssociationAction::parse("Frobnicate"), None);
    }

    #[test]
    fn confirmations_require_the_exact_label() {
        assert_eq!(ConfirmAction::parse_delete("Delete"), ConfirmAction::Confirm);
        assert_eq!(ConfirmAction::parse_delete("delete"), ConfirmAction::Cancel);
        assert_eq!(ConfirmAction::parse_remove("Remove"), ConfirmAction::Confirm);
        assert_eq!(ConfirmAction::parse_remove("Cancel"), ConfirmAction::Cancel);
    }

    #[test]
    fn anything_but_edit_referrer_means_view() {
        assert_eq!(Referrer::parse("edit"), Referrer::Edit);
        assert_eq!(Referrer::parse("EDIT"), Referrer::Edit);
        assert_eq!(Referrer::parse("view"), Referrer::View);
        assert_eq!(Referrer::parse("elsewhere"), Referrer::View);
    }
}
