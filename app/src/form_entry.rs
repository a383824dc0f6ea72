//! Form-entry slice: the booking contact form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use slicestate_core::{Effect, Reducer, SmallVec, smallvec};

/// Form-entry slice state
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormEntryState {
    /// Customer name as typed
    pub name: String,
    /// Contact phone as typed
    pub phone: String,
    /// Address to clean as typed
    pub address: String,
    /// Requested service date, once picked
    pub date: Option<DateTime<Utc>>,
    /// Free-form comment for the crew
    pub comment: String,
}

/// Form-entry slice actions
#[derive(Clone, Debug)]
pub enum FormEntryAction {
    /// Set the customer name
    SetName(String),
    /// Set the contact phone
    SetPhone(String),
    /// Set the address
    SetAddress(String),
    /// Set the requested service date
    SetDate(DateTime<Utc>),
    /// Set the comment
    SetComment(String),
    /// Clear the form back to its initial value
    Reset,
}

/// Reducer for the form-entry slice
#[derive(Clone, Copy, Debug, Default)]
pub struct FormEntryReducer;

impl FormEntryReducer {
    /// Creates a new `FormEntryReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for FormEntryReducer {
    type State = FormEntryState;
    type Action = FormEntryAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            FormEntryAction::SetName(name) => state.name = name,
            FormEntryAction::SetPhone(phone) => state.phone = phone,
            FormEntryAction::SetAddress(address) => state.address = address,
            FormEntryAction::SetDate(date) => state.date = Some(date),
            FormEntryAction::SetComment(comment) => state.comment = comment,
            FormEntryAction::Reset => *state = FormEntryState::default(),
        }

        smallvec![Effect::None]
    }
}
