//! Auth slice: session token and current profile.
//!
//! Sign-in mechanics live elsewhere; this slice only holds what the rest
//! of the app needs to know about the session.

use crate::domain::Profile;
use serde::{Deserialize, Serialize};
use slicestate_core::{Effect, Reducer, SmallVec, smallvec};

/// Auth slice state
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    /// Session token, if signed in
    pub token: Option<String>,
    /// Profile of the signed-in customer
    pub profile: Option<Profile>,
}

impl AuthState {
    /// Whether a session token is present
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Auth slice actions
#[derive(Clone, Debug)]
pub enum AuthAction {
    /// Store the session token
    SetToken(String),
    /// Store the signed-in customer's profile
    SetProfile(Profile),
    /// Drop the session entirely
    SignOut,
}

/// Reducer for the auth slice
#[derive(Clone, Copy, Debug, Default)]
pub struct AuthReducer;

impl AuthReducer {
    /// Creates a new `AuthReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for AuthReducer {
    type State = AuthState;
    type Action = AuthAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            AuthAction::SetToken(token) => state.token = Some(token),
            AuthAction::SetProfile(profile) => state.profile = Some(profile),
            AuthAction::SignOut => *state = AuthState::default(),
        }

        smallvec![Effect::None]
    }
}
