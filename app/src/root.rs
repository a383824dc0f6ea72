//! Root composition: one addressable state tree over the five slices.
//!
//! [`app_reducer`] forwards every dispatched [`AppAction`] to every slice
//! scope; the one whose variant matches runs its reducer, all others take
//! the identity path, so sibling sub-states are untouched by construction.

use crate::admin::{AdminAction, AdminReducer, AdminState};
use crate::auth::{AuthAction, AuthReducer, AuthState};
use crate::calculator::{CalculatorAction, CalculatorReducer, CalculatorState};
use crate::form_entry::{FormEntryAction, FormEntryReducer, FormEntryState};
use crate::order::{OrderAction, OrderEnvironment, OrderReducer, OrderState};
use serde::{Deserialize, Serialize};
use slicestate_core::composition::{CombinedReducer, combine_reducers, scope_reducer};

/// The composed application state tree
///
/// Keys are fixed at composition time; field order is the serialization
/// order if the tree is ever persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Price-quote inputs
    pub calculator: CalculatorState,
    /// Booking contact form
    pub form_entry: FormEntryState,
    /// Session token and profile
    pub auth: AuthState,
    /// The customer's orders
    pub order: OrderState,
    /// Back-office view
    pub admin: AdminState,
}

/// The root action space: one variant per slice
#[derive(Clone, Debug)]
pub enum AppAction {
    /// An action for the calculator slice
    Calculator(CalculatorAction),
    /// An action for the form-entry slice
    FormEntry(FormEntryAction),
    /// An action for the auth slice
    Auth(AuthAction),
    /// An action for the order slice
    Order(OrderAction),
    /// An action for the admin slice
    Admin(AdminAction),
}

/// Dependencies for the whole tree
///
/// Only the order slice needs anything beyond `()` today.
#[derive(Clone)]
pub struct AppEnvironment {
    /// Order slice dependencies (the gateway)
    pub order: OrderEnvironment,
}

impl AppEnvironment {
    /// Creates a new `AppEnvironment`
    #[must_use]
    pub const fn new(order: OrderEnvironment) -> Self {
        Self { order }
    }
}

/// Build the root reducer over all five slices
///
/// # Example
///
/// ```ignore
/// let store = Store::new(AppState::default(), app_reducer(), environment);
/// store.send(AppAction::Calculator(CalculatorAction::SetRooms(3))).await?;
/// ```
#[must_use]
pub fn app_reducer() -> CombinedReducer<AppState, AppAction, AppEnvironment> {
    combine_reducers(vec![
        Box::new(scope_reducer(
            CalculatorReducer::new(),
            |state: &mut AppState| &mut state.calculator,
            |action| match action {
                AppAction::Calculator(a) => Some(a),
                _ => None,
            },
            AppAction::Calculator,
            |_env: &AppEnvironment| &(),
        )),
        Box::new(scope_reducer(
            FormEntryReducer::new(),
            |state: &mut AppState| &mut state.form_entry,
            |action| match action {
                AppAction::FormEntry(a) => Some(a),
                _ => None,
            },
            AppAction::FormEntry,
            |_env: &AppEnvironment| &(),
        )),
        Box::new(scope_reducer(
            AuthReducer::new(),
            |state: &mut AppState| &mut state.auth,
            |action| match action {
                AppAction::Auth(a) => Some(a),
                _ => None,
            },
            AppAction::Auth,
            |_env: &AppEnvironment| &(),
        )),
        Box::new(scope_reducer(
            OrderReducer::new(),
            |state: &mut AppState| &mut state.order,
            |action| match action {
                AppAction::Order(a) => Some(a),
                _ => None,
            },
            AppAction::Order,
            |env: &AppEnvironment| &env.order,
        )),
        Box::new(scope_reducer(
            AdminReducer::new(),
            |state: &mut AppState| &mut state.admin,
            |action| match action {
                AppAction::Admin(a) => Some(a),
                _ => None,
            },
            AppAction::Admin,
            |_env: &AppEnvironment| &(),
        )),
    ])
}
