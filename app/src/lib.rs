//! # Slicestate App
//!
//! Application state for a home-cleaning booking client, built on the
//! Slicestate architecture.
//!
//! The state tree has five independently owned slices, each with its own
//! action enum and pure reducer:
//!
//! - [`calculator`]: price-quote inputs for a cleaning booking
//! - [`form_entry`]: the booking contact form
//! - [`auth`]: session token and current profile
//! - [`order`]: the customer's orders, including the three
//!   gateway-backed async operations (fetch, submit, repeat)
//! - [`admin`]: back-office view over all orders and customers
//!
//! [`root`] composes them into [`root::AppState`] and routes every
//! dispatched [`root::AppAction`] to the one slice it addresses.
//!
//! ## Example
//!
//! ```
//! use slicestate_app::calculator::{CalculatorAction, CalculatorReducer, CalculatorState};
//! use slicestate_core::Reducer;
//!
//! let reducer = CalculatorReducer::new();
//! let mut state = CalculatorState::default();
//!
//! let _ = reducer.reduce(&mut state, CalculatorAction::SetRooms(3), &());
//! assert_eq!(state.rooms, 3);
//! ```

pub mod admin;
pub mod auth;
pub mod calculator;
pub mod domain;
pub mod form_entry;
pub mod order;
pub mod root;

pub use root::{AppAction, AppEnvironment, AppState, app_reducer};
