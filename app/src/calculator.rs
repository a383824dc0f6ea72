//! Calculator slice: price-quote inputs for a cleaning booking.
//!
//! A pure slice - every action assigns a field verbatim, and `Reset`
//! restores the declared initial value.

use crate::domain::CleaningKind;
use serde::{Deserialize, Serialize};
use slicestate_core::{Effect, Reducer, SmallVec, smallvec};

/// Calculator slice state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Number of rooms to clean
    pub rooms: u32,
    /// Number of bathrooms to clean
    pub bathrooms: u32,
    /// Kind of cleaning selected
    pub kind: CleaningKind,
    /// Selected extra services
    pub extras: Vec<String>,
    /// Quoted total, as computed by the pricing widget
    pub total: f64,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            rooms: 1,
            bathrooms: 1,
            kind: CleaningKind::Standard,
            extras: Vec::new(),
            total: 0.0,
        }
    }
}

/// Calculator slice actions
#[derive(Clone, Debug)]
pub enum CalculatorAction {
    /// Set the number of rooms
    SetRooms(u32),
    /// Set the number of bathrooms
    SetBathrooms(u32),
    /// Set the kind of cleaning
    SetKind(CleaningKind),
    /// Replace the selected extra services
    SetExtras(Vec<String>),
    /// Set the quoted total
    SetTotal(f64),
    /// Restore the declared initial value
    Reset,
}

/// Reducer for the calculator slice
#[derive(Clone, Copy, Debug, Default)]
pub struct CalculatorReducer;

impl CalculatorReducer {
    /// Creates a new `CalculatorReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for CalculatorReducer {
    type State = CalculatorState;
    type Action = CalculatorAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CalculatorAction::SetRooms(rooms) => state.rooms = rooms,
            CalculatorAction::SetBathrooms(bathrooms) => state.bathrooms = bathrooms,
            CalculatorAction::SetKind(kind) => state.kind = kind,
            CalculatorAction::SetExtras(extras) => state.extras = extras,
            CalculatorAction::SetTotal(total) => state.total = total,
            CalculatorAction::Reset => *state = CalculatorState::default(),
        }

        smallvec![Effect::None]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slicestate_testing::{ReducerTest, assertions};

    #[test]
    fn set_rooms_only_changes_rooms() {
        ReducerTest::new(CalculatorReducer::new())
            .with_env(())
            .given_state(CalculatorState::default())
            .when_action(CalculatorAction::SetRooms(4))
            .then_state(|state| {
                assert_eq!(state.rooms, 4);
                assert_eq!(state.bathrooms, 1);
                assert_eq!(state.kind, CleaningKind::Standard);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn reset_restores_initial_value() {
        ReducerTest::new(CalculatorReducer::new())
            .with_env(())
            .given_state(CalculatorState {
                rooms: 5,
                bathrooms: 2,
                kind: CleaningKind::Deep,
                extras: vec!["fridge".to_string()],
                total: 310.0,
            })
            .when_action(CalculatorAction::Reset)
            .then_state(|state| {
                assert_eq!(*state, CalculatorState::default());
            })
            .run();
    }

    #[test]
    fn set_total_assigns_verbatim() {
        ReducerTest::new(CalculatorReducer::new())
            .with_env(())
            .given_state(CalculatorState::default())
            .when_actions([
                CalculatorAction::SetKind(CleaningKind::Windows),
                CalculatorAction::SetTotal(95.5),
            ])
            .then_state(|state| {
                assert_eq!(state.kind, CleaningKind::Windows);
                assert!((state.total - 95.5).abs() < f64::EPSILON);
            })
            .run();
    }
}
