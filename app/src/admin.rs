//! Admin slice: back-office view over all orders and customers.

use crate::domain::{Order, OrderId, Profile};
use serde::{Deserialize, Serialize};
use slicestate_core::{Effect, Reducer, SmallVec, smallvec};

/// Admin slice state
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminState {
    /// Every order in the system, as loaded by the back office
    pub all_orders: Vec<Order>,
    /// Every customer profile
    pub customers: Vec<Profile>,
    /// Order currently opened for inspection
    pub selected: Option<OrderId>,
}

/// Admin slice actions
#[derive(Clone, Debug)]
pub enum AdminAction {
    /// Replace the full order list
    SetAllOrders(Vec<Order>),
    /// Replace the customer list
    SetCustomers(Vec<Profile>),
    /// Open an order for inspection
    SelectOrder(OrderId),
    /// Close the opened order
    ClearSelection,
}

/// Reducer for the admin slice
#[derive(Clone, Copy, Debug, Default)]
pub struct AdminReducer;

impl AdminReducer {
    /// Creates a new `AdminReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for AdminReducer {
    type State = AdminState;
    type Action = AdminAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            AdminAction::SetAllOrders(orders) => state.all_orders = orders,
            AdminAction::SetCustomers(customers) => state.customers = customers,
            AdminAction::SelectOrder(id) => state.selected = Some(id),
            AdminAction::ClearSelection => state.selected = None,
        }

        smallvec![Effect::None]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slicestate_testing::ReducerTest;

    #[test]
    fn select_then_clear() {
        let id = OrderId::new();

        ReducerTest::new(AdminReducer::new())
            .with_env(())
            .given_state(AdminState::default())
            .when_actions([AdminAction::SelectOrder(id), AdminAction::ClearSelection])
            .then_state(|state| {
                assert!(state.selected.is_none());
            })
            .run();
    }

    #[test]
    fn set_customers_leaves_orders_alone() {
        ReducerTest::new(AdminReducer::new())
            .with_env(())
            .given_state(AdminState::default())
            .when_action(AdminAction::SetCustomers(vec![]))
            .then_state(|state| {
                assert!(state.all_orders.is_empty());
                assert!(state.customers.is_empty());
            })
            .run();
    }
}
