//! Order slice: the customer's orders and the three gateway-backed
//! asynchronous operations (fetch, submit, repeat).
//!
//! The reducer never performs I/O. A command action records the pending
//! phase in state and returns an `Effect::Future` that calls the
//! [`OrderGateway`] collaborator; the runtime dispatches the resulting
//! succeeded/failed action back into the slice.

use crate::domain::{CustomerId, Order, OrderDraft, OrderId};
use serde::{Deserialize, Serialize};
use slicestate_core::{AsyncStatus, Effect, Reducer, SmallVec, smallvec};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;

/// Errors reported by the order gateway
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The order service could not be reached
    #[error("order service unavailable: {0}")]
    Unavailable(String),

    /// The order service refused the request
    #[error("request rejected: {reason}")]
    Rejected {
        /// Why the request was refused
        reason: String,
    },
}

/// Future type returned by [`OrderGateway`] methods
///
/// Explicit `Pin<Box<dyn Future>>` instead of `async fn` keeps the trait
/// dyn-compatible (`Arc<dyn OrderGateway>`), which the effect system needs
/// when reducers capture the gateway.
pub type GatewayFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, GatewayError>> + Send + 'a>>;

/// The external collaborator that resolves order operations
///
/// Given request parameters, performs I/O and eventually produces exactly
/// one of success payload or failure reason. The slice only ever observes
/// the outcome as a dispatched action.
pub trait OrderGateway: Send + Sync {
    /// Fetch all orders placed by a customer
    fn fetch_orders(&self, customer_id: CustomerId) -> GatewayFuture<'_, Vec<Order>>;

    /// Submit a draft; on acceptance the placed order comes back
    fn create_order(&self, draft: OrderDraft) -> GatewayFuture<'_, Order>;

    /// Load one order by id, for repeating a past booking
    fn order_by_id(&self, order_id: OrderId) -> GatewayFuture<'_, Order>;
}

/// Environment dependencies for the order reducer
#[derive(Clone)]
pub struct OrderEnvironment {
    /// Gateway that resolves the async operations
    pub gateway: Arc<dyn OrderGateway>,
}

impl OrderEnvironment {
    /// Creates a new `OrderEnvironment`
    #[must_use]
    pub fn new(gateway: Arc<dyn OrderGateway>) -> Self {
        Self { gateway }
    }
}

/// Order slice state
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderState {
    /// The customer's orders, as last fetched or submitted
    pub orders: Vec<Order>,
    /// Order loaded for repeating, if any
    pub repeat_order: Option<Order>,
    /// Re-quoted total for the repeated order
    pub repeated_total: Option<f64>,
    /// Orders currently shown after client-side filtering
    pub filtered: Vec<Order>,
    /// Current search text
    pub search: String,
    /// Phase of the most recent async operation.
    ///
    /// The three operations share one indicator, and outcomes are applied
    /// in arrival order - a late outcome from a superseded request still
    /// lands (last writer wins).
    pub status: AsyncStatus,
    /// Failure message from the most recent rejected operation
    pub error: Option<String>,
}

/// Order slice actions
#[derive(Clone, Debug)]
pub enum OrderAction {
    // ========== Setters ==========
    /// Replace the order list
    SetOrders(Vec<Order>),
    /// Stash an order for repeating
    SetOrderById(Order),
    /// Drop the stashed repeat order back to its initial value
    ResetRepeatedOrder,
    /// Set the re-quoted total for the repeated order
    SetRepeatedTotal(f64),
    /// Replace the filtered view
    SetFiltered(Vec<Order>),
    /// Set the search text
    SetSearch(String),

    // ========== Commands ==========
    /// Start fetching the customer's orders
    FetchOrders {
        /// Whose orders to fetch
        customer_id: CustomerId,
    },
    /// Start submitting a draft order
    SubmitOrder {
        /// The draft to submit
        draft: OrderDraft,
    },
    /// Start loading a past order for repeating
    LoadRepeatOrder {
        /// The order to load
        order_id: OrderId,
    },

    // ========== Outcomes ==========
    /// The fetch resolved
    OrdersFetched(Vec<Order>),
    /// The fetch was rejected
    OrdersFailed {
        /// Failure message for the UI
        message: String,
    },
    /// The submission resolved; the placed order comes back
    OrderAccepted(Order),
    /// The submission was rejected
    SubmitFailed {
        /// Failure message for the UI
        message: String,
    },
    /// The repeat load resolved
    RepeatOrderLoaded(Order),
    /// The repeat load was rejected
    RepeatFailed {
        /// Failure message for the UI
        message: String,
    },
}

/// Reducer for the order slice
#[derive(Clone, Copy, Debug, Default)]
pub struct OrderReducer;

impl OrderReducer {
    /// Creates a new `OrderReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Record the pending phase before an operation starts
    fn begin(state: &mut OrderState) {
        state.status = AsyncStatus::Pending;
        state.error = None;
    }

    /// Record a resolved operation
    fn succeed(state: &mut OrderState) {
        state.status = AsyncStatus::Succeeded;
        state.error = None;
    }

    /// Record a rejected operation
    fn fail(state: &mut OrderState, message: String) {
        state.status = AsyncStatus::Failed;
        state.error = Some(message);
    }
}

impl Reducer for OrderReducer {
    type State = OrderState;
    type Action = OrderAction;
    type Environment = OrderEnvironment;

    #[allow(clippy::too_many_lines)]
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Setters ==========
            OrderAction::SetOrders(orders) => {
                state.orders = orders;
                smallvec![Effect::None]
            },

            OrderAction::SetOrderById(order) => {
                state.repeat_order = Some(order);
                smallvec![Effect::None]
            },

            OrderAction::ResetRepeatedOrder => {
                state.repeat_order = None;
                smallvec![Effect::None]
            },

            OrderAction::SetRepeatedTotal(total) => {
                state.repeated_total = Some(total);
                smallvec![Effect::None]
            },

            OrderAction::SetFiltered(filtered) => {
                state.filtered = filtered;
                smallvec![Effect::None]
            },

            OrderAction::SetSearch(search) => {
                state.search = search;
                smallvec![Effect::None]
            },

            // ========== Commands ==========
            OrderAction::FetchOrders { customer_id } => {
                Self::begin(state);
                let gateway = Arc::clone(&env.gateway);
                smallvec![Effect::Future(Box::pin(async move {
                    Some(match gateway.fetch_orders(customer_id).await {
                        Ok(orders) => OrderAction::OrdersFetched(orders),
                        Err(error) => OrderAction::OrdersFailed {
                            message: error.to_string(),
                        },
                    })
                }))]
            },

            OrderAction::SubmitOrder { draft } => {
                Self::begin(state);
                let gateway = Arc::clone(&env.gateway);
                smallvec![Effect::Future(Box::pin(async move {
                    Some(match gateway.create_order(draft).await {
                        Ok(order) => OrderAction::OrderAccepted(order),
                        Err(error) => OrderAction::SubmitFailed {
                            message: error.to_string(),
                        },
                    })
                }))]
            },

            OrderAction::LoadRepeatOrder { order_id } => {
                Self::begin(state);
                let gateway = Arc::clone(&env.gateway);
                smallvec![Effect::Future(Box::pin(async move {
                    Some(match gateway.order_by_id(order_id).await {
                        Ok(order) => OrderAction::RepeatOrderLoaded(order),
                        Err(error) => OrderAction::RepeatFailed {
                            message: error.to_string(),
                        },
                    })
                }))]
            },

            // ========== Outcomes ==========
            OrderAction::OrdersFetched(orders) => {
                Self::succeed(state);
                state.orders = orders;
                smallvec![Effect::None]
            },

            OrderAction::OrdersFailed { message } => {
                Self::fail(state, message);
                smallvec![Effect::None]
            },

            OrderAction::OrderAccepted(order) => {
                Self::succeed(state);
                state.orders.push(order);
                smallvec![Effect::None]
            },

            OrderAction::SubmitFailed { message } => {
                Self::fail(state, message);
                smallvec![Effect::None]
            },

            OrderAction::RepeatOrderLoaded(order) => {
                Self::succeed(state);
                state.repeat_order = Some(order);
                smallvec![Effect::None]
            },

            OrderAction::RepeatFailed { message } => {
                Self::fail(state, message);
                smallvec![Effect::None]
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CleaningKind;
    use chrono::{DateTime, Utc};
    use proptest::prelude::*;
    use slicestate_core::environment::Clock;
    use slicestate_testing::{ReducerTest, assertions, test_clock};

    /// Gateway stub with canned responses
    struct StubGateway {
        orders: Vec<Order>,
        fail: bool,
    }

    impl StubGateway {
        fn failing() -> Self {
            Self {
                orders: Vec::new(),
                fail: true,
            }
        }

        fn with_orders(orders: Vec<Order>) -> Self {
            Self {
                orders,
                fail: false,
            }
        }
    }

    impl OrderGateway for StubGateway {
        fn fetch_orders(&self, _customer_id: CustomerId) -> GatewayFuture<'_, Vec<Order>> {
            let result = if self.fail {
                Err(GatewayError::Unavailable("stubbed outage".to_string()))
            } else {
                Ok(self.orders.clone())
            };
            Box::pin(async move { result })
        }

        fn create_order(&self, draft: OrderDraft) -> GatewayFuture<'_, Order> {
            let result = if self.fail {
                Err(GatewayError::Rejected {
                    reason: "no crew available".to_string(),
                })
            } else {
                Ok(Order::from_draft(OrderId::new(), draft, test_clock().now()))
            };
            Box::pin(async move { result })
        }

        fn order_by_id(&self, order_id: OrderId) -> GatewayFuture<'_, Order> {
            let result = self
                .orders
                .iter()
                .find(|o| o.id == order_id)
                .cloned()
                .ok_or_else(|| GatewayError::Rejected {
                    reason: format!("unknown order {order_id}"),
                });
            Box::pin(async move { result })
        }
    }

    fn test_env() -> OrderEnvironment {
        OrderEnvironment::new(Arc::new(StubGateway::with_orders(Vec::new())))
    }

    fn sample_order(total: f64) -> Order {
        sample_order_at(total, test_clock().now())
    }

    fn sample_order_at(total: f64, when: DateTime<Utc>) -> Order {
        Order {
            id: OrderId::new(),
            customer_id: CustomerId::new(),
            address: "12 Birch Lane".to_string(),
            service_date: when,
            kind: CleaningKind::Standard,
            extras: Vec::new(),
            total,
            placed_at: when,
        }
    }

    #[test]
    fn set_orders_replaces_only_orders() {
        let incoming = vec![sample_order(120.0)];
        let expected = incoming.clone();

        ReducerTest::new(OrderReducer::new())
            .with_env(test_env())
            .given_state(OrderState {
                search: "deep".to_string(),
                repeated_total: Some(90.0),
                ..OrderState::default()
            })
            .when_action(OrderAction::SetOrders(incoming))
            .then_state(move |state| {
                assert_eq!(state.orders, expected);
                assert_eq!(state.search, "deep");
                assert_eq!(state.repeated_total, Some(90.0));
                assert!(state.repeat_order.is_none());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn reset_repeated_order_restores_initial_value() {
        ReducerTest::new(OrderReducer::new())
            .with_env(test_env())
            .given_state(OrderState {
                repeat_order: Some(sample_order(150.0)),
                orders: vec![sample_order(70.0)],
                ..OrderState::default()
            })
            .when_action(OrderAction::ResetRepeatedOrder)
            .then_state(|state| {
                assert!(state.repeat_order.is_none());
                assert_eq!(state.orders.len(), 1);
            })
            .run();
    }

    #[test]
    fn booking_history_scenario() {
        let order = sample_order(120.0);
        let expected = order.clone();

        ReducerTest::new(OrderReducer::new())
            .with_env(test_env())
            .given_state(OrderState::default())
            .when_actions([
                OrderAction::SetOrders(vec![order]),
                OrderAction::ResetRepeatedOrder,
            ])
            .then_state(move |state| {
                assert_eq!(state.orders, vec![expected.clone()]);
                assert!(state.repeat_order.is_none());
            })
            .run();
    }

    #[test]
    fn fetch_start_sets_pending_and_spawns_call() {
        ReducerTest::new(OrderReducer::new())
            .with_env(test_env())
            .given_state(OrderState {
                error: Some("older failure".to_string()),
                ..OrderState::default()
            })
            .when_action(OrderAction::FetchOrders {
                customer_id: CustomerId::new(),
            })
            .then_state(|state| {
                assert!(state.status.is_pending());
                assert!(state.error.is_none());
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn fetch_lifecycle_start_then_succeeded() {
        let payload = vec![sample_order(120.0)];
        let expected = payload.clone();

        ReducerTest::new(OrderReducer::new())
            .with_env(test_env())
            .given_state(OrderState::default())
            .when_actions([
                OrderAction::FetchOrders {
                    customer_id: CustomerId::new(),
                },
                OrderAction::OrdersFetched(payload),
            ])
            .then_state(move |state| {
                assert!(!state.status.is_pending());
                assert!(state.status.is_succeeded());
                assert!(state.error.is_none());
                assert_eq!(state.orders, expected);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn fetch_lifecycle_start_then_failed() {
        ReducerTest::new(OrderReducer::new())
            .with_env(test_env())
            .given_state(OrderState::default())
            .when_actions([
                OrderAction::FetchOrders {
                    customer_id: CustomerId::new(),
                },
                OrderAction::OrdersFailed {
                    message: "order service unavailable: stubbed outage".to_string(),
                },
            ])
            .then_state(|state| {
                assert!(!state.status.is_pending());
                assert!(state.status.is_failed());
                assert!(state.error.as_deref().is_some_and(|m| m.contains("unavailable")));
            })
            .run();
    }

    #[test]
    fn next_start_reenters_pending_after_failure() {
        ReducerTest::new(OrderReducer::new())
            .with_env(test_env())
            .given_state(OrderState {
                status: AsyncStatus::Failed,
                error: Some("order service unavailable: stubbed outage".to_string()),
                ..OrderState::default()
            })
            .when_action(OrderAction::SubmitOrder {
                draft: OrderDraft {
                    customer_id: CustomerId::new(),
                    address: "12 Birch Lane".to_string(),
                    service_date: test_clock().now(),
                    kind: CleaningKind::Deep,
                    extras: vec!["oven".to_string()],
                    total: 240.0,
                },
            })
            .then_state(|state| {
                assert!(state.status.is_pending());
                assert!(state.error.is_none());
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn accepted_order_is_appended() {
        let placed = sample_order(310.0);
        let expected_id = placed.id;

        ReducerTest::new(OrderReducer::new())
            .with_env(test_env())
            .given_state(OrderState {
                orders: vec![sample_order(70.0)],
                status: AsyncStatus::Pending,
                ..OrderState::default()
            })
            .when_action(OrderAction::OrderAccepted(placed))
            .then_state(move |state| {
                assert_eq!(state.orders.len(), 2);
                assert_eq!(state.orders[1].id, expected_id);
                assert!(state.status.is_succeeded());
            })
            .run();
    }

    #[test]
    fn repeat_order_loaded_is_stashed() {
        let past = sample_order(150.0);
        let expected_id = past.id;

        ReducerTest::new(OrderReducer::new())
            .with_env(test_env())
            .given_state(OrderState {
                status: AsyncStatus::Pending,
                ..OrderState::default()
            })
            .when_action(OrderAction::RepeatOrderLoaded(past))
            .then_state(move |state| {
                assert_eq!(state.repeat_order.as_ref().map(|o| o.id), Some(expected_id));
                assert!(state.status.is_succeeded());
            })
            .run();
    }

    #[test]
    fn stub_gateway_resolves_fetch() {
        let order = sample_order(120.0);
        let gateway = StubGateway::with_orders(vec![order.clone()]);

        let fetched = tokio_test::block_on(gateway.fetch_orders(CustomerId::new()))
            .map(|orders| orders.len());
        assert_eq!(fetched, Ok(1));

        let missing = tokio_test::block_on(gateway.order_by_id(OrderId::new()));
        assert!(matches!(missing, Err(GatewayError::Rejected { .. })));

        let found = tokio_test::block_on(gateway.order_by_id(order.id));
        assert_eq!(found.map(|o| o.id), Ok(order.id));
    }

    #[test]
    fn failing_gateway_reports_outage() {
        let gateway = StubGateway::failing();
        let result = tokio_test::block_on(gateway.fetch_orders(CustomerId::new()));
        assert_eq!(
            result,
            Err(GatewayError::Unavailable("stubbed outage".to_string()))
        );
    }

    proptest! {
        #[test]
        fn set_search_touches_only_search(search in ".*", n in 0usize..4) {
            let reducer = OrderReducer::new();
            let env = test_env();
            let mut state = OrderState {
                orders: (0..n).map(|i| sample_order(f64::from(u32::try_from(i).unwrap_or(0)))).collect(),
                ..OrderState::default()
            };
            let before = state.clone();

            let _ = reducer.reduce(&mut state, OrderAction::SetSearch(search.clone()), &env);

            prop_assert_eq!(&state.search, &search);
            prop_assert_eq!(&state.orders, &before.orders);
            prop_assert_eq!(&state.filtered, &before.filtered);
            prop_assert_eq!(state.repeated_total, before.repeated_total);
            prop_assert_eq!(state.status, before.status);
        }
    }
}
