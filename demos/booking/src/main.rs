//! Booking walk-through binary
//!
//! Wires the composed app store to an in-memory order gateway and drives a
//! whole booking session: quote, contact form, sign-in, order submission,
//! history fetch, and a repeat booking.

use chrono::Duration as ChronoDuration;
use slicestate_app::auth::AuthAction;
use slicestate_app::calculator::CalculatorAction;
use slicestate_app::domain::{CleaningKind, CustomerId, Order, OrderDraft, OrderId, Profile};
use slicestate_app::form_entry::FormEntryAction;
use slicestate_app::order::{GatewayError, GatewayFuture, OrderAction, OrderEnvironment, OrderGateway};
use slicestate_app::{AppAction, AppEnvironment, AppState, app_reducer};
use slicestate_core::environment::{Clock, SystemClock};
use slicestate_runtime::Store;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// In-memory gateway: a mutexed order book plus the system clock
struct InMemoryGateway {
    orders: Mutex<Vec<Order>>,
    clock: SystemClock,
}

impl InMemoryGateway {
    fn new(seed: Vec<Order>) -> Self {
        Self {
            orders: Mutex::new(seed),
            clock: SystemClock,
        }
    }
}

impl OrderGateway for InMemoryGateway {
    fn fetch_orders(&self, customer_id: CustomerId) -> GatewayFuture<'_, Vec<Order>> {
        Box::pin(async move {
            let orders = self.orders.lock().await;
            Ok(orders
                .iter()
                .filter(|o| o.customer_id == customer_id)
                .cloned()
                .collect())
        })
    }

    fn create_order(&self, draft: OrderDraft) -> GatewayFuture<'_, Order> {
        Box::pin(async move {
            if draft.address.trim().is_empty() {
                return Err(GatewayError::Rejected {
                    reason: "address is required".to_string(),
                });
            }

            let order = Order::from_draft(OrderId::new(), draft, self.clock.now());
            self.orders.lock().await.push(order.clone());
            Ok(order)
        })
    }

    fn order_by_id(&self, order_id: OrderId) -> GatewayFuture<'_, Order> {
        Box::pin(async move {
            self.orders
                .lock()
                .await
                .iter()
                .find(|o| o.id == order_id)
                .cloned()
                .ok_or_else(|| GatewayError::Rejected {
                    reason: format!("unknown order {order_id}"),
                })
        })
    }
}

fn order_outcome(action: &AppAction) -> bool {
    matches!(
        action,
        AppAction::Order(
            OrderAction::OrdersFetched(_)
                | OrderAction::OrdersFailed { .. }
                | OrderAction::OrderAccepted(_)
                | OrderAction::SubmitFailed { .. }
                | OrderAction::RepeatOrderLoaded(_)
                | OrderAction::RepeatFailed { .. }
        )
    )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "booking=debug,slicestate_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Booking Walk-through: Slicestate Architecture ===\n");

    let clock = SystemClock;
    let customer_id = CustomerId::new();

    // A past order so the history fetch has something to return
    let past_order = Order {
        id: OrderId::new(),
        customer_id,
        address: "12 Birch Lane".to_string(),
        service_date: clock.now() - ChronoDuration::days(30),
        kind: CleaningKind::Standard,
        extras: Vec::new(),
        total: 120.0,
        placed_at: clock.now() - ChronoDuration::days(31),
    };
    let past_order_id = past_order.id;

    let gateway = Arc::new(InMemoryGateway::new(vec![past_order]));
    let env = AppEnvironment::new(OrderEnvironment::new(gateway));
    let store = Store::new(AppState::default(), app_reducer(), env);

    // Quote: the customer fills in the calculator
    println!(">>> Calculator: 3 rooms, 2 bathrooms, deep cleaning");
    store
        .send(AppAction::Calculator(CalculatorAction::SetRooms(3)))
        .await?;
    store
        .send(AppAction::Calculator(CalculatorAction::SetBathrooms(2)))
        .await?;
    store
        .send(AppAction::Calculator(CalculatorAction::SetKind(
            CleaningKind::Deep,
        )))
        .await?;
    store
        .send(AppAction::Calculator(CalculatorAction::SetExtras(vec![
            "oven".to_string(),
            "fridge".to_string(),
        ])))
        .await?;
    store
        .send(AppAction::Calculator(CalculatorAction::SetTotal(240.0)))
        .await?;

    let quote = store.state(|s| s.calculator.clone()).await;
    println!("Quoted total: {} ({} kind)\n", quote.total, quote.kind);

    // Contact form
    println!(">>> Form entry: name, phone, address, date");
    store
        .send(AppAction::FormEntry(FormEntryAction::SetName(
            "Dana Petrova".to_string(),
        )))
        .await?;
    store
        .send(AppAction::FormEntry(FormEntryAction::SetPhone(
            "555-0134".to_string(),
        )))
        .await?;
    store
        .send(AppAction::FormEntry(FormEntryAction::SetAddress(
            "12 Birch Lane".to_string(),
        )))
        .await?;
    store
        .send(AppAction::FormEntry(FormEntryAction::SetDate(
            clock.now() + ChronoDuration::days(3),
        )))
        .await?;

    // Session
    println!(">>> Auth: storing session token and profile\n");
    store
        .send(AppAction::Auth(AuthAction::SetToken(
            "demo-session-token".to_string(),
        )))
        .await?;
    store
        .send(AppAction::Auth(AuthAction::SetProfile(Profile {
            id: customer_id,
            name: "Dana Petrova".to_string(),
            phone: "555-0134".to_string(),
            email: "dana@example.com".to_string(),
        })))
        .await?;

    // History fetch (async lifecycle: started -> succeeded/failed)
    println!(">>> Sending: FetchOrders");
    let outcome = store
        .send_and_wait_for(
            AppAction::Order(OrderAction::FetchOrders { customer_id }),
            order_outcome,
            Duration::from_secs(5),
        )
        .await?;
    println!("Fetch outcome: {outcome:?}");

    let history = store.state(|s| s.order.orders.len()).await;
    println!("Orders in history: {history}\n");

    // Submit the new booking assembled from calculator + form
    let (form, quote) = store
        .state(|s| (s.form_entry.clone(), s.calculator.clone()))
        .await;
    let draft = OrderDraft {
        customer_id,
        address: form.address,
        service_date: form.date.unwrap_or_else(|| clock.now()),
        kind: quote.kind,
        extras: quote.extras,
        total: quote.total,
    };

    println!(">>> Sending: SubmitOrder");
    let outcome = store
        .send_and_wait_for(
            AppAction::Order(OrderAction::SubmitOrder { draft }),
            order_outcome,
            Duration::from_secs(5),
        )
        .await?;
    println!("Submit outcome: {outcome:?}");

    let history = store.state(|s| s.order.orders.len()).await;
    println!("Orders in history: {history}\n");

    // Repeat a past booking, then clear the stash
    println!(">>> Sending: LoadRepeatOrder");
    let outcome = store
        .send_and_wait_for(
            AppAction::Order(OrderAction::LoadRepeatOrder {
                order_id: past_order_id,
            }),
            order_outcome,
            Duration::from_secs(5),
        )
        .await?;
    println!("Repeat outcome: {outcome:?}");

    store
        .send(AppAction::Order(OrderAction::ResetRepeatedOrder))
        .await?;
    let repeat = store.state(|s| s.order.repeat_order.clone()).await;
    println!("Repeat stash after reset: {repeat:?}\n");

    store.shutdown(Duration::from_secs(5)).await?;

    println!("=== Session complete ===");
    println!("\nKey concepts demonstrated:");
    println!("  • Slices: calculator, formEntry, auth, order, admin");
    println!("  • Root composer: every action routed to exactly one slice");
    println!("  • Async lifecycle: pending -> succeeded/failed via the gateway");
    println!("  • Store: the only write entry point into the state tree");

    Ok(())
}
