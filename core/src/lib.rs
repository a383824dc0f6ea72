//! # Slicestate Core
//!
//! Core traits and types for the Slicestate architecture.
//!
//! This crate provides the fundamental abstractions for a sliced,
//! unidirectional state container: application state is split into
//! independently owned slices, each transformed by a pure reducer in
//! response to named actions, and composed into one root state tree.
//!
//! ## Core Concepts
//!
//! - **State**: One slice's owned region of the application state tree
//! - **Action**: All possible inputs to a reducer (setters, async-operation
//!   commands, async-operation lifecycle events)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O inside a reducer)
//! - Dependency Injection via Environment
//! - Exactly one slice changes per dispatched action; siblings are untouched
//!
//! ## Example
//!
//! ```
//! use slicestate_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct SearchState {
//!     query: String,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum SearchAction {
//!     SetQuery(String),
//!     Clear,
//! }
//!
//! struct SearchReducer;
//!
//! impl Reducer for SearchReducer {
//!     type State = SearchState;
//!     type Action = SearchAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut SearchState,
//!         action: SearchAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<SearchAction>; 4]> {
//!         match action {
//!             SearchAction::SetQuery(q) => state.query = q,
//!             SearchAction::Clear => state.query.clear(),
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{SmallVec, smallvec};

pub mod composition;
pub mod lifecycle;

pub use effect::Effect;
pub use lifecycle::AsyncStatus;
pub use reducer::Reducer;

/// Reducer module - The core trait for slice transformation logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
/// They contain all state-transition logic and are deterministic and testable.
pub mod reducer {
    use super::SmallVec;
    use super::effect::Effect;

    /// The Reducer trait - core abstraction for a slice's transformation logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The slice state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Purity
    ///
    /// `reduce` must be pure: given the same prior state and action it
    /// produces the same next state, and it performs no I/O. Anything
    /// asynchronous is returned as an [`Effect`] description and executed
    /// by the runtime, which feeds resulting actions back in.
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for OrderReducer {
    ///     type State = OrderState;
    ///     type Action = OrderAction;
    ///     type Environment = OrderEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut OrderState,
    ///         action: OrderAction,
    ///         env: &OrderEnvironment,
    ///     ) -> SmallVec<[Effect<OrderAction>; 4]> {
    ///         match action {
    ///             OrderAction::SetSearch(text) => {
    ///                 state.search = text;
    ///                 smallvec![Effect::None]
    ///             }
    ///             _ => smallvec![Effect::None],
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// Effect descriptions to be executed by the runtime. An action the
        /// reducer does not recognize must leave `state` untouched and
        /// return no effects.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution) and are composable.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;
    use std::time::Duration;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the Store
    /// runtime. An async operation's lifecycle (started, succeeded, failed)
    /// rides on [`Effect::Future`]: the reducer records "started" in state,
    /// returns a future resolving to the succeeded/failed action, and the
    /// runtime dispatches that action back in.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects in parallel
        Parallel(Vec<Effect<Action>>),

        /// Run effects sequentially
        Sequential(Vec<Effect<Action>>),

        /// Delayed action (for debounce-style dispatch)
        Delay {
            /// How long to wait
            duration: Duration,
            /// Action to dispatch after delay
            action: Box<Action>,
        },

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into the reducer
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
                Effect::Delay { duration, action } => f
                    .debug_struct("Effect::Delay")
                    .field("duration", duration)
                    .field("action", action)
                    .finish(),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }
    }

    impl<Action> Effect<Action>
    where
        Action: Send + 'static,
    {
        /// Rewrite the action type of this effect
        ///
        /// Used when a child slice's reducer runs inside a larger state
        /// tree: the child returns `Effect<ChildAction>`, and the
        /// composition layer lifts it into the root action space with the
        /// variant constructor as `embed`.
        ///
        /// ```ignore
        /// let lifted: Effect<AppAction> = effect.map_action(AppAction::Order);
        /// ```
        #[must_use]
        pub fn map_action<B>(self, embed: fn(Action) -> B) -> Effect<B>
        where
            B: Send + 'static,
        {
            match self {
                Effect::None => Effect::None,
                Effect::Parallel(effects) => Effect::Parallel(
                    effects.into_iter().map(|e| e.map_action(embed)).collect(),
                ),
                Effect::Sequential(effects) => Effect::Sequential(
                    effects.into_iter().map(|e| e.map_action(embed)).collect(),
                ),
                Effect::Delay { duration, action } => Effect::Delay {
                    duration,
                    action: Box::new(embed(*action)),
                },
                Effect::Future(fut) => {
                    Effect::Future(Box::pin(async move { fut.await.map(embed) }))
                },
            }
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter. Async collaborators (network gateways)
/// follow the same pattern with `Pin<Box<dyn Future>>`-returning methods
/// so they stay dyn-compatible and can be captured by effects.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use slicestate_core::environment::{Clock, SystemClock};
    ///
    /// let clock = SystemClock;
    /// let now = clock.now();
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}
