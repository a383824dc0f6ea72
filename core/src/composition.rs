//! Reducer composition utilities
//!
//! This module provides the pieces the root composer is built from:
//! - **`combine_reducers`**: Run multiple reducers on the same state/action
//! - **`scope_reducer`**: Focus a child reducer on a sub-state and sub-action
//!
//! A root reducer for a sliced state tree is `combine_reducers` over one
//! `scope_reducer` per slice. Every dispatched action is forwarded to every
//! scope; the one whose action prism matches runs its child reducer, and all
//! others take the explicit identity path (untouched state, no effects).
//!
//! # Examples
//!
//! ## Scoping a slice into a root tree
//!
//! ```
//! use slicestate_core::{Reducer, Effect, SmallVec, smallvec};
//! use slicestate_core::composition::{combine_reducers, scope_reducer};
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct SearchState {
//!     query: String,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum SearchAction {
//!     SetQuery(String),
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
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct RootState {
//!     search: SearchState,
//!     visits: u32,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum RootAction {
//!     Search(SearchAction),
//!     PageVisited,
//! }
//!
//! let root = combine_reducers(vec![Box::new(scope_reducer(
//!     SearchReducer,
//!     |root: &mut RootState| &mut root.search,
//!     |action| match action {
//!         RootAction::Search(a) => Some(a),
//!         _ => None,
//!     },
//!     RootAction::Search,
//!     |_env| &(),
//! ))]);
//!
//! let mut state = RootState::default();
//! root.reduce(&mut state, RootAction::Search(SearchAction::SetQuery("deep".into())), &());
//! assert_eq!(state.search.query, "deep");
//!
//! // Unrecognized by the scope: identity fallback, nothing changes.
//! let before = state.clone();
//! root.reduce(&mut state, RootAction::PageVisited, &());
//! assert_eq!(state, before);
//! ```

use crate::SmallVec;
use crate::effect::Effect;
use crate::reducer::Reducer;
use std::sync::Arc;

/// Boxed reducer trait object accepted by [`combine_reducers`].
pub type BoxedReducer<S, A, E> =
    Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence, and all effects are collected and
/// concatenated. The root reducer of a sliced state tree combines one scoped
/// reducer per slice; exactly one of them recognizes any given action.
///
/// The combined reducer shares its reducer list behind an `Arc`, so it stays
/// cheap to clone into a store runtime.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The action type
/// - `E`: The environment type
#[must_use]
pub fn combine_reducers<S, A, E>(
    reducers: Vec<BoxedReducer<S, A, E>>,
) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer {
        reducers: Arc::new(reducers),
    }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Arc<Vec<BoxedReducer<S, A, E>>>,
}

impl<S, A, E> Clone for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    fn clone(&self) -> Self {
        Self {
            reducers: Arc::clone(&self.reducers),
        }
    }
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut all_effects = SmallVec::new();

        for reducer in self.reducers.iter() {
            let effects = reducer.reduce(state, action.clone(), env);
            all_effects.extend(effects);
        }

        all_effects
    }
}

/// Scopes a child reducer to a sub-state, sub-action, and sub-environment of
/// a larger tree.
///
/// The three lenses are plain function pointers so the scope stays cheap and
/// effects can be lifted without capturing:
///
/// - `state_lens` borrows the slice's sub-state out of the root state
/// - `extract` is the action prism: `Some(sub_action)` when the root action
///   addresses this slice, `None` otherwise (the identity fallback)
/// - `embed` is the matching variant constructor, used to lift child effects
///   back into the root action space
/// - `env_lens` borrows the slice's environment out of the root environment
///   (for pure slices, `|_| &()`)
///
/// When `extract` returns `None` the scoped reducer does not touch the
/// sub-state at all and returns no effects, so sibling slices are guaranteed
/// unchanged by actions that are not theirs.
pub fn scope_reducer<S, SubS, A, SubA, E, SubE, R>(
    reducer: R,
    state_lens: fn(&mut S) -> &mut SubS,
    extract: fn(A) -> Option<SubA>,
    embed: fn(SubA) -> A,
    env_lens: fn(&E) -> &SubE,
) -> ScopedReducer<S, SubS, A, SubA, E, SubE, R>
where
    S: 'static,
    SubS: 'static,
    A: Send + 'static,
    SubA: Send + 'static,
    E: 'static,
    SubE: 'static,
    R: Reducer<State = SubS, Action = SubA, Environment = SubE>,
{
    ScopedReducer {
        reducer,
        state_lens,
        extract,
        embed,
        env_lens,
    }
}

/// A scoped reducer that runs a child reducer on one slice of a larger tree.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, SubA, E, SubE, R>
where
    S: 'static,
    SubS: 'static,
    A: Send + 'static,
    SubA: Send + 'static,
    E: 'static,
    SubE: 'static,
    R: Reducer<State = SubS, Action = SubA, Environment = SubE>,
{
    reducer: R,
    state_lens: fn(&mut S) -> &mut SubS,
    extract: fn(A) -> Option<SubA>,
    embed: fn(SubA) -> A,
    env_lens: fn(&E) -> &SubE,
}

impl<S, SubS, A, SubA, E, SubE, R> Reducer for ScopedReducer<S, SubS, A, SubA, E, SubE, R>
where
    S: 'static,
    SubS: 'static,
    A: Send + 'static,
    SubA: Send + 'static,
    E: 'static,
    SubE: 'static,
    R: Reducer<State = SubS, Action = SubA, Environment = SubE>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        // Identity fallback: the action does not address this slice.
        let Some(sub_action) = (self.extract)(action) else {
            return SmallVec::new();
        };

        let effects =
            self.reducer
                .reduce((self.state_lens)(state), sub_action, (self.env_lens)(env));

        effects
            .into_iter()
            .map(|effect| effect.map_action(self.embed))
            .collect()
    }
}
