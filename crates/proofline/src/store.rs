use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::{self, Receiver};

/// Store - holds application state and manages the Redux loop
///
/// Actions flow through the middleware chain, then the root reducer.
/// Actions sent through the [`Dispatcher`] (by middleware or by request
/// tasks) queue up in a channel and are processed by [`Store::process_pending`].
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatcher feeding this store's queue, for enqueueing actions
    /// without processing them
    #[cfg(test)]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process an action through middleware chain and reducer, then any
    /// actions the middleware dispatched in response
    pub fn dispatch(&mut self, action: Action) {
        self.apply(action);
        self.process_pending();
    }

    /// Drain the action channel
    ///
    /// Called once per frame by the UI loop to pick up results from
    /// background tasks.
    pub fn process_pending(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            self.apply(action);
        }
    }

    fn apply(&mut self, action: Action) {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        if should_reduce {
            self.state = reduce(self.state.clone(), &action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{GlobalAction, StatusBarAction};
    use proofline_config::AppConfig;

    struct SwallowQuit;

    impl Middleware for SwallowQuit {
        fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
            if matches!(action, Action::Global(GlobalAction::Quit)) {
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                    "Quit swallowed",
                    "test",
                )));
                return false;
            }
            true
        }
    }

    #[test]
    fn test_consumed_action_skips_reducer_but_dispatches_follow_up() {
        let mut store = Store::new(AppState::new(AppConfig::default()));
        store.add_middleware(Box::new(SwallowQuit));

        store.dispatch(Action::Global(GlobalAction::Quit));

        assert!(store.state().running);
        assert_eq!(
            store.state().status_bar.latest().map(|m| m.message.as_str()),
            Some("Quit swallowed")
        );
    }

    #[test]
    fn test_external_dispatch_is_applied_on_process_pending() {
        let mut store = Store::new(AppState::new(AppConfig::default()));
        let dispatcher = store.dispatcher.clone();

        dispatcher.dispatch(Action::Global(GlobalAction::Quit));
        assert!(store.state().running);

        store.process_pending();
        assert!(!store.state().running);
    }
}
