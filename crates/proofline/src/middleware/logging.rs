use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            // Raw keys are noisy; the translated action is logged instead
            Action::Global(GlobalAction::KeyPressed(_)) => {
                log::trace!("Action: {:?}", action);
            }
            _ => log::debug!("Action: {:?}", action),
        }

        true
    }
}
