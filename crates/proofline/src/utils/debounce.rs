//! Restartable one-shot timer
//!
//! Every `restart` aborts the previous timer task, so the action is
//! dispatched at most once per quiet period.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

pub struct Debouncer {
    runtime: Handle,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(runtime: Handle, delay: Duration) -> Self {
        Self {
            runtime,
            delay,
            pending: None,
        }
    }

    /// Dispatch `action` once `delay` has passed without another restart
    pub fn restart(&mut self, dispatcher: &Dispatcher, action: Action) {
        self.cancel();

        let dispatcher = dispatcher.clone();
        let delay = self.delay;
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            dispatcher.dispatch(action);
        }));
    }

    /// Abort the pending timer, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::CorrectionAction;
    use std::sync::mpsc::{self, Receiver};

    fn debouncer() -> (Debouncer, Dispatcher, Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        let debouncer = Debouncer::new(Handle::current(), Duration::from_millis(500));
        (debouncer, Dispatcher::new(tx), rx)
    }

    fn request() -> Action {
        Action::Correction(CorrectionAction::Request)
    }

    #[tokio::test(start_paused = true)]
    async fn test_restarts_coalesce() {
        let (mut debouncer, dispatcher, rx) = debouncer();

        for _ in 0..5 {
            debouncer.restart(&dispatcher, request());
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(450)).await;

        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Correction(CorrectionAction::Request))
        ));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_dispatch() {
        let (mut debouncer, dispatcher, rx) = debouncer();

        debouncer.restart(&dispatcher, request());
        tokio::time::sleep(Duration::from_millis(200)).await;
        debouncer.cancel();
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert!(rx.try_recv().is_err());
    }
}
