//! Test timer — a `Timer` whose handles fire immediately, collapsing
//! the input-lock window in tests.

use std::time::Duration;

use reelquiz_core::timer::{Timer, TimerHandle};
use tokio::sync::oneshot;

/// A timer that has already fired by the time its handle is returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateTimer;

impl Timer for ImmediateTimer {
    fn start(&self, _duration: Duration) -> TimerHandle {
        let (fired_tx, fired_rx) = oneshot::channel();
        let (cancel_tx, _cancel_rx) = oneshot::channel();
        let _ = fired_tx.send(());
        TimerHandle::new(fired_rx, cancel_tx)
    }
}
