//! One-shot timer abstraction.
//!
//! The round engine locks input for a fixed window after every answer.
//! The window is modelled as an explicit timer with a cancel handle so
//! tests can collapse it and so a future caller can abort it, even
//! though the engine itself never does.

use std::time::Duration;

use tokio::sync::oneshot;

/// Starts one-shot timers.
pub trait Timer: Send + Sync {
    /// Arms a timer that fires once after `duration`.
    fn start(&self, duration: Duration) -> TimerHandle;
}

/// Handle to an armed timer. Dropping the handle cancels the timer.
#[derive(Debug)]
pub struct TimerHandle {
    fired: oneshot::Receiver<()>,
    cancel: oneshot::Sender<()>,
}

impl TimerHandle {
    /// Builds a handle from its two channel ends. Implementations of
    /// [`Timer`] send on the `fired` side when the timer elapses and
    /// stop when the `cancel` side is signalled.
    #[must_use]
    pub fn new(fired: oneshot::Receiver<()>, cancel: oneshot::Sender<()>) -> Self {
        Self { fired, cancel }
    }

    /// Waits for the timer to elapse. Returns `false` if the timer was
    /// cancelled instead of firing.
    pub async fn fired(self) -> bool {
        self.fired.await.is_ok()
    }

    /// Cancels the timer. The fired side will never be signalled.
    pub fn cancel(self) {
        let _ = self.cancel.send(());
    }
}

/// Production timer backed by the tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    fn start(&self, duration: Duration) -> TimerHandle {
        let (fired_tx, fired_rx) = oneshot::channel();
        let (cancel_tx, cancel_rx) = oneshot::channel();
        tokio::spawn(async move {
            tokio::select! {
                () = tokio::time::sleep(duration) => {
                    let _ = fired_tx.send(());
                }
                _ = cancel_rx => {}
            }
        });
        TimerHandle::new(fired_rx, cancel_tx)
    }
}
