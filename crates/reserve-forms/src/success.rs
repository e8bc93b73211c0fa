// File: src/success.rs
// Purpose: Success indicator after a valid submit, reverted by a detached timer

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::{Handle, TryCurrentError};

/// How long the success indicator stays up before the dialog closes.
pub const SUCCESS_REVERT_DELAY: Duration = Duration::from_secs(5);

/// Page elements touched after a successful submission.
pub trait SuccessSurface: Send + 'static {
    /// Empty every input of the form.
    fn reset_inputs(&mut self);
    fn show_success(&mut self);
    fn hide_success(&mut self);
    fn close_dialog(&mut self);
}

/// Notified once per submit attempt that passes validation.
///
/// The controller never waits on or inspects what the signal does.
pub trait SuccessSignal {
    fn fire(&mut self);
}

impl<F: FnMut()> SuccessSignal for F {
    fn fire(&mut self) {
        self()
    }
}

/// Shows the success indicator right away and schedules the revert.
///
/// Each [`fire`](SuccessSignal::fire) resets the inputs, shows the indicator,
/// then spawns a task on `runtime` that sleeps for the delay before closing
/// the dialog and hiding the indicator. The task is never joined.
pub struct TimedSuccess<S> {
    surface: Arc<Mutex<S>>,
    runtime: Handle,
    delay: Duration,
}

impl<S: SuccessSurface> TimedSuccess<S> {
    pub fn new(surface: Arc<Mutex<S>>, runtime: Handle) -> Self {
        Self {
            surface,
            runtime,
            delay: SUCCESS_REVERT_DELAY,
        }
    }

    /// Uses the runtime the caller is running on.
    pub fn on_current_runtime(surface: Arc<Mutex<S>>) -> Result<Self, TryCurrentError> {
        Ok(Self::new(surface, Handle::try_current()?))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn surface(&self) -> &Arc<Mutex<S>> {
        &self.surface
    }
}

impl<S: SuccessSurface> SuccessSignal for TimedSuccess<S> {
    fn fire(&mut self) {
        with_surface(&self.surface, |surface| {
            surface.reset_inputs();
            surface.show_success();
        });

        let surface = Arc::clone(&self.surface);
        let delay = self.delay;
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            with_surface(&surface, |surface| {
                surface.close_dialog();
                surface.hide_success();
            });
            tracing::debug!(?delay, "success indicator reverted");
        });
    }
}

// Poisoned locks are recovered, the surface keeps no invariants across calls.
fn with_surface<S>(surface: &Mutex<S>, f: impl FnOnce(&mut S)) {
    let mut guard = surface.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard);
}
