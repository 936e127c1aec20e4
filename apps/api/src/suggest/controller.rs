#![allow(dead_code)]

//! Debounced industry suggestion controller.
//!
//! Watches free-text company-description input and pre-fills the industry
//! field without thrashing the classifier on every keystroke. Intended for
//! interactive frontends (the site form, internal tooling) that drive it
//! from their input events.
//!
//! State machine: Idle → Pending (timer armed) → InFlight → Applied /
//! Ignored / Failed → Idle.
//!
//! - Every edit cancels a previously armed timer; a qualifying edit (length
//!   > 20 chars) re-arms the 500 ms trailing-edge timer — never stacking,
//!   and never firing for text the user has since replaced.
//! - When the timer fires, exactly one classification call is issued. The
//!   call itself is never cancelled: a result that completes legitimately is
//!   applied regardless of latency, as long as it is a member of the active
//!   enumerated list. A stale-but-valid result overwriting newer input is a
//!   known race, accepted as-is.
//! - Classifier failures are logged and dropped; the controller returns to
//!   idle with the field untouched.
//! - Teardown cancels an armed timer that has not fired, so no call is
//!   issued after the owning component is gone.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::suggest::classifier::IndustryClassifier;

/// Trailing-edge debounce window.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);
/// Minimum description length (exclusive) before a suggestion is attempted.
pub const MIN_DESCRIPTION_CHARS: usize = 20;

pub struct SuggestionController {
    classifier: Arc<dyn IndustryClassifier>,
    /// The active enumerated list; foreign classifier results never mutate
    /// the field.
    industries: &'static [&'static str],
    /// The form's industry field. Shared with the timer task.
    field: Arc<Mutex<Option<String>>>,
    /// Cancellation handle for the currently armed timer, if any. Dropping
    /// the sender cancels the timer only while it has not yet fired.
    armed: Option<oneshot::Sender<()>>,
}

impl SuggestionController {
    pub fn new(
        classifier: Arc<dyn IndustryClassifier>,
        industries: &'static [&'static str],
    ) -> Self {
        Self {
            classifier,
            industries,
            field: Arc::new(Mutex::new(None)),
            armed: None,
        }
    }

    /// The current value of the industry field.
    pub fn industry(&self) -> Option<String> {
        self.field.lock().unwrap().clone()
    }

    /// Manual selection by the user. Suggestions never block this, and it
    /// never blocks suggestions.
    pub fn set_industry(&self, value: &str) {
        *self.field.lock().unwrap() = Some(value.to_string());
    }

    /// Handles a text change. Every edit clears the pending window — the
    /// timer must only ever fire for the latest text — and qualifying input
    /// (length above the threshold) re-arms it.
    pub fn on_input(&mut self, text: &str) {
        // Replace, never stack: cancel the previously armed timer. If that
        // timer already fired its call is in flight and proceeds untouched.
        self.armed.take();

        if text.chars().count() <= MIN_DESCRIPTION_CHARS {
            return;
        }

        let (armed_tx, mut armed_rx) = oneshot::channel::<()>();
        self.armed = Some(armed_tx);

        let classifier = Arc::clone(&self.classifier);
        let industries = self.industries;
        let field = Arc::clone(&self.field);
        let text = text.to_string();

        tokio::spawn(async move {
            tokio::select! {
                // Cancellation wins over a simultaneous timer fire.
                biased;
                // Superseded or torn down before the window elapsed.
                _ = &mut armed_rx => return,
                _ = tokio::time::sleep(DEBOUNCE_WINDOW) => {}
            }

            // The timer fired: the call runs to completion from here.
            match classifier.classify(&text).await {
                Ok(industry) if industries.contains(&industry.as_str()) => {
                    debug!("applying industry suggestion: {industry}");
                    *field.lock().unwrap() = Some(industry);
                }
                Ok(foreign) => {
                    debug!("dropping suggestion outside active list: {foreign}");
                }
                Err(e) => {
                    warn!("industry suggestion failed: {e}");
                }
            }
        });
    }

    /// Cancels a pending (not yet fired) timer. Called on component teardown.
    pub fn teardown(&mut self) {
        self.armed.take();
    }
}

impl Drop for SuggestionController {
    fn drop(&mut self) {
        self.teardown();
    }
}
