//! Transient status messages

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use garagem_types::{MessageKind, Notifier, NotifyError, DEFAULT_STATUS_DURATION};
use tokio::task::JoinHandle;
use tracing::{error, warn};

use crate::element::{lock, Document, ElementRef};

/// Id of the element that displays status messages
pub const STATUS_ELEMENT_ID: &str = "status-message";

const SHOW_CLASS: &str = "show";

/// The auto-hide waiting to run, if any
#[derive(Default)]
struct PendingHide {
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

fn lock_pending(pending: &Mutex<PendingHide>) -> MutexGuard<'_, PendingHide> {
    pending.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shows messages in the status element and hides them after a delay.
///
/// At most one auto-hide is pending per display: each new message cancels
/// the previous one. Clones share that state.
#[derive(Clone)]
pub struct StatusDisplay {
    document: Document,
    element_id: String,
    duration: Duration,
    pending: Arc<Mutex<PendingHide>>,
}

impl StatusDisplay {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            element_id: STATUS_ELEMENT_ID.to_string(),
            duration: DEFAULT_STATUS_DURATION,
            pending: Arc::new(Mutex::new(PendingHide::default())),
        }
    }

    pub fn with_element_id(mut self, element_id: &str) -> Self {
        self.element_id = element_id.to_string();
        self
    }

    /// Duration used by [`StatusDisplay::show`]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Show `message` for the display's duration
    pub fn show(&self, message: &str, kind: MessageKind) {
        self.show_status_message(message, kind, self.duration);
    }

    /// Show `message` for `duration`. A missing status element is logged and
    /// otherwise ignored.
    pub fn show_status_message(&self, message: &str, kind: MessageKind, duration: Duration) {
        if let Err(err) = self.try_show(message, kind, duration) {
            error!(error = %err, "cannot show status message");
        }
    }

    /// Show `message` for `duration`, reporting a missing status element.
    ///
    /// The element is looked up on every call. Its text is set, its classes
    /// are replaced by exactly `show <kind>`, and `show` is removed once
    /// `duration` elapses. The text is left in place.
    pub fn try_show(
        &self,
        message: &str,
        kind: MessageKind,
        duration: Duration,
    ) -> Result<(), NotifyError> {
        let element = self
            .document
            .get_element_by_id(&self.element_id)
            .ok_or_else(|| NotifyError::TargetMissing(self.element_id.clone()))?;

        let mut pending = lock_pending(&self.pending);
        if let Some(handle) = pending.handle.take() {
            handle.abort();
        }
        pending.generation += 1;

        {
            let mut status = lock(&element);
            status.set_text(message);
            status
                .class_list_mut()
                .set_class_name(&format!("{} {}", SHOW_CLASS, kind.css_class()));
        }

        pending.handle = self.schedule_hide(element, pending.generation, duration);
        Ok(())
    }

    /// True while an auto-hide is waiting to run
    pub fn has_pending_dismissal(&self) -> bool {
        lock_pending(&self.pending)
            .handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn schedule_hide(
        &self,
        element: ElementRef,
        generation: u64,
        duration: Duration,
    ) -> Option<JoinHandle<()>> {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(_) => {
                warn!("no async runtime, status message will stay visible");
                return None;
            }
        };

        let pending = Arc::clone(&self.pending);
        Some(runtime.spawn(async move {
            tokio::time::sleep(duration).await;
            let state = lock_pending(&pending);
            // A newer message owns the element now
            if state.generation == generation {
                lock(&element).class_list_mut().remove(SHOW_CLASS);
            }
        }))
    }
}

impl Notifier for StatusDisplay {
    fn notify(
        &self,
        message: &str,
        kind: MessageKind,
        duration: Duration,
    ) -> Result<(), NotifyError> {
        self.try_show(message, kind, duration)
    }
}
