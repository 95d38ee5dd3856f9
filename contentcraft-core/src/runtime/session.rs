//! Per-form state.
//!
//! A [`FormSession`] remembers the last outcome of one tool form and allows a
//! single outstanding call at a time. The submit control is enabled only when
//! a credential is present and nothing is in flight.

use super::executor::ContentCraft;
use crate::error::CraftError;
use crate::tools::Tool;
use arc_swap::ArcSwap;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// What a form currently displays
#[derive(Debug, Clone, PartialEq)]
pub enum FormStatus<O> {
    /// Nothing submitted yet
    Idle,
    /// A call is outstanding
    Loading,
    /// The last call produced a result
    Ready(O),
    /// The last submission failed with this message
    Failed(String),
}

/// Clears the in-flight flag when the submission ends, even if the future
/// is dropped midway.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// State holder for one tool form.
pub struct FormSession<T: Tool> {
    craft: ContentCraft,
    state: ArcSwap<FormStatus<T::Output>>,
    in_flight: AtomicBool,
    _tool: PhantomData<fn(&T)>,
}

impl<T: Tool> std::fmt::Debug for FormSession<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormSession")
            .field("tool", &T::CONTEXT)
            .field("in_flight", &self.is_loading())
            .finish()
    }
}

impl<T: Tool> FormSession<T> {
    pub fn new(craft: ContentCraft) -> Self {
        Self {
            craft,
            state: ArcSwap::from_pointee(FormStatus::Idle),
            in_flight: AtomicBool::new(false),
            _tool: PhantomData,
        }
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        self.craft.can_submit() && !self.is_loading()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Snapshot of the current status
    pub fn status(&self) -> Arc<FormStatus<T::Output>> {
        self.state.load_full()
    }

    /// Message of the last failure, if the form is showing one
    pub fn error(&self) -> Option<String> {
        match self.state.load().as_ref() {
            FormStatus::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }

    /// Return the form to its initial state
    pub fn reset(&self) {
        if !self.is_loading() {
            self.state.store(Arc::new(FormStatus::Idle));
        }
    }
}

impl<T: Tool> FormSession<T>
where
    T::Output: Clone,
{

    /// Result of the last successful submission, if the form is showing one
    pub fn output(&self) -> Option<T::Output> {
        match self.state.load().as_ref() {
            FormStatus::Ready(output) => Some(output.clone()),
            _ => None,
        }
    }

    /// Submit the form.
    ///
    /// Previous results and errors are cleared first. Any failure is stored
    /// as the form's error message and also returned; the form stays usable
    /// for another attempt. A submit while another is outstanding returns
    /// [`CraftError::Busy`] and leaves the state untouched.
    pub async fn submit(&self, input: &T) -> Result<T::Output, CraftError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("{} submit ignored, request in progress", T::CONTEXT);
            return Err(CraftError::Busy);
        }
        let _guard = InFlight(&self.in_flight);

        self.state.store(Arc::new(FormStatus::Loading));

        match self.craft.run(input).await {
            Ok(output) => {
                self.state.store(Arc::new(FormStatus::Ready(output.clone())));
                Ok(output)
            }
            Err(err) => {
                self.state.store(Arc::new(FormStatus::Failed(err.to_string())));
                Err(err)
            }
        }
    }
}
