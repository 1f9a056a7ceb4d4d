//! Explicit start/settle/cancel points for client actions that hit the
//! network, with per-action de-duplication and a depth-counted loading flag.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use crate::client::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKey {
    LoadCatalog,
    LoadFacets,
    ViewDetail,
    SubmitQuote,
    LoadQuotes,
    SubmitContact,
    SubmitTestDrive,
    ToggleFavorite,
    ExportComparison,
    Login,
    Register,
}

impl ActionKey {
    pub const ALL: [ActionKey; 11] = [
        ActionKey::LoadCatalog,
        ActionKey::LoadFacets,
        ActionKey::ViewDetail,
        ActionKey::SubmitQuote,
        ActionKey::LoadQuotes,
        ActionKey::SubmitContact,
        ActionKey::SubmitTestDrive,
        ActionKey::ToggleFavorite,
        ActionKey::ExportComparison,
        ActionKey::Login,
        ActionKey::Register,
    ];

    /// Actions whose results belong to the signed-in user.
    pub fn is_session_bound(self) -> bool {
        matches!(self, ActionKey::LoadQuotes | ActionKey::ToggleFavorite)
    }
}

impl fmt::Display for ActionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Default)]
struct TrackerState {
    in_flight: HashSet<ActionKey>,
    cancelled: HashSet<ActionKey>,
}

#[derive(Debug, Clone, Default)]
pub struct TaskTracker {
    inner: Rc<RefCell<TrackerState>>,
}

impl TaskTracker {
    /// Marks `key` in flight. A second start before the first settles is
    /// rejected.
    pub fn start(&self, key: ActionKey) -> Result<TaskGuard, ClientError> {
        let mut st = self.inner.borrow_mut();
        if !st.in_flight.insert(key) {
            return Err(ClientError::InFlight(key));
        }
        st.cancelled.remove(&key);
        Ok(TaskGuard {
            tracker: self.clone(),
            key,
        })
    }

    pub fn is_in_flight(&self, key: ActionKey) -> bool {
        self.inner.borrow().in_flight.contains(&key)
    }

    /// The loading indicator: on while any task is in flight.
    pub fn is_loading(&self) -> bool {
        !self.inner.borrow().in_flight.is_empty()
    }

    /// The request cannot be interrupted; its result is discarded on settle.
    pub fn cancel(&self, key: ActionKey) {
        let mut st = self.inner.borrow_mut();
        if st.in_flight.contains(&key) {
            st.cancelled.insert(key);
        }
    }

    fn settle(&self, key: ActionKey) {
        let mut st = self.inner.borrow_mut();
        st.in_flight.remove(&key);
        st.cancelled.remove(&key);
    }
}

/// Settles its task when dropped, on every exit path.
#[derive(Debug)]
pub struct TaskGuard {
    tracker: TaskTracker,
    key: ActionKey,
}

impl TaskGuard {
    pub fn key(&self) -> ActionKey {
        self.key
    }

    pub fn is_cancelled(&self) -> bool {
        self.tracker.inner.borrow().cancelled.contains(&self.key)
    }
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        self.tracker.settle(self.key);
    }
}
