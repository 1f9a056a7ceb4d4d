//! The catalog client: the controller behind the browsing UI. Talks to the
//! dealership API over HTTP and keeps session and comparison state in a
//! local key-value store.

pub mod api;
pub mod app;
pub mod debounce;
pub mod error;
pub mod notify;
pub mod state;
pub mod storage;
pub mod tasks;
pub mod views;

pub use api::{DealershipApi, HttpApi};
pub use app::App;
pub use error::ClientError;
pub use notify::{Notifier, Toast, ToastKind};
pub use state::{AppState, Session};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use tasks::{ActionKey, TaskTracker};
pub use views::{CardView, CatalogView, QuoteHistoryRow, Suggestion};
