//! Service layer
//!
//! The notifier sequences a run: derive fields, guard on issue keys, resolve
//! the tenant, authenticate and submit. Progress is reported through an
//! observer handed in by the caller instead of a global logger.

mod error;
mod notifier;
mod observer;

pub use error::{NotifyError, Stage};
pub use notifier::Notifier;
pub use observer::{NotifyEvent, NotifyObserver, TracingObserver};
