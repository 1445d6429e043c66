//! HTTP transport for the session dispatcher
//!
//! A thin adapter: it extracts the user id and text from each request,
//! calls the [`Dispatcher`] and serialises the reply together with the
//! keyboard the client should draw.

mod handlers;
mod types;

pub use handlers::create_router;
#[allow(unused_imports)] // Public API re-exports
pub use types::*;

use crate::runtime::Dispatcher;
use crate::state_machine::SessionLimits;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    pub fn new(limits: SessionLimits) -> Self {
        Self {
            dispatcher: Arc::new(Dispatcher::new(limits)),
        }
    }
}
