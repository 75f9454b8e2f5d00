//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see the driving port,
//! so they can be tested against a mock without any I/O.

use std::sync::Arc;

use crate::domain::ports::UsersCommand;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Wrap a [`UsersCommand`] implementation.
    ///
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::UserService;
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::memory::InMemoryUserRepository;
    ///
    /// let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
    /// let _state = HttpState::new(Arc::new(service));
    /// ```
    pub fn new(users: Arc<dyn UsersCommand>) -> Self {
        Self { users }
    }
}
