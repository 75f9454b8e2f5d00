//! Domain ports for the hexagonal boundary.
//!
//! [`UserRepository`] is the driven port persistence adapters implement;
//! [`UsersCommand`] is the driving port the HTTP adapter calls.

mod user_repository;
mod users_command;

#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
