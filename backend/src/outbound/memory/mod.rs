//! Process-local adapters used where no database is available.

mod in_memory_user_repository;

pub use in_memory_user_repository::InMemoryUserRepository;
