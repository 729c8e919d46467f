//! In-memory account persistence adapters.

mod account;

pub use account::InMemoryAccountRepository;
