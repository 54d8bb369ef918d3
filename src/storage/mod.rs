//! Durable client-side persistence.

pub mod token_store;

pub use token_store::{
    BrowserStorage, ClientStore, MemoryStorage, StorageBackend, StoredSession, TokenStore,
};
