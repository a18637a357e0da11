//! Service layer for the phone/address directory.
//! - `store` holds the key-value capability the service depends on, with
//!   in-memory and Redis implementations.
//! - `directory` maps store outcomes onto create/read/update/delete results.
//! - `errors` is the error taxonomy shared with the HTTP layer.

pub mod errors;
pub mod store;
pub mod directory;

pub use directory::{PhoneAddress, PhoneDirectory};
pub use errors::ServiceError;
pub use store::{KvStore, MemoryKvStore, RedisKvStore};
