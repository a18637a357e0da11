//! Phone/address directory: one record per phone key, address as the value.

pub mod model;
pub mod service;

pub use model::{NewPhoneAddress, PhoneAddress, UpdateAddress, Validate};
pub use service::PhoneDirectory;
