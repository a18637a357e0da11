use std::sync::Arc;

use tracing::{info, instrument};

use crate::directory::model::PhoneAddress;
use crate::errors::ServiceError;
use crate::store::KvStore;

/// Create/read/update/delete over phone -> address entries.
///
/// Stateless between calls; the injected store owns all data. The phone is
/// used verbatim as the key, so `+1234567890` and `1234567890` are distinct.
#[derive(Clone)]
pub struct PhoneDirectory {
    store: Arc<dyn KvStore>,
}

impl PhoneDirectory {
    pub fn new(store: Arc<dyn KvStore>) -> Self { Self { store } }

    pub fn store(&self) -> &Arc<dyn KvStore> { &self.store }

    #[instrument(skip(self))]
    pub async fn get(&self, phone: &str) -> Result<PhoneAddress, ServiceError> {
        match self.store.get(phone).await? {
            Some(address) => Ok(PhoneAddress::new(phone, address)),
            None => Err(ServiceError::phone_not_found()),
        }
    }

    /// Fails with `Conflict` if the phone is already stored; the existing
    /// address is left untouched.
    #[instrument(skip(self, address))]
    pub async fn create(&self, phone: &str, address: &str) -> Result<PhoneAddress, ServiceError> {
        if !self.store.set_if_absent(phone, address).await? {
            return Err(ServiceError::phone_exists());
        }
        info!(event = "phone_created", "stored new phone address");
        Ok(PhoneAddress::new(phone, address))
    }

    #[instrument(skip(self, address))]
    pub async fn update(&self, phone: &str, address: &str) -> Result<PhoneAddress, ServiceError> {
        if !self.store.set_if_present(phone, address).await? {
            return Err(ServiceError::phone_not_found());
        }
        info!(event = "phone_updated", "replaced phone address");
        Ok(PhoneAddress::new(phone, address))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, phone: &str) -> Result<(), ServiceError> {
        if self.store.delete(phone).await? == 0 {
            return Err(ServiceError::phone_not_found());
        }
        info!(event = "phone_deleted", "removed phone address");
        Ok(())
    }
}
