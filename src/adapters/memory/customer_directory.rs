use crate::domain::{Customer, CustomerId};
use crate::ports::customer_directory::{
    CustomerDirectory as CustomerDirectoryTrait, CustomerHandle, Result,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// インメモリの顧客ディレクトリ
pub struct CustomerDirectory {
    customers: RwLock<HashMap<CustomerId, CustomerHandle>>,
}

impl CustomerDirectory {
    pub fn new() -> Self {
        Self {
            customers: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for CustomerDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerDirectoryTrait for CustomerDirectory {
    async fn insert(&self, customer: Customer) -> Result<bool> {
        let mut customers = self.customers.write().await;
        if customers.contains_key(&customer.customer_id()) {
            return Ok(false);
        }
        customers.insert(customer.customer_id(), Arc::new(Mutex::new(customer)));
        Ok(true)
    }

    async fn find(&self, customer_id: CustomerId) -> Result<Option<CustomerHandle>> {
        Ok(self.customers.read().await.get(&customer_id).cloned())
    }
}
