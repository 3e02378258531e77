use crate::domain::{CustomerId, PaymentTransaction, TransactionId};
use crate::ports::transaction_ledger::{
    Result, TransactionHandle, TransactionLedger as TransactionLedgerTrait,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

struct LedgerEntry {
    transaction_id: TransactionId,
    customer_id: CustomerId,
    handle: TransactionHandle,
}

/// インメモリの取引台帳（記録順を保持する）
///
/// IDと顧客は索引として別に持ち、検索時に取引のロックを取らない。
pub struct TransactionLedger {
    entries: RwLock<Vec<LedgerEntry>>,
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }
}

impl Default for TransactionLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransactionLedgerTrait for TransactionLedger {
    async fn record(&self, transaction: PaymentTransaction) -> Result<()> {
        let entry = LedgerEntry {
            transaction_id: transaction.transaction_id().clone(),
            customer_id: transaction.customer_id(),
            handle: Arc::new(Mutex::new(transaction)),
        };
        self.entries.write().await.push(entry);
        Ok(())
    }

    async fn find(&self, transaction_id: &TransactionId) -> Result<Option<TransactionHandle>> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .find(|entry| &entry.transaction_id == transaction_id)
            .map(|entry| Arc::clone(&entry.handle)))
    }

    async fn list_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<PaymentTransaction>> {
        let handles: Vec<TransactionHandle> = self
            .entries
            .read()
            .await
            .iter()
            .filter(|entry| entry.customer_id == customer_id)
            .map(|entry| Arc::clone(&entry.handle))
            .collect();

        let mut found = Vec::with_capacity(handles.len());
        for handle in handles {
            found.push(handle.lock().await.clone());
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Money, MovieId, PaymentMethod};

    fn transaction(customer_id: CustomerId) -> PaymentTransaction {
        PaymentTransaction::new(
            customer_id,
            MovieId::new("tt1"),
            Money::from_units(10).unwrap(),
            PaymentMethod::Fps,
        )
    }

    #[tokio::test]
    async fn test_find_and_list_for_customer() {
        let ledger = TransactionLedger::new();
        let alice = CustomerId::new();
        let bob = CustomerId::new();
        let first = transaction(alice);
        let first_id = first.transaction_id().clone();
        ledger.record(first).await.unwrap();
        ledger.record(transaction(bob)).await.unwrap();
        ledger.record(transaction(alice)).await.unwrap();

        let found = ledger.find(&first_id).await.unwrap();
        let listed = ledger.list_for_customer(alice).await.unwrap();

        assert!(found.is_some());
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].transaction_id(), &first_id);
    }

    #[tokio::test]
    async fn test_find_unknown_transaction() {
        let ledger = TransactionLedger::new();
        let found = ledger.find(&TransactionId::new("TXN-0-0")).await.unwrap();
        assert!(found.is_none());
    }
}
