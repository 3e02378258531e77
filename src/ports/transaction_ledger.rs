use crate::domain::{CustomerId, PaymentTransaction, TransactionId};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 取引1件ごとのハンドル（返金の二重実行を防ぐためロックして状態遷移する）
pub type TransactionHandle = Arc<Mutex<PaymentTransaction>>;

/// 取引台帳ポート
#[async_trait]
pub trait TransactionLedger: Send + Sync {
    async fn record(&self, transaction: PaymentTransaction) -> Result<()>;

    async fn find(&self, transaction_id: &TransactionId) -> Result<Option<TransactionHandle>>;

    /// 顧客の取引を記録順で返す（スナップショット）
    async fn list_for_customer(&self, customer_id: CustomerId)
    -> Result<Vec<PaymentTransaction>>;
}
