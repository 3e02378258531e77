use crate::domain::{Customer, CustomerId};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 顧客1人ごとのハンドル
pub type CustomerHandle = Arc<Mutex<Customer>>;

/// 顧客ディレクトリポート
///
/// 映画と顧客の両方をロックする場合は、必ず映画を先にロックする。
#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    /// 顧客を登録する。同じIDが既にある場合は`false`。
    async fn insert(&self, customer: Customer) -> Result<bool>;

    async fn find(&self, customer_id: CustomerId) -> Result<Option<CustomerHandle>>;
}
