use crate::domain::{Money, PaymentMethod};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 決済ゲートウェイポート
///
/// `Err`は決済・返金が成立しなかったことを意味する。
/// 購入ではこの結果が在庫操作の前提条件になる。
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn execute_payment(&self, method: PaymentMethod, amount: Money) -> Result<()>;

    async fn execute_refund(&self, method: PaymentMethod, amount: Money) -> Result<()>;
}
