use crate::domain::DomainEvent;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 通知サービスポート
///
/// 顧客への通知配信メカニズムを抽象化する。
/// 会員ランクの変更や延滞返却などのイベントを受け取る。
#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn notify(&self, event: &DomainEvent) -> Result<()>;
}
