use crate::domain::DomainEvent;
use crate::ports::notification_service::{NotificationService as NotificationServiceTrait, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Mock implementation of NotificationService
///
/// Does not deliver anything; each event is written to the log
/// and kept in memory so tests can inspect what was sent.
pub struct NotificationService {
    sent: Mutex<Vec<DomainEvent>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Events notified so far, oldest first
    pub async fn sent(&self) -> Vec<DomainEvent> {
        self.sent.lock().await.clone()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationServiceTrait for NotificationService {
    async fn notify(&self, event: &DomainEvent) -> Result<()> {
        match event {
            DomainEvent::MembershipChanged(changed) => tracing::info!(
                customer_id = %changed.customer_id.value(),
                "Notification: membership is now {}",
                changed.current.label()
            ),
            DomainEvent::CopyReturned(returned) if returned.was_overdue => tracing::info!(
                customer_id = %returned.customer_id.value(),
                movie_id = returned.movie_id.value(),
                "Notification: movie was returned after its due date"
            ),
            other => tracing::debug!(?other, "Notification"),
        }
        self.sent.lock().await.push(event.clone());
        Ok(())
    }
}
