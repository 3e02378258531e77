use crate::domain::{CustomerId, DomainEvent, MovieId};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{Result, StoreApplicationError};

/// サービスの依存関係
///
/// データ構造として定義し、振る舞いは持たない。
/// 各ユースケース関数に明示的に渡す。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub movie_catalog: Arc<dyn MovieCatalog>,
    pub customer_directory: Arc<dyn CustomerDirectory>,
    pub transaction_ledger: Arc<dyn TransactionLedger>,
    pub payment_gateway: Arc<dyn PaymentGateway>,
    pub notification_service: Arc<dyn NotificationService>,
}

/// カタログから映画のハンドルを取得するヘルパー関数
///
/// # エラー
/// - MovieCatalogError: カタログの読み込み失敗
/// - MovieNotFound: 映画が存在しない
pub(super) async fn load_movie(
    deps: &ServiceDependencies,
    movie_id: &MovieId,
) -> Result<MovieHandle> {
    deps.movie_catalog
        .find(movie_id)
        .await
        .map_err(StoreApplicationError::MovieCatalogError)?
        .ok_or(StoreApplicationError::MovieNotFound)
}

/// ディレクトリから顧客のハンドルを取得するヘルパー関数
pub(super) async fn load_customer(
    deps: &ServiceDependencies,
    customer_id: CustomerId,
) -> Result<CustomerHandle> {
    deps.customer_directory
        .find(customer_id)
        .await
        .map_err(StoreApplicationError::CustomerDirectoryError)?
        .ok_or(StoreApplicationError::CustomerNotFound)
}

/// 通知を送る
///
/// 通知の失敗はユースケースの結果に影響させず、警告として記録する。
pub(super) async fn notify(deps: &ServiceDependencies, event: DomainEvent) {
    if let Err(e) = deps.notification_service.notify(&event).await {
        tracing::warn!(error = %e, ?event, "Failed to send notification");
    }
}
