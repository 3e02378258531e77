use thiserror::Error;

use crate::domain::{
    ExtendRentalError, InventoryError, MembershipTier, PriceError, RentalPeriodError, ReviewError,
    TransactionError,
};

/// 店舗アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum StoreApplicationError {
    /// 映画がカタログにない
    #[error("Movie not found")]
    MovieNotFound,

    /// 同じIDの映画が既にある
    #[error("Movie already exists in the catalog")]
    MovieAlreadyExists,

    /// 顧客が存在しない
    #[error("Customer not found")]
    CustomerNotFound,

    /// 取引が存在しない
    #[error("Transaction not found")]
    TransactionNotFound,

    /// 他の顧客の取引
    #[error("Transaction belongs to another customer")]
    NotTransactionOwner,

    /// 会員ランクの同時レンタル上限に達している
    #[error(
        "Rental limit reached! You can rent a maximum of {max} movie(s) with your {} membership.",
        .tier.label()
    )]
    RentalLimitReached { max: usize, tier: MembershipTier },

    /// 在庫操作の失敗
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// レビュー操作の失敗
    #[error(transparent)]
    Review(#[from] ReviewError),

    /// 取引の状態が不正
    #[error(transparent)]
    Transaction(#[from] TransactionError),

    /// レンタル期間の誤用（呼び出し側の誤り）
    #[error("Invalid rental period: {0}")]
    InvalidRentalPeriod(#[from] RentalPeriodError),

    /// 価格が不正（負または上限超過）
    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] PriceError),

    /// 決済が成立しなかった（在庫は変更していない）
    #[error("Payment failed")]
    PaymentFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// 返金が成立しなかった
    #[error("Refund failed")]
    RefundFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// MovieCatalogのエラー
    #[error("Movie catalog error")]
    MovieCatalogError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// CustomerDirectoryのエラー
    #[error("Customer directory error")]
    CustomerDirectoryError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// TransactionLedgerのエラー
    #[error("Transaction ledger error")]
    TransactionLedgerError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<ExtendRentalError> for StoreApplicationError {
    fn from(e: ExtendRentalError) -> Self {
        match e {
            ExtendRentalError::NotRented(e) => StoreApplicationError::Inventory(e),
            ExtendRentalError::InvalidPeriod(e) => StoreApplicationError::InvalidRentalPeriod(e),
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, StoreApplicationError>;
