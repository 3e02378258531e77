use crate::application::auth::AuthError;
use crate::application::store::StoreApplicationError;
use crate::domain::{CredentialError, InventoryError, ReviewError, TransactionError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub enum ApiError {
    Store(StoreApplicationError),
    Auth(AuthError),
    /// セッショントークンがない、または形式が不正
    Unauthenticated,
    /// 役割が操作に合わない
    Forbidden(&'static str),
    /// リクエストの値が不正
    BadRequest(String),
}

impl From<StoreApplicationError> for ApiError {
    fn from(err: StoreApplicationError) -> Self {
        ApiError::Store(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Auth(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::Store(err) => store_error_parts(err),
            ApiError::Auth(err) => auth_error_parts(err),
            ApiError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHENTICATED",
                "A valid x-session-token header is required".to_string(),
            ),
            ApiError::Forbidden(message) => {
                (StatusCode::FORBIDDEN, "FORBIDDEN", message.to_string())
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", message),
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}

fn store_error_parts(err: StoreApplicationError) -> (StatusCode, &'static str, String) {
    let message = err.to_string();
    match err {
        // 404 Not Found - リクエストされたリソースが存在しない
        StoreApplicationError::MovieNotFound => (StatusCode::NOT_FOUND, "MOVIE_NOT_FOUND", message),
        StoreApplicationError::CustomerNotFound => {
            (StatusCode::NOT_FOUND, "CUSTOMER_NOT_FOUND", message)
        }
        StoreApplicationError::TransactionNotFound => {
            (StatusCode::NOT_FOUND, "TRANSACTION_NOT_FOUND", message)
        }
        StoreApplicationError::Review(ReviewError::NotFound) => {
            (StatusCode::NOT_FOUND, "REVIEW_NOT_FOUND", message)
        }

        // 409 Conflict - 既存の状態と衝突する
        StoreApplicationError::MovieAlreadyExists => {
            (StatusCode::CONFLICT, "MOVIE_ALREADY_EXISTS", message)
        }
        StoreApplicationError::Review(ReviewError::AlreadyExists) => {
            (StatusCode::CONFLICT, "REVIEW_ALREADY_EXISTS", message)
        }
        StoreApplicationError::Transaction(TransactionError::AlreadyRefunded) => {
            (StatusCode::CONFLICT, "ALREADY_REFUNDED", message)
        }
        StoreApplicationError::Transaction(TransactionError::AlreadyPaid) => {
            (StatusCode::CONFLICT, "ALREADY_PAID", message)
        }
        StoreApplicationError::Inventory(InventoryError::CopiesStillRented(_)) => {
            (StatusCode::CONFLICT, "MOVIE_HAS_ACTIVE_RENTALS", message)
        }

        // 422 Unprocessable Entity - ビジネスルール違反
        StoreApplicationError::RentalLimitReached { .. } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "RENTAL_LIMIT_REACHED",
            message,
        ),
        StoreApplicationError::Inventory(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "INVENTORY_UNAVAILABLE",
            message,
        ),
        StoreApplicationError::Transaction(TransactionError::PaymentNotCompleted) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "PAYMENT_NOT_COMPLETED",
            message,
        ),

        // 400 Bad Request - 呼び出し側の誤り
        StoreApplicationError::InvalidRentalPeriod(_) => {
            (StatusCode::BAD_REQUEST, "INVALID_RENTAL_PERIOD", message)
        }
        StoreApplicationError::InvalidPrice(_) => {
            (StatusCode::BAD_REQUEST, "INVALID_PRICE", message)
        }
        StoreApplicationError::Review(ReviewError::MovieMismatch) => {
            (StatusCode::BAD_REQUEST, "REVIEW_MOVIE_MISMATCH", message)
        }

        // 403 Forbidden - 他人の取引
        StoreApplicationError::NotTransactionOwner => {
            (StatusCode::FORBIDDEN, "NOT_TRANSACTION_OWNER", message)
        }

        // 402 Payment Required - 決済が成立しなかった（在庫は変更なし）
        StoreApplicationError::PaymentFailed(ref e) => {
            tracing::warn!("Payment failed: {}", e);
            (StatusCode::PAYMENT_REQUIRED, "PAYMENT_FAILED", message)
        }

        // 500 Internal Server Error - システム障害
        // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
        StoreApplicationError::RefundFailed(ref e) => {
            tracing::error!("Refund failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "REFUND_FAILED",
                "Refund could not be processed".to_string(),
            )
        }
        StoreApplicationError::MovieCatalogError(ref e) => {
            tracing::error!("Movie catalog error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "MOVIE_CATALOG_ERROR",
                "Movie catalog error".to_string(),
            )
        }
        StoreApplicationError::CustomerDirectoryError(ref e) => {
            tracing::error!("Customer directory error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CUSTOMER_DIRECTORY_ERROR",
                "Customer directory error".to_string(),
            )
        }
        StoreApplicationError::TransactionLedgerError(ref e) => {
            tracing::error!("Transaction ledger error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TRANSACTION_LEDGER_ERROR",
                "Failed to record transaction".to_string(),
            )
        }
    }
}

fn auth_error_parts(err: AuthError) -> (StatusCode, &'static str, String) {
    let message = err.to_string();
    match err {
        AuthError::UsernameAlreadyTaken => {
            (StatusCode::CONFLICT, "USERNAME_ALREADY_TAKEN", message)
        }
        AuthError::InvalidCredential(CredentialError::HashingFailed) => {
            tracing::error!("Credential hashing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CREDENTIAL_HASHING_FAILED",
                "Account could not be created".to_string(),
            )
        }
        AuthError::InvalidCredential(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "INVALID_CREDENTIAL",
            message,
        ),
        AuthError::UsernameNotFound => (StatusCode::UNAUTHORIZED, "USERNAME_NOT_FOUND", message),
        AuthError::WrongPassword => (StatusCode::UNAUTHORIZED, "WRONG_PASSWORD", message),
        AuthError::SessionNotFound => (StatusCode::UNAUTHORIZED, "SESSION_NOT_FOUND", message),
        AuthError::CustomerDirectoryError(ref e) => {
            tracing::error!("Customer directory error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CUSTOMER_DIRECTORY_ERROR",
                "Customer directory error".to_string(),
            )
        }
    }
}
