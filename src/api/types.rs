use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::store::PurchaseReceipt;
use crate::domain::{
    CopyLent, CopyReturned, MembershipChanged, MembershipTier, MovieDetails, MovieId,
    PaymentMethod, PaymentTransaction, Review, Role, Session, TransactionStatus,
    commands::AddMovie,
};

// ============================================================================
// Auth
// ============================================================================

/// 登録・サインインのリクエスト
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisteredResponse {
    pub user_id: Uuid,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub token: Uuid,
    pub role: Role,
    pub user_id: Uuid,
}

impl From<Session> for SignInResponse {
    fn from(session: Session) -> Self {
        Self {
            token: session.token.value(),
            role: session.role,
            user_id: session.user_id.value(),
        }
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// 映画追加リクエスト（POST /movies）
#[derive(Debug, Deserialize)]
pub struct AddMovieRequest {
    pub movie_id: String,
    pub title: String,
    pub director: String,
    pub studio: String,
    pub release_date: String,
    #[serde(default)]
    pub description: String,
    pub price: i64,
}

impl AddMovieRequest {
    pub fn to_command(&self) -> AddMovie {
        AddMovie {
            movie_id: MovieId::new(self.movie_id.trim()),
            details: MovieDetails {
                title: self.title.clone(),
                director: self.director.clone(),
                studio: self.studio.clone(),
                release_date: self.release_date.clone(),
                description: self.description.clone(),
                price: self.price,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MovieCreatedResponse {
    pub movie_id: String,
}

#[derive(Debug, Serialize)]
pub struct CopyAddedResponse {
    pub movie_id: String,
    pub copy_id: Uuid,
}

// ============================================================================
// Rental
// ============================================================================

#[derive(Debug, Serialize)]
pub struct RentalResponse {
    pub movie_id: String,
    pub copy_id: Uuid,
    pub rented_on: NaiveDate,
    pub due_on: NaiveDate,
}

impl From<CopyLent> for RentalResponse {
    fn from(event: CopyLent) -> Self {
        Self {
            movie_id: event.movie_id.value().to_string(),
            copy_id: event.copy_id.value(),
            rented_on: event.rented_on,
            due_on: event.due_on,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnResponse {
    pub movie_id: String,
    pub copy_id: Uuid,
    pub returned_on: NaiveDate,
    pub was_overdue: bool,
}

impl From<CopyReturned> for ReturnResponse {
    fn from(event: CopyReturned) -> Self {
        Self {
            movie_id: event.movie_id.value().to_string(),
            copy_id: event.copy_id.value(),
            returned_on: event.returned_on,
            was_overdue: event.was_overdue,
        }
    }
}

/// 返却期限延長リクエスト（POST /movies/:id/extend）
#[derive(Debug, Deserialize)]
pub struct ExtendRentalRequest {
    pub days: i64,
}

#[derive(Debug, Serialize)]
pub struct ExtendRentalResponse {
    pub movie_id: String,
    pub due_on: NaiveDate,
}

// ============================================================================
// Purchase
// ============================================================================

/// 購入リクエスト（"creditcard" | "credit" | "fps"）
#[derive(Debug, Deserialize)]
pub struct BuyMovieRequest {
    pub payment_method: String,
}

#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub transaction_id: String,
    pub movie_id: String,
    /// 表示用の金額（例: "$13.50"）
    pub amount: String,
    pub amount_cents: i64,
    pub payment_method: PaymentMethod,
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
}

impl From<PaymentTransaction> for TransactionResponse {
    fn from(transaction: PaymentTransaction) -> Self {
        Self {
            transaction_id: transaction.transaction_id().value().to_string(),
            movie_id: transaction.movie_id().value().to_string(),
            amount: transaction.amount().to_string(),
            amount_cents: transaction.amount().cents(),
            payment_method: transaction.method(),
            status: transaction.status(),
            created_at: transaction.created_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub transaction: TransactionResponse,
    pub copy_id: Uuid,
    /// 購入で会員ランクが上がった場合の新しいランク
    pub upgraded_to: Option<MembershipTier>,
}

impl From<PurchaseReceipt> for PurchaseResponse {
    fn from(receipt: PurchaseReceipt) -> Self {
        Self {
            transaction: TransactionResponse::from(receipt.transaction),
            copy_id: receipt.sold.copy_id.value(),
            upgraded_to: receipt.membership_change.map(|change| change.current),
        }
    }
}

// ============================================================================
// Review
// ============================================================================

/// レビュー投稿・編集リクエスト
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub comment: String,
    pub rating: i32,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub review_id: Uuid,
    pub movie_id: String,
    pub comment: String,
    /// 範囲外の評価で投稿された場合はnull
    pub rating: Option<u8>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            review_id: review.review_id().value(),
            movie_id: review.movie_id().value().to_string(),
            comment: review.comments().to_string(),
            rating: review.rating().map(|r| r.value()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CustomerReviewResponse {
    pub movie_title: Option<String>,
    #[serde(flatten)]
    pub review: ReviewResponse,
}

// ============================================================================
// Membership
// ============================================================================

/// 会員ランク変更リクエスト（"NON_MEMBER" | "GOLD" | "PLATINUM"）
#[derive(Debug, Deserialize)]
pub struct ChangeMembershipRequest {
    pub tier: String,
}

#[derive(Debug, Serialize)]
pub struct MembershipChangedResponse {
    pub customer_id: Uuid,
    pub previous: MembershipTier,
    pub current: MembershipTier,
}

impl From<MembershipChanged> for MembershipChangedResponse {
    fn from(change: MembershipChanged) -> Self {
        Self {
            customer_id: change.customer_id.value(),
            previous: change.previous,
            current: change.current,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// エラーレスポンス
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
