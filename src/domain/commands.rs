use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CustomerId, MembershipTier, MovieDetails, MovieId, PaymentMethod, TransactionId};

/// コマンド：映画をカタログに追加する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddMovie {
    pub movie_id: MovieId,
    pub details: MovieDetails,
}

/// コマンド：映画を借りる
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentMovie {
    pub movie_id: MovieId,
    pub customer_id: CustomerId,
    pub rented_on: NaiveDate,
}

/// コマンド：借りた映画を返す
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnMovie {
    pub movie_id: MovieId,
    pub customer_id: CustomerId,
    pub returned_on: NaiveDate,
}

/// コマンド：返却期限を延長する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendRental {
    pub movie_id: MovieId,
    pub customer_id: CustomerId,
    pub days: i64,
}

/// コマンド：映画を購入する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyMovie {
    pub movie_id: MovieId,
    pub customer_id: CustomerId,
    pub payment_method: PaymentMethod,
    pub bought_on: NaiveDate,
}

/// コマンド：取引を返金する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundTransaction {
    pub transaction_id: TransactionId,
    pub customer_id: CustomerId,
}

/// コマンド：レビューを投稿する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddReview {
    pub movie_id: MovieId,
    pub customer_id: CustomerId,
    pub comments: String,
    pub rating: i32,
}

/// コマンド：自分のレビューを編集する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditReview {
    pub movie_id: MovieId,
    pub customer_id: CustomerId,
    pub comments: String,
    pub rating: i32,
}

/// コマンド：会員ランクを直接変更する（管理者）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeMembership {
    pub customer_id: CustomerId,
    pub tier: MembershipTier,
}
