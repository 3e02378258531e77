use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CopyId, CustomerId, MembershipTier, Money, MovieId, TransactionId};

/// イベント：レンタル用コピーが貸し出された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyLent {
    pub movie_id: MovieId,
    pub copy_id: CopyId,
    pub customer_id: CustomerId,
    pub rented_on: NaiveDate,
    pub due_on: NaiveDate,
}

/// イベント：レンタル用コピーが返却された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyReturned {
    pub movie_id: MovieId,
    pub copy_id: CopyId,
    pub customer_id: CustomerId,
    pub returned_on: NaiveDate,
    pub was_overdue: bool,
}

/// イベント：販売用コピーが売れた
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopySold {
    pub movie_id: MovieId,
    pub copy_id: CopyId,
    pub customer_id: CustomerId,
    pub sold_on: NaiveDate,
}

/// イベント：会員ランクが変わった
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipChanged {
    pub customer_id: CustomerId,
    pub previous: MembershipTier,
    pub current: MembershipTier,
}

/// イベント：支払いが完了した
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCompleted {
    pub transaction_id: TransactionId,
    pub amount: Money,
}

/// イベント：返金が完了した
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundCompleted {
    pub transaction_id: TransactionId,
    pub amount: Money,
}

/// ドメインイベント統合型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainEvent {
    CopyLent(CopyLent),
    CopyReturned(CopyReturned),
    CopySold(CopySold),
    MembershipChanged(MembershipChanged),
    PaymentCompleted(PaymentCompleted),
    RefundCompleted(RefundCompleted),
}
