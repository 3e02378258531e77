use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{
    CustomerId, Money, MovieId, PaymentCompleted, PaymentMethodError, RefundCompleted,
    TransactionError,
};

static TRANSACTION_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// 取引ID（"TXN-{ミリ秒}-{連番}"）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(String);

impl TransactionId {
    /// 現在時刻とプロセス内連番から新しいIDを採番する
    pub fn generate() -> Self {
        let sequence = TRANSACTION_SEQUENCE.fetch_add(1, Ordering::Relaxed) + 1;
        Self(format!(
            "TXN-{}-{}",
            Utc::now().timestamp_millis(),
            sequence
        ))
    }

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 支払い方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    CreditCard,
    Fps,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::Fps => "FPS",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = PaymentMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "creditcard" | "credit" => Ok(PaymentMethod::CreditCard),
            "fps" => Ok(PaymentMethod::Fps),
            _ => Err(PaymentMethodError::Unsupported(s.to_string())),
        }
    }
}

/// 取引の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Paid,
    Refunded,
}

/// 購入1回分の決済取引
///
/// 状態遷移：Pending → Paid → Refunded（逆方向には戻らない）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTransaction {
    transaction_id: TransactionId,
    customer_id: CustomerId,
    movie_id: MovieId,
    amount: Money,
    method: PaymentMethod,
    status: TransactionStatus,
    created_at: DateTime<Utc>,
}

impl PaymentTransaction {
    pub fn new(
        customer_id: CustomerId,
        movie_id: MovieId,
        amount: Money,
        method: PaymentMethod,
    ) -> Self {
        Self {
            transaction_id: TransactionId::generate(),
            customer_id,
            movie_id,
            amount,
            method,
            status: TransactionStatus::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn transaction_id(&self) -> &TransactionId {
        &self.transaction_id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn movie_id(&self) -> &MovieId {
        &self.movie_id
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    pub fn status(&self) -> TransactionStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_refundable(&self) -> bool {
        self.ensure_refundable().is_ok()
    }

    /// 支払い完了を記録する
    pub fn complete_payment(&mut self) -> Result<PaymentCompleted, TransactionError> {
        match self.status {
            TransactionStatus::Pending => {
                self.status = TransactionStatus::Paid;
                Ok(PaymentCompleted {
                    transaction_id: self.transaction_id.clone(),
                    amount: self.amount,
                })
            }
            TransactionStatus::Paid => Err(TransactionError::AlreadyPaid),
            TransactionStatus::Refunded => Err(TransactionError::AlreadyRefunded),
        }
    }

    /// 返金できる状態か確認する（状態は変更しない）
    pub fn ensure_refundable(&self) -> Result<(), TransactionError> {
        match self.status {
            TransactionStatus::Paid => Ok(()),
            TransactionStatus::Pending => Err(TransactionError::PaymentNotCompleted),
            TransactionStatus::Refunded => Err(TransactionError::AlreadyRefunded),
        }
    }

    /// 返金完了を記録する（1取引につき1回まで）
    pub fn complete_refund(&mut self) -> Result<RefundCompleted, TransactionError> {
        self.ensure_refundable()?;
        self.status = TransactionStatus::Refunded;
        Ok(RefundCompleted {
            transaction_id: self.transaction_id.clone(),
            amount: self.amount,
        })
    }
}
