use thiserror::Error;

/// 在庫操作のエラー（ドメイン上の失敗）
///
/// 呼び出し側が結果を確認して扱う。例外的な状況ではない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// 空いているレンタル用コピーがない
    #[error("No movie available for lending.")]
    NoRentalCopyAvailable,
    /// この顧客はこの映画を借りていない
    #[error("You have not rented this movie.")]
    NotRentedByCustomer,
    /// 販売用コピーが残っていない
    #[error("No movie available for selling.")]
    NoSaleCopyAvailable,
    /// 貸出中のコピーが残っている
    #[error("{0} rental copies of this movie are still rented.")]
    CopiesStillRented(usize),
}

/// レビュー操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// 同じ顧客のレビューが既にある
    #[error("Review already exists. You can edit your existing review.")]
    AlreadyExists,
    /// 編集対象のレビューがない
    #[error("You have not reviewed this movie yet.")]
    NotFound,
    /// レビューの対象が別の映画
    #[error("This review belongs to another movie.")]
    MovieMismatch,
}

/// レンタル期間の誤用（プログラミングエラー）
///
/// ドメイン上の失敗とは区別する。呼び出し側の誤りを示し、回復は想定しない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RentalPeriodError {
    /// 延長日数が0以下
    #[error("Extension days must be positive, got {0}")]
    NonPositiveExtension(i64),
    /// 返却期限が貸出日より前
    #[error("Return date cannot be before rental date")]
    DueBeforeRental,
}

/// レンタル延長のエラー
///
/// 借りていない（ドメイン上の失敗）と日数の誤用（プログラミングエラー）を区別して返す。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtendRentalError {
    #[error(transparent)]
    NotRented(#[from] InventoryError),
    #[error(transparent)]
    InvalidPeriod(#[from] RentalPeriodError),
}

/// 映画の価格が不正
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("Price must not be negative, got {0}")]
    Negative(i64),
    #[error("Price must be at most {max}, got {0}", max = crate::domain::MAX_PRICE)]
    TooLarge(i64),
}

/// 決済トランザクションの状態エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// 既に支払い済み
    #[error("Payment for this transaction has already been completed.")]
    AlreadyPaid,
    /// 支払いが完了していない
    #[error("Payment for this transaction was not completed.")]
    PaymentNotCompleted,
    /// 既に返金済み
    #[error("This transaction has already been refunded.")]
    AlreadyRefunded,
}

/// 支払い方法の解釈エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentMethodError {
    #[error("Unsupported payment method: {0}")]
    Unsupported(String),
}

/// 資格情報（パスワード）の検証エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// 8文字未満
    #[error("Password must be at least 8 characters long")]
    TooShort,
    /// 必須の文字種が欠けている
    #[error("{}", missing_classes_message(.has_upper, .has_lower, .has_digit, .has_special))]
    MissingCharacterClasses {
        has_upper: bool,
        has_lower: bool,
        has_digit: bool,
        has_special: bool,
    },
    /// ハッシュ化に失敗した
    #[error("Password could not be hashed")]
    HashingFailed,
}

/// 欠けている文字種を列挙したメッセージを組み立てる
fn missing_classes_message(
    has_upper: &bool,
    has_lower: &bool,
    has_digit: &bool,
    has_special: &bool,
) -> String {
    let missing: Vec<&str> = [
        (*has_digit, "at least one digit"),
        (*has_upper, "at least one uppercase letter"),
        (*has_lower, "at least one lowercase letter"),
        (*has_special, "at least one special character"),
    ]
    .into_iter()
    .filter(|(present, _)| !present)
    .map(|(_, label)| label)
    .collect();

    match missing.as_slice() {
        [] => "Password must be at least 8 characters long".to_string(),
        [only] => format!("Password must contain {}", only),
        [first, second] => format!("Password must contain {} and {}", first, second),
        [init @ .., last] => format!("Password must contain {}, and {}", init.join(", "), last),
    }
}
