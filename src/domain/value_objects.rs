use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 映画ID - カタログコード（例: IMDB ID "tt0111161"）
///
/// 外部から与えられる不変の識別子。UUIDではなく文字列で保持する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// コピーID - レンタル用・販売用コピー1本ごとの識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CopyId(Uuid);

impl CopyId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for CopyId {
    fn default() -> Self {
        Self::new()
    }
}

/// 利用者ID - 顧客・管理者の共通識別子
///
/// 保持者の照合やレビューの重複判定はこのIDの等価性で行う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(Uuid);

impl CustomerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for CustomerId {
    fn default() -> Self {
        Self::new()
    }
}

/// レビューID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewId(Uuid);

impl ReviewId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for ReviewId {
    fn default() -> Self {
        Self::new()
    }
}

/// 評価値エラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RatingError {
    /// 0〜10の範囲外
    #[error("Rating should be 0 to 10")]
    OutOfRange(i32),
}

/// レビュー評価（0〜10）
///
/// 不変条件：0以上10以下。範囲外の値は型として存在できない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 10;

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for Rating {
    type Error = RatingError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(RatingError::OutOfRange(value));
        }
        Ok(Self(value as u8))
    }
}

/// 金額（最小通貨単位 = セント）
///
/// 浮動小数点の丸め誤差を避けるため整数で保持する。
/// 映画の価格は通貨単位の整数で与えられ、割引計算のためにセントへ変換する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// 通貨単位の整数から作る。セントへの変換で桁あふれする場合は`None`。
    pub fn from_units(units: i64) -> Option<Self> {
        units.checked_mul(100).map(Self)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    /// 割引率（%）を適用する。端数は絶対値で四捨五入し、符号は保つ。
    pub fn apply_discount(self, percent: u8) -> Self {
        let remaining = 100 - i128::from(percent.min(100));
        let discounted = (i128::from(self.0.unsigned_abs()) * remaining + 50) / 100;
        // 割引後の絶対値は元の絶対値以下なので i64 に収まる
        let discounted = i64::try_from(discounted).unwrap_or(i64::MAX);
        Self(self.0.signum() * discounted)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}
