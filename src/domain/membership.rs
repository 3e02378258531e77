use serde::{Deserialize, Serialize};

use super::{CustomerId, MembershipChanged, Money};

/// 会員ランク
///
/// ランクごとに振る舞いは持たず、定数の組だけを持つ閉じた列挙型。
/// 宣言順が特典の大きさの順になっている。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipTier {
    NonMember,
    Gold,
    Platinum,
}

impl MembershipTier {
    /// 同時にレンタルできる本数の上限
    pub fn max_rentals(&self) -> usize {
        match self {
            MembershipTier::NonMember => 2,
            MembershipTier::Gold => 5,
            MembershipTier::Platinum => 8,
        }
    }

    /// レンタル期間（日数）
    pub fn rental_days(&self) -> u32 {
        match self {
            MembershipTier::NonMember => 7,
            MembershipTier::Gold => 14,
            MembershipTier::Platinum => 21,
        }
    }

    /// 購入割引率（%）
    pub fn discount_percent(&self) -> u8 {
        match self {
            MembershipTier::NonMember => 0,
            MembershipTier::Gold => 10,
            MembershipTier::Platinum => 15,
        }
    }

    /// 購入割引率（0.0〜1.0）
    pub fn discount_fraction(&self) -> f64 {
        f64::from(self.discount_percent()) / 100.0
    }

    pub fn label(&self) -> &'static str {
        match self {
            MembershipTier::NonMember => "NON_MEMBER",
            MembershipTier::Gold => "GOLD",
            MembershipTier::Platinum => "PLATINUM",
        }
    }
}

impl std::str::FromStr for MembershipTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NON_MEMBER" => Ok(MembershipTier::NonMember),
            "GOLD" => Ok(MembershipTier::Gold),
            "PLATINUM" => Ok(MembershipTier::Platinum),
            _ => Err(format!("Invalid membership tier: {}", s)),
        }
    }
}

/// 顧客の会員資格
///
/// 現在のランクを保持し、ランク変更の入口となる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    tier: MembershipTier,
}

impl Membership {
    /// 新規作成（非会員から開始）
    pub fn new() -> Self {
        Self {
            tier: MembershipTier::NonMember,
        }
    }

    pub fn tier(&self) -> MembershipTier {
        self.tier
    }

    /// ランクを変更し、変更通知イベントを返す
    ///
    /// 自動昇格・管理者による直接変更のどちらもここを通る。
    pub fn set_tier(&mut self, customer_id: CustomerId, tier: MembershipTier) -> MembershipChanged {
        let previous = self.tier;
        self.tier = tier;
        tracing::info!(
            customer_id = %customer_id.value(),
            "Membership changed to: {}",
            tier.label()
        );
        MembershipChanged {
            customer_id,
            previous,
            current: tier,
        }
    }

    pub fn max_rentals(&self) -> usize {
        self.tier.max_rentals()
    }

    pub fn rental_days(&self) -> u32 {
        self.tier.rental_days()
    }

    pub fn discount_fraction(&self) -> f64 {
        self.tier.discount_fraction()
    }

    /// ランクの割引を適用した購入価格
    pub fn discounted_price(&self, price: Money) -> Money {
        price.apply_discount(self.tier.discount_percent())
    }
}

impl Default for Membership {
    fn default() -> Self {
        Self::new()
    }
}
