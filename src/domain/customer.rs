use serde::{Deserialize, Serialize};

use super::{CustomerId, Membership, MembershipChanged, MembershipTier, MovieId, Review, ReviewId};

/// Gold昇格に必要な累計購入数
pub const GOLD_PURCHASE_THRESHOLD: usize = 3;
/// Platinum昇格に必要な累計購入数
pub const PLATINUM_PURCHASE_THRESHOLD: usize = 10;

/// 顧客集約
///
/// 映画は所有せず`MovieId`で参照する。
/// 借りている映画のリストは重複を許す（同じ映画を2本借りれば2件）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    customer_id: CustomerId,
    username: String,
    membership: Membership,
    rented_movies: Vec<MovieId>,
    purchased_movies: Vec<MovieId>,
    reviews: Vec<Review>,
}

impl Customer {
    pub fn new(customer_id: CustomerId, username: impl Into<String>) -> Self {
        Self {
            customer_id,
            username: username.into(),
            membership: Membership::new(),
            rented_movies: Vec::new(),
            purchased_movies: Vec::new(),
            reviews: Vec::new(),
        }
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn membership(&self) -> &Membership {
        &self.membership
    }

    pub fn tier(&self) -> MembershipTier {
        self.membership.tier()
    }

    pub fn rented_movies(&self) -> &[MovieId] {
        &self.rented_movies
    }

    pub fn purchased_movies(&self) -> &[MovieId] {
        &self.purchased_movies
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// 現在のランクでまだ借りられるか
    pub fn can_rent_more(&self) -> bool {
        self.rented_movies.len() < self.membership.max_rentals()
    }

    pub fn add_rented_movie(&mut self, movie_id: MovieId) {
        self.rented_movies.push(movie_id);
    }

    /// 最初に一致した1件だけ取り除く。取り除いたら`true`。
    pub fn remove_rented_movie(&mut self, movie_id: &MovieId) -> bool {
        match self.rented_movies.iter().position(|id| id == movie_id) {
            Some(index) => {
                self.rented_movies.remove(index);
                true
            }
            None => false,
        }
    }

    /// 購入を記録し、会員ランクの自動昇格を判定する
    ///
    /// ビジネスルール：
    /// - 判定には追加後の累計購入数を使う
    /// - 非会員 → Gold は累計3件以上、Gold → Platinum は累計10件以上
    /// - 昇格は直前のランクからのみ（1回の購入で2段階は上がらない）
    /// - Platinumからは昇格も自動降格もしない
    ///
    /// 昇格した場合は`MembershipChanged`を返す。
    pub fn add_purchased_movie(&mut self, movie_id: MovieId) -> Option<MembershipChanged> {
        self.purchased_movies.push(movie_id);

        let purchase_count = self.purchased_movies.len();
        let next = match self.membership.tier() {
            MembershipTier::NonMember if purchase_count >= GOLD_PURCHASE_THRESHOLD => {
                MembershipTier::Gold
            }
            MembershipTier::Gold if purchase_count >= PLATINUM_PURCHASE_THRESHOLD => {
                MembershipTier::Platinum
            }
            _ => return None,
        };

        tracing::info!(
            customer_id = %self.customer_id.value(),
            "Congratulations! You've been upgraded to {} membership!",
            next.label()
        );
        Some(self.membership.set_tier(self.customer_id, next))
    }

    /// 管理者によるランクの直接変更
    ///
    /// 以後の自動判定は変更後のランクの規則から再開する。
    pub fn set_membership(&mut self, tier: MembershipTier) -> MembershipChanged {
        self.membership.set_tier(self.customer_id, tier)
    }

    /// レビューを追加する（同じ`ReviewId`なら置き換え）
    pub fn add_review(&mut self, review: Review) {
        match self
            .reviews
            .iter_mut()
            .find(|existing| existing.review_id() == review.review_id())
        {
            Some(existing) => *existing = review,
            None => self.reviews.push(review),
        }
    }

    pub fn review(&self, review_id: ReviewId) -> Option<&Review> {
        self.reviews
            .iter()
            .find(|review| review.review_id() == review_id)
    }
}
