use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    CopyId, CopyLent, CopyReturned, CopySold, Customer, CustomerId, ExtendRentalError,
    InventoryError, Money, MovieId, PriceError, RentalCopy, Review, ReviewError, SaleCopy,
};

/// 標準の在庫数（レンタル用・販売用それぞれ）
pub const DEFAULT_COPIES_PER_POOL: usize = 10;

/// 価格の上限（通貨単位）
pub const MAX_PRICE: i64 = 1_000_000;

/// 映画の書誌情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub title: String,
    pub director: String,
    pub studio: String,
    /// 公開日（"YYYY-MM-DD"）
    pub release_date: String,
    pub description: String,
    /// 価格（通貨単位の整数）
    pub price: i64,
}

impl MovieDetails {
    /// 価格が0以上かつ上限以下であることを確認する
    pub fn validate_price(&self) -> Result<(), PriceError> {
        if self.price < 0 {
            return Err(PriceError::Negative(self.price));
        }
        if self.price > MAX_PRICE {
            return Err(PriceError::TooLarge(self.price));
        }
        Ok(())
    }
}

/// 映画集約 - カタログの1エントリ
///
/// レンタル用コピー、販売用コピー、販売済みコピー、レビューを所有する。
///
/// 不変条件：
/// - レンタル用コピーは「空き」か「1人が保持中」のどちらか
/// - 販売済みに移ったコピーは販売用に戻らない（sold_copiesは追記のみ）
/// - 1人の顧客につきレビューは1件まで
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    movie_id: MovieId,
    details: MovieDetails,
    rental_copies: Vec<RentalCopy>,
    sale_copies: Vec<SaleCopy>,
    sold_copies: Vec<SaleCopy>,
    reviews: Vec<Review>,
    /// カタログから取り下げ済み
    #[serde(default)]
    withdrawn: bool,
}

impl MovieRecord {
    /// 標準の在庫方針（レンタル用10本・販売用10本）で作成する
    pub fn new(movie_id: MovieId, details: MovieDetails) -> Self {
        Self::with_stock(
            movie_id,
            details,
            DEFAULT_COPIES_PER_POOL,
            DEFAULT_COPIES_PER_POOL,
        )
    }

    /// 在庫数を指定して作成する
    pub fn with_stock(
        movie_id: MovieId,
        details: MovieDetails,
        rental_copies: usize,
        sale_copies: usize,
    ) -> Self {
        let rental_copies = (0..rental_copies)
            .map(|_| RentalCopy::new(movie_id.clone()))
            .collect();
        let sale_copies = (0..sale_copies)
            .map(|_| SaleCopy::new(movie_id.clone()))
            .collect();

        Self {
            movie_id,
            details,
            rental_copies,
            sale_copies,
            sold_copies: Vec::new(),
            reviews: Vec::new(),
            withdrawn: false,
        }
    }

    pub fn movie_id(&self) -> &MovieId {
        &self.movie_id
    }

    pub fn details(&self) -> &MovieDetails {
        &self.details
    }

    pub fn title(&self) -> &str {
        &self.details.title
    }

    /// 販売価格
    ///
    /// # エラー
    /// 価格が負、または上限を超える場合は`PriceError`
    pub fn price(&self) -> Result<Money, PriceError> {
        self.details.validate_price()?;
        Money::from_units(self.details.price).ok_or(PriceError::TooLarge(self.details.price))
    }

    pub fn is_withdrawn(&self) -> bool {
        self.withdrawn
    }

    /// カタログからの取り下げに備えて印を付ける
    ///
    /// 貸出中のコピーが1本でもあれば取り下げられない。
    /// 取り下げた映画は以後貸出・販売の対象にしない。
    pub fn withdraw(&mut self) -> Result<(), InventoryError> {
        let rented = self.rental_copies.len() - self.available_rental_count();
        if rented > 0 {
            return Err(InventoryError::CopiesStillRented(rented));
        }
        self.withdrawn = true;
        Ok(())
    }

    pub fn display_text(&self) -> String {
        format!(
            "{} by {} IMDB ID: {} Studio: {} Release Date: {} Price: {}",
            self.details.title,
            self.details.director,
            self.movie_id,
            self.details.studio,
            self.details.release_date,
            self.details.price
        )
    }

    // ------------------------------------------------------------------------
    // レンタル
    // ------------------------------------------------------------------------

    pub fn rental_copies(&self) -> &[RentalCopy] {
        &self.rental_copies
    }

    /// 作成順で最初の空きコピー
    pub fn available_rental_copy(&self) -> Option<&RentalCopy> {
        self.rental_copies.iter().find(|copy| !copy.is_rented())
    }

    pub fn has_available_rental_copy(&self) -> bool {
        self.available_rental_copy().is_some()
    }

    /// 空きコピー数（キャッシュせず毎回数える）
    pub fn available_rental_count(&self) -> usize {
        self.rental_copies
            .iter()
            .filter(|copy| !copy.is_rented())
            .count()
    }

    pub fn rented_copy_by_customer(&self, customer_id: CustomerId) -> Option<&RentalCopy> {
        self.rental_copies
            .iter()
            .find(|copy| copy.is_held_by(customer_id))
    }

    /// 顧客に貸し出す
    ///
    /// ビジネスルール：
    /// - 作成順に走査し、最初の空きコピーを使う（待ち行列・公平性の保証なし）
    /// - 返却期限は貸出日 + 顧客の会員ランクのレンタル日数
    ///
    /// # エラー
    /// 空きがない場合は`InventoryError::NoRentalCopyAvailable`
    pub fn lend(
        &mut self,
        customer: &Customer,
        rented_on: NaiveDate,
    ) -> Result<CopyLent, InventoryError> {
        let customer_id = customer.customer_id();
        let rental_days = customer.membership().rental_days();

        let copy = self
            .rental_copies
            .iter_mut()
            .find(|copy| !copy.is_rented())
            .ok_or(InventoryError::NoRentalCopyAvailable)?;

        let copy_id = copy.copy_id();
        let record = copy
            .rent(customer_id, rented_on, rental_days)
            .ok_or(InventoryError::NoRentalCopyAvailable)?;

        Ok(CopyLent {
            movie_id: self.movie_id.clone(),
            copy_id,
            customer_id,
            rented_on: record.rented_on(),
            due_on: record.due_on(),
        })
    }

    /// 顧客が保持しているコピーを返却する
    ///
    /// 一致するコピーを1本だけ解放する。同じ映画を複数本借りている場合は
    /// その本数分呼び出す必要がある。
    ///
    /// # エラー
    /// 保持しているコピーがない場合は`InventoryError::NotRentedByCustomer`
    pub fn return_copy(
        &mut self,
        customer_id: CustomerId,
        returned_on: NaiveDate,
    ) -> Result<CopyReturned, InventoryError> {
        let copy = self
            .rental_copies
            .iter_mut()
            .find(|copy| copy.is_held_by(customer_id))
            .ok_or(InventoryError::NotRentedByCustomer)?;

        let copy_id = copy.copy_id();
        let was_overdue = copy
            .current_rental()
            .is_some_and(|record| record.is_overdue(returned_on));
        copy.check_in(returned_on);

        Ok(CopyReturned {
            movie_id: self.movie_id.clone(),
            copy_id,
            customer_id,
            returned_on,
            was_overdue,
        })
    }

    /// 顧客が保持しているコピーの返却期限を延長し、新しい期限を返す
    pub fn extend_rental(
        &mut self,
        customer_id: CustomerId,
        days: i64,
    ) -> Result<NaiveDate, ExtendRentalError> {
        let record = self
            .rental_copies
            .iter_mut()
            .find(|copy| copy.is_held_by(customer_id))
            .and_then(|copy| copy.current_rental_mut())
            .ok_or(InventoryError::NotRentedByCustomer)?;

        record.extend_rental_period(days)?;
        Ok(record.due_on())
    }

    pub fn add_rental_copy(&mut self) -> CopyId {
        let copy = RentalCopy::new(self.movie_id.clone());
        let copy_id = copy.copy_id();
        self.rental_copies.push(copy);
        copy_id
    }

    // ------------------------------------------------------------------------
    // 販売
    // ------------------------------------------------------------------------

    pub fn sale_copies(&self) -> &[SaleCopy] {
        &self.sale_copies
    }

    pub fn sold_copies(&self) -> &[SaleCopy] {
        &self.sold_copies
    }

    pub fn is_salable(&self) -> bool {
        !self.sale_copies.is_empty()
    }

    /// 販売済みは物理的に取り除かれるので、プールの大きさがそのまま在庫数
    pub fn available_sale_count(&self) -> usize {
        self.sale_copies.len()
    }

    pub fn sold_count(&self) -> usize {
        self.sold_copies.len()
    }

    /// 販売する
    ///
    /// ビジネスルール：
    /// - 作成順で最初の販売用コピーを販売済みへ移す
    /// - 同じ顧客による重複購入は制限しない
    ///
    /// # エラー
    /// 在庫がない場合は`InventoryError::NoSaleCopyAvailable`
    pub fn buy(
        &mut self,
        customer_id: CustomerId,
        sold_on: NaiveDate,
    ) -> Result<CopySold, InventoryError> {
        if !self.is_salable() {
            return Err(InventoryError::NoSaleCopyAvailable);
        }

        let mut copy = self.sale_copies.remove(0);
        copy.sell(customer_id);
        let copy_id = copy.copy_id();
        self.sold_copies.push(copy);

        Ok(CopySold {
            movie_id: self.movie_id.clone(),
            copy_id,
            customer_id,
            sold_on,
        })
    }

    pub fn add_sale_copy(&mut self) -> CopyId {
        let copy = SaleCopy::new(self.movie_id.clone());
        let copy_id = copy.copy_id();
        self.sale_copies.push(copy);
        copy_id
    }

    // ------------------------------------------------------------------------
    // レビュー
    // ------------------------------------------------------------------------

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// レビューを追加する
    ///
    /// # エラー
    /// - 他の映画に対するレビューは`ReviewError::MovieMismatch`
    /// - 同じ顧客のレビューが既にある場合は`ReviewError::AlreadyExists`（状態は変更しない）
    pub fn add_review(&mut self, review: Review) -> Result<(), ReviewError> {
        if review.movie_id() != &self.movie_id {
            return Err(ReviewError::MovieMismatch);
        }
        if self.review_by_customer(review.customer_id()).is_some() {
            return Err(ReviewError::AlreadyExists);
        }
        self.reviews.push(review);
        Ok(())
    }

    pub fn review_by_customer(&self, customer_id: CustomerId) -> Option<&Review> {
        self.reviews
            .iter()
            .find(|review| review.customer_id() == customer_id)
    }

    /// 既存のレビューをその場で編集する
    ///
    /// 編集で新しいレビューが作られることはない。
    /// 評価値が範囲外の場合は警告を出し、評価だけ変更しない（コメントは更新する）。
    ///
    /// # エラー
    /// レビューがない場合は`ReviewError::NotFound`
    pub fn edit_review(
        &mut self,
        customer_id: CustomerId,
        comments: impl Into<String>,
        rating: i32,
    ) -> Result<&Review, ReviewError> {
        let review = self
            .reviews
            .iter_mut()
            .find(|review| review.customer_id() == customer_id)
            .ok_or(ReviewError::NotFound)?;

        review.set_comments(comments);
        if let Err(e) = review.set_rating(rating) {
            tracing::warn!(movie_id = self.movie_id.value(), "{}", e);
        }
        Ok(&*review)
    }

    pub fn display_reviews(&self) -> String {
        if self.reviews.is_empty() {
            return "No reviews yet.".to_string();
        }
        self.reviews
            .iter()
            .map(|review| review.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MembershipTier;
    use chrono::Days;

    fn details() -> MovieDetails {
        MovieDetails {
            title: "The Matrix".to_string(),
            director: "Lana Wachowski, Lilly Wachowski".to_string(),
            studio: "Warner Bros.".to_string(),
            release_date: "1999-03-31".to_string(),
            description: "A computer hacker learns the truth.".to_string(),
            price: 16,
        }
    }

    fn movie() -> MovieRecord {
        MovieRecord::new(MovieId::new("tt0133093"), details())
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn customer(name: &str) -> Customer {
        Customer::new(CustomerId::new(), name)
    }

    // TDD: 標準の在庫方針
    #[test]
    fn test_new_movie_has_ten_rental_and_ten_sale_copies() {
        let movie = movie();
        assert_eq!(movie.available_rental_count(), 10);
        assert_eq!(movie.available_sale_count(), 10);
        assert_eq!(movie.sold_count(), 0);
        assert!(movie.reviews().is_empty());
    }

    // TDD: 価格の検証
    #[test]
    fn test_price_converts_units_to_cents() {
        assert_eq!(movie().price().unwrap().cents(), 1600);
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let movie = MovieRecord::new(
            MovieId::new("tt1"),
            MovieDetails {
                price: -50,
                ..details()
            },
        );
        assert_eq!(movie.price(), Err(PriceError::Negative(-50)));
    }

    #[test]
    fn test_price_above_limit_is_rejected() {
        let huge = i64::MAX / 10;
        let movie = MovieRecord::new(
            MovieId::new("tt1"),
            MovieDetails {
                price: huge,
                ..details()
            },
        );
        assert_eq!(movie.price(), Err(PriceError::TooLarge(huge)));
    }

    // TDD: 取り下げ
    #[test]
    fn test_withdraw_with_rented_copy_fails() {
        let mut movie = movie();
        let alice = customer("alice");
        movie.lend(&alice, today()).unwrap();

        assert_eq!(movie.withdraw(), Err(InventoryError::CopiesStillRented(1)));
        assert!(!movie.is_withdrawn());

        movie.return_copy(alice.customer_id(), today()).unwrap();
        assert_eq!(movie.withdraw(), Ok(()));
        assert!(movie.is_withdrawn());
    }

    #[test]
    fn test_copies_reference_their_movie() {
        let movie = movie();
        assert!(
            movie
                .rental_copies()
                .iter()
                .all(|c| c.movie_id() == movie.movie_id())
        );
        assert!(
            movie
                .sale_copies()
                .iter()
                .all(|c| c.movie_id() == movie.movie_id())
        );
    }

    #[test]
    fn test_display_text() {
        let movie = movie();
        assert_eq!(
            movie.display_text(),
            "The Matrix by Lana Wachowski, Lilly Wachowski IMDB ID: tt0133093 Studio: Warner Bros. Release Date: 1999-03-31 Price: 16"
        );
    }

    // TDD: lend() のテスト
    #[test]
    fn test_lend_uses_first_available_copy() {
        let mut movie = movie();
        let alice = customer("alice");
        let first_copy = movie.rental_copies()[0].copy_id();

        let event = movie.lend(&alice, today()).unwrap();

        assert_eq!(event.copy_id, first_copy);
        assert_eq!(event.customer_id, alice.customer_id());
        assert_eq!(event.due_on, today() + Days::new(7));
        assert_eq!(movie.available_rental_count(), 9);
        assert_eq!(
            movie
                .rented_copy_by_customer(alice.customer_id())
                .map(|c| c.copy_id()),
            Some(first_copy)
        );
    }

    #[test]
    fn test_lend_due_date_follows_membership_tier() {
        let mut movie = movie();
        let mut alice = customer("alice");
        alice.set_membership(MembershipTier::Gold);

        let event = movie.lend(&alice, today()).unwrap();

        assert_eq!(event.due_on, today() + Days::new(14));
    }

    #[test]
    fn test_lend_then_return_restores_count() {
        let mut movie = movie();
        let alice = customer("alice");
        let before = movie.available_rental_count();

        movie.lend(&alice, today()).unwrap();
        let event = movie.return_copy(alice.customer_id(), today()).unwrap();

        assert_eq!(movie.available_rental_count(), before);
        assert!(movie.rented_copy_by_customer(alice.customer_id()).is_none());
        assert!(!event.was_overdue);
    }

    #[test]
    fn test_return_keeps_rental_history() {
        let mut movie = movie();
        let alice = customer("alice");
        let event = movie.lend(&alice, today()).unwrap();
        movie.return_copy(alice.customer_id(), today()).unwrap();

        let copy = movie
            .rental_copies()
            .iter()
            .find(|c| c.copy_id() == event.copy_id)
            .unwrap();
        assert_eq!(copy.rental_history().len(), 1);
        assert!(copy.rental_history()[0].is_returned());
    }

    #[test]
    fn test_return_late_is_reported_as_overdue() {
        let mut movie = movie();
        let alice = customer("alice");
        movie.lend(&alice, today()).unwrap();

        let event = movie
            .return_copy(alice.customer_id(), today() + Days::new(30))
            .unwrap();

        assert!(event.was_overdue);
    }

    #[test]
    fn test_return_without_rental_fails() {
        let mut movie = movie();
        let alice = customer("alice");

        let result = movie.return_copy(alice.customer_id(), today());

        assert_eq!(result, Err(InventoryError::NotRentedByCustomer));
        assert_eq!(movie.available_rental_count(), 10);
    }

    #[test]
    fn test_return_matches_customer_identity_only() {
        let mut movie = movie();
        let alice = customer("alice");
        let impostor = customer("alice");
        movie.lend(&alice, today()).unwrap();

        let result = movie.return_copy(impostor.customer_id(), today());

        assert_eq!(result, Err(InventoryError::NotRentedByCustomer));
        assert_eq!(movie.available_rental_count(), 9);
    }

    #[test]
    fn test_return_releases_only_one_copy() {
        let mut movie = movie();
        let alice = customer("alice");
        movie.lend(&alice, today()).unwrap();
        movie.lend(&alice, today()).unwrap();

        movie.return_copy(alice.customer_id(), today()).unwrap();

        assert_eq!(movie.available_rental_count(), 9);
        assert!(movie.rented_copy_by_customer(alice.customer_id()).is_some());
    }

    // シナリオ：在庫1本を2人で取り合う
    #[test]
    fn test_single_copy_contention_scenario() {
        let mut movie = MovieRecord::with_stock(MovieId::new("tt0133093"), details(), 1, 0);
        let alice = customer("alice");
        let bob = customer("bob");

        assert!(movie.lend(&alice, today()).is_ok());
        assert_eq!(
            movie.lend(&bob, today()),
            Err(InventoryError::NoRentalCopyAvailable)
        );

        movie.return_copy(alice.customer_id(), today()).unwrap();

        let event = movie.lend(&bob, today()).unwrap();
        assert_eq!(event.customer_id, bob.customer_id());
        assert_eq!(movie.available_rental_count(), 0);
    }

    #[test]
    fn test_returned_copy_is_reused_first() {
        let mut movie = movie();
        let alice = customer("alice");
        let bob = customer("bob");
        let first = movie.lend(&alice, today()).unwrap();
        movie.return_copy(alice.customer_id(), today()).unwrap();

        let second = movie.lend(&bob, today()).unwrap();

        assert_eq!(first.copy_id, second.copy_id);
    }

    // TDD: extend_rental() のテスト
    #[test]
    fn test_extend_rental_moves_due_date() {
        let mut movie = movie();
        let alice = customer("alice");
        let lent = movie.lend(&alice, today()).unwrap();

        let due_on = movie.extend_rental(alice.customer_id(), 5).unwrap();

        assert_eq!(due_on, lent.due_on + Days::new(5));
    }

    #[test]
    fn test_extend_rental_rejects_non_positive_days() {
        let mut movie = movie();
        let alice = customer("alice");
        movie.lend(&alice, today()).unwrap();

        let result = movie.extend_rental(alice.customer_id(), 0);

        assert!(matches!(result, Err(ExtendRentalError::InvalidPeriod(_))));
    }

    #[test]
    fn test_extend_rental_without_rental_fails() {
        let mut movie = movie();
        let result = movie.extend_rental(CustomerId::new(), 3);
        assert_eq!(
            result,
            Err(ExtendRentalError::NotRented(
                InventoryError::NotRentedByCustomer
            ))
        );
    }

    // TDD: buy() のテスト
    #[test]
    fn test_buy_moves_first_sale_copy_to_sold() {
        let mut movie = movie();
        let alice = customer("alice");
        let first = movie.sale_copies()[0].copy_id();

        let event = movie.buy(alice.customer_id(), today()).unwrap();

        assert_eq!(event.copy_id, first);
        assert_eq!(movie.available_sale_count(), 9);
        assert_eq!(movie.sold_count(), 1);
        assert!(movie.sold_copies()[0].is_sold());
        assert_eq!(movie.sold_copies()[0].sold_to(), Some(alice.customer_id()));
    }

    #[test]
    fn test_buy_allows_repeat_purchases() {
        let mut movie = movie();
        let alice = customer("alice");

        movie.buy(alice.customer_id(), today()).unwrap();
        movie.buy(alice.customer_id(), today()).unwrap();

        assert_eq!(movie.available_sale_count(), 8);
        assert_eq!(movie.sold_count(), 2);
    }

    #[test]
    fn test_buy_with_no_stock_fails_and_leaves_counts() {
        let mut movie = MovieRecord::with_stock(MovieId::new("tt0133093"), details(), 0, 0);

        let result = movie.buy(CustomerId::new(), today());

        assert_eq!(result, Err(InventoryError::NoSaleCopyAvailable));
        assert_eq!(movie.available_sale_count(), 0);
        assert_eq!(movie.sold_count(), 0);
        assert!(!movie.is_salable());
    }

    #[test]
    fn test_add_copies_grow_pools() {
        let mut movie = movie();

        let rental_id = movie.add_rental_copy();
        let sale_id = movie.add_sale_copy();

        assert_eq!(movie.available_rental_count(), 11);
        assert_eq!(movie.available_sale_count(), 11);
        assert_eq!(movie.rental_copies().last().unwrap().copy_id(), rental_id);
        assert_eq!(movie.sale_copies().last().unwrap().copy_id(), sale_id);
    }

    // TDD: レビューのテスト
    #[test]
    fn test_add_review_twice_by_same_customer_is_rejected() {
        let mut movie = movie();
        let alice = customer("alice");

        let first = movie.add_review(Review::new(
            movie.movie_id().clone(),
            alice.customer_id(),
            "Great",
            9,
        ));
        let second = movie.add_review(Review::new(
            movie.movie_id().clone(),
            alice.customer_id(),
            "Changed my mind",
            2,
        ));

        assert!(first.is_ok());
        assert_eq!(second, Err(ReviewError::AlreadyExists));
        assert_eq!(movie.reviews().len(), 1);
        assert_eq!(movie.reviews()[0].comments(), "Great");
    }

    #[test]
    fn test_add_review_for_another_movie_is_rejected() {
        let mut movie = movie();

        let result = movie.add_review(Review::new(
            MovieId::new("tt0000000"),
            CustomerId::new(),
            "Wrong shelf",
            6,
        ));

        assert_eq!(result, Err(ReviewError::MovieMismatch));
        assert!(movie.reviews().is_empty());
    }

    #[test]
    fn test_reviews_from_different_customers_are_kept() {
        let mut movie = movie();
        let id = movie.movie_id().clone();

        movie
            .add_review(Review::new(id.clone(), CustomerId::new(), "A", 7))
            .unwrap();
        movie
            .add_review(Review::new(id, CustomerId::new(), "B", 8))
            .unwrap();

        assert_eq!(movie.reviews().len(), 2);
    }

    #[test]
    fn test_edit_review_before_add_fails_without_creating() {
        let mut movie = movie();

        let result = movie.edit_review(CustomerId::new(), "Edited", 5);

        assert!(matches!(result, Err(ReviewError::NotFound)));
        assert!(movie.reviews().is_empty());
    }

    #[test]
    fn test_edit_review_updates_in_place() {
        let mut movie = movie();
        let alice = customer("alice");
        let review = Review::new(movie.movie_id().clone(), alice.customer_id(), "Ok", 5);
        let review_id = review.review_id();
        movie.add_review(review).unwrap();

        let edited = movie
            .edit_review(alice.customer_id(), "Masterpiece", 10)
            .unwrap()
            .clone();

        assert_eq!(edited.review_id(), review_id);
        assert_eq!(edited.comments(), "Masterpiece");
        assert_eq!(edited.rating().map(|r| r.value()), Some(10));
        assert_eq!(movie.reviews().len(), 1);
    }

    #[test]
    fn test_edit_review_with_invalid_rating_keeps_old_rating() {
        let mut movie = movie();
        let alice = customer("alice");
        movie
            .add_review(Review::new(
                movie.movie_id().clone(),
                alice.customer_id(),
                "Ok",
                5,
            ))
            .unwrap();

        let edited = movie
            .edit_review(alice.customer_id(), "Hmm", 42)
            .unwrap()
            .clone();

        assert_eq!(edited.comments(), "Hmm");
        assert_eq!(edited.rating().map(|r| r.value()), Some(5));
    }

    #[test]
    fn test_display_reviews() {
        let mut movie = movie();
        assert_eq!(movie.display_reviews(), "No reviews yet.");

        movie
            .add_review(Review::new(
                movie.movie_id().clone(),
                CustomerId::new(),
                "Classic",
                10,
            ))
            .unwrap();

        assert!(movie.display_reviews().contains("Comment: Classic"));
    }
}
