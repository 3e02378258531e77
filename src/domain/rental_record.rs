use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{CopyId, CustomerId, RentalPeriodError};

/// 標準のレンタル期間（日数）。非会員ランクと同じ。
pub const DEFAULT_RENTAL_DAYS: u32 = 7;

/// レンタル履歴の1件
///
/// 不変条件：返却期限（due_on）は貸出日（rented_on）より前にならない。
/// 生成時・延長時・期限の再設定時のすべてで保証する。
///
/// 返却済みかどうかは明示的な返却日で判定する。
/// 期限切れ（延滞）とは別の述語として `is_overdue` を持つ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRecord {
    customer_id: CustomerId,
    copy_id: CopyId,
    rented_on: NaiveDate,
    due_on: NaiveDate,
    returned_on: Option<NaiveDate>,
}

impl RentalRecord {
    /// 貸出日 + ランクのレンタル日数を返却期限とする
    pub fn new(
        customer_id: CustomerId,
        copy_id: CopyId,
        rented_on: NaiveDate,
        rental_days: u32,
    ) -> Self {
        let due_on = rented_on
            .checked_add_days(Days::new(u64::from(rental_days)))
            .unwrap_or(NaiveDate::MAX);

        Self {
            customer_id,
            copy_id,
            rented_on,
            due_on,
            returned_on: None,
        }
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn copy_id(&self) -> CopyId {
        self.copy_id
    }

    pub fn rented_on(&self) -> NaiveDate {
        self.rented_on
    }

    pub fn due_on(&self) -> NaiveDate {
        self.due_on
    }

    pub fn returned_on(&self) -> Option<NaiveDate> {
        self.returned_on
    }

    /// 返却期限を再設定する
    ///
    /// # エラー
    /// 貸出日より前の日付は`RentalPeriodError::DueBeforeRental`
    pub fn set_due_on(&mut self, due_on: NaiveDate) -> Result<(), RentalPeriodError> {
        if due_on < self.rented_on {
            return Err(RentalPeriodError::DueBeforeRental);
        }
        self.due_on = due_on;
        Ok(())
    }

    /// 現在の返却期限に`days`日を加える
    ///
    /// # エラー
    /// `days`が0以下の場合は`RentalPeriodError::NonPositiveExtension`
    pub fn extend_rental_period(&mut self, days: i64) -> Result<(), RentalPeriodError> {
        if days <= 0 {
            return Err(RentalPeriodError::NonPositiveExtension(days));
        }
        let extended = self
            .due_on
            .checked_add_days(Days::new(days as u64))
            .unwrap_or(NaiveDate::MAX);
        self.set_due_on(extended)
    }

    /// 返却を記録する。2回目以降の呼び出しは最初の返却日を保持する。
    pub fn mark_returned(&mut self, returned_on: NaiveDate) {
        if self.returned_on.is_none() {
            self.returned_on = Some(returned_on);
        }
    }

    pub fn is_returned(&self) -> bool {
        self.returned_on.is_some()
    }

    /// 未返却のまま返却期限を過ぎているか
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_returned() && self.due_on < today
    }
}

impl fmt::Display for RentalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RentalRecord [Customer={}, CopyId={}, RentalDate={}, ReturnDate={}]",
            self.customer_id.value(),
            self.copy_id.value(),
            self.rented_on.format("%Y-%m-%d"),
            self.due_on.format("%Y-%m-%d"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record() -> RentalRecord {
        RentalRecord::new(
            CustomerId::new(),
            CopyId::new(),
            date(2024, 1, 1),
            DEFAULT_RENTAL_DAYS,
        )
    }

    #[test]
    fn test_new_record_due_after_default_period() {
        let record = record();
        assert_eq!(record.rented_on(), date(2024, 1, 1));
        assert_eq!(record.due_on(), date(2024, 1, 8));
        assert!(!record.is_returned());
    }

    #[test]
    fn test_new_record_uses_tier_rental_days() {
        let record = RentalRecord::new(CustomerId::new(), CopyId::new(), date(2024, 1, 1), 21);
        assert_eq!(record.due_on(), date(2024, 1, 22));
    }

    // TDD: extend_rental_period() のテスト
    #[test]
    fn test_extend_rental_period_adds_days_to_due_date() {
        let mut record = record();
        let before = record.due_on();

        record.extend_rental_period(5).unwrap();

        assert_eq!(record.due_on(), before + Days::new(5));
    }

    #[test]
    fn test_extend_rental_period_multiple_times() {
        let mut record = record();
        record.extend_rental_period(3).unwrap();
        let first = record.due_on();
        record.extend_rental_period(5).unwrap();
        assert_eq!(record.due_on(), first + Days::new(5));
    }

    #[test]
    fn test_extend_rental_period_rejects_zero() {
        let mut record = record();
        let before = record.due_on();

        let result = record.extend_rental_period(0);

        assert_eq!(result, Err(RentalPeriodError::NonPositiveExtension(0)));
        assert_eq!(record.due_on(), before);
    }

    #[test]
    fn test_extend_rental_period_rejects_negative() {
        let mut record = record();
        let result = record.extend_rental_period(-1);
        assert_eq!(result, Err(RentalPeriodError::NonPositiveExtension(-1)));
    }

    // TDD: set_due_on() のテスト
    #[test]
    fn test_set_due_on_before_rental_date_fails() {
        let mut record = record();
        let result = record.set_due_on(date(2023, 12, 31));
        assert_eq!(result, Err(RentalPeriodError::DueBeforeRental));
        assert_eq!(record.due_on(), date(2024, 1, 8));
    }

    #[test]
    fn test_set_due_on_same_as_rental_date_is_allowed() {
        let mut record = record();
        record.set_due_on(date(2024, 1, 1)).unwrap();
        assert_eq!(record.due_on(), date(2024, 1, 1));
    }

    // 返却と延滞は別の述語
    #[test]
    fn test_past_due_record_is_overdue_not_returned() {
        let record = record();
        let today = date(2024, 2, 1);

        assert!(record.is_overdue(today));
        assert!(!record.is_returned());
    }

    #[test]
    fn test_due_today_is_not_overdue() {
        let record = record();
        assert!(!record.is_overdue(date(2024, 1, 8)));
    }

    #[test]
    fn test_returned_record_is_never_overdue() {
        let mut record = record();
        record.mark_returned(date(2024, 1, 20));

        assert!(record.is_returned());
        assert_eq!(record.returned_on(), Some(date(2024, 1, 20)));
        assert!(!record.is_overdue(date(2024, 3, 1)));
    }

    #[test]
    fn test_display_contains_dates() {
        let record = record();
        let text = record.to_string();
        assert!(text.contains("RentalRecord"));
        assert!(text.contains("RentalDate=2024-01-01"));
        assert!(text.contains("ReturnDate=2024-01-08"));
        assert!(text.contains(&record.copy_id().value().to_string()));
    }
}
