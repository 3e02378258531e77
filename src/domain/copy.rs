use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CopyId, CustomerId, MovieId, RentalRecord};

/// コピーの共通識別情報
///
/// 映画への参照は所有しないIDのみ（映画がコピーを所有する）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyIdentity {
    pub copy_id: CopyId,
    pub movie_id: MovieId,
}

impl CopyIdentity {
    fn new(movie_id: MovieId) -> Self {
        Self {
            copy_id: CopyId::new(),
            movie_id,
        }
    }
}

/// レンタル用コピー
///
/// 不変条件：「空き」か「1人の顧客が保持中」のどちらか一方。
/// 保持者が変わるたびに履歴が追記され、履歴は削除されない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalCopy {
    identity: CopyIdentity,
    holder: Option<CustomerId>,
    rental_history: Vec<RentalRecord>,
}

impl RentalCopy {
    pub fn new(movie_id: MovieId) -> Self {
        Self {
            identity: CopyIdentity::new(movie_id),
            holder: None,
            rental_history: Vec::new(),
        }
    }

    pub fn copy_id(&self) -> CopyId {
        self.identity.copy_id
    }

    pub fn movie_id(&self) -> &MovieId {
        &self.identity.movie_id
    }

    pub fn holder(&self) -> Option<CustomerId> {
        self.holder
    }

    pub fn is_rented(&self) -> bool {
        self.holder.is_some()
    }

    pub fn is_held_by(&self, customer_id: CustomerId) -> bool {
        self.holder == Some(customer_id)
    }

    pub fn rental_history(&self) -> &[RentalRecord] {
        &self.rental_history
    }

    /// 顧客に貸し出し、履歴を追記する
    ///
    /// 既に貸出中の場合は何もせず`None`を返す。
    pub(crate) fn rent(
        &mut self,
        customer_id: CustomerId,
        rented_on: NaiveDate,
        rental_days: u32,
    ) -> Option<&RentalRecord> {
        if self.is_rented() {
            return None;
        }
        let copy_id = self.copy_id();
        self.holder = Some(customer_id);
        self.rental_history.push(RentalRecord::new(
            customer_id,
            copy_id,
            rented_on,
            rental_days,
        ));
        self.rental_history.last()
    }

    /// 保持者を解除する。履歴の最新件に返却日を記録し、その件を返す。
    pub(crate) fn check_in(&mut self, returned_on: NaiveDate) -> Option<&RentalRecord> {
        let holder = self.holder.take()?;
        let record = self
            .rental_history
            .iter_mut()
            .rev()
            .find(|r| r.customer_id() == holder && !r.is_returned())?;
        record.mark_returned(returned_on);
        Some(&*record)
    }

    /// 現在の貸出の履歴（未返却の最新件）
    pub fn current_rental(&self) -> Option<&RentalRecord> {
        let holder = self.holder?;
        self.rental_history
            .iter()
            .rev()
            .find(|r| r.customer_id() == holder && !r.is_returned())
    }

    pub(crate) fn current_rental_mut(&mut self) -> Option<&mut RentalRecord> {
        let holder = self.holder?;
        self.rental_history
            .iter_mut()
            .rev()
            .find(|r| r.customer_id() == holder && !r.is_returned())
    }
}

/// 販売用コピー
///
/// 売却済みフラグは単調（未売却 → 売却済み）で元に戻らない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleCopy {
    identity: CopyIdentity,
    sold_to: Option<CustomerId>,
}

impl SaleCopy {
    pub fn new(movie_id: MovieId) -> Self {
        Self {
            identity: CopyIdentity::new(movie_id),
            sold_to: None,
        }
    }

    pub fn copy_id(&self) -> CopyId {
        self.identity.copy_id
    }

    pub fn movie_id(&self) -> &MovieId {
        &self.identity.movie_id
    }

    pub fn is_sold(&self) -> bool {
        self.sold_to.is_some()
    }

    pub fn sold_to(&self) -> Option<CustomerId> {
        self.sold_to
    }

    pub(crate) fn sell(&mut self, customer_id: CustomerId) {
        if self.sold_to.is_none() {
            self.sold_to = Some(customer_id);
        }
    }
}
