use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{
    CopyId, CopySold, MembershipChanged, MembershipTier, MovieDetails, MovieId, MovieRecord,
    PaymentTransaction, Review,
};

/// 一覧表示用の映画の要約
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieSummary {
    pub movie_id: MovieId,
    pub title: String,
    pub display_text: String,
    pub price: i64,
    pub available_rental_copies: usize,
    pub available_sale_copies: usize,
}

impl MovieSummary {
    pub fn from_record(movie: &MovieRecord) -> Self {
        Self {
            movie_id: movie.movie_id().clone(),
            title: movie.title().to_string(),
            display_text: movie.display_text(),
            price: movie.details().price,
            available_rental_copies: movie.available_rental_count(),
            available_sale_copies: movie.available_sale_count(),
        }
    }
}

/// 映画の詳細（レビューを含む）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieDetailView {
    pub summary: MovieSummary,
    pub details: MovieDetails,
    pub sold_copies: usize,
    pub reviews: Vec<Review>,
}

impl MovieDetailView {
    pub fn from_record(movie: &MovieRecord) -> Self {
        Self {
            summary: MovieSummary::from_record(movie),
            details: movie.details().clone(),
            sold_copies: movie.sold_count(),
            reviews: movie.reviews().to_vec(),
        }
    }
}

/// 顧客が現在借りているコピー
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalView {
    pub movie_id: MovieId,
    pub title: String,
    pub copy_id: CopyId,
    pub rented_on: NaiveDate,
    pub due_on: NaiveDate,
}

/// 顧客が購入した映画（カタログから削除済みの場合は題名なし）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseView {
    pub movie_id: MovieId,
    pub title: Option<String>,
}

/// 顧客のレビューと対象映画の題名
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerReviewView {
    pub movie_title: Option<String>,
    pub review: Review,
}

/// 会員情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MembershipView {
    pub tier: MembershipTier,
    pub max_rentals: usize,
    pub rental_days: u32,
    pub discount_percent: u8,
    pub rented_count: usize,
    pub purchased_count: usize,
}

/// 購入結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseReceipt {
    pub transaction: PaymentTransaction,
    pub sold: CopySold,
    pub membership_change: Option<MembershipChanged>,
}
