use serde::{Deserialize, Serialize};
use std::fmt;

use super::{CustomerId, MovieId, Rating, RatingError, ReviewId};

/// レビュー - 1人の顧客による1本の映画への評価とコメント
///
/// 評価値が範囲外の場合は警告を出すが、レビュー自体は作成する。
/// このとき評価は未設定（`None`）として扱い、0点とは区別する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    review_id: ReviewId,
    movie_id: MovieId,
    customer_id: CustomerId,
    comments: String,
    rating: Option<Rating>,
}

impl Review {
    pub fn new(
        movie_id: MovieId,
        customer_id: CustomerId,
        comments: impl Into<String>,
        rating: i32,
    ) -> Self {
        let rating = match Rating::try_from(rating) {
            Ok(rating) => Some(rating),
            Err(e) => {
                tracing::warn!(movie_id = movie_id.value(), "{}", e);
                None
            }
        };

        Self {
            review_id: ReviewId::new(),
            movie_id,
            customer_id,
            comments: comments.into(),
            rating,
        }
    }

    pub fn review_id(&self) -> ReviewId {
        self.review_id
    }

    pub fn movie_id(&self) -> &MovieId {
        &self.movie_id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn comments(&self) -> &str {
        &self.comments
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    pub fn set_comments(&mut self, comments: impl Into<String>) {
        self.comments = comments.into();
    }

    /// 評価を更新する
    ///
    /// 範囲外の値は拒否し、現在の評価を変更しない。
    pub fn set_rating(&mut self, rating: i32) -> Result<(), RatingError> {
        self.rating = Some(Rating::try_from(rating)?);
        Ok(())
    }
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rating = self
            .rating
            .map(|r| r.value().to_string())
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "Movie Review\nMovie Rating: {}\nComment: {}",
            rating, self.comments
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie_id() -> MovieId {
        MovieId::new("tt0133093")
    }

    #[test]
    fn test_new_review_with_valid_rating() {
        let customer_id = CustomerId::new();
        let review = Review::new(movie_id(), customer_id, "Great", 9);

        assert_eq!(review.comments(), "Great");
        assert_eq!(review.rating().map(|r| r.value()), Some(9));
        assert_eq!(review.customer_id(), customer_id);
        assert_eq!(review.movie_id(), &movie_id());
    }

    #[test]
    fn test_new_review_with_invalid_rating_keeps_comment() {
        let review = Review::new(movie_id(), CustomerId::new(), "Too much", 11);

        assert_eq!(review.comments(), "Too much");
        assert!(review.rating().is_none());
    }

    #[test]
    fn test_zero_rating_is_a_real_rating() {
        let review = Review::new(movie_id(), CustomerId::new(), "Bad", 0);
        assert_eq!(review.rating().map(|r| r.value()), Some(0));
    }

    #[test]
    fn test_set_rating_out_of_range_leaves_rating_unchanged() {
        let mut review = Review::new(movie_id(), CustomerId::new(), "Ok", 5);

        let result = review.set_rating(-3);

        assert_eq!(result, Err(RatingError::OutOfRange(-3)));
        assert_eq!(review.rating().map(|r| r.value()), Some(5));
    }

    #[test]
    fn test_set_comments_and_rating() {
        let mut review = Review::new(movie_id(), CustomerId::new(), "Ok", 5);
        review.set_comments("Better on rewatch");
        review.set_rating(8).unwrap();

        assert_eq!(review.comments(), "Better on rewatch");
        assert_eq!(review.rating().map(|r| r.value()), Some(8));
    }

    #[test]
    fn test_display_format() {
        let review = Review::new(movie_id(), CustomerId::new(), "Classic", 10);
        assert_eq!(
            review.to_string(),
            "Movie Review\nMovie Rating: 10\nComment: Classic"
        );
    }
}
