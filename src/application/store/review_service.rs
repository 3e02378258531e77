use crate::domain::{
    CustomerId, Review,
    commands::{AddReview, EditReview},
};

use super::dependencies::{ServiceDependencies, load_customer, load_movie};
use super::errors::{Result, StoreApplicationError};
use super::views::CustomerReviewView;

/// レビューを投稿する
///
/// ビジネスルール：
/// - 1人の顧客につき1本の映画へのレビューは1件まで
/// - 評価値が範囲外なら警告を出し、評価なしで保存する
/// - 映画に受け付けられた場合だけ顧客のレビューにも追加する
pub async fn add_review(deps: &ServiceDependencies, cmd: AddReview) -> Result<Review> {
    let movie_handle = load_movie(deps, &cmd.movie_id).await?;
    let customer_handle = load_customer(deps, cmd.customer_id).await?;

    let mut movie = movie_handle.lock().await;
    let mut customer = customer_handle.lock().await;

    let review = Review::new(
        cmd.movie_id.clone(),
        cmd.customer_id,
        cmd.comments,
        cmd.rating,
    );
    movie.add_review(review.clone()).inspect_err(|e| {
        tracing::warn!(movie_id = cmd.movie_id.value(), "{}", e);
    })?;
    customer.add_review(review.clone());

    tracing::info!(
        movie_id = cmd.movie_id.value(),
        customer_id = %cmd.customer_id.value(),
        "Review added successfully"
    );
    Ok(review)
}

/// 自分のレビューを編集する
///
/// 映画側のレビューをその場で更新し、顧客側の同じレビューを置き換える。
/// 評価値が範囲外なら評価だけ変更しない。
pub async fn edit_review(deps: &ServiceDependencies, cmd: EditReview) -> Result<Review> {
    let movie_handle = load_movie(deps, &cmd.movie_id).await?;
    let customer_handle = load_customer(deps, cmd.customer_id).await?;

    let mut movie = movie_handle.lock().await;
    let mut customer = customer_handle.lock().await;

    let edited = movie
        .edit_review(cmd.customer_id, cmd.comments, cmd.rating)
        .inspect_err(|e| {
            tracing::warn!(movie_id = cmd.movie_id.value(), "{}", e);
        })?
        .clone();
    customer.add_review(edited.clone());

    tracing::info!(
        movie_id = cmd.movie_id.value(),
        customer_id = %cmd.customer_id.value(),
        "Review updated successfully"
    );
    Ok(edited)
}

/// 顧客のレビューを対象映画の題名付きで一覧する
pub async fn list_customer_reviews(
    deps: &ServiceDependencies,
    customer_id: CustomerId,
) -> Result<Vec<CustomerReviewView>> {
    let customer_handle = load_customer(deps, customer_id).await?;
    let reviews = customer_handle.lock().await.reviews().to_vec();

    let mut views = Vec::with_capacity(reviews.len());
    for review in reviews {
        let movie_title = match deps
            .movie_catalog
            .find(review.movie_id())
            .await
            .map_err(StoreApplicationError::MovieCatalogError)?
        {
            Some(handle) => Some(handle.lock().await.title().to_string()),
            None => None,
        };
        views.push(CustomerReviewView {
            movie_title,
            review,
        });
    }

    Ok(views)
}
