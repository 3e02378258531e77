use crate::application::auth::AuthService;
use crate::application::store::{
    self, MembershipView, MovieDetailView, MovieSummary, PurchaseView, RentalView,
    ServiceDependencies,
};
use crate::domain::{
    CustomerId, MembershipTier, MovieId, PaymentMethod, TransactionId,
    commands::{
        AddReview, BuyMovie, ChangeMembership, EditReview, ExtendRental, RefundTransaction,
        RentMovie, ReturnMovie,
    },
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

use super::{
    error::ApiError,
    session::{AdminSession, CurrentSession, CustomerSession},
    types::{
        AddMovieRequest, BuyMovieRequest, ChangeMembershipRequest, CopyAddedResponse,
        CredentialsRequest, CustomerReviewResponse, ExtendRentalRequest, ExtendRentalResponse,
        MembershipChangedResponse, MovieCreatedResponse, PurchaseResponse, RegisteredResponse,
        RentalResponse, ReturnResponse, ReviewRequest, ReviewResponse, SignInResponse,
        TransactionResponse,
    },
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
    pub auth_service: Arc<AuthService>,
}

fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

// ============================================================================
// Auth handlers
// ============================================================================

/// POST /auth/register - 顧客として登録
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<RegisteredResponse>), ApiError> {
    let user_id = state
        .auth_service
        .register_customer(&req.username, &req.password)
        .await?;

    let response = RegisteredResponse {
        user_id: user_id.value(),
        username: req.username,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /auth/sign-in - サインインしてセッショントークンを受け取る
pub async fn sign_in(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<SignInResponse>, ApiError> {
    let session = state
        .auth_service
        .sign_in(&req.username, &req.password)
        .await?;
    Ok(Json(SignInResponse::from(session)))
}

/// POST /auth/sign-out - 現在のセッションを終了
pub async fn sign_out(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
) -> Result<StatusCode, ApiError> {
    state.auth_service.sign_out(session.token).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Catalog handlers
// ============================================================================

/// GET /movies - カタログの映画一覧
pub async fn list_movies(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MovieSummary>>, ApiError> {
    let movies = store::list_movies(&state.service_deps).await?;
    Ok(Json(movies))
}

/// POST /movies - 映画を追加（管理者）
pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    AdminSession(_): AdminSession,
    Json(req): Json<AddMovieRequest>,
) -> Result<(StatusCode, Json<MovieCreatedResponse>), ApiError> {
    if req.movie_id.trim().is_empty() {
        return Err(ApiError::BadRequest("movie_id must not be empty".to_string()));
    }

    let movie_id = store::add_movie(&state.service_deps, req.to_command()).await?;

    let response = MovieCreatedResponse {
        movie_id: movie_id.value().to_string(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /movies/:id - 映画の詳細とレビュー
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<String>,
) -> Result<Json<MovieDetailView>, ApiError> {
    let details = store::movie_details(&state.service_deps, &MovieId::new(movie_id)).await?;
    Ok(Json(details))
}

/// DELETE /movies/:id - 映画を削除（管理者）
pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    AdminSession(_): AdminSession,
    Path(movie_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    store::remove_movie(&state.service_deps, &MovieId::new(movie_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /movies/:id/rental-copies - レンタル用コピーを追加（管理者）
pub async fn add_rental_copy(
    State(state): State<Arc<AppState>>,
    AdminSession(_): AdminSession,
    Path(movie_id): Path<String>,
) -> Result<(StatusCode, Json<CopyAddedResponse>), ApiError> {
    let movie_id = MovieId::new(movie_id);
    let copy_id = store::add_rental_copy(&state.service_deps, &movie_id).await?;

    let response = CopyAddedResponse {
        movie_id: movie_id.value().to_string(),
        copy_id: copy_id.value(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /movies/:id/sale-copies - 販売用コピーを追加（管理者）
pub async fn add_sale_copy(
    State(state): State<Arc<AppState>>,
    AdminSession(_): AdminSession,
    Path(movie_id): Path<String>,
) -> Result<(StatusCode, Json<CopyAddedResponse>), ApiError> {
    let movie_id = MovieId::new(movie_id);
    let copy_id = store::add_sale_copy(&state.service_deps, &movie_id).await?;

    let response = CopyAddedResponse {
        movie_id: movie_id.value().to_string(),
        copy_id: copy_id.value(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

// ============================================================================
// Rental handlers
// ============================================================================

/// POST /movies/:id/rent - 映画を借りる
///
/// 強制されるビジネスルール:
/// - 会員ランクの同時レンタル上限を超えないこと
/// - 空いているレンタル用コピーがあること
pub async fn rent_movie(
    State(state): State<Arc<AppState>>,
    CustomerSession(session): CustomerSession,
    Path(movie_id): Path<String>,
) -> Result<Json<RentalResponse>, ApiError> {
    let cmd = RentMovie {
        movie_id: MovieId::new(movie_id),
        customer_id: session.user_id,
        rented_on: today(),
    };

    let event = store::rent_movie(&state.service_deps, cmd).await?;
    Ok(Json(RentalResponse::from(event)))
}

/// POST /movies/:id/return - 借りた映画を返す
pub async fn return_movie(
    State(state): State<Arc<AppState>>,
    CustomerSession(session): CustomerSession,
    Path(movie_id): Path<String>,
) -> Result<Json<ReturnResponse>, ApiError> {
    let cmd = ReturnMovie {
        movie_id: MovieId::new(movie_id),
        customer_id: session.user_id,
        returned_on: today(),
    };

    let event = store::return_movie(&state.service_deps, cmd).await?;
    Ok(Json(ReturnResponse::from(event)))
}

/// POST /movies/:id/extend - 返却期限を延長
pub async fn extend_rental(
    State(state): State<Arc<AppState>>,
    CustomerSession(session): CustomerSession,
    Path(movie_id): Path<String>,
    Json(req): Json<ExtendRentalRequest>,
) -> Result<Json<ExtendRentalResponse>, ApiError> {
    let movie_id = MovieId::new(movie_id);
    let cmd = ExtendRental {
        movie_id: movie_id.clone(),
        customer_id: session.user_id,
        days: req.days,
    };

    let due_on = store::extend_rental(&state.service_deps, cmd).await?;

    let response = ExtendRentalResponse {
        movie_id: movie_id.value().to_string(),
        due_on,
    };
    Ok(Json(response))
}

/// GET /me/rentals - 現在借りている映画
pub async fn list_my_rentals(
    State(state): State<Arc<AppState>>,
    CustomerSession(session): CustomerSession,
) -> Result<Json<Vec<RentalView>>, ApiError> {
    let rentals = store::list_customer_rentals(&state.service_deps, session.user_id).await?;
    Ok(Json(rentals))
}

// ============================================================================
// Purchase handlers
// ============================================================================

/// POST /movies/:id/buy - 映画を購入
///
/// 強制されるビジネスルール:
/// - 販売用コピーが残っていること
/// - 決済が成功すること（失敗時は在庫を変更しない）
pub async fn buy_movie(
    State(state): State<Arc<AppState>>,
    CustomerSession(session): CustomerSession,
    Path(movie_id): Path<String>,
    Json(req): Json<BuyMovieRequest>,
) -> Result<Json<PurchaseResponse>, ApiError> {
    let payment_method: PaymentMethod = req
        .payment_method
        .parse()
        .map_err(|e: crate::domain::PaymentMethodError| ApiError::BadRequest(e.to_string()))?;

    let cmd = BuyMovie {
        movie_id: MovieId::new(movie_id),
        customer_id: session.user_id,
        payment_method,
        bought_on: today(),
    };

    let receipt = store::buy_movie(&state.service_deps, cmd).await?;
    Ok(Json(PurchaseResponse::from(receipt)))
}

/// POST /transactions/:id/refund - 自分の取引を返金
pub async fn refund_transaction(
    State(state): State<Arc<AppState>>,
    CustomerSession(session): CustomerSession,
    Path(transaction_id): Path<String>,
) -> Result<Json<TransactionResponse>, ApiError> {
    let cmd = RefundTransaction {
        transaction_id: TransactionId::new(transaction_id),
        customer_id: session.user_id,
    };

    let transaction = store::refund_transaction(&state.service_deps, cmd).await?;
    Ok(Json(TransactionResponse::from(transaction)))
}

/// GET /me/purchases - 購入履歴
pub async fn list_my_purchases(
    State(state): State<Arc<AppState>>,
    CustomerSession(session): CustomerSession,
) -> Result<Json<Vec<PurchaseView>>, ApiError> {
    let purchases = store::list_customer_purchases(&state.service_deps, session.user_id).await?;
    Ok(Json(purchases))
}

/// GET /me/transactions - 取引履歴
pub async fn list_my_transactions(
    State(state): State<Arc<AppState>>,
    CustomerSession(session): CustomerSession,
) -> Result<Json<Vec<TransactionResponse>>, ApiError> {
    let transactions =
        store::list_customer_transactions(&state.service_deps, session.user_id).await?;
    Ok(Json(
        transactions
            .into_iter()
            .map(TransactionResponse::from)
            .collect(),
    ))
}

// ============================================================================
// Review handlers
// ============================================================================

/// POST /movies/:id/reviews - レビューを投稿
///
/// 評価が0〜10の範囲外の場合も投稿は受け付け、評価なしで保存する。
pub async fn add_review(
    State(state): State<Arc<AppState>>,
    CustomerSession(session): CustomerSession,
    Path(movie_id): Path<String>,
    Json(req): Json<ReviewRequest>,
) -> Result<(StatusCode, Json<ReviewResponse>), ApiError> {
    let cmd = AddReview {
        movie_id: MovieId::new(movie_id),
        customer_id: session.user_id,
        comments: req.comment,
        rating: req.rating,
    };

    let review = store::add_review(&state.service_deps, cmd).await?;
    Ok((StatusCode::CREATED, Json(ReviewResponse::from(review))))
}

/// PUT /movies/:id/reviews - 自分のレビューを編集
pub async fn edit_review(
    State(state): State<Arc<AppState>>,
    CustomerSession(session): CustomerSession,
    Path(movie_id): Path<String>,
    Json(req): Json<ReviewRequest>,
) -> Result<Json<ReviewResponse>, ApiError> {
    let cmd = EditReview {
        movie_id: MovieId::new(movie_id),
        customer_id: session.user_id,
        comments: req.comment,
        rating: req.rating,
    };

    let review = store::edit_review(&state.service_deps, cmd).await?;
    Ok(Json(ReviewResponse::from(review)))
}

/// GET /me/reviews - 自分のレビュー一覧
pub async fn list_my_reviews(
    State(state): State<Arc<AppState>>,
    CustomerSession(session): CustomerSession,
) -> Result<Json<Vec<CustomerReviewResponse>>, ApiError> {
    let reviews = store::list_customer_reviews(&state.service_deps, session.user_id).await?;
    Ok(Json(
        reviews
            .into_iter()
            .map(|view| CustomerReviewResponse {
                movie_title: view.movie_title,
                review: ReviewResponse::from(view.review),
            })
            .collect(),
    ))
}

// ============================================================================
// Membership handlers
// ============================================================================

/// GET /me/membership - 会員情報
pub async fn get_my_membership(
    State(state): State<Arc<AppState>>,
    CustomerSession(session): CustomerSession,
) -> Result<Json<MembershipView>, ApiError> {
    let membership = store::membership_status(&state.service_deps, session.user_id).await?;
    Ok(Json(membership))
}

/// PUT /customers/:id/membership - 会員ランクを直接変更（管理者）
pub async fn change_membership(
    State(state): State<Arc<AppState>>,
    AdminSession(_): AdminSession,
    Path(customer_id): Path<Uuid>,
    Json(req): Json<ChangeMembershipRequest>,
) -> Result<Json<MembershipChangedResponse>, ApiError> {
    let tier: MembershipTier = req.tier.parse().map_err(ApiError::BadRequest)?;

    let cmd = ChangeMembership {
        customer_id: CustomerId::from_uuid(customer_id),
        tier,
    };

    let change = store::change_membership(&state.service_deps, cmd).await?;
    Ok(Json(MembershipChangedResponse::from(change)))
}
