use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, add_rental_copy, add_review, add_sale_copy, buy_movie, change_membership,
    create_movie, delete_movie, edit_review, extend_rental, get_movie, get_my_membership,
    list_movies, list_my_purchases, list_my_rentals, list_my_reviews, list_my_transactions,
    refund_transaction, register, rent_movie, return_movie, sign_in, sign_out,
};

/// Creates the API router with all movie store endpoints
///
/// Auth:
/// - POST /auth/register, /auth/sign-in, /auth/sign-out
///
/// Catalog (writes are admin only):
/// - GET/POST /movies, GET/DELETE /movies/:id
/// - POST /movies/:id/rental-copies, /movies/:id/sale-copies
///
/// Customer operations (x-session-token of a customer):
/// - POST /movies/:id/rent, /return, /extend, /buy
/// - POST/PUT /movies/:id/reviews
/// - GET /me/membership, /me/rentals, /me/purchases, /me/reviews, /me/transactions
/// - POST /transactions/:id/refund
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Auth
        .route("/auth/register", post(register))
        .route("/auth/sign-in", post(sign_in))
        .route("/auth/sign-out", post(sign_out))
        // Catalog
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/:id", get(get_movie).delete(delete_movie))
        .route("/movies/:id/rental-copies", post(add_rental_copy))
        .route("/movies/:id/sale-copies", post(add_sale_copy))
        // Rental and purchase
        .route("/movies/:id/rent", post(rent_movie))
        .route("/movies/:id/return", post(return_movie))
        .route("/movies/:id/extend", post(extend_rental))
        .route("/movies/:id/buy", post(buy_movie))
        .route("/transactions/:id/refund", post(refund_transaction))
        // Reviews
        .route("/movies/:id/reviews", post(add_review).put(edit_review))
        // Customer views
        .route("/me/membership", get(get_my_membership))
        .route("/me/rentals", get(list_my_rentals))
        .route("/me/purchases", get(list_my_purchases))
        .route("/me/reviews", get(list_my_reviews))
        .route("/me/transactions", get(list_my_transactions))
        // Administration
        .route("/customers/:id/membership", put(change_membership))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
