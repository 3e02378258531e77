mod catalog_service;
mod dependencies;
mod errors;
mod membership_service;
mod purchase_service;
mod rental_service;
mod review_service;
mod views;

pub use catalog_service::{
    add_movie, add_rental_copy, add_sale_copy, list_movies, movie_details, remove_movie,
};
pub use dependencies::ServiceDependencies;
pub use errors::{Result, StoreApplicationError};
pub use membership_service::{change_membership, membership_status};
pub use purchase_service::{
    buy_movie, list_customer_purchases, list_customer_transactions, refund_transaction,
};
pub use rental_service::{extend_rental, list_customer_rentals, rent_movie, return_movie};
pub use review_service::{add_review, edit_review, list_customer_reviews};
pub use views::*;
