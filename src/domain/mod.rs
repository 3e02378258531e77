pub mod commands;
pub mod copy;
pub mod customer;
pub mod errors;
pub mod events;
pub mod membership;
pub mod movie;
pub mod payment;
pub mod rental_record;
pub mod review;
pub mod user;
pub mod value_objects;

pub use copy::*;
pub use customer::*;
pub use errors::*;
pub use events::*;
pub use membership::*;
pub use movie::*;
pub use payment::*;
pub use rental_record::*;
pub use review::*;
pub use user::*;
pub use value_objects::*;
