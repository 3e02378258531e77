pub mod credit_card;
pub mod fps;
pub mod gateway;

pub use credit_card::CreditCardProcessor;
pub use fps::FpsProcessor;
pub use gateway::PaymentGateway;
