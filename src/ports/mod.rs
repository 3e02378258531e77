pub mod customer_directory;
pub mod movie_catalog;
pub mod notification_service;
pub mod payment_gateway;
pub mod transaction_ledger;

pub use customer_directory::{CustomerDirectory, CustomerHandle};
pub use movie_catalog::{MovieCatalog, MovieHandle};
pub use notification_service::NotificationService;
pub use payment_gateway::PaymentGateway;
pub use transaction_ledger::{TransactionHandle, TransactionLedger};
