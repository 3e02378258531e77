pub mod customer_directory;
pub mod movie_catalog;
pub mod transaction_ledger;

pub use customer_directory::CustomerDirectory;
pub use movie_catalog::MovieCatalog;
pub use transaction_ledger::TransactionLedger;
