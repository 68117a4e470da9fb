//! Infrastructure layer - database and transaction management.

mod db;
pub mod migrations;
pub mod unit_of_work;

pub use db::Database;
pub use migrations::Migrator;
pub use unit_of_work::{Persistence, SeaTransaction, Transaction, TransactionScope, UnitOfWork};
