pub mod connection;
pub mod models;
pub mod persons;
pub mod seed;
pub mod setup;
pub mod store;
pub mod winners;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use models::*;
pub use store::{spin_in_transaction, RecordedSpin, SqliteStore};
