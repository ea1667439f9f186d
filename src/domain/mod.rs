pub mod transaction;

pub use transaction::{Metadata, Transaction};
