pub mod memory_transaction_store;

pub use memory_transaction_store::MemoryTransactionStore;
