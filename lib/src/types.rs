mod block;
mod transaction;

pub use block::{Block, BlockHeader};
pub use transaction::{OutPoint, Transaction, TransactionInput, TransactionOutput, SEQUENCE_FINAL};
