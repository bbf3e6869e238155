/// Borsh layout of the pool state account.
pub mod layout;
/// Live pool-state and balance reader.
pub mod reader;

pub use layout::PoolAccount;
pub use reader::ChainPoolReader;
