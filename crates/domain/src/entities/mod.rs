/// Pool entity and on-chain state snapshot.
pub mod pool;
/// Token entity.
pub mod token;
