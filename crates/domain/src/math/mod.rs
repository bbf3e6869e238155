/// Pro-rata withdrawal estimation.
pub mod withdrawal;
