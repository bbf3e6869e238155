/// Raw-unit amounts with decimal scaling.
pub mod amount;
/// Withdrawal request and preview value objects.
pub mod withdrawal;
