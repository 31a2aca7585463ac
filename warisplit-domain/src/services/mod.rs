pub mod balance_resolver;
pub mod group_allocator;
pub mod payment_ledger;
pub mod settlement_calculator;
pub mod share_allocator;
pub mod statistics;

pub use group_allocator::PooledAllocation;
pub use settlement_calculator::{AllocationMode, SettlementCalculator};
