#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    Balance, DEFAULT_BIAS, DEFAULT_GROUP_COUNT, Expense, ExpenseId, GroupId, GroupSettlement,
    MAX_BIAS, MAX_EXPENSES, MAX_GROUP_COUNT, MAX_GROUPS, MAX_MEMBERS, MIN_BIAS, MIN_GROUP_COUNT,
    Member, MemberId, ParticipantGroup, Settlement, SettlementResult, SettlementSnapshot,
};
pub use services::{AllocationMode, PooledAllocation, SettlementCalculator};
pub use warisplit_transfer_construction::rounding::{
    InvalidRoundingUnit, RoundingUnit, ceil_to_unit, floor_to_unit, round_to_unit,
};
