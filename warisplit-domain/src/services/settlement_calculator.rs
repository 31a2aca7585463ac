use warisplit_transfer_construction::minimize_transactions;

use crate::model::{SettlementResult, SettlementSnapshot};
use crate::services::{balance_resolver, group_allocator, payment_ledger, share_allocator};

/// How pooled costs are split across the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocationMode {
    /// Weight each expense across its own participant set.
    PerExpense,
    /// Pool every expense and split by weighted headcount, groups included.
    Pooled,
}

impl AllocationMode {
    /// Pooled allocation applies whenever the snapshot carries groups.
    pub fn for_snapshot(snapshot: &SettlementSnapshot) -> Self {
        if snapshot.groups.is_empty() {
            Self::PerExpense
        } else {
            Self::Pooled
        }
    }
}

/// Settlement calculation service: one pure pass from snapshot to transfers.
pub struct SettlementCalculator;

impl SettlementCalculator {
    /// Calculate settlements for a snapshot, selecting the allocation mode
    /// from its contents.
    ///
    /// A snapshot without members or without expenses yields the empty
    /// result; that is a defined outcome, not an error.
    pub fn calculate(&self, snapshot: &SettlementSnapshot) -> SettlementResult {
        if snapshot.members.is_empty() || snapshot.expenses.is_empty() {
            return SettlementResult::default();
        }

        self.calculate_with_mode(snapshot, AllocationMode::for_snapshot(snapshot))
    }

    /// Calculate settlements under an explicit allocation mode. Exposed so
    /// each mode can be driven directly in tests.
    pub fn calculate_with_mode(
        &self,
        snapshot: &SettlementSnapshot,
        mode: AllocationMode,
    ) -> SettlementResult {
        tracing::debug!(
            ?mode,
            members = snapshot.members.len(),
            groups = snapshot.groups.len(),
            expenses = snapshot.expenses.len(),
            unit = snapshot.rounding_unit.minor_units(),
            "calculating settlements"
        );

        match mode {
            AllocationMode::PerExpense => {
                let shares = share_allocator::allocate_shares(&snapshot.members, &snapshot.expenses);
                let paid = payment_ledger::paid_totals(&snapshot.members, &snapshot.expenses);
                let balances = balance_resolver::resolve_balances(&snapshot.members, &shares, &paid);

                SettlementResult {
                    settlements: minimize_transactions(balances, snapshot.rounding_unit),
                    group_settlements: Vec::new(),
                }
            }
            AllocationMode::Pooled => {
                let allocation = group_allocator::allocate_pooled(
                    &snapshot.members,
                    &snapshot.groups,
                    &snapshot.expenses,
                    snapshot.rounding_unit,
                );

                SettlementResult {
                    settlements: minimize_transactions(
                        allocation.balances,
                        snapshot.rounding_unit,
                    ),
                    group_settlements: allocation.group_settlements,
                }
            }
        }
    }
}
