use fxhash::FxHashMap;

use crate::model::{Expense, Member, MemberId};

/// Accumulates each member's bias-weighted share of every expense.
///
/// Each expense is split across its effective participant set: the explicit
/// `participants` list when non-empty, otherwise the whole roster. An
/// explicit list that resolves to nobody (stale ids) leaves the expense
/// unshared; the money then shows up only on the payer's paid-total.
pub fn allocate_shares(members: &[Member], expenses: &[Expense]) -> FxHashMap<MemberId, f64> {
    let mut shares: FxHashMap<MemberId, f64> =
        members.iter().map(|m| (m.id.clone(), 0.0)).collect();

    for expense in expenses {
        let participants: Vec<&Member> = if expense.participants.is_empty() {
            members.iter().collect()
        } else {
            members
                .iter()
                .filter(|m| expense.participants.contains(&m.id))
                .collect()
        };

        if participants.is_empty() {
            tracing::warn!(
                expense = %expense.id,
                amount = expense.amount,
                "expense has no resolvable participants, amount stays with the payer"
            );
            continue;
        }

        let total_bias: f64 = participants.iter().map(|p| p.bias).sum();
        if total_bias <= 0.0 {
            continue;
        }

        for participant in &participants {
            let share = expense.amount * participant.bias / total_bias;
            *shares.entry(participant.id.clone()).or_insert(0.0) += share;
        }
    }

    shares
}
