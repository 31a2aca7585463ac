use warisplit_transfer_construction::{RoundingUnit, rounding::ceil_to_unit};

use crate::model::{Balance, Expense, GroupSettlement, Member, ParticipantGroup};
use crate::services::payment_ledger;

/// Result of pooled allocation: member balances ready for transfer
/// minimization, plus one settlement summary per group. Groups never appear
/// in transfers; their attendees are not tracked as individuals.
#[derive(Debug, Clone, PartialEq)]
pub struct PooledAllocation {
    pub balances: Vec<Balance>,
    pub group_settlements: Vec<GroupSettlement>,
}

impl PooledAllocation {
    fn empty() -> Self {
        Self {
            balances: Vec::new(),
            group_settlements: Vec::new(),
        }
    }
}

/// Pools every expense into one total and splits it by weighted headcount: a
/// member weighs `bias`, a group weighs `bias * count`.
///
/// Per-expense participant lists are deliberately not consulted in this mode;
/// a restricted expense is redistributed across the whole roster like any
/// other. Group amounts are ceiling-rounded per person and per group, each
/// independently, so a group total can exceed `per_person * count` by at most
/// one unit step.
pub fn allocate_pooled(
    members: &[Member],
    groups: &[ParticipantGroup],
    expenses: &[Expense],
    unit: RoundingUnit,
) -> PooledAllocation {
    let total_amount: f64 = expenses.iter().map(|e| e.amount).sum();

    let member_weights: Vec<f64> = members.iter().map(|m| m.bias).collect();
    let group_weights: Vec<f64> = groups.iter().map(|g| g.bias * f64::from(g.count)).collect();
    let total_weighted_bias: f64 =
        member_weights.iter().sum::<f64>() + group_weights.iter().sum::<f64>();

    if total_weighted_bias == 0.0 {
        return PooledAllocation::empty();
    }

    let paid = payment_ledger::paid_totals(members, expenses);
    let balances = members
        .iter()
        .zip(&member_weights)
        .map(|(member, weight)| Balance {
            id: member.id.clone(),
            amount: paid.get(&member.id).copied().unwrap_or(0.0)
                - total_amount * weight / total_weighted_bias,
        })
        .collect();

    let group_settlements = groups
        .iter()
        .zip(&group_weights)
        .map(|(group, weight)| {
            let group_share = total_amount * weight / total_weighted_bias;
            let per_person = group_share / f64::from(group.count);
            GroupSettlement {
                group_id: group.id.clone(),
                group_name: group.name.clone(),
                per_person_amount: ceil_to_unit(per_person, unit),
                total_amount: ceil_to_unit(group_share, unit),
            }
        })
        .collect();

    PooledAllocation {
        balances,
        group_settlements,
    }
}
