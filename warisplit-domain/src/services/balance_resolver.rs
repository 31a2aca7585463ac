use fxhash::FxHashMap;

use crate::model::{Balance, Member, MemberId};

/// Combines paid totals and share totals into one signed balance per roster
/// member, in roster order. Members untouched by any expense land at zero.
pub fn resolve_balances(
    members: &[Member],
    shares: &FxHashMap<MemberId, f64>,
    paid: &FxHashMap<MemberId, f64>,
) -> Vec<Balance> {
    members
        .iter()
        .map(|member| Balance {
            id: member.id.clone(),
            amount: paid.get(&member.id).copied().unwrap_or(0.0)
                - shares.get(&member.id).copied().unwrap_or(0.0),
        })
        .collect()
}
