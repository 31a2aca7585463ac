use fxhash::FxHashMap;

use crate::model::{Expense, Member, MemberId};

/// Sums what each member actually fronted. A payer id that is no longer in
/// the roster still accumulates here; the balance resolver simply never reads
/// it.
pub fn paid_totals(members: &[Member], expenses: &[Expense]) -> FxHashMap<MemberId, f64> {
    let mut paid: FxHashMap<MemberId, f64> = members.iter().map(|m| (m.id.clone(), 0.0)).collect();

    for expense in expenses {
        *paid.entry(expense.paid_by.clone()).or_insert(0.0) += expense.amount;
    }

    paid
}
