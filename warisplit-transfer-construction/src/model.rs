/// Net position of one person (positive: is owed money, negative: owes money).
/// Amounts are real-valued minor currency units; rounding happens only when a
/// transfer is emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonBalance<Id = u64> {
    pub id: Id,
    pub amount: f64,
}

/// A directed payment obligation in minor currency units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer<Id = u64> {
    pub from: Id,
    pub to: Id,
    pub amount: i64,
}
