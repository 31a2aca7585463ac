use std::fmt;

use warisplit_transfer_construction::{PersonBalance, RoundingUnit, Transfer};

pub const DEFAULT_BIAS: f64 = 1.0;
pub const MIN_BIAS: f64 = 0.1;
pub const MAX_BIAS: f64 = 3.0;

pub const DEFAULT_GROUP_COUNT: u32 = 1;
pub const MIN_GROUP_COUNT: u32 = 1;
pub const MAX_GROUP_COUNT: u32 = 999;

// Roster caps published for the schema boundary; the engine itself accepts
// any size.
pub const MAX_MEMBERS: usize = 50;
pub const MAX_EXPENSES: usize = 50;
pub const MAX_GROUPS: usize = 10;

/// Identifies a member. Distinct from [`ExpenseId`] and [`GroupId`] so the
/// three kinds can never be mixed up at a call site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MemberId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies an expense.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExpenseId(String);

impl ExpenseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ExpenseId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a participant group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(String);

impl GroupId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GroupId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named participant. `bias` scales the member's share of pooled costs;
/// 1.0 is neutral.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub bias: f64,
}

impl Member {
    /// Bias is clamped to `[MIN_BIAS, MAX_BIAS]`.
    pub fn new(id: MemberId, name: impl Into<String>, bias: f64) -> Self {
        Self {
            id,
            name: name.into(),
            bias: bias.clamp(MIN_BIAS, MAX_BIAS),
        }
    }
}

/// Anonymous bulk attendees, weighted by headcount. Unlike a member, a group
/// may carry a bias of zero to mark the whole block as free.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantGroup {
    pub id: GroupId,
    pub name: String,
    pub count: u32,
    pub bias: f64,
}

impl ParticipantGroup {
    /// Headcount is clamped to `[MIN_GROUP_COUNT, MAX_GROUP_COUNT]` and bias
    /// to `[0.0, MAX_BIAS]`.
    pub fn new(id: GroupId, name: impl Into<String>, count: u32, bias: f64) -> Self {
        Self {
            id,
            name: name.into(),
            count: count.clamp(MIN_GROUP_COUNT, MAX_GROUP_COUNT),
            bias: bias.clamp(0.0, MAX_BIAS),
        }
    }
}

/// One fronted payment. An empty `participants` list means every current
/// member takes part.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: ExpenseId,
    pub name: String,
    pub amount: f64,
    pub paid_by: MemberId,
    pub participants: Vec<MemberId>,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

/// A member's net signed position before transfer minimization.
pub type Balance = PersonBalance<MemberId>;

/// A directed member-to-member payment obligation.
pub type Settlement = Transfer<MemberId>;

/// Per-group share of the pooled total. Both amounts are rounding-unit
/// multiples and may be zero for a free group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSettlement {
    pub group_id: GroupId,
    pub group_name: String,
    pub per_person_amount: i64,
    pub total_amount: i64,
}

/// Immutable input for one settlement run. The engine never mutates it;
/// callers re-invoke with a fresh snapshot when their data changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettlementSnapshot {
    pub members: Vec<Member>,
    pub groups: Vec<ParticipantGroup>,
    pub expenses: Vec<Expense>,
    pub rounding_unit: RoundingUnit,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettlementResult {
    pub settlements: Vec<Settlement>,
    pub group_settlements: Vec<GroupSettlement>,
}
