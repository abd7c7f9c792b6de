//! Classification of an event's particles into role candidates

use crate::particle::{pid, DetectorRegion, IntField, ParticleTable};

/// Role that a particle row may play in a skimmed event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Scattered electron candidate
    Electron,
    /// Positive track candidate
    Positive,
    /// Negative track candidate
    Negative,
}

/// Predicate over a row's PID code and row index
type RulePredicate = fn(code: i32, row: usize) -> bool;

/// Role assignment rules, evaluated in order, first match wins
///
/// The electron clause of the negative-track rule can never fire since the
/// electron rule comes first. It predates the current ordering and assumes
/// that the trigger electron sits in row 0, which is not guaranteed either.
/// Both are kept as is: reordering these rules changes which events pass.
///
pub const ROLE_RULES: [(RulePredicate, Role); 3] = [
    (|code, _row| code == pid::ELECTRON, Role::Electron),
    (
        |code, _row| code == pid::PI_PLUS || code == pid::POSITRON,
        Role::Positive,
    ),
    (
        |code, row| code == pid::PI_MINUS || (code == pid::ELECTRON && row > 0),
        Role::Negative,
    ),
];

/// Assign a role to a forward-detector particle, if any rule matches
pub fn assign_role(code: i32, row: usize) -> Option<Role> {
    ROLE_RULES
        .iter()
        .find(|(matches, _)| matches(code, row))
        .map(|&(_, role)| role)
}

/// Row indices of an event's role candidates
///
/// Each row appears in at most one list, and lists are sorted by row index.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateSet {
    /// Electron candidates
    pub electrons: Vec<usize>,

    /// Positive track candidates
    pub positives: Vec<usize>,

    /// Negative track candidates
    pub negatives: Vec<usize>,
}
//
impl CandidateSet {
    /// Classify the particles of an event
    ///
    /// Only particles reconstructed in the forward detector are eligible.
    ///
    pub fn classify(table: &(impl ParticleTable + ?Sized)) -> Self {
        let mut candidates = Self::default();
        for row in 0..table.rows() {
            let status = table.get_int(IntField::Status, row);
            if DetectorRegion::from_status(status) != DetectorRegion::FORWARD {
                continue;
            }
            let code = table.get_int(IntField::Pid, row);
            if let Some(role) = assign_role(code, row) {
                candidates.role_mut(role).push(row);
            }
        }
        candidates
    }

    /// Candidates for a given role
    pub fn role(&self, role: Role) -> &[usize] {
        match role {
            Role::Electron => &self.electrons,
            Role::Positive => &self.positives,
            Role::Negative => &self.negatives,
        }
    }

    /// Mutable access to the candidates of a given role
    fn role_mut(&mut self, role: Role) -> &mut Vec<usize> {
        match role {
            Role::Electron => &mut self.electrons,
            Role::Positive => &mut self.positives,
            Role::Negative => &mut self.negatives,
        }
    }

    /// Truth that no particle was assigned any role
    pub fn is_empty(&self) -> bool {
        self.electrons.is_empty() && self.positives.is_empty() && self.negatives.is_empty()
    }
}
