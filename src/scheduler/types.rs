use crate::interval::Interval;
use crate::model::PersonId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("invalid time range: end must be after start")]
    InvalidRange,
    #[error("duplicate identifier: {0}")]
    DuplicateIdentifier(String),
    #[error("unknown person: {0}")]
    NotFound(String),
    #[error("no available worker for {0}")]
    NoAvailableWorker(Interval),
    #[error("no one is currently scheduled")]
    NoAssignment,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Bilan d'une construction : les créneaux restés sans personne.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub unfilled: Vec<Interval>,
}

impl BuildReport {
    pub fn is_complete(&self) -> bool {
        self.unfilled.is_empty()
    }

    /// Avertissements non bloquants, un par créneau non pourvu.
    pub fn warnings(&self) -> impl Iterator<Item = SchedError> + '_ {
        self.unfilled
            .iter()
            .map(|interval| SchedError::NoAvailableWorker(*interval))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictKind {
    OutOfOrder,
    Overlap,
    Unassigned,
    UnknownWorker(PersonId),
    Unavailable(PersonId),
}

/// Anomalie relevée sur le créneau `index` du planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub index: usize,
    pub interval: Interval,
    pub kind: ConflictKind,
}
