//! Algèbre d'intervalles semi-ouverts `[start, end)`.
//!
//! Deux intervalles qui se touchent (`a.end == b.start`) ne se chevauchent pas :
//! il n'existe donc aucun trou représentable entre deux créneaux consécutifs.

use crate::scheduler::SchedError;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Intervalle de temps `[start, end)` avec `end > start`, stocké en UTC.
///
/// L'égalité porte sur les instants, indépendamment du fuseau d'origine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RawInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<RawInterval> for Interval {
    type Error = SchedError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Interval::new(raw.start, raw.end)
    }
}

/// Position relative d'un intervalle A par rapport à un intervalle B.
///
/// Exactement un cas s'applique à toute paire d'intervalles valides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlapKind {
    /// A se termine avant (ou quand) B commence.
    Before,
    /// A commence avant B et se termine à l'intérieur de B.
    OverlapsStart,
    /// Même début, A se termine avant B.
    Prefix,
    /// Même début, A se termine après B.
    EndsLater,
    /// A est strictement contenu dans B.
    Interior,
    Same,
    /// A contient strictement B.
    Subsumes,
    /// A commence avant B, même fin.
    StartsEarlier,
    /// A commence après B, même fin.
    Suffix,
    /// A commence à l'intérieur de B et se termine après.
    OverlapsEnd,
    /// A commence après (ou quand) B se termine.
    After,
}

impl OverlapKind {
    /// Cas obtenu en échangeant les deux opérandes.
    pub fn inverse(self) -> Self {
        match self {
            Self::Before => Self::After,
            Self::OverlapsStart => Self::OverlapsEnd,
            Self::Prefix => Self::EndsLater,
            Self::EndsLater => Self::Prefix,
            Self::Interior => Self::Subsumes,
            Self::Same => Self::Same,
            Self::Subsumes => Self::Interior,
            Self::StartsEarlier => Self::Suffix,
            Self::Suffix => Self::StartsEarlier,
            Self::OverlapsEnd => Self::OverlapsStart,
            Self::After => Self::Before,
        }
    }

    pub fn is_overlap(self) -> bool {
        !matches!(self, Self::Before | Self::After)
    }
}

impl Interval {
    /// Crée un intervalle en validant que `end > start`.
    pub fn new<Tz: TimeZone>(start: DateTime<Tz>, end: DateTime<Tz>) -> Result<Self, SchedError> {
        let start = start.with_timezone(&Utc);
        let end = end.with_timezone(&Utc);
        if end <= start {
            return Err(SchedError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Déplace le début ; doit rester strictement avant la fin courante.
    pub fn set_start(&mut self, start: DateTime<Utc>) -> Result<(), SchedError> {
        if self.end <= start {
            return Err(SchedError::InvalidRange);
        }
        self.start = start;
        Ok(())
    }

    /// Déplace la fin ; doit rester strictement après le début courant.
    pub fn set_end(&mut self, end: DateTime<Utc>) -> Result<(), SchedError> {
        if end <= self.start {
            return Err(SchedError::InvalidRange);
        }
        self.end = end;
        Ok(())
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }

    pub fn overlaps(&self, other: &Interval) -> bool {
        overlaps(self, other)
    }

    pub fn classify(&self, other: &Interval) -> OverlapKind {
        classify(self, other)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}

/// Vrai ssi les deux intervalles partagent au moins un instant.
pub fn overlaps(a: &Interval, b: &Interval) -> bool {
    a.end > b.start && a.start < b.end
}

/// Classe A par rapport à B. L'ordre des tests est significatif : le premier cas
/// satisfait l'emporte.
pub fn classify(a: &Interval, b: &Interval) -> OverlapKind {
    use std::cmp::Ordering::{Equal, Greater, Less};

    if a.end <= b.start {
        return OverlapKind::Before;
    }
    if a.start >= b.end {
        return OverlapKind::After;
    }
    match (a.start.cmp(&b.start), a.end.cmp(&b.end)) {
        (Less, Less) => OverlapKind::OverlapsStart,
        (Equal, Less) => OverlapKind::Prefix,
        (Equal, Greater) => OverlapKind::EndsLater,
        (Greater, Less) => OverlapKind::Interior,
        (Equal, Equal) => OverlapKind::Same,
        (Less, Greater) => OverlapKind::Subsumes,
        (Less, Equal) => OverlapKind::StartsEarlier,
        (Greater, Equal) => OverlapKind::Suffix,
        // a.start < b.end est garanti ici
        (Greater, Greater) => OverlapKind::OverlapsEnd,
    }
}
