use crate::interval::Interval;
use crate::scheduler::SchedError;
use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Identifiant fort pour Person (nom unique dans le roster)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PersonId(String);

impl PersonId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Personne planifiable : priorité mutable, ordre de départage stable, indisponibilités.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    #[serde(default)]
    pub priority: i64,
    #[serde(default)]
    pub order_num: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unavailability: Vec<Interval>,
}

impl Person {
    pub fn new<S: AsRef<str>>(id: S) -> Self {
        Self {
            id: PersonId::new(id),
            priority: 0,
            order_num: 0,
            unavailability: Vec::new(),
        }
    }

    pub fn with_order(mut self, order_num: i32) -> Self {
        self.order_num = order_num;
        self
    }

    /// Disponible ssi aucune indisponibilité ne chevauche `interval`. Jamais mis en cache.
    pub fn is_available(&self, interval: &Interval) -> bool {
        !self.unavailability.iter().any(|u| u.overlaps(interval))
    }

    pub fn add_unavailable(&mut self, interval: Interval) {
        self.unavailability.push(interval);
    }

    pub fn inc_priority(&mut self, amount: i64) {
        self.priority += amount;
    }

    pub fn dec_priority(&mut self, amount: i64) {
        self.priority -= amount;
    }

    /// Ordre de sélection : priorité, puis `order_num`, puis identifiant.
    pub fn selection_cmp(&self, other: &Person) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.order_num.cmp(&other.order_num))
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Créneau : un intervalle et la personne assignée (`None` = non pourvu).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub interval: Interval,
    pub worker: Option<PersonId>,
}

impl Shift {
    pub fn unassigned(interval: Interval) -> Self {
        Self {
            interval,
            worker: None,
        }
    }

    pub fn assigned(interval: Interval, worker: PersonId) -> Self {
        Self {
            interval,
            worker: Some(worker),
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.interval.start()
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.interval.end()
    }

    /// Identifiant assigné, `-` si le créneau est vide.
    pub fn worker_label(&self) -> &str {
        self.worker.as_ref().map(PersonId::as_str).unwrap_or("-")
    }
}

/// Séquence de créneaux triée par début, sans chevauchement.
///
/// N'est modifiée que par le générateur hebdomadaire et par l'édition manuelle
/// (`Scheduler::edit_shift`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Schedule {
    pub(crate) shifts: Vec<Shift>,
}

impl Schedule {
    pub fn from_intervals<I: IntoIterator<Item = Interval>>(intervals: I) -> Self {
        Self {
            shifts: intervals.into_iter().map(Shift::unassigned).collect(),
        }
    }

    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shift> {
        self.shifts.iter()
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Personne du premier créneau.
    pub fn current(&self) -> Result<&PersonId, SchedError> {
        self.shifts
            .first()
            .and_then(|s| s.worker.as_ref())
            .ok_or(SchedError::NoAssignment)
    }

    /// Créneau couvrant l'instant `at`, s'il existe.
    pub fn shift_at(&self, at: DateTime<Utc>) -> Option<&Shift> {
        let idx = self.shifts.partition_point(|s| s.end() <= at);
        self.shifts.get(idx).filter(|s| s.interval.contains(at))
    }

    /// Plage couverte, du début du premier créneau à la fin du dernier.
    pub fn span(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let first = self.shifts.first()?;
        let last = self.shifts.last()?;
        Some((first.start(), last.end()))
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Shift;
    type IntoIter = std::slice::Iter<'a, Shift>;

    fn into_iter(self) -> Self::IntoIter {
        self.shifts.iter()
    }
}

/// Options de construction du planning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Jour de la semaine où commence chaque créneau.
    pub anchor: Weekday,
    /// Horizon de construction, en semaines.
    pub weeks: u32,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            anchor: Weekday::Wed,
            weeks: 10,
        }
    }
}

/// Instantané sérialisable : roster + planning courant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct State {
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub schedule: Schedule,
    #[serde(default)]
    pub options: BuildOptions,
}

impl State {
    pub fn find_person(&self, id: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.id.as_str() == id)
    }
    pub fn find_person_mut(&mut self, id: &str) -> Option<&mut Person> {
        self.people.iter_mut().find(|p| p.id.as_str() == id)
    }
}
