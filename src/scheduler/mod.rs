mod assignment;
mod conflicts;
mod mutate;
mod types;
mod util;

pub use assignment::{assign_fair, build_schedule};
pub use types::{BuildReport, Conflict, ConflictKind, SchedError};

use crate::interval::Interval;
use crate::model::{BuildOptions, Person, PersonId, Schedule, State};
use chrono::{DateTime, Duration, TimeZone, Weekday};
use tracing::info;

/// Scheduler : encapsule l'état (roster + planning) manipulé par la couche de commandes.
///
/// Toutes les opérations sont synchrones ; `&mut self` garantit un seul écrivain.
#[derive(Debug, Default)]
pub struct Scheduler {
    state: State,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            state: State::default(),
        }
    }

    pub fn from_state(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }
    pub fn into_state(self) -> State {
        self.state
    }

    pub fn people(&self) -> &[Person] {
        &self.state.people
    }
    pub fn schedule(&self) -> &Schedule {
        &self.state.schedule
    }
    pub fn options(&self) -> BuildOptions {
        self.state.options
    }
    pub fn set_options(&mut self, options: BuildOptions) {
        self.state.options = options;
    }

    pub fn add_person(&mut self, id: &str, order_num: i32) -> Result<(), SchedError> {
        if self.state.find_person(id).is_some() {
            return Err(SchedError::DuplicateIdentifier(id.to_string()));
        }
        self.state.people.push(Person::new(id).with_order(order_num));
        info!(person = id, order_num, "person added");
        Ok(())
    }

    /// Retire une personne. Les créneaux déjà assignés gardent son identifiant.
    pub fn remove_person(&mut self, id: &str) -> Result<(), SchedError> {
        let idx = util::find_person_index(&self.state.people, id)
            .ok_or_else(|| SchedError::NotFound(id.to_string()))?;
        self.state.people.remove(idx);
        info!(person = id, "person removed");
        Ok(())
    }

    pub fn mark_unavailable<Tz: TimeZone>(
        &mut self,
        id: &str,
        start: DateTime<Tz>,
        end: DateTime<Tz>,
    ) -> Result<(), SchedError> {
        let person = self
            .state
            .find_person_mut(id)
            .ok_or_else(|| SchedError::NotFound(id.to_string()))?;
        let interval = Interval::new(start, end)?;
        person.add_unavailable(interval);
        info!(person = id, %interval, "unavailability recorded");
        Ok(())
    }

    /// (Re)construit le planning entre `from` et `until` et remplace le planning courant.
    pub fn build_schedule<Tz: TimeZone>(
        &mut self,
        from: &DateTime<Tz>,
        until: &DateTime<Tz>,
        anchor: Weekday,
    ) -> Result<BuildReport, SchedError> {
        let (schedule, report) = build_schedule(&self.state.people, from, until, anchor)?;
        info!(
            shifts = schedule.len(),
            unfilled = report.unfilled.len(),
            "schedule built"
        );
        self.state.schedule = schedule;
        Ok(report)
    }

    /// Construit à partir de `from` sur l'horizon et l'ancrage des options courantes.
    pub fn build_from<Tz: TimeZone>(
        &mut self,
        from: &DateTime<Tz>,
    ) -> Result<BuildReport, SchedError> {
        let BuildOptions { anchor, weeks } = self.state.options;
        let until = from.clone() + Duration::weeks(i64::from(weeks.max(1)));
        self.build_schedule(from, &until, anchor)
    }

    pub fn current_assignment(&self) -> Result<&PersonId, SchedError> {
        self.state.schedule.current()
    }

    /// Édition manuelle : `id` prend `[start, end)`, les créneaux voisins s'ajustent.
    pub fn edit_shift<Tz: TimeZone>(
        &mut self,
        id: &str,
        start: DateTime<Tz>,
        end: DateTime<Tz>,
    ) -> Result<(), SchedError> {
        let worker = self
            .state
            .find_person(id)
            .map(|p| p.id.clone())
            .ok_or_else(|| SchedError::NotFound(id.to_string()))?;
        let interval = Interval::new(start, end)?;
        mutate::splice(&mut self.state.schedule, interval, worker)?;
        info!(person = id, %interval, shifts = self.state.schedule.len(), "shift edited");
        Ok(())
    }

    pub fn detect_conflicts(&self) -> Vec<Conflict> {
        conflicts::detect_conflicts(&self.state)
    }
}
