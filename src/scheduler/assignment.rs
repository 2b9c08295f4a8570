use super::{types::SchedError, util, BuildReport};
use crate::interval::Interval;
use crate::model::{Person, Schedule};
use crate::weekly;
use chrono::{DateTime, TimeZone, Weekday};
use tracing::{debug, warn};

/// Assigne une personne à chaque créneau, dans l'ordre, en faisant tourner les priorités.
///
/// Pour chaque créneau : la personne disponible de plus faible priorité est retenue,
/// sa priorité augmente de la taille du roster et celle de toutes les autres baisse de 1.
/// Si personne n'est disponible, le créneau reste vide et les priorités ne bougent pas.
pub fn assign_fair(people: &mut [Person], schedule: &mut Schedule) -> BuildReport {
    let total = people.len() as i64;
    let mut report = BuildReport::default();

    for shift in schedule.shifts.iter_mut() {
        let Some(chosen) = util::next_available(people, &shift.interval) else {
            warn!(shift = %shift.interval, "no available worker, shift left unassigned");
            shift.worker = None;
            report.unfilled.push(shift.interval);
            continue;
        };

        for (idx, person) in people.iter_mut().enumerate() {
            if idx == chosen {
                person.inc_priority(total);
            } else {
                person.dec_priority(1);
            }
        }

        let picked = &people[chosen];
        debug!(worker = %picked.id, priority = picked.priority, shift = %shift.interval, "assigned");
        shift.worker = Some(picked.id.clone());
    }

    report
}

/// Construit un planning hebdomadaire et l'assigne sur une copie du roster :
/// les priorités de `people` ne sont pas modifiées.
pub fn build_schedule<Tz: TimeZone>(
    people: &[Person],
    from: &DateTime<Tz>,
    until: &DateTime<Tz>,
    anchor: Weekday,
) -> Result<(Schedule, BuildReport), SchedError> {
    let intervals: Vec<Interval> = weekly::generate_weekly_shifts(from, until, anchor)?;
    let mut schedule = Schedule::from_intervals(intervals);
    let mut working = people.to_vec();
    let report = assign_fair(&mut working, &mut schedule);
    Ok((schedule, report))
}
