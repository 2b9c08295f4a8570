use super::{Conflict, ConflictKind};
use crate::model::State;

pub(super) fn detect_conflicts(state: &State) -> Vec<Conflict> {
    let shifts = state.schedule.shifts();
    let mut out = Vec::new();

    for (index, shift) in shifts.iter().enumerate() {
        let mut push = |kind| {
            out.push(Conflict {
                index,
                interval: shift.interval,
                kind,
            })
        };

        if let Some(prev) = index.checked_sub(1).map(|i| &shifts[i]) {
            if shift.start() < prev.start() {
                push(ConflictKind::OutOfOrder);
            } else if prev.interval.overlaps(&shift.interval) {
                push(ConflictKind::Overlap);
            }
        }

        let Some(worker) = shift.worker.as_ref() else {
            push(ConflictKind::Unassigned);
            continue;
        };
        match state.find_person(worker.as_str()) {
            None => push(ConflictKind::UnknownWorker(worker.clone())),
            Some(person) if !person.is_available(&shift.interval) => {
                push(ConflictKind::Unavailable(worker.clone()))
            }
            Some(_) => {}
        }
    }

    out
}
