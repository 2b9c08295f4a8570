use super::SchedError;
use crate::interval::{Interval, OverlapKind};
use crate::model::{PersonId, Schedule, Shift};

/// Insère `worker` sur `new` en préservant l'ordre et l'absence de chevauchement.
///
/// Les créneaux touchés sont tronqués, scindés ou supprimés selon leur position
/// relative à `new`. Chaque tour de boucle avance d'un créneau, en supprime un,
/// ou termine : la boucle est bornée par la taille du planning. Les modifications
/// sont faites sur une copie, publiée seulement en cas de succès.
pub(super) fn splice(
    schedule: &mut Schedule,
    new: Interval,
    worker: PersonId,
) -> Result<(), SchedError> {
    let mut shifts = schedule.shifts.clone();
    let mut idx = 0usize;

    loop {
        if idx == shifts.len() {
            shifts.push(Shift::assigned(new, worker));
            break;
        }
        let existing = &mut shifts[idx];

        match new.classify(&existing.interval) {
            OverlapKind::After => idx += 1,
            OverlapKind::Before => {
                shifts.insert(idx, Shift::assigned(new, worker));
                break;
            }
            OverlapKind::OverlapsStart | OverlapKind::Prefix => {
                existing.interval.set_start(new.end())?;
                shifts.insert(idx, Shift::assigned(new, worker));
                break;
            }
            // couvre tout le créneau sans déborder sur le suivant
            OverlapKind::StartsEarlier => {
                existing.interval.set_start(new.start())?;
                existing.worker = Some(worker);
                break;
            }
            OverlapKind::EndsLater | OverlapKind::Subsumes => {
                shifts.remove(idx);
            }
            OverlapKind::Interior => {
                let right = Shift {
                    interval: Interval::new(new.end(), existing.end())?,
                    worker: existing.worker.clone(),
                };
                existing.interval.set_end(new.start())?;
                shifts.insert(idx + 1, Shift::assigned(new, worker));
                shifts.insert(idx + 2, right);
                break;
            }
            OverlapKind::Same => {
                existing.worker = Some(worker);
                break;
            }
            OverlapKind::Suffix => {
                existing.interval.set_end(new.start())?;
                shifts.insert(idx + 1, Shift::assigned(new, worker));
                break;
            }
            OverlapKind::OverlapsEnd => {
                existing.interval.set_end(new.start())?;
                idx += 1;
            }
        }
    }

    schedule.shifts = shifts;
    Ok(())
}
