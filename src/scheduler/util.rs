use crate::interval::Interval;
use crate::model::Person;

pub(super) fn find_person_index(people: &[Person], id: &str) -> Option<usize> {
    people.iter().position(|p| p.id.as_str() == id)
}

/// Index de la personne disponible la moins prioritaire (départage `order_num`, puis nom).
pub(super) fn next_available(people: &[Person], interval: &Interval) -> Option<usize> {
    people
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_available(interval))
        .min_by(|(_, a), (_, b)| a.selection_cmp(b))
        .map(|(idx, _)| idx)
}
