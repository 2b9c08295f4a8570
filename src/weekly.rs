//! Générateur de créneaux hebdomadaires contigus.

use crate::interval::Interval;
use crate::scheduler::SchedError;
use anyhow::anyhow;
use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Utc, Weekday};

const SECONDS_PER_WEEK: i64 = 7 * 24 * 60 * 60;

/// Génère les créneaux d'une semaine chacun, de la dernière occurrence de `anchor`
/// (à minuit, dans le fuseau de `from`) jusqu'à couvrir `until`.
///
/// Chaque borne est recalculée comme le minuit local du jour +7 plutôt qu'en ajoutant
/// 168 heures, ce qui absorbe les changements d'heure. Le nombre de créneaux vaut
/// `floor(jours / 7) + 1`, les jours étant comptés depuis le premier début.
pub fn generate_weekly_shifts<Tz: TimeZone>(
    from: &DateTime<Tz>,
    until: &DateTime<Tz>,
    anchor: Weekday,
) -> Result<Vec<Interval>, SchedError> {
    if until <= from {
        return Err(SchedError::InvalidRange);
    }
    let tz = from.timezone();
    let first = last_weekday(from, anchor)?;
    let span = until.with_timezone(&Utc) - first.with_timezone(&Utc);
    let count = span.num_seconds() / SECONDS_PER_WEEK + 1;

    let mut out = Vec::with_capacity(count as usize);
    let mut day = first.date_naive();
    let mut start = first;
    for _ in 0..count {
        day = day
            .checked_add_days(Days::new(7))
            .ok_or_else(|| anyhow!("date overflow after {day}"))?;
        let end = local_midnight(&tz, day)?;
        out.push(Interval::new(start, end.clone())?);
        start = end;
    }
    Ok(out)
}

/// Minuit du jour `weekday` le plus récent, `from` inclus.
pub fn last_weekday<Tz: TimeZone>(
    from: &DateTime<Tz>,
    weekday: Weekday,
) -> Result<DateTime<Tz>, SchedError> {
    let back = (from.weekday().num_days_from_monday() + 7 - weekday.num_days_from_monday()) % 7;
    let day = from
        .date_naive()
        .checked_sub_days(Days::new(u64::from(back)))
        .ok_or_else(|| anyhow!("date underflow before {}", from.date_naive()))?;
    local_midnight(&from.timezone(), day)
}

/// Début du jour local. Si minuit n'existe pas (passage à l'heure d'été à 0h),
/// prend la première heure valide.
pub(crate) fn local_midnight<Tz: TimeZone>(
    tz: &Tz,
    day: NaiveDate,
) -> Result<DateTime<Tz>, SchedError> {
    (0..4)
        .filter_map(|h| day.and_hms_opt(h, 0, 0))
        .find_map(|naive| tz.from_local_datetime(&naive).earliest())
        .ok_or_else(|| SchedError::Other(anyhow!("no local midnight on {day}")))
}
