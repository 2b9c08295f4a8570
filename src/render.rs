use crate::model::Schedule;
use crate::weekly::local_midnight;
use chrono::{DateTime, Datelike, Days, TimeZone, Utc};
use std::fmt::Display;

/// Permet de customiser le rendu du planning (liste, calendrier, etc.).
pub trait ScheduleRenderer {
    fn render(&self, schedule: &Schedule) -> String;
}

/// Une ligne par créneau : `<personne> from <début> to <fin>`.
#[derive(Debug, Clone)]
pub struct TextRenderer<Tz: TimeZone> {
    pub tz: Tz,
}

impl<Tz: TimeZone> TextRenderer<Tz> {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    fn stamp(&self, at: DateTime<Utc>) -> String
    where
        Tz::Offset: Display,
    {
        at.with_timezone(&self.tz)
            .format("%Y-%m-%d %H:%M %Z")
            .to_string()
    }
}

impl<Tz: TimeZone> ScheduleRenderer for TextRenderer<Tz>
where
    Tz::Offset: Display,
{
    fn render(&self, schedule: &Schedule) -> String {
        schedule
            .iter()
            .map(|s| {
                format!(
                    "{} from {} to {}",
                    s.worker_label(),
                    self.stamp(s.start()),
                    self.stamp(s.end())
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

const CALENDAR_HEADER: &str = "\
| Sunday    | Monday    | Tuesday   | Wednesday | Thursday  | Friday    | Saturday  |
|-----------+-----------+-----------+-----------+-----------+-----------+-----------|";

/// Grille hebdomadaire commençant le dimanche, une cellule par jour
/// avec la personne de garde à minuit.
#[derive(Debug, Clone)]
pub struct CalendarRenderer<Tz: TimeZone> {
    pub tz: Tz,
    pub max_weeks: u32,
}

impl<Tz: TimeZone> CalendarRenderer<Tz> {
    pub fn new(tz: Tz, max_weeks: u32) -> Self {
        Self { tz, max_weeks }
    }

    fn cell(&self, schedule: &Schedule, day: chrono::NaiveDate) -> String {
        let shift = local_midnight(&self.tz, day)
            .ok()
            .and_then(|at| schedule.shift_at(at.with_timezone(&Utc)));
        match shift {
            Some(s) => format!(" {:>2} {:<6} |", day.day(), s.worker_label()),
            None => "           |".to_string(),
        }
    }
}

impl<Tz: TimeZone> ScheduleRenderer for CalendarRenderer<Tz> {
    fn render(&self, schedule: &Schedule) -> String {
        let mut lines = vec![CALENDAR_HEADER.to_string()];
        let Some((first, last)) = schedule.span() else {
            return lines.join("\n");
        };

        let first_day = first.with_timezone(&self.tz).date_naive();
        let back = u64::from(first_day.weekday().num_days_from_sunday());
        let Some(mut sunday) = first_day.checked_sub_days(Days::new(back)) else {
            return lines.join("\n");
        };

        for _ in 0..self.max_weeks {
            let week_start = local_midnight(&self.tz, sunday).map(|d| d.with_timezone(&Utc));
            if matches!(week_start, Ok(at) if at >= last) {
                break;
            }
            let mut line = String::from("|");
            for offset in 0..7 {
                if let Some(day) = sunday.checked_add_days(Days::new(offset)) {
                    line.push_str(&self.cell(schedule, day));
                }
            }
            lines.push(line);
            match sunday.checked_add_days(Days::new(7)) {
                Some(next) => sunday = next,
                None => break,
            }
        }
        lines.join("\n")
    }
}
