use crate::interval::Interval;
use crate::model::{Person, Schedule};
use anyhow::{bail, Context};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use csv::{ReaderBuilder, WriterBuilder};
use std::path::Path;

/// Granularité d'une date saisie en notation compacte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Day,
    Hour,
    Exact,
}

impl Precision {
    /// Durée implicite quand aucune fin n'est donnée.
    pub fn default_span(self) -> Duration {
        match self {
            Precision::Hour => Duration::hours(1),
            Precision::Day | Precision::Exact => Duration::days(1),
        }
    }
}

/// Parse `MMDD`, `MMDDHH`, `YYYYMMDD`, `YYYYMMDDHH` (heure locale de `tz`) ou RFC3339.
/// Sans année, `year` est utilisée.
pub fn parse_when<Tz: TimeZone>(
    raw: &str,
    tz: &Tz,
    year: i32,
) -> anyhow::Result<(DateTime<Tz>, Precision)> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok((dt.with_timezone(tz), Precision::Exact));
    }
    if !raw.chars().all(|c| c.is_ascii_digit()) {
        bail!("invalid date {raw}, expected [YYYY]MMDD[HH]");
    }
    let full = match raw.len() {
        4 | 6 => format!("{year:04}{raw}"),
        8 | 10 => raw.to_string(),
        _ => bail!("invalid date {raw}, expected [YYYY]MMDD[HH]"),
    };
    let date = NaiveDate::parse_from_str(&full[..8], "%Y%m%d")
        .with_context(|| format!("invalid date {raw}"))?;
    let (hour, precision) = if full.len() == 10 {
        let hour: u32 = full[8..].parse().with_context(|| format!("invalid hour in {raw}"))?;
        (hour, Precision::Hour)
    } else {
        (0, Precision::Day)
    };
    let naive = date
        .and_hms_opt(hour, 0, 0)
        .with_context(|| format!("invalid hour in {raw}"))?;
    let local = tz
        .from_local_datetime(&naive)
        .earliest()
        .with_context(|| format!("{raw} does not exist in this time zone"))?;
    Ok((local, precision))
}

/// Plage `[start, end)` ; sans fin explicite, un jour ou une heure selon la saisie.
pub fn parse_span<Tz: TimeZone>(
    start_raw: &str,
    end_raw: Option<&str>,
    tz: &Tz,
    year: i32,
) -> anyhow::Result<(DateTime<Tz>, DateTime<Tz>)> {
    let (start, precision) = parse_when(start_raw, tz, year)?;
    let end = match end_raw {
        Some(raw) => parse_when(raw, tz, year)?.0,
        None => start.clone() + precision.default_span(),
    };
    Ok((start, end))
}

/// Import de personnes depuis CSV: header `identifier[,order_num][,unavailable]`
pub fn import_people_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Person>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let id = rec.get(0).context("missing identifier")?.trim();
        if id.is_empty() {
            bail!("invalid people row (empty identifier)");
        }
        let mut person = Person::new(id);
        if let Some(order) = rec.get(1).map(str::trim).filter(|s| !s.is_empty()) {
            person.order_num = order
                .parse()
                .with_context(|| format!("invalid order_num for {id}"))?;
        }
        if let Some(ranges) = rec.get(2).map(str::trim).filter(|s| !s.is_empty()) {
            person.unavailability = parse_unavailability(ranges)
                .with_context(|| format!("invalid unavailable value for {id}"))?;
        }
        out.push(person);
    }
    Ok(out)
}

fn parse_unavailability(raw: &str) -> anyhow::Result<Vec<Interval>> {
    raw.split(';')
        .filter(|chunk| !chunk.trim().is_empty())
        .map(|chunk| parse_range_chunk(chunk.trim()))
        .collect()
}

fn parse_range_chunk(chunk: &str) -> anyhow::Result<Interval> {
    if let Some((start_raw, end_raw)) = chunk.split_once('/').or_else(|| chunk.split_once("..")) {
        let (start, _) = parse_point(start_raw.trim())?;
        let (mut end, end_was_date) = parse_point(end_raw.trim())?;
        if end_was_date {
            end += Duration::days(1);
        }
        Ok(Interval::new(start, end)?)
    } else {
        let (start, _) = parse_point(chunk)?;
        Ok(Interval::new(start, start + Duration::days(1))?)
    }
}

fn parse_point(raw: &str) -> anyhow::Result<(DateTime<Utc>, bool)> {
    if let Ok(dt) = raw.parse::<DateTime<Utc>>() {
        return Ok((dt, false));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("invalid date/datetime: {raw}"))?;
    let datetime = date
        .and_hms_opt(0, 0, 0)
        .context("invalid midnight conversion")?;
    Ok((Utc.from_utc_datetime(&datetime), true))
}

/// Export CSV du planning: header `start,end,worker`
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["start", "end", "worker"])?;
    for s in schedule {
        let start = s.start().to_rfc3339();
        let end = s.end().to_rfc3339();
        let worker = s.worker.as_ref().map(|w| w.as_str()).unwrap_or("");
        w.write_record([start.as_str(), end.as_str(), worker])?;
    }
    w.flush()?;
    Ok(())
}
