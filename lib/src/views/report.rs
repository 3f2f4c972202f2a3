// lib/src/views/report.rs

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use models::{Appointment, AppointmentStatus, Patient};

/// The date-range filter on the reports screen. Boundaries are computed from
/// the supplied "today", never from the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportRange {
    ThisMonth,
    LastMonth,
    ThisYear,
    AllTime,
}

impl ReportRange {
    /// Inclusive date bounds, or `None` for the unfiltered all-time range.
    pub fn bounds(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            ReportRange::ThisMonth => Some(month_bounds(today)),
            ReportRange::LastMonth => {
                let last_month = today.checked_sub_months(Months::new(1))?;
                Some(month_bounds(last_month))
            }
            ReportRange::ThisYear => {
                let start = NaiveDate::from_ymd_opt(today.year(), 1, 1)?;
                let end = NaiveDate::from_ymd_opt(today.year(), 12, 31)?;
                Some((start, end))
            }
            ReportRange::AllTime => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportRange::ThisMonth => "This Month",
            ReportRange::LastMonth => "Last Month",
            ReportRange::ThisYear => "This Year",
            ReportRange::AllTime => "All Time",
        }
    }
}

impl FromStr for ReportRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "this-month" => Ok(ReportRange::ThisMonth),
            "last-month" => Ok(ReportRange::LastMonth),
            "this-year" => Ok(ReportRange::ThisYear),
            "all-time" => Ok(ReportRange::AllTime),
            other => Err(format!(
                "unknown range '{}' (expected this-month, last-month, this-year or all-time)",
                other
            )),
        }
    }
}

fn month_bounds(day_in_month: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = day_in_month.with_day(1).expect("day 1 always exists");
    let end = start + Months::new(1) - chrono::Duration::days(1);
    (start, end)
}

/// Headline counts and percentage rates over the filtered appointment set.
/// Rates are rounded whole percentages; an empty set yields 0 for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    pub total_appointments: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub no_shows: usize,
    pub completion_rate: u32,
    pub no_show_rate: u32,
}

pub fn filter_by_range<'a>(
    appointments: &'a [Appointment],
    range: ReportRange,
    today: NaiveDate,
) -> Vec<&'a Appointment> {
    match range.bounds(today) {
        Some((start, end)) => appointments
            .iter()
            .filter(|a| a.date >= start && a.date <= end)
            .collect(),
        None => appointments.iter().collect(),
    }
}

pub fn report_stats(filtered: &[&Appointment]) -> ReportStats {
    let total = filtered.len();
    let count = |status: AppointmentStatus| filtered.iter().filter(|a| a.status == status).count();
    let completed = count(AppointmentStatus::Completed);
    let cancelled = count(AppointmentStatus::Cancelled);
    let no_shows = count(AppointmentStatus::NoShow);

    ReportStats {
        total_appointments: total,
        completed,
        cancelled,
        no_shows,
        completion_rate: rate(completed, total),
        no_show_rate: rate(no_shows, total),
    }
}

fn rate(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u32
}

/// Per-status counts in first-encountered order.
pub fn status_breakdown(filtered: &[&Appointment]) -> Vec<(AppointmentStatus, usize)> {
    let mut counts: Vec<(AppointmentStatus, usize)> = Vec::new();
    for appointment in filtered {
        match counts.iter_mut().find(|(status, _)| *status == appointment.status) {
            Some((_, count)) => *count += 1,
            None => counts.push((appointment.status, 1)),
        }
    }
    counts
}

/// Patients registered inside the range; every patient counts for all-time.
pub fn new_patients(patients: &[Patient], range: ReportRange, today: NaiveDate) -> usize {
    match range.bounds(today) {
        Some((start, end)) => patients
            .iter()
            .filter(|p| {
                let created = p.created_at.date_naive();
                created >= start && created <= end
            })
            .count(),
        None => patients.len(),
    }
}

/// The five most frequent visit reasons, descending by count; ties keep
/// first-encountered order.
pub fn top_reasons(filtered: &[&Appointment]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for appointment in filtered {
        let reason = appointment.reason.as_str();
        if reason.is_empty() {
            continue;
        }
        match index.get(reason) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(reason, counts.len());
                counts.push((reason.to_string(), 1));
            }
        }
    }
    // Stable sort keeps first-encountered order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(5);
    counts
}

/// One month of the trailing-twelve-month trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCount {
    /// Formatted as e.g. `"Aug 2026"`.
    pub month: String,
    pub appointments: usize,
    pub completed: usize,
}

/// Appointment volume for the trailing 12 months ending at today's month,
/// oldest first.
pub fn monthly_trend(appointments: &[Appointment], today: NaiveDate) -> Vec<MonthlyCount> {
    (0..12)
        .rev()
        .filter_map(|back| {
            let month = today.checked_sub_months(Months::new(back))?;
            let (start, end) = month_bounds(month);
            let in_month: Vec<&Appointment> = appointments
                .iter()
                .filter(|a| a.date >= start && a.date <= end)
                .collect();
            Some(MonthlyCount {
                month: month.format("%b %Y").to_string(),
                appointments: in_month.len(),
                completed: in_month
                    .iter()
                    .filter(|a| a.status == AppointmentStatus::Completed)
                    .count(),
            })
        })
        .collect()
}
