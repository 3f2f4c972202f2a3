// cli/src/render.rs

//! Terminal rendering for the view structs. Status badges reuse the display
//! mapping from the models: label text plus a visual category, colored here
//! with crossterm.

use chrono::{DateTime, Local, NaiveDate, Utc};
use crossterm::style::Stylize;

use lib::views::{
    format_elapsed, DashboardStats, MonthlyCount, QueueBoard, QueueRow, ReportRange, ReportStats,
    VisitStats,
};
use models::{Appointment, Patient, StatusCategory};

fn badge(label: &str, category: StatusCategory) -> String {
    let styled = match category {
        StatusCategory::Info => label.cyan(),
        StatusCategory::Success => label.green(),
        StatusCategory::Warning => label.yellow(),
        StatusCategory::Error => label.red(),
    };
    format!("[{}]", styled)
}

pub fn dashboard(stats: &DashboardStats, upcoming: &[&Appointment], patients: &[Patient]) {
    println!("{}", "Dashboard".bold());
    println!("  Total patients:       {}", stats.total_patients);
    println!("  Today's appointments: {}", stats.todays_appointments);
    println!("  Waiting patients:     {}", stats.waiting_patients);
    println!("  Completed today:      {}", stats.completed_today);
    println!();
    println!("{} ({} upcoming)", "Today's Schedule".bold(), upcoming.len());
    if upcoming.is_empty() {
        println!("  No appointments today.");
        return;
    }
    for appointment in upcoming {
        let name = patients
            .iter()
            .find(|p| p.id == appointment.patient_id)
            .map(|p| p.full_name())
            .unwrap_or_else(|| format!("patient #{}", appointment.patient_id));
        println!(
            "  {}  {:<24} {:<28} {}",
            appointment.time.format("%H:%M"),
            name,
            appointment.reason,
            badge(appointment.status.label(), appointment.status.category()),
        );
    }
}

pub fn queue(board: &QueueBoard<'_>, now: DateTime<Utc>) {
    println!("{}", "Today's Queue".bold());
    section("Waiting", &board.waiting, |row| {
        format!("waited {}", format_elapsed(row.entry.check_in_time, now))
    });
    section("In Consultation", &board.in_consultation, |row| match row.entry.consultation_start {
        Some(start) => format!("started {} ago", format_elapsed(start, now)),
        None => "started recently".to_string(),
    });
    section("Completed", &board.completed, |row| {
        match (row.entry.consultation_start, row.entry.consultation_end) {
            (Some(start), Some(end)) => format!("consultation {}", format_elapsed(start, end)),
            _ => String::new(),
        }
    });
}

fn section(title: &str, rows: &[QueueRow<'_>], detail: impl Fn(&QueueRow<'_>) -> String) {
    println!();
    println!("{} ({})", title.bold(), rows.len());
    if rows.is_empty() {
        println!("  (empty)");
        return;
    }
    for row in rows {
        println!(
            "  {:<24} {:<28} {}  {}",
            row.patient.full_name(),
            row.appointment.reason,
            badge(row.entry.status.label(), row.entry.status.category()),
            detail(row),
        );
    }
}

pub fn report(
    range: ReportRange,
    stats: &ReportStats,
    new_patients: usize,
    breakdown: &[(models::AppointmentStatus, usize)],
    top_reasons: &[(String, usize)],
    trend: &[MonthlyCount],
) {
    println!("{} — {}", "Report".bold(), range.label());
    println!("  Total appointments: {}", stats.total_appointments);
    println!("  Completed:          {} ({}%)", stats.completed, stats.completion_rate);
    println!("  Cancelled:          {}", stats.cancelled);
    println!("  No-shows:           {} ({}%)", stats.no_shows, stats.no_show_rate);
    println!("  New patients:       {}", new_patients);

    println!();
    println!("{}", "Status Breakdown".bold());
    for (status, count) in breakdown {
        println!("  {:<16} {}", badge(status.label(), status.category()), count);
    }

    println!();
    println!("{}", "Top Reasons".bold());
    if top_reasons.is_empty() {
        println!("  No appointment data available.");
    }
    for (i, (reason, count)) in top_reasons.iter().enumerate() {
        println!("  {}. {:<28} {}", i + 1, reason, count);
    }

    println!();
    println!("{}", "12-Month Trend".bold());
    for month in trend {
        println!(
            "  {:<10} {:>3} total  {:>3} completed",
            month.month, month.appointments, month.completed
        );
    }
}

pub fn patient_detail(patient: &Patient, stats: &VisitStats, appointments: &[Appointment]) {
    println!("{}", patient.full_name().bold());
    if let Some(phone) = &patient.phone {
        println!("  Phone: {}", phone);
    }
    if let Some(email) = &patient.email {
        println!("  Email: {}", email);
    }
    println!("  Registered: {}", patient.created_at.with_timezone(&Local).format("%b %-d, %Y"));
    println!();
    println!("  Total visits: {}   Upcoming: {}   No-shows: {}", stats.total_visits, stats.upcoming_appointments, stats.no_shows);
    println!("  Last visit: {}", match stats.last_visit {
        Some(date) => format_date(date),
        None => "Never".to_string(),
    });

    println!();
    println!("{} ({})", "Appointments".bold(), appointments.len());
    for appointment in appointments {
        println!(
            "  {} {}  {:<28} {}",
            appointment.date,
            appointment.time.format("%H:%M"),
            appointment.reason,
            badge(appointment.status.label(), appointment.status.category()),
        );
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
