// lib/src/views/mod.rs

//! Pure aggregation functions deriving the display-oriented views from
//! already-fetched collections. Nothing here suspends or touches a store, and
//! every function takes its notion of "today"/"now" as an argument so results
//! are deterministic. A missing foreign-key join (deleted patient, deleted
//! appointment) always degrades to dropping the row, never to an error.

pub mod dashboard;
pub mod patient;
pub mod queue;
pub mod report;

pub use dashboard::{dashboard_stats, todays_appointments, upcoming_today, DashboardStats};
pub use patient::{visit_stats, VisitStats};
pub use queue::{format_elapsed, queue_board, QueueBoard, QueueRow};
pub use report::{
    filter_by_range, monthly_trend, new_patients, report_stats, status_breakdown, top_reasons,
    MonthlyCount, ReportRange, ReportStats,
};
