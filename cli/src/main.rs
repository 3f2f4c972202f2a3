// cli/src/main.rs

// Entry point for the clinic CLI: seeds the in-memory stores with demo data
// and renders the dashboard, queue, report and patient views.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use serde_json::json;

use lib::store::{RecordStore, StoreLatency};
use lib::views;
use lib::views::ReportRange;
use lib::ClinicConfig;

mod render;
mod seed;

#[derive(Parser)]
#[command(name = "clinic-cli", about = "Clinic dashboard, queue and reports", version)]
struct Cli {
    /// Optional TOML config (store latency profile).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit the view as JSON instead of formatted text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's stats and upcoming schedule.
    Dashboard,
    /// The waiting / in-consultation / completed queue board.
    Queue,
    /// Appointment statistics over a date range.
    Report {
        /// this-month, last-month, this-year or all-time.
        #[arg(long, default_value = "this-month")]
        range: ReportRange,
    },
    /// One patient's details and visit history.
    Patient { id: i32 },
    /// Check a patient in for an appointment, then show the queue board.
    CheckIn { appointment_id: i32 },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ClinicConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ClinicConfig {
            // Demo data is local anyway; don't make the user wait.
            latency: StoreLatency::none(),
        },
    };
    log::debug!("store latency profile: {:?}", config.latency);
    let stores = seed::demo_stores(config.latency);
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Dashboard => {
            let patients = stores.patients.get_all().await?;
            let appointments = stores.appointments.get_all().await?;
            let queue = stores.queue.get_all().await?;

            let stats = views::dashboard_stats(&patients, &appointments, &queue, today);
            let upcoming = views::upcoming_today(&appointments, today);
            if cli.json {
                let payload = json!({
                    "stats": stats,
                    "upcoming": upcoming,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                render::dashboard(&stats, &upcoming, &patients);
            }
        }
        Commands::Queue => {
            let patients = stores.patients.get_all().await?;
            let appointments = stores.appointments.get_all().await?;
            let entries = stores.today_queue(today).await?;

            let board = views::queue_board(&entries, &appointments, &patients);
            if cli.json {
                let bucket = |rows: &[views::QueueRow<'_>]| -> Vec<serde_json::Value> {
                    rows.iter()
                        .map(|row| {
                            json!({
                                "entry": row.entry,
                                "appointment": row.appointment,
                                "patient": row.patient,
                            })
                        })
                        .collect()
                };
                let payload = json!({
                    "waiting": bucket(&board.waiting),
                    "inConsultation": bucket(&board.in_consultation),
                    "completed": bucket(&board.completed),
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                render::queue(&board, Utc::now());
            }
        }
        Commands::Report { range } => {
            let patients = stores.patients.get_all().await?;
            let appointments = stores.appointments.get_all().await?;

            let filtered = views::filter_by_range(&appointments, range, today);
            let stats = views::report_stats(&filtered);
            let new_patients = views::new_patients(&patients, range, today);
            let breakdown = views::status_breakdown(&filtered);
            let top_reasons = views::top_reasons(&filtered);
            let trend = views::monthly_trend(&appointments, today);

            if cli.json {
                let payload = json!({
                    "range": range,
                    "stats": stats,
                    "newPatients": new_patients,
                    "statusBreakdown": breakdown,
                    "topReasons": top_reasons,
                    "monthlyTrend": trend,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                render::report(range, &stats, new_patients, &breakdown, &top_reasons, &trend);
            }
        }
        Commands::CheckIn { appointment_id } => {
            let entry = lib::workflow::check_in(&stores, appointment_id, Utc::now())
                .await
                .with_context(|| format!("failed to check in appointment {}", appointment_id))?;
            println!("Checked in as queue entry {}.", entry.id);
            println!();

            let patients = stores.patients.get_all().await?;
            let appointments = stores.appointments.get_all().await?;
            let entries = stores.today_queue(today).await?;
            let board = views::queue_board(&entries, &appointments, &patients);
            render::queue(&board, Utc::now());
        }
        Commands::Patient { id } => {
            let patient = stores
                .patients
                .get_by_id(id)
                .await?
                .ok_or_else(|| anyhow!("no patient with id {}", id))?;
            let appointments = stores.appointments_for_patient(id).await?;
            let stats = views::visit_stats(&appointments, id);

            if cli.json {
                let payload = json!({
                    "patient": patient,
                    "stats": stats,
                    "appointments": appointments,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                render::patient_detail(&patient, &stats, &appointments);
            }
        }
    }

    Ok(())
}
