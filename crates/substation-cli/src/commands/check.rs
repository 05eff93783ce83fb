use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use std::process::ExitCode;
use substation_config::SubstationConfig;
use substation_core::{HealthStatus, LoadError};

use super::load_store;
use crate::output::print_json;

pub fn execute(config: SubstationConfig, json: bool) -> Result<ExitCode> {
    let (store, report) = load_store(&config);
    let snapshot = store.snapshot();
    let summary = snapshot.summary();
    let issues = snapshot.validate();

    if json {
        let load_errors: Vec<String> = report.errors().map(LoadError::to_string).collect();
        print_json(&json!({
            "status": summary.status(),
            "data_summary": summary,
            "issues": issues,
            "load_errors": load_errors,
        }))?;
    } else {
        print_source(
            "Equipment",
            summary.equipment_count,
            &report.equipment,
            &config.data.equipment_path,
        );
        print_source(
            "Maintenance",
            summary.maintenance_count,
            &report.maintenance,
            &config.data.maintenance_path,
        );
        println!();

        match summary.status() {
            HealthStatus::Healthy => println!("{} healthy", "Status:".green().bold()),
            HealthStatus::IssuesDetected => {
                println!("{} issues_detected", "Status:".yellow().bold());
                println!("\nIssues ({}):", issues.len());
                for issue in &issues {
                    println!("  - {issue}");
                }
            }
        }
    }

    Ok(if issues.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_source(
    label: &str,
    count: usize,
    outcome: &Result<usize, LoadError>,
    path: &std::path::Path,
) {
    match outcome {
        Ok(_) => println!("{label:<12} {count} records ({})", path.display()),
        Err(err) => println!("{label:<12} {} {err}", "failed:".red()),
    }
}
