//! Doctor command - configuration and uploader health check

use crate::context::Context;
use anyhow::Result;
use atlaspush_core::{ConfigOverrides, Environment};
use atlaspush_uploader::{Push, ResolveResult};
use chrono::Utc;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Doctor command JSON output schema
#[derive(Debug, Serialize, Deserialize)]
struct DoctorOutput {
    schema_version: String,
    root: String,
    timestamp: String,
    checks: Vec<Check>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Check {
    id: String,
    name: String,
    status: CheckStatus,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum CheckStatus {
    Ok,
    Warning,
    Error,
}

/// Run the health check
///
/// Always returns Ok(()) - problems are reported in the output, not the exit code
pub fn run(root: Option<PathBuf>, json: bool) -> Result<()> {
    let ctx_result = Context::new(root, ConfigOverrides::default());

    let mut checks = Vec::new();

    let root = match &ctx_result {
        Ok(ctx) => ctx.env.root_path().display().to_string(),
        Err(_) => std::env::current_dir()
            .unwrap_or_else(|_| ".".into())
            .display()
            .to_string(),
    };

    // Check 1: Config validity
    match &ctx_result {
        Ok(ctx) if !ctx.config_found => checks.push(Check {
            id: "config_valid".to_string(),
            name: "Configuration file".to_string(),
            status: CheckStatus::Warning,
            message: "atlaspush.toml not found, only command-line values will be used".to_string(),
            details: None,
        }),
        Ok(ctx) => match ctx.config.validate() {
            Ok(()) => checks.push(Check {
                id: "config_valid".to_string(),
                name: "Configuration file".to_string(),
                status: CheckStatus::Ok,
                message: format!("atlaspush.toml is valid (app {})", ctx.config.app),
                details: None,
            }),
            Err(e) => checks.push(Check {
                id: "config_valid".to_string(),
                name: "Configuration file".to_string(),
                status: CheckStatus::Error,
                message: e.to_string(),
                details: None,
            }),
        },
        Err(e) => checks.push(Check {
            id: "config_valid".to_string(),
            name: "Configuration file".to_string(),
            status: CheckStatus::Error,
            message: format!("Failed to load config: {}", e),
            details: None,
        }),
    }

    // Check 2: Uploader availability (only if context loaded successfully)
    if let Ok(ctx) = &ctx_result {
        let mut details = BTreeMap::new();
        details.insert(
            "installer".to_string(),
            serde_json::Value::Bool(ctx.env.is_running_in_installer()),
        );

        match Push::new(&ctx.env, &ctx.config).resolve() {
            ResolveResult::Resolved(info) => {
                details.insert(
                    "path".to_string(),
                    serde_json::Value::String(info.path.clone()),
                );
                details.insert(
                    "source".to_string(),
                    serde_json::Value::String(info.source.to_string()),
                );

                checks.push(Check {
                    id: "uploader_available".to_string(),
                    name: "Uploader".to_string(),
                    status: CheckStatus::Ok,
                    message: format!("uploader found via {}", info.source),
                    details: Some(details),
                });
            }
            ResolveResult::NotFound {
                binary,
                searched_locations,
            } => {
                details.insert(
                    "searched_locations".to_string(),
                    serde_json::Value::Array(
                        searched_locations
                            .iter()
                            .map(|s| serde_json::Value::String(s.clone()))
                            .collect(),
                    ),
                );

                checks.push(Check {
                    id: "uploader_available".to_string(),
                    name: "Uploader".to_string(),
                    status: CheckStatus::Error,
                    message: format!("{} not found", binary),
                    details: Some(details),
                });
            }
        }
    }

    let output = DoctorOutput {
        schema_version: "1.0".to_string(),
        root,
        timestamp: Utc::now().to_rfc3339(),
        checks,
    };

    if json {
        let json_str = serde_json::to_string_pretty(&output)?;
        println!("{}", json_str);
    } else {
        print_human_readable(&output);
    }

    Ok(())
}

fn print_human_readable(output: &DoctorOutput) {
    println!("{}", "atlaspush health check".bold());
    println!("  Root: {}", output.root);
    println!();

    println!("{}", "Checks:".bold());
    for check in &output.checks {
        let status_str = match check.status {
            CheckStatus::Ok => "✓".green(),
            CheckStatus::Warning => "⚠".yellow(),
            CheckStatus::Error => "✗".red(),
        };

        println!("  {} {}: {}", status_str, check.name.bold(), check.message);

        if let Some(details) = &check.details {
            for (key, value) in details {
                println!("      {}: {}", key, value);
            }
        }
    }

    println!();
    println!("Timestamp: {}", output.timestamp);
}
