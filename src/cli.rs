// src/cli.rs
use std::{io, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};
use serde::Serialize;

use crate::config::{consts::CONFIG_FILE, options::AppOptions};
use crate::model::Section;
use crate::progress::Progress;
use crate::status::{PlotStatus, compute_status, plot_status};
use crate::store;
use crate::tooltip::{TooltipStyle, tooltip_for};
use crate::validate::validate;

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "Query the cemetery plot tables")]
pub struct Cli {
    /// Config file (missing file = defaults)
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Directory with plots.csv, lots.csv and occupants.csv (overrides config)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Derived occupancy status of one plot
    Status {
        plot: String,
        #[arg(long)]
        json: bool,
    },
    /// Tooltip text for one plot
    Tooltip {
        plot: String,
        /// basic | detailed | occupants | full (default from config)
        #[arg(long)]
        style: Option<TooltipStyle>,
        /// Styled lines and spans as JSON
        #[arg(long)]
        json: bool,
    },
    /// Every plot with its derived status
    Plots {
        /// Only plots in this section, e.g. "Church Yard"
        #[arg(long)]
        section: Option<String>,
        #[arg(long)]
        csv: bool,
    },
    /// Consistency report across the three tables; exit code 1 on problems
    Validate {
        #[arg(long)]
        json: bool,
    },
}

/// Load progress only goes to the debug log; stdout is for results.
struct CliProgress;

impl Progress for CliProgress {
    fn item_done(&mut self, what: &str) {
        logd!("Loaded {}", what);
    }
}

#[derive(Serialize)]
struct StatusOut<'a> {
    plot_id: &'a str,
    section: &'a Section,
    #[serde(flatten)]
    status: PlotStatus,
}

pub fn run() -> Result<ExitCode> {
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> Result<ExitCode> {
    let opts = AppOptions::load(&cli.config)?.with_data_dir_override(cli.data.clone());
    let paths = opts.data_paths();
    let tables = store::load_all(&paths, &mut CliProgress)
        .wrap_err_with(|| format!("loading tables from {}", opts.data.dir.display()))?;

    match cli.command {
        Command::Status { plot, json } => {
            let p = tables.plot(&plot).ok_or_else(|| eyre!("no plot '{}'", plot))?;
            let st = compute_status(&tables, &p.id);
            if json {
                let out = StatusOut { plot_id: &p.id, section: &p.section, status: st };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{} ({}): {}", p.id, p.section, st.status);
                println!(
                    "  lots: {} total, {} occupied, {} available",
                    st.total_lots, st.occupied_lots, st.available_lots
                );
                println!("  occupants: {}", st.occupant_count);
                if st.occupancy_mismatch() {
                    println!("  note: occupant records and lot statuses disagree (run `validate`)");
                }
            }
        }
        Command::Tooltip { plot, style, json } => {
            let style = style.unwrap_or(opts.tooltip.style);
            let tip = tooltip_for(&tables, &plot, style).ok_or_else(|| eyre!("no plot '{}'", plot))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tip)?);
            } else {
                println!("{}", tip.to_plain_text());
            }
        }
        Command::Plots { section, csv } => {
            let wanted = section.as_deref().map(Section::parse);
            let rows: Vec<Vec<String>> = tables
                .plots()
                .filter(|p| wanted.as_ref().is_none_or(|w| *w == p.section))
                .filter_map(|p| plot_status(&tables, &p.id).map(|st| plot_row(&p.id, &p.section, &st)))
                .collect();

            if csv {
                store::write_csv(io::stdout().lock(), &PLOT_COLUMNS, &rows)?;
            } else {
                for r in &rows {
                    println!(
                        "{:<8} {:<18} {:<19} lots {:>2}  occupied {:>2}  available {:>2}  occupants {:>2}",
                        r[0], r[1], r[2], r[3], r[4], r[5], r[6]
                    );
                }
                println!("{} plot(s)", rows.len());
            }
        }
        Command::Validate { json } => {
            let report = validate(&tables);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "{} plots, {} lots, {} occupants",
                    report.plots, report.lots, report.occupants
                );
                for f in &report.findings {
                    let tag = if f.is_informational() { "info" } else { "problem" };
                    println!("[{tag}] {f}");
                }
                if report.is_clean() {
                    println!("All checks passed");
                } else {
                    println!("{} problem(s) found", report.problems().count());
                }
            }
            if !report.is_clean() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

const PLOT_COLUMNS: [&str; 7] = [
    "plot_id", "section", "status", "total_lots", "occupied_lots", "available_lots", "occupants",
];

fn plot_row(id: &str, section: &Section, st: &PlotStatus) -> Vec<String> {
    vec![
        s!(id),
        s!(section.name()),
        s!(st.status.label()),
        st.total_lots.to_string(),
        st.occupied_lots.to_string(),
        st.available_lots.to_string(),
        st.occupant_count.to_string(),
    ]
}
