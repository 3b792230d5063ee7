//! dashboard: writes the static executive dashboard HTML.
//!
//! Usage:
//!   dashboard
//!   dashboard --out reports/executive_dashboard.html

#[path = "../cli.rs"]
mod cli;

use anyhow::Result;
use std::{env, path::Path};
use supplychain_core::dashboard::{write_dashboard, DASHBOARD_FILE};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let out = cli::arg_value(&args, "--out").unwrap_or(DASHBOARD_FILE);

    write_dashboard(Path::new(out), chrono::Local::now().naive_local())?;

    println!("Executive dashboard created: {out}");
    Ok(())
}
