//! bitsec - bit-security estimation for hard cryptographic problems
//! Plain-text table rendering and CSV export of estimation reports
//!
//! Copyright (C) 2025 the bitsec developers
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::collections::BTreeMap;
use std::error::Error;
use std::path::Path;

use bitsec_num::round_or_truncate;
use bitsec_opt::{EstimatorConfig, Report};

/// Renders the report as an ASCII box table. The column set follows the
/// config's display flags; `--` stands for `+∞` or an absent variant.
pub fn render_table(report: &Report, config: &EstimatorConfig) -> String {
    let mut headers: Vec<&str> = vec!["algorithm", "time", "memory"];
    if config.show_quantum_complexity {
        headers.push("quantum time");
    }
    if config.show_tilde_o_time {
        headers.push("tilde-o time");
        headers.push("tilde-o memory");
    }
    if config.show_all_parameters {
        headers.push("parameters");
    }

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(report.entries.len());
    for entry in &report.entries {
        let mut row = vec![
            entry.algorithm.clone(),
            format_value(entry.time, config),
            format_value(entry.memory, config),
        ];
        if config.show_quantum_complexity {
            row.push(format_optional(entry.quantum_time, config));
        }
        if config.show_tilde_o_time {
            row.push(format_optional(entry.tilde_o_time, config));
            row.push(format_optional(entry.tilde_o_memory, config));
        }
        if config.show_all_parameters {
            row.push(format_parameters(&entry.parameters));
        }
        rows.push(row);
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let separator = {
        let mut s = String::from("+");
        for w in &widths {
            s.push_str(&"-".repeat(w + 2));
            s.push('+');
        }
        s
    };

    let mut out = String::new();
    out.push_str(&separator);
    out.push('\n');
    out.push_str(&format_row(&headers.iter().map(|h| h.to_string()).collect::<Vec<_>>(), &widths, true));
    out.push_str(&separator);
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(row, &widths, false));
    }
    out.push_str(&separator);
    out.push('\n');
    out
}

/// Writes the report as CSV: one row per algorithm, parameters as a JSON
/// object in the last column.
pub fn write_csv(report: &Report, path: &Path) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["algorithm", "time", "memory", "parameters"])?;
    for entry in &report.entries {
        let time = if entry.time.is_finite() {
            entry.time.to_string()
        } else {
            "--".to_string()
        };
        let memory = if entry.memory.is_finite() {
            entry.memory.to_string()
        } else {
            "--".to_string()
        };
        let parameters = serde_json::to_string(&entry.parameters)?;
        writer.write_record([
            entry.algorithm.as_str(),
            time.as_str(),
            memory.as_str(),
            parameters.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn format_value(value: f64, config: &EstimatorConfig) -> String {
    if !value.is_finite() {
        return "--".to_string();
    }
    let rounded = round_or_truncate(value, config.precision, config.truncate);
    format!("{:.*}", config.precision as usize, rounded)
}

fn format_optional(value: Option<f64>, config: &EstimatorConfig) -> String {
    match value {
        Some(v) => format_value(v, config),
        None => "--".to_string(),
    }
}

fn format_parameters(parameters: &BTreeMap<String, i64>) -> String {
    if parameters.is_empty() {
        return "{}".to_string();
    }
    let inner: Vec<String> = parameters.iter().map(|(k, v)| format!("{k}: {v}")).collect();
    format!("{{{}}}", inner.join(", "))
}

fn format_row(cells: &[String], widths: &[usize], header: bool) -> String {
    let mut line = String::from("|");
    for (i, cell) in cells.iter().enumerate() {
        // names and parameter maps read left-aligned, numbers right-aligned
        let numeric = !header && i > 0 && !cell.starts_with('{');
        if numeric {
            line.push_str(&format!(" {:>width$} |", cell, width = widths[i]));
        } else {
            line.push_str(&format!(" {:<width$} |", cell, width = widths[i]));
        }
    }
    line.push('\n');
    line
}
