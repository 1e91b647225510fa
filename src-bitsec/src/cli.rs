//! bitsec - bit-security estimation for hard cryptographic problems
//! Common command-line interface definitions for the binary
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

use bitsec_opt::{EstimatorConfig, MemoryAccess};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments of the `bitsec` binary.
#[derive(Parser, Debug, Clone)]
#[command(name = "bitsec", author, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub problem: ProblemArgs,

    /// Cap on the memory complexity (log2 bits).
    #[arg(long)]
    pub memory_bound: Option<f64>,

    /// Report costs in the attacks' native units instead of bits.
    #[arg(long)]
    pub no_bit_complexities: bool,

    /// Memory access cost model: constant, log, sqrt or cbrt.
    #[arg(long, default_value = "constant", value_parser = parse_memory_access)]
    pub memory_access: MemoryAccess,

    /// Decimal digits shown in the table.
    #[arg(long, default_value_t = 1)]
    pub precision: u32,

    /// Truncate instead of round when rendering.
    #[arg(long)]
    pub truncate: bool,

    /// Attacks to leave out, comma separated.
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Show the chosen tuning parameters as a column.
    #[arg(long)]
    pub all_parameters: bool,

    /// Show the quantum time column.
    #[arg(long)]
    pub quantum: bool,

    /// Show the asymptotic (tilde-O) columns.
    #[arg(long)]
    pub tilde_o: bool,

    /// Print the report as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Also write the report to a CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// The problem instance to estimate.
#[derive(Subcommand, Debug, Clone)]
pub enum ProblemArgs {
    /// Binary syndrome decoding with code length n, dimension k, weight w.
    Sd {
        #[arg(short, value_parser = clap::value_parser!(u64).range(1..))]
        n: u64,
        #[arg(short, value_parser = clap::value_parser!(u64).range(1..))]
        k: u64,
        #[arg(short, value_parser = clap::value_parser!(u64).range(1..))]
        w: u64,
    },
    /// Multivariate quadratic system with n variables, m equations, field
    /// order q.
    Mq {
        #[arg(short, value_parser = clap::value_parser!(u64).range(1..))]
        n: u64,
        #[arg(short, value_parser = clap::value_parser!(u64).range(1..))]
        m: u64,
        #[arg(short, value_parser = clap::value_parser!(u64).range(2..))]
        q: u64,
    },
}

fn parse_memory_access(s: &str) -> Result<MemoryAccess, String> {
    s.parse()
}

impl Args {
    /// The estimator configuration the flags describe.
    pub fn estimator_config(&self) -> EstimatorConfig {
        EstimatorConfig::default()
            .with_bit_complexities(!self.no_bit_complexities)
            .with_memory_access(self.memory_access.clone())
            .with_precision(self.precision)
            .with_truncate(self.truncate)
            .with_all_parameters(self.all_parameters)
            .with_quantum_complexity(self.quantum)
            .with_tilde_o_time(self.tilde_o)
    }

    pub fn excluded(&self) -> Vec<&str> {
        self.exclude.iter().map(String::as_str).collect()
    }
}
