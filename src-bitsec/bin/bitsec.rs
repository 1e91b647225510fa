//! bitsec - bit-security estimation for hard cryptographic problems
//! The command-line entry point
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

use std::process;

use clap::Parser;

use bitsec::cli::{Args, ProblemArgs};
use bitsec::mq::MQProblem;
use bitsec::sd::SDProblem;
use bitsec::{render_table, write_csv, MQEstimator, SDEstimator};
use bitsec_opt::{EstimatorConfig, Report};

fn main() {
    env_logger::init();
    let args = Args::parse();
    let config = args.estimator_config();
    let excluded = args.excluded();

    let report = match args.problem {
        ProblemArgs::Sd { n, k, w } => {
            if k >= n || w > n - k {
                eprintln!("error: need k < n and w <= n - k");
                process::exit(2);
            }
            let mut problem = SDProblem::new(n, k, w);
            if let Some(bound) = args.memory_bound {
                problem = problem.with_memory_bound(bound);
            }
            SDEstimator::for_problem(problem, &excluded)
                .with_config(config.clone())
                .estimate()
        }
        ProblemArgs::Mq { n, m, q } => {
            let mut problem = MQProblem::new(n, m, q);
            if let Some(bound) = args.memory_bound {
                problem = problem.with_memory_bound(bound);
            }
            MQEstimator::for_problem(problem, &excluded)
                .with_config(config.clone())
                .estimate()
        }
    };

    emit(&report, &args, &config);
}

fn emit(report: &Report, args: &Args, config: &EstimatorConfig) {
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report.to_json()).expect("report serialises")
        );
    } else {
        print!("{}", render_table(report, config));
        match report.fastest() {
            Some(entry) => println!("fastest: {}", entry.algorithm),
            None => println!("no feasible algorithm"),
        }
    }
    if let Some(path) = &args.csv {
        if let Err(e) = write_csv(report, path) {
            eprintln!("failed to write {}: {e}", path.display());
            process::exit(1);
        }
        log::info!("report written to {}", path.display());
    }
}
