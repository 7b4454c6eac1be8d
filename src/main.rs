//! ds-harness - build ds_sandbox and drive Maelstrom workloads against it
//!
//! Exits with the test tool's status: 0 when the workload passes, the build
//! tool's or test tool's own code otherwise.

use clap::Parser;
use ds_harness::commands::Cli;
use ds_harness::common::{logging, SystemRunner};

fn main() {
    logging::init();

    let cli = Cli::parse();
    let code = ds_harness::cli::run(cli, &SystemRunner);

    std::process::exit(code);
}
