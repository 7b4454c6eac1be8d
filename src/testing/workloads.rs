//! Workload registry
//!
//! Each workload binds an operator-facing name to the Maelstrom workload it
//! runs, the Maelstrom parameters for it and the ds_sandbox server variant
//! that answers it. Adding a workload is a change to [`WORKLOADS`] only.

use serde::Serialize;

use crate::common::{Error, Result};

/// Parameters for one named test scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkloadProfile {
    /// Operator-facing name (unique)
    pub id: &'static str,
    /// Workload name understood by Maelstrom (`-w`)
    pub protocol_name: &'static str,
    /// Maelstrom flag/value pairs, passed through in order
    pub protocol_args: &'static [&'static str],
    /// Server variant ds_sandbox should run as
    pub sut_server_name: &'static str,
}

static WORKLOADS: &[WorkloadProfile] = &[
    WorkloadProfile {
        id: "echo",
        protocol_name: "echo",
        protocol_args: &["--node-count", "1", "--time-limit", "20", "--rate", "100"],
        sut_server_name: "echo",
    },
    WorkloadProfile {
        id: "unique-ids",
        protocol_name: "unique-ids",
        protocol_args: &[
            "--node-count",
            "3",
            "--time-limit",
            "30",
            "--rate",
            "1000",
            "--availability",
            "total",
            "--nemesis",
            "partition",
        ],
        sut_server_name: "unique-id",
    },
    WorkloadProfile {
        id: "broadcast1",
        protocol_name: "broadcast",
        protocol_args: &["--node-count", "1", "--time-limit", "20", "--rate", "10"],
        sut_server_name: "broadcast",
    },
    WorkloadProfile {
        id: "broadcast2",
        protocol_name: "broadcast",
        protocol_args: &["--node-count", "5", "--time-limit", "20", "--rate", "10"],
        sut_server_name: "broadcast",
    },
];

/// Get all registered workloads
pub fn all_workloads() -> &'static [WorkloadProfile] {
    WORKLOADS
}

/// Look up a workload by id
pub fn lookup(id: &str) -> Result<&'static WorkloadProfile> {
    WORKLOADS.iter().find(|w| w.id == id).ok_or_else(|| {
        let known: Vec<_> = WORKLOADS.iter().map(|w| w.id).collect();
        Error::unknown_workload(id, &known)
    })
}
