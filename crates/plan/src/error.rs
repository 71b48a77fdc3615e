// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Hivedrop Contributors

use thiserror::Error;

/// Errors produced while planning partition drops.
#[derive(Debug, Error)]
pub enum PlanError {
	#[error("cannot parse hdfs location '{location}'")]
	InvalidLocation {
		location: String,
	},

	#[error("table has no storage location")]
	MissingLocation,

	#[error("table is not partitioned")]
	NotPartitioned,

	#[error("no value provided for partition column '{column}'")]
	MissingPartitionValue {
		column: String,
	},

	#[error("invalid partition value set: {0}")]
	InvalidPartitionSpec(#[from] serde_json::Error),
}
