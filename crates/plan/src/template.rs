// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Hivedrop Contributors

use std::collections::HashMap;

use hivedrop_ddl::TableDescriptor;

use crate::{HdfsLocation, PlanError, Result};

/// Build the `ALTER TABLE <db>.<t> DROP IF EXISTS PARTITION (...)`
/// statement template for a partitioned table, one `{name}` placeholder per
/// partition column in declared order.
pub fn drop_partition_statement(descriptor: &TableDescriptor) -> Result<String> {
	if !descriptor.is_partitioned() {
		return Err(PlanError::NotPartitioned);
	}

	let clauses: Vec<String> = descriptor
		.partition_columns()
		.iter()
		.map(|column| format!("{name}='{{{name}}}'", name = column.name()))
		.collect();

	Ok(format!(
		"ALTER TABLE {}.{} DROP IF EXISTS PARTITION ({})",
		descriptor.database(),
		descriptor.table(),
		clauses.join(", ")
	))
}

/// Build the partition directory template under the table's HDFS path:
/// `<path>/col1={col1}/col2={col2}`.
///
/// Uses only the path component of the location; the authority is the
/// orchestration layer's concern.
pub fn partition_path_template(descriptor: &TableDescriptor) -> Result<String> {
	if !descriptor.is_partitioned() {
		return Err(PlanError::NotPartitioned);
	}
	let location = descriptor.location().ok_or(PlanError::MissingLocation)?;
	let hdfs = HdfsLocation::parse(location)?;

	let segments: Vec<String> = descriptor
		.partition_columns()
		.iter()
		.map(|column| format!("{name}={{{name}}}", name = column.name()))
		.collect();

	Ok(format!("{}/{}", hdfs.path(), segments.join("/")))
}

/// Substitute every `{name}` placeholder in `template` with the matching
/// value. A placeholder with no value is
/// [`PlanError::MissingPartitionValue`]; text without placeholders passes
/// through untouched.
pub fn render(template: &str, values: &HashMap<String, String>) -> Result<String> {
	let mut out = String::with_capacity(template.len());
	let mut rest = template;

	loop {
		let Some(open) = rest.find('{') else {
			out.push_str(rest);
			break;
		};
		out.push_str(&rest[..open]);

		let Some(close) = rest[open..].find('}') else {
			out.push_str(&rest[open..]);
			break;
		};
		let name = &rest[open + 1..open + close];
		let value = values.get(name).ok_or_else(|| PlanError::MissingPartitionValue {
			column: name.to_string(),
		})?;
		out.push_str(value);
		rest = &rest[open + close + 1..];
	}

	Ok(out)
}
