// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Hivedrop Contributors

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Result, error::DdlError, matcher, split::split_fields};

/// One column definition from a column or partition-column list.
///
/// The split is positional: the first whitespace-separated token is the
/// column name, everything after it (type, `COMMENT '...'`, constraint
/// tokens) is kept verbatim. Downstream partition substitution only needs
/// the name, so the remainder is never parsed further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
	name: String,
	type_and_modifiers: Vec<String>,
}

impl Column {
	/// Convert one field emitted by the splitter. An empty field, which
	/// the splitter produces for an empty fragment, yields `None`.
	fn from_field(field: &str) -> Option<Column> {
		let mut tokens = field.split_whitespace();
		let name = tokens.next()?.to_string();
		Some(Column {
			name,
			type_and_modifiers: tokens.map(str::to_string).collect(),
		})
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn type_and_modifiers(&self) -> &[String] {
		&self.type_and_modifiers
	}
}

/// Structured description of one Hive table, assembled atomically from one
/// `SHOW CREATE TABLE` statement.
///
/// There is no mutation API: either every fragment parses and a complete,
/// internally consistent descriptor comes back, or [`parse`] fails with
/// [`DdlError`]. `is_partitioned` is derived from `partition_columns`,
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescriptor {
	database: String,
	table: String,
	columns: Vec<Column>,
	partition_columns: Vec<Column>,
	location: Option<String>,
}

impl TableDescriptor {
	pub fn database(&self) -> &str {
		&self.database
	}

	pub fn table(&self) -> &str {
		&self.table
	}

	/// Declared columns, in declaration order. Never empty.
	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	/// Partition columns, in declaration order. Empty for unpartitioned
	/// tables.
	pub fn partition_columns(&self) -> &[Column] {
		&self.partition_columns
	}

	pub fn is_partitioned(&self) -> bool {
		!self.partition_columns.is_empty()
	}

	/// Storage location URI, verbatim apart from trimming and quote
	/// stripping. `None` for managed tables without a `LOCATION` clause.
	pub fn location(&self) -> Option<&str> {
		self.location.as_deref()
	}
}

/// Parse the full text of a `SHOW CREATE TABLE` statement into a
/// [`TableDescriptor`].
///
/// The caller supplies the result rows joined by newline with backticks
/// stripped. Fails with [`DdlError::Unparseable`] when the structural
/// grammar does not match; no partial descriptor is ever observable.
pub fn parse(ddl: &str) -> Result<TableDescriptor> {
	let fragments = matcher::extract(ddl)?;

	let database = fragments
		.database
		.ok_or_else(|| DdlError::unparseable("table name is missing a database qualifier"))?;

	let columns = columns_from_fragment(fragments.columns);
	if columns.is_empty() {
		return Err(DdlError::unparseable("column list is empty"));
	}
	let partition_columns = fragments.partitions.map(columns_from_fragment).unwrap_or_default();

	debug!(
		"parsed {}.{}: {} column(s), {} partition column(s)",
		database,
		fragments.table,
		columns.len(),
		partition_columns.len()
	);

	Ok(TableDescriptor {
		database: database.to_string(),
		table: fragments.table.to_string(),
		columns,
		partition_columns,
		location: fragments.location.map(str::to_string),
	})
}

fn columns_from_fragment(fragment: &str) -> Vec<Column> {
	split_fields(fragment).into_iter().filter_map(Column::from_field).collect()
}
