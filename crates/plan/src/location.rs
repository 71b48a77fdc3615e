// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Hivedrop Contributors

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{PlanError, Result};

static HDFS_LOCATION: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^hdfs://([^/]*)(/.*)$").expect("hdfs location pattern"));

/// An `hdfs://authority/path` storage location split into its parts.
///
/// Partition directories live under the path component only; the authority
/// (namenode) is implied by the filesystem the orchestration layer talks
/// to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HdfsLocation {
	authority: String,
	path: String,
}

impl HdfsLocation {
	/// Split a location URI as returned by
	/// [`hivedrop_ddl::TableDescriptor::location`].
	///
	/// Only the `hdfs` scheme is accepted; anything else is
	/// [`PlanError::InvalidLocation`].
	pub fn parse(location: &str) -> Result<HdfsLocation> {
		let caps = HDFS_LOCATION.captures(location.trim()).ok_or_else(|| PlanError::InvalidLocation {
			location: location.to_string(),
		})?;
		Ok(HdfsLocation {
			authority: caps[1].to_string(),
			path: caps[2].to_string(),
		})
	}

	pub fn authority(&self) -> &str {
		&self.authority
	}

	/// The path component, always starting with `/`.
	pub fn path(&self) -> &str {
		&self.path
	}
}
