// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Hivedrop Contributors

use thiserror::Error;

/// Errors produced while parsing `SHOW CREATE TABLE` output.
///
/// The parser surfaces a single error kind: the structural grammar either
/// matches the whole statement or the statement is rejected. There is no
/// partial descriptor to recover, so callers must treat this as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DdlError {
	#[error("unparseable DDL: {reason}")]
	Unparseable {
		reason: String,
	},
}

impl DdlError {
	pub(crate) fn unparseable(reason: impl Into<String>) -> Self {
		DdlError::Unparseable {
			reason: reason.into(),
		}
	}
}
