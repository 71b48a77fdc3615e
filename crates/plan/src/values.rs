// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Hivedrop Contributors

use std::collections::HashMap;

use crate::Result;

/// Decode a JSON array of partition value sets, e.g.
/// `[{"dt": "2024-01-01"}, {"dt": "2024-01-02"}]`.
///
/// This is the shape the orchestration layer accepts on its command line;
/// each set is rendered against the statement and path templates in turn.
pub fn partition_sets(json: &str) -> Result<Vec<HashMap<String, String>>> {
	Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_partition_sets_decodes_array_of_objects() {
		let sets = partition_sets(r#"[{"dt": "2024-01-01"}, {"dt": "2024-01-02", "region": "eu"}]"#).unwrap();
		assert_eq!(sets.len(), 2);
		assert_eq!(sets[0]["dt"], "2024-01-01");
		assert_eq!(sets[1]["region"], "eu");
	}

	#[test]
	fn test_partition_sets_rejects_non_array() {
		assert!(partition_sets(r#"{"dt": "2024-01-01"}"#).is_err());
		assert!(partition_sets("not json").is_err());
	}
}
