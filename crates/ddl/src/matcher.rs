// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Hivedrop Contributors

//! Structural matcher for the top-level fragments of a `SHOW CREATE TABLE`
//! statement.
//!
//! Hive always terminates its output with a `TBLPROPERTIES (...)` clause.
//! The matcher anchors on that clause from the end of the text, which bounds
//! every optional clause before it (`COMMENT`, `PARTITIONED BY`,
//! `ROW FORMAT`, `STORED AS`, `LOCATION`) without balancing parentheses
//! across the whole statement. Keyword matching is case-sensitive, exactly
//! as Hive emits them, and tolerates arbitrary whitespace including
//! newlines.

use crate::{Result, error::DdlError, split::matching_paren};

/// The named fragments of one `CREATE TABLE` statement. Byte slices into
/// the input text; nothing is copied until descriptor assembly.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Fragments<'a> {
	pub database: Option<&'a str>,
	pub table: &'a str,
	/// Raw text between the structural parens of the column list, nested
	/// parens and quoted commas untouched.
	pub columns: &'a str,
	/// Raw text inside `PARTITIONED BY (...)`, when the clause is present.
	pub partitions: Option<&'a str>,
	/// Location URI, trimmed and with surrounding single quotes stripped.
	pub location: Option<&'a str>,
}

pub(crate) fn extract(ddl: &str) -> Result<Fragments<'_>> {
	let anchor = find_anchor(ddl)
		.ok_or_else(|| DdlError::unparseable("missing TBLPROPERTIES clause"))?;
	let body = &ddl[..anchor];

	let after_table = match create_table_headers(body).as_slice() {
		[] => return Err(DdlError::unparseable("CREATE TABLE clause not found")),
		[one] => *one,
		_ => return Err(DdlError::unparseable("more than one CREATE TABLE clause")),
	};

	let open = after_table
		+ body[after_table..]
			.find('(')
			.ok_or_else(|| DdlError::unparseable("column list not found"))?;
	let identity = body[after_table..open].trim();
	let (database, table) = match identity.split_once('.') {
		Some((database, table)) => (Some(database), table),
		None => (None, identity),
	};
	if table.is_empty() {
		return Err(DdlError::unparseable("table name not found"));
	}
	if database == Some("") {
		return Err(DdlError::unparseable("empty database qualifier"));
	}

	let close = matching_paren(body, open)
		.ok_or_else(|| DdlError::unparseable("unterminated column list"))?;
	let columns = &body[open + 1..close];
	let mut cursor = close + 1;

	let mut partitions = None;
	if let Some((fragment, next)) = partition_block(body, cursor)? {
		partitions = Some(fragment);
		cursor = next;
	}

	let location = find_keyword(body, "LOCATION", cursor)
		.map(|at| trim_quotes(body[at + "LOCATION".len()..].trim()))
		.filter(|fragment| !fragment.is_empty());

	Ok(Fragments {
		database,
		table,
		columns,
		partitions,
		location,
	})
}

/// Locate the trailing `TBLPROPERTIES (` anchor, searching from the end.
fn find_anchor(ddl: &str) -> Option<usize> {
	let mut upto = ddl.len();
	while let Some(at) = ddl[..upto].rfind("TBLPROPERTIES") {
		if let Some(after) = keyword_at(ddl, "TBLPROPERTIES", at) {
			if ddl[skip_ws(ddl, after)..].starts_with('(') {
				return Some(at);
			}
		}
		upto = at;
	}
	None
}

/// Positions just past the `TABLE` keyword of every
/// `CREATE [TEMPORARY] [EXTERNAL] TABLE` header in `body`.
fn create_table_headers(body: &str) -> Vec<usize> {
	let mut headers = Vec::new();
	let mut from = 0;

	while let Some(at) = find_keyword(body, "CREATE", from) {
		from = at + "CREATE".len();
		let mut pos = skip_ws(body, from);
		for modifier in ["TEMPORARY", "EXTERNAL"] {
			if let Some(after) = keyword_at(body, modifier, pos) {
				pos = skip_ws(body, after);
			}
		}
		if let Some(after) = keyword_at(body, "TABLE", pos) {
			headers.push(after);
		}
	}

	headers
}

/// Match an optional `PARTITIONED BY ( ... )` clause at or after `from`,
/// returning the inner fragment and the offset just past the closing paren.
fn partition_block(body: &str, from: usize) -> Result<Option<(&str, usize)>> {
	let Some(at) = find_keyword(body, "PARTITIONED", from) else {
		return Ok(None);
	};
	let Some(after_by) = keyword_at(body, "BY", skip_ws(body, at + "PARTITIONED".len())) else {
		return Ok(None);
	};
	let open = skip_ws(body, after_by);
	if !body[open..].starts_with('(') {
		return Ok(None);
	}
	let close = matching_paren(body, open)
		.ok_or_else(|| DdlError::unparseable("unterminated PARTITIONED BY list"))?;
	Ok(Some((&body[open + 1..close], close + 1)))
}

fn is_ident_char(c: char) -> bool {
	c.is_alphanumeric() || c == '_'
}

/// Match `keyword` exactly at byte offset `at`, requiring word isolation on
/// both sides. Returns the offset just past the keyword.
fn keyword_at(s: &str, keyword: &str, at: usize) -> Option<usize> {
	if !s[at..].starts_with(keyword) {
		return None;
	}
	let before_ok = s[..at].chars().next_back().is_none_or(|c| !is_ident_char(c));
	let end = at + keyword.len();
	let after_ok = s[end..].chars().next().is_none_or(|c| !is_ident_char(c));
	(before_ok && after_ok).then_some(end)
}

/// First word-isolated occurrence of `keyword` at or after `from`.
fn find_keyword(s: &str, keyword: &str, from: usize) -> Option<usize> {
	let mut at = from;
	while let Some(rel) = s[at..].find(keyword) {
		let hit = at + rel;
		if keyword_at(s, keyword, hit).is_some() {
			return Some(hit);
		}
		at = hit + keyword.len();
	}
	None
}

fn skip_ws(s: &str, mut at: usize) -> usize {
	while let Some(c) = s[at..].chars().next() {
		if !c.is_whitespace() {
			break;
		}
		at += c.len_utf8();
	}
	at
}

fn trim_quotes(s: &str) -> &str {
	s.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')).unwrap_or(s)
}
