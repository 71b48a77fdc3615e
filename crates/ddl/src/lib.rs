// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Hivedrop Contributors

//! Parser for the restricted DDL grammar emitted by Hive's
//! `SHOW CREATE TABLE`.
//!
//! The input is the raw statement text: all result rows of the query joined
//! by newline, with backtick quoting already stripped by the caller. The
//! output is an immutable [`TableDescriptor`]. The crate is a pure
//! text-to-struct transform: no Spark, no HDFS, no I/O, safe to call from
//! any number of threads on independent inputs.

pub use descriptor::{Column, TableDescriptor, parse};
pub use error::DdlError;
pub use split::split_fields;

mod descriptor;
mod error;
mod matcher;
mod split;

pub type Result<T> = std::result::Result<T, DdlError>;
