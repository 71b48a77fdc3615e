// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Hivedrop Contributors

//! Text planning for dropping external Hive partitions.
//!
//! Given a [`hivedrop_ddl::TableDescriptor`], this crate derives the two
//! artifacts the orchestration layer executes per partition value set: the
//! `ALTER TABLE ... DROP IF EXISTS PARTITION (...)` statement and the HDFS
//! directory to remove. Both are produced as templates with one `{name}`
//! placeholder per partition column in declared order, then rendered
//! against concrete values. Nothing here runs SQL or touches a filesystem.

pub use error::PlanError;
pub use location::HdfsLocation;
pub use template::{drop_partition_statement, partition_path_template, render};
pub use values::partition_sets;

mod error;
mod location;
mod template;
mod values;

pub type Result<T> = std::result::Result<T, PlanError>;
