//! Workload generator and benchmark utilities for `disjoint-core`.
//!
//! This crate provides deterministic random union/find workloads for
//! benchmarking the compression strategies and for cross-checking results
//! against `petgraph`.

pub mod correctness;
pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, Workload, generate_workload};
