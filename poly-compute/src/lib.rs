//! Core expression tooling for PolyScript: the expression data model, the symbolic
//! differentiation engine, the simplifier, and the string command layer used by the console.

pub mod commands;
pub mod symbolic;
