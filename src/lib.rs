// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! nutri-core: entity stores, identifier policy and PATCH merge rules for
//! the nutrition tracking service.

pub mod config;
pub mod error;
pub mod types;
pub mod ident;
pub mod merge;
pub mod validate;
pub mod storage;
pub mod state;

#[cfg(test)]
pub mod tests;
