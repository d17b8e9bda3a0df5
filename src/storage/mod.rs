// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Entity stores and the port they persist through.

pub mod port;
pub mod memory;
pub mod store;

pub use memory::MemoryPort;
pub use port::StorePort;
pub use store::EntityStore;
