// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Entity records and the trait every stored record implements.

use core::fmt;
use core::hash::Hash;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod key;
pub mod user;
pub mod client;
pub mod nutritionist;
pub mod admin;
pub mod product;
pub mod dish;

pub use admin::Admin;
pub use client::Client;
pub use dish::{Dish, DishProduct};
pub use key::Ident;
pub use nutritionist::Nutritionist;
pub use product::Product;
pub use user::User;

/// A record kept in an [`EntityStore`](crate::storage::EntityStore).
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Normalized unique key. String keys compare case-insensitively.
    type Key: Eq + Hash + Clone + fmt::Debug + Send + Sync;

    /// Singular name used in messages and metric labels.
    const NAME: &'static str;
    /// Wire name of the field carrying the key.
    const KEY_FIELD: &'static str;
    /// Backing file name inside the data directory.
    const FILE: &'static str;

    fn key(&self) -> Self::Key;

    /// Parses a key as it appears in a request path.
    fn parse_key(raw: &str) -> Option<Self::Key>;
}
