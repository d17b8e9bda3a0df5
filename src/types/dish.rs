// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};

use crate::types::{Entity, Product};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Dish {
    /// 13-digit code assigned by the service on creation. Dish codes live in
    /// their own namespace, separate from product codes.
    pub bar_code: i64,
    pub name: String,
    pub description: String,
    pub calcium: f64,
    pub sodium: f64,
    pub fat: f64,
    pub energy: f64,
    pub serving_size: f64,
    pub iron: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub status: String,
    pub products: Vec<DishProduct>,
}

/// A product embedded in a dish, by value, with its quantity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DishProduct {
    pub product: Product,
    pub quantity: i32,
}

impl Entity for Dish {
    type Key = i64;

    const NAME: &'static str = "dish";
    const KEY_FIELD: &'static str = "BarCode";
    const FILE: &'static str = "dishes.json";

    fn key(&self) -> i64 {
        self.bar_code
    }

    fn parse_key(raw: &str) -> Option<i64> {
        raw.parse().ok()
    }
}
