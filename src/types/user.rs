// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};

use crate::types::Entity;

/// Login account. Keyed by the numeric `id`; `e_identifier` must be unique
/// as well and is checked by scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct User {
    pub id: i32,
    pub age: i32,
    pub password: String,
    pub birthdate: String,
    #[serde(rename = "B_Day")]
    pub b_day: i32,
    #[serde(rename = "B_Month")]
    pub b_month: i32,
    #[serde(rename = "B_Year")]
    pub b_year: i32,
    pub email: String,
    #[serde(rename = "E_Identifier")]
    pub e_identifier: String,
    #[serde(rename = "E_Domain")]
    pub e_domain: String,
    pub fullname: String,
    pub name: String,
    pub firstlast_name: String,
    pub secondlast_name: String,
    pub username: String,
}

impl Entity for User {
    type Key = i32;

    const NAME: &'static str = "user";
    const KEY_FIELD: &'static str = "Id";
    const FILE: &'static str = "users.json";

    fn key(&self) -> i32 {
        self.id
    }

    fn parse_key(raw: &str) -> Option<i32> {
        raw.parse().ok()
    }
}
