// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};

use crate::types::{Entity, Ident};

/// A person followed by nutritionists. Their email domain may not be
/// one of the staff domains.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Client {
    pub email: String,
    #[serde(rename = "E_Identifier")]
    pub e_identifier: String,
    #[serde(rename = "E_Domain")]
    pub e_domain: String,
    pub fat_percentage: f64,
    pub maximum_daily_consumption: f64,
    pub muscle_percentage: f64,
    pub country: String,
    pub inicial_measures: String,
    #[serde(rename = "Im_Hip")]
    pub im_hip: f64,
    #[serde(rename = "Im_Neck")]
    pub im_neck: f64,
    #[serde(rename = "Im_Waist")]
    pub im_waist: f64,
    pub imc: f64,
    pub current_weight: f64,
}

impl Entity for Client {
    type Key = Ident;

    const NAME: &'static str = "client";
    const KEY_FIELD: &'static str = "E_Identifier";
    const FILE: &'static str = "clients.json";

    fn key(&self) -> Ident {
        Ident::new(&self.e_identifier)
    }

    fn parse_key(raw: &str) -> Option<Ident> {
        Some(Ident::new(raw))
    }
}
