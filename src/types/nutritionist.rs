// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};

use crate::config::NUTRITIONIST_DOMAIN;
use crate::types::{Client, Entity, Ident};

/// Staff member advising clients.
///
/// `code` is the 6-digit number clients use to find their nutritionist. It is
/// generated by the service whenever the caller leaves it at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Nutritionist {
    pub email: String,
    #[serde(rename = "E_Identifier")]
    pub e_identifier: String,
    #[serde(rename = "E_Domain")]
    pub e_domain: String,
    pub weight: f64,
    pub imc: f64,
    pub address: String,
    #[serde(rename = "A_Province")]
    pub a_province: String,
    #[serde(rename = "A_Canton")]
    pub a_canton: String,
    #[serde(rename = "A_District")]
    pub a_district: String,
    pub photo: String,
    pub payment_card: String,
    #[serde(rename = "Pc_Name")]
    pub pc_name: String,
    #[serde(rename = "Pc_Number")]
    pub pc_number: i64,
    #[serde(rename = "Pc_Cvc")]
    pub pc_cvc: i32,
    #[serde(rename = "Pc_ExpirationDate")]
    pub pc_expiration_date: String,
    #[serde(rename = "Pc_Ed_Year")]
    pub pc_ed_year: i32,
    #[serde(rename = "Pc_Ed_Month")]
    pub pc_ed_month: i32,
    pub payment_type: String,
    pub total_payment_amount: f64,
    pub discount: f64,
    pub final_payment: f64,
    pub code: i32,
    pub advicer: Vec<Client>,
}

impl Default for Nutritionist {
    fn default() -> Self {
        Self {
            email: String::new(),
            e_identifier: String::new(),
            e_domain: NUTRITIONIST_DOMAIN.to_string(),
            weight: 0.0,
            imc: 0.0,
            address: String::new(),
            a_province: String::new(),
            a_canton: String::new(),
            a_district: String::new(),
            photo: String::new(),
            payment_card: String::new(),
            pc_name: String::new(),
            pc_number: 0,
            pc_cvc: 0,
            pc_expiration_date: String::new(),
            pc_ed_year: 0,
            pc_ed_month: 0,
            payment_type: String::new(),
            total_payment_amount: 0.0,
            discount: 0.0,
            final_payment: 0.0,
            code: 0,
            advicer: Vec::new(),
        }
    }
}

impl Entity for Nutritionist {
    type Key = Ident;

    const NAME: &'static str = "nutritionist";
    const KEY_FIELD: &'static str = "E_Identifier";
    const FILE: &'static str = "nutritionists.json";

    fn key(&self) -> Ident {
        Ident::new(&self.e_identifier)
    }

    fn parse_key(raw: &str) -> Option<Ident> {
        Some(Ident::new(raw))
    }
}
