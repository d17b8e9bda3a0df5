// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};

use crate::config::ADMIN_DOMAIN;
use crate::types::{Entity, Ident};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Admin {
    pub email: String,
    #[serde(rename = "E_Identifier")]
    pub e_identifier: String,
    #[serde(rename = "E_Domain")]
    pub e_domain: String,
}

impl Default for Admin {
    fn default() -> Self {
        Self {
            email: String::new(),
            e_identifier: String::new(),
            e_domain: ADMIN_DOMAIN.to_string(),
        }
    }
}

impl Entity for Admin {
    type Key = Ident;

    const NAME: &'static str = "admin";
    const KEY_FIELD: &'static str = "E_Identifier";
    const FILE: &'static str = "admins.json";

    fn key(&self) -> Ident {
        Ident::new(&self.e_identifier)
    }

    fn parse_key(raw: &str) -> Option<Ident> {
        Some(Ident::new(raw))
    }
}
