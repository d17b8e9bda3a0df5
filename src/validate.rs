// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Payload checks run before a record reaches a store.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::config::{is_reserved_domain, ADMIN_DOMAIN, MAX_AGE, MIN_PASSWORD_LEN, NUTRITIONIST_DOMAIN};
use crate::types::{Admin, Client, Dish, Nutritionist, Product, User};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    // One '@' with something on each side, no whitespace.
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email pattern is valid"))
}

fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "is required"));
    }
    Ok(())
}

fn email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    required(field, value)?;
    if !email_regex().is_match(value) {
        return Err(ValidationError::new(field, format!("'{value}' is not a valid email address")));
    }
    Ok(())
}

/// Keys end up in request paths and `Location` headers.
fn identifier(field: &'static str, value: &str) -> Result<(), ValidationError> {
    required(field, value)?;
    if value.chars().any(char::is_control) {
        return Err(ValidationError::new(field, "must not contain control characters"));
    }
    Ok(())
}

fn pinned_domain(value: &str, expected: &str, ignore_case: bool) -> Result<(), ValidationError> {
    let matches = if ignore_case {
        value.eq_ignore_ascii_case(expected)
    } else {
        value == expected
    };
    if !matches {
        return Err(ValidationError::new("E_Domain", format!("must be '{expected}'")));
    }
    Ok(())
}

impl Validate for User {
    fn validate(&self) -> Result<(), ValidationError> {
        if !(0..=MAX_AGE).contains(&self.age) {
            return Err(ValidationError::new("Age", format!("must be between 0 and {MAX_AGE}")));
        }
        required("Password", &self.password)?;
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::new(
                "Password",
                format!("must be at least {MIN_PASSWORD_LEN} characters"),
            ));
        }
        required("Birthdate", &self.birthdate)?;
        email("Email", &self.email)?;
        identifier("E_Identifier", &self.e_identifier)?;
        required("E_Domain", &self.e_domain)?;
        required("Fullname", &self.fullname)?;
        required("Name", &self.name)?;
        required("FirstlastName", &self.firstlast_name)?;
        required("SecondlastName", &self.secondlast_name)?;
        required("Username", &self.username)
    }
}

impl Validate for Client {
    fn validate(&self) -> Result<(), ValidationError> {
        email("Email", &self.email)?;
        identifier("E_Identifier", &self.e_identifier)?;
        required("E_Domain", &self.e_domain)?;
        if is_reserved_domain(&self.e_domain) {
            return Err(ValidationError::new(
                "E_Domain",
                format!("cannot be '{ADMIN_DOMAIN}' or '{NUTRITIONIST_DOMAIN}'"),
            ));
        }
        Ok(())
    }
}

impl Validate for Nutritionist {
    fn validate(&self) -> Result<(), ValidationError> {
        email("Email", &self.email)?;
        identifier("E_Identifier", &self.e_identifier)?;
        pinned_domain(&self.e_domain, NUTRITIONIST_DOMAIN, false)
    }
}

impl Validate for Admin {
    fn validate(&self) -> Result<(), ValidationError> {
        email("Email", &self.email)?;
        identifier("E_Identifier", &self.e_identifier)?;
        pinned_domain(&self.e_domain, ADMIN_DOMAIN, true)
    }
}

impl Validate for Product {
    fn validate(&self) -> Result<(), ValidationError> {
        required("Name", &self.name)?;
        required("Status", &self.status)
    }
}

impl Validate for Dish {
    fn validate(&self) -> Result<(), ValidationError> {
        required("Name", &self.name)?;
        required("Status", &self.status)?;
        for item in &self.products {
            if let Err(e) = item.product.validate() {
                return Err(ValidationError::new(
                    "Products",
                    format!("product '{}': {}", item.product.name, e),
                ));
            }
            if item.quantity < 1 {
                return Err(ValidationError::new(
                    "Products",
                    format!("quantity of '{}' must be at least 1", item.product.name),
                ));
            }
        }
        Ok(())
    }
}
