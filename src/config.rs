// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

/// Email domain every admin account is pinned to.
pub const ADMIN_DOMAIN: &str = "nutriTECAdmin.com";

/// Email domain every nutritionist account is pinned to.
pub const NUTRITIONIST_DOMAIN: &str = "nutriTECNutri.com";

/// Directory, relative to the working directory, holding one JSON file per entity.
pub const DEFAULT_DATA_DIR: &str = "Data";

pub const MIN_PASSWORD_LEN: usize = 4;
pub const MAX_AGE: i32 = 150;

/// True if `domain` is one of the staff domains clients may not use.
pub fn is_reserved_domain(domain: &str) -> bool {
    domain.eq_ignore_ascii_case(ADMIN_DOMAIN) || domain.eq_ignore_ascii_case(NUTRITIONIST_DOMAIN)
}
