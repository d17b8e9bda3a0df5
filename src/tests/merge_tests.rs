// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::config::{ADMIN_DOMAIN, NUTRITIONIST_DOMAIN};
use crate::merge::Patch;
use crate::types::{Admin, Client, Dish, DishProduct, Nutritionist, Product, User};

fn stored_client() -> Client {
    Client {
        email: "c@mail.com".to_string(),
        e_identifier: "client1".to_string(),
        e_domain: "mail.com".to_string(),
        fat_percentage: 20.0,
        country: "CR".to_string(),
        current_weight: 70.0,
        ..Client::default()
    }
}

#[test]
fn test_empty_payload_changes_nothing() {
    let mut client = stored_client();
    client.patch(&Client::default());
    assert_eq!(client, stored_client());
}

#[test]
fn test_present_fields_overwrite() {
    let mut client = stored_client();
    let incoming = Client {
        country: "PA".to_string(),
        current_weight: 68.5,
        ..Client::default()
    };
    client.patch(&incoming);

    assert_eq!(client.country, "PA");
    assert_eq!(client.current_weight, 68.5);
    // untouched
    assert_eq!(client.fat_percentage, 20.0);
    assert_eq!(client.email, "c@mail.com");
}

#[test]
fn test_zero_is_treated_as_absent() {
    let mut client = stored_client();
    let incoming = Client {
        fat_percentage: 0.0,
        ..Client::default()
    };
    client.patch(&incoming);
    assert_eq!(client.fat_percentage, 20.0);
}

#[test]
fn test_patch_never_touches_keys() {
    let mut user = User {
        id: 1,
        e_identifier: "u1".to_string(),
        age: 30,
        ..User::default()
    };
    let incoming = User {
        id: 99,
        e_identifier: "other".to_string(),
        age: 31,
        ..User::default()
    };
    user.patch(&incoming);

    assert_eq!(user.id, 1);
    assert_eq!(user.e_identifier, "u1");
    assert_eq!(user.age, 31);
}

#[test]
fn test_admin_domain_is_pinned() {
    let mut admin = Admin {
        email: "a@x.com".to_string(),
        e_identifier: "admin1".to_string(),
        e_domain: ADMIN_DOMAIN.to_string(),
    };
    let incoming = Admin {
        email: "b@x.com".to_string(),
        e_identifier: String::new(),
        e_domain: "evil.com".to_string(),
    };
    admin.patch(&incoming);

    assert_eq!(admin.email, "b@x.com");
    assert_eq!(admin.e_domain, ADMIN_DOMAIN);
}

#[test]
fn test_nutritionist_domain_is_pinned() {
    let mut nutritionist = Nutritionist {
        e_domain: "drifted.com".to_string(),
        ..Nutritionist::default()
    };
    let incoming = Nutritionist {
        e_domain: "mail.com".to_string(),
        weight: 60.0,
        ..Nutritionist::default()
    };
    nutritionist.patch(&incoming);

    assert_eq!(nutritionist.e_domain, NUTRITIONIST_DOMAIN);
    assert_eq!(nutritionist.weight, 60.0);
}

#[test]
fn test_lists_replace_only_when_non_empty() {
    let rice = Product {
        name: "Rice".to_string(),
        ..Product::default()
    };
    let mut dish = Dish {
        products: vec![DishProduct {
            product: rice.clone(),
            quantity: 2,
        }],
        ..Dish::default()
    };

    dish.patch(&Dish::default());
    assert_eq!(dish.products.len(), 1);

    let beans = Product {
        name: "Beans".to_string(),
        ..Product::default()
    };
    let incoming = Dish {
        products: vec![
            DishProduct { product: rice, quantity: 1 },
            DishProduct { product: beans, quantity: 3 },
        ],
        ..Dish::default()
    };
    dish.patch(&incoming);
    assert_eq!(dish.products.len(), 2);
    assert_eq!(dish.products[1].product.name, "Beans");
}

#[test]
fn test_product_bar_code_survives_patch() {
    let mut product = Product {
        bar_code: 1_000_000_000_001,
        name: "Milk".to_string(),
        ..Product::default()
    };
    let incoming = Product {
        bar_code: 1_000_000_000_001,
        protein: 3.4,
        ..Product::default()
    };
    product.patch(&incoming);

    assert_eq!(product.bar_code, 1_000_000_000_001);
    assert_eq!(product.name, "Milk");
    assert_eq!(product.protein, 3.4);
}
