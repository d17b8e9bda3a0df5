// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::types::{Admin, Client, Dish, DishProduct, Nutritionist, Product, User};
use crate::validate::Validate;

fn valid_user() -> User {
    User {
        id: 1,
        age: 30,
        password: "secret".to_string(),
        birthdate: "1994-01-02".to_string(),
        b_day: 2,
        b_month: 1,
        b_year: 1994,
        email: "ana@mail.com".to_string(),
        e_identifier: "ana".to_string(),
        e_domain: "mail.com".to_string(),
        fullname: "Ana Mora Solis".to_string(),
        name: "Ana".to_string(),
        firstlast_name: "Mora".to_string(),
        secondlast_name: "Solis".to_string(),
        username: "ana".to_string(),
    }
}

#[test]
fn test_user_rules() {
    assert!(valid_user().validate().is_ok());

    let old = User { age: 151, ..valid_user() };
    assert_eq!(old.validate().unwrap_err().field, "Age");

    let short = User { password: "abc".to_string(), ..valid_user() };
    assert_eq!(short.validate().unwrap_err().field, "Password");

    let no_user = User { username: "  ".to_string(), ..valid_user() };
    assert_eq!(no_user.validate().unwrap_err().field, "Username");
}

#[test]
fn test_email_syntax() {
    let bad = Admin {
        email: "not-an-email".to_string(),
        e_identifier: "admin1".to_string(),
        ..Admin::default()
    };
    assert_eq!(bad.validate().unwrap_err().field, "Email");

    let two_ats = Admin { email: "a@b@c".to_string(), ..bad.clone() };
    assert!(two_ats.validate().is_err());

    let good = Admin { email: "a@x.com".to_string(), ..bad };
    assert!(good.validate().is_ok());
}

#[test]
fn test_client_reserved_domains() {
    let client = Client {
        email: "c@mail.com".to_string(),
        e_identifier: "c1".to_string(),
        e_domain: "mail.com".to_string(),
        ..Client::default()
    };
    assert!(client.validate().is_ok());

    for domain in ["nutriTECAdmin.com", "NUTRITECNUTRI.COM"] {
        let reserved = Client { e_domain: domain.to_string(), ..client.clone() };
        assert_eq!(reserved.validate().unwrap_err().field, "E_Domain");
    }
}

#[test]
fn test_staff_domains_must_match() {
    let admin = Admin {
        email: "a@x.com".to_string(),
        e_identifier: "admin1".to_string(),
        e_domain: "gmail.com".to_string(),
    };
    assert_eq!(admin.validate().unwrap_err().field, "E_Domain");

    let shouting = Admin { e_domain: "NUTRITECADMIN.COM".to_string(), ..admin.clone() };
    assert!(shouting.validate().is_ok());

    // Default carries the pinned domain
    let nutritionist = Nutritionist {
        email: "n@x.com".to_string(),
        e_identifier: "nutri1".to_string(),
        ..Nutritionist::default()
    };
    assert!(nutritionist.validate().is_ok());

    let lower = Nutritionist { e_domain: "nutritecnutri.com".to_string(), ..nutritionist };
    assert_eq!(lower.validate().unwrap_err().field, "E_Domain");
}

#[test]
fn test_identifiers_reject_control_characters() {
    let admin = Admin {
        email: "a@x.com".to_string(),
        e_identifier: "ad\nmin".to_string(),
        ..Admin::default()
    };
    assert_eq!(admin.validate().unwrap_err().field, "E_Identifier");

    let user = User { e_identifier: "ana\t".to_string(), ..valid_user() };
    assert_eq!(user.validate().unwrap_err().field, "E_Identifier");

    // Spaces are fine
    let spaced = Admin { e_identifier: "admin one".to_string(), ..admin };
    assert!(spaced.validate().is_ok());
}

#[test]
fn test_dish_quantities() {
    let dish = Dish {
        name: "Gallo pinto".to_string(),
        status: "approved".to_string(),
        products: vec![DishProduct {
            product: Product {
                name: "Rice".to_string(),
                status: "approved".to_string(),
                ..Product::default()
            },
            quantity: 0,
        }],
        ..Dish::default()
    };
    let err = dish.validate().unwrap_err();
    assert_eq!(err.field, "Products");
    assert!(err.message.contains("quantity"));

    let product = Product { name: "Rice".to_string(), ..Product::default() };
    assert_eq!(product.validate().unwrap_err().field, "Status");
}

#[test]
fn test_dish_embedded_products_are_validated() {
    let item = |status: &str| DishProduct {
        product: Product {
            name: "Beans".to_string(),
            status: status.to_string(),
            ..Product::default()
        },
        quantity: 1,
    };
    let dish = Dish {
        name: "Casado".to_string(),
        status: "approved".to_string(),
        products: vec![item("approved")],
        ..Dish::default()
    };
    assert!(dish.validate().is_ok());

    let broken = Dish { products: vec![item("approved"), item("")], ..dish };
    let err = broken.validate().unwrap_err();
    assert_eq!(err.field, "Products");
    assert!(err.message.contains("Status"));
}
