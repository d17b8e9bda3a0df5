// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! PATCH merge rules.
//!
//! A payload field replaces the stored one only when it carries a value:
//! strings and lists must be non-empty, numbers non-zero. A caller cannot
//! set a number back to zero or clear a string through PATCH.
//!
//! Keys and generated codes are not touched here. Changing them needs a
//! uniqueness check against the store, done in [`crate::state`].

use crate::config::{ADMIN_DOMAIN, NUTRITIONIST_DOMAIN};
use crate::types::{Admin, Client, Dish, Nutritionist, Product, User};

pub trait Patch {
    /// Copies every supplied field of `incoming` onto `self`.
    fn patch(&mut self, incoming: &Self);
}

pub fn merge_str(dst: &mut String, src: &str) {
    if !src.is_empty() {
        *dst = src.to_string();
    }
}

pub fn merge_num<N: PartialEq + Default + Copy>(dst: &mut N, src: N) {
    if src != N::default() {
        *dst = src;
    }
}

pub fn merge_vec<T: Clone>(dst: &mut Vec<T>, src: &[T]) {
    if !src.is_empty() {
        *dst = src.to_vec();
    }
}

impl Patch for User {
    fn patch(&mut self, incoming: &Self) {
        merge_num(&mut self.age, incoming.age);
        merge_str(&mut self.password, &incoming.password);
        merge_str(&mut self.email, &incoming.email);
        merge_str(&mut self.birthdate, &incoming.birthdate);
        merge_num(&mut self.b_day, incoming.b_day);
        merge_num(&mut self.b_month, incoming.b_month);
        merge_num(&mut self.b_year, incoming.b_year);
        merge_str(&mut self.fullname, &incoming.fullname);
        merge_str(&mut self.name, &incoming.name);
        merge_str(&mut self.firstlast_name, &incoming.firstlast_name);
        merge_str(&mut self.secondlast_name, &incoming.secondlast_name);
        merge_str(&mut self.username, &incoming.username);
        merge_str(&mut self.e_domain, &incoming.e_domain);
    }
}

impl Patch for Client {
    /// The caller must reject reserved domains before patching.
    fn patch(&mut self, incoming: &Self) {
        merge_str(&mut self.email, &incoming.email);
        merge_str(&mut self.e_domain, &incoming.e_domain);
        merge_num(&mut self.fat_percentage, incoming.fat_percentage);
        merge_num(&mut self.maximum_daily_consumption, incoming.maximum_daily_consumption);
        merge_num(&mut self.muscle_percentage, incoming.muscle_percentage);
        merge_str(&mut self.country, &incoming.country);
        merge_str(&mut self.inicial_measures, &incoming.inicial_measures);
        merge_num(&mut self.im_hip, incoming.im_hip);
        merge_num(&mut self.im_neck, incoming.im_neck);
        merge_num(&mut self.im_waist, incoming.im_waist);
        merge_num(&mut self.imc, incoming.imc);
        merge_num(&mut self.current_weight, incoming.current_weight);
    }
}

impl Patch for Nutritionist {
    fn patch(&mut self, incoming: &Self) {
        merge_str(&mut self.email, &incoming.email);
        self.e_domain = NUTRITIONIST_DOMAIN.to_string();
        merge_num(&mut self.weight, incoming.weight);
        merge_num(&mut self.imc, incoming.imc);
        merge_str(&mut self.address, &incoming.address);
        merge_str(&mut self.a_province, &incoming.a_province);
        merge_str(&mut self.a_canton, &incoming.a_canton);
        merge_str(&mut self.a_district, &incoming.a_district);
        merge_str(&mut self.photo, &incoming.photo);
        merge_str(&mut self.payment_card, &incoming.payment_card);
        merge_str(&mut self.pc_name, &incoming.pc_name);
        merge_num(&mut self.pc_number, incoming.pc_number);
        merge_num(&mut self.pc_cvc, incoming.pc_cvc);
        merge_str(&mut self.pc_expiration_date, &incoming.pc_expiration_date);
        merge_num(&mut self.pc_ed_year, incoming.pc_ed_year);
        merge_num(&mut self.pc_ed_month, incoming.pc_ed_month);
        merge_str(&mut self.payment_type, &incoming.payment_type);
        merge_num(&mut self.total_payment_amount, incoming.total_payment_amount);
        merge_num(&mut self.discount, incoming.discount);
        merge_num(&mut self.final_payment, incoming.final_payment);
        merge_vec(&mut self.advicer, &incoming.advicer);
    }
}

impl Patch for Admin {
    fn patch(&mut self, incoming: &Self) {
        merge_str(&mut self.email, &incoming.email);
        self.e_domain = ADMIN_DOMAIN.to_string();
    }
}

impl Patch for Product {
    fn patch(&mut self, incoming: &Self) {
        merge_str(&mut self.name, &incoming.name);
        merge_str(&mut self.description, &incoming.description);
        merge_num(&mut self.calcium, incoming.calcium);
        merge_num(&mut self.sodium, incoming.sodium);
        merge_num(&mut self.fat, incoming.fat);
        merge_num(&mut self.energy, incoming.energy);
        merge_num(&mut self.serving_size, incoming.serving_size);
        merge_num(&mut self.iron, incoming.iron);
        merge_num(&mut self.protein, incoming.protein);
        merge_num(&mut self.carbohydrates, incoming.carbohydrates);
        merge_str(&mut self.status, &incoming.status);
    }
}

impl Patch for Dish {
    fn patch(&mut self, incoming: &Self) {
        merge_str(&mut self.name, &incoming.name);
        merge_str(&mut self.description, &incoming.description);
        merge_num(&mut self.calcium, incoming.calcium);
        merge_num(&mut self.sodium, incoming.sodium);
        merge_num(&mut self.fat, incoming.fat);
        merge_num(&mut self.energy, incoming.energy);
        merge_num(&mut self.serving_size, incoming.serving_size);
        merge_num(&mut self.iron, incoming.iron);
        merge_num(&mut self.protein, incoming.protein);
        merge_num(&mut self.carbohydrates, incoming.carbohydrates);
        merge_str(&mut self.status, &incoming.status);
        merge_vec(&mut self.products, &incoming.products);
    }
}
