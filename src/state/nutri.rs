// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Service state: the six entity stores and the create / patch flows that
//! enforce key uniqueness and domain policy on top of them.

use core::fmt::Display;

use crate::config::{is_reserved_domain, ADMIN_DOMAIN, NUTRITIONIST_DOMAIN};
use crate::error::{NutriError, Result};
use crate::ident::{IdGenerator, BAR_CODE, NUTRITIONIST_CODE};
use crate::merge::Patch;
use crate::storage::{EntityStore, StorePort};
use crate::types::key::eq_ignore_case;
use crate::types::{Admin, Client, Dish, Entity, Ident, Nutritionist, Product, User};
use crate::validate::Validate;

pub struct NutriState {
    pub users: EntityStore<User>,
    pub clients: EntityStore<Client>,
    pub nutritionists: EntityStore<Nutritionist>,
    pub admins: EntityStore<Admin>,
    pub products: EntityStore<Product>,
    pub dishes: EntityStore<Dish>,
    ids: IdGenerator,
}

/// Typed access to the store holding `T`.
pub trait HasStore<T: Entity> {
    fn store(&self) -> &EntityStore<T>;
}

macro_rules! has_store {
    ($ty:ty, $field:ident) => {
        impl HasStore<$ty> for NutriState {
            fn store(&self) -> &EntityStore<$ty> {
                &self.$field
            }
        }
    };
}

has_store!(User, users);
has_store!(Client, clients);
has_store!(Nutritionist, nutritionists);
has_store!(Admin, admins);
has_store!(Product, products);
has_store!(Dish, dishes);

pub fn not_found<T: Entity>(key: impl Display) -> NutriError {
    NutriError::NotFound(format!("{} with {} '{}' not found", T::NAME, T::KEY_FIELD, key))
}

fn taken(field: &str, value: impl Display) -> NutriError {
    NutriError::Conflict(format!("{field} '{value}' is already in use"))
}

/// Resolves a PATCH request to change a string key.
///
/// `Ok(None)` when the payload leaves the key alone (empty, or equal up to
/// case). `Conflict` when another record already holds the new key.
fn identifier_change<T: Entity<Key = Ident>>(
    store: &EntityStore<T>,
    current: &str,
    incoming: &str,
) -> Result<Option<String>> {
    if incoming.is_empty() || eq_ignore_case(current, incoming) {
        return Ok(None);
    }
    if store.exists_excluding(&Ident::new(incoming), &Ident::new(current)) {
        return Err(taken(T::KEY_FIELD, incoming));
    }
    Ok(Some(incoming.to_string()))
}

impl NutriState {
    /// Opens every store through the port `port_for` returns for its file name.
    pub fn open<F>(mut port_for: F, ids: IdGenerator) -> Result<Self>
    where
        F: FnMut(&'static str) -> Box<dyn StorePort>,
    {
        Ok(Self {
            users: EntityStore::open(port_for(User::FILE))?,
            clients: EntityStore::open(port_for(Client::FILE))?,
            nutritionists: EntityStore::open(port_for(Nutritionist::FILE))?,
            admins: EntityStore::open(port_for(Admin::FILE))?,
            products: EntityStore::open(port_for(Product::FILE))?,
            dishes: EntityStore::open(port_for(Dish::FILE))?,
            ids,
        })
    }

    // --- Users ---

    fn user_identifier_taken(&self, identifier: &str, exclude_id: Option<i32>) -> bool {
        self.users
            .any(|u| Some(u.id) != exclude_id && eq_ignore_case(&u.e_identifier, identifier))
    }

    pub fn create_user(&mut self, user: User) -> Result<User> {
        user.validate()?;
        if self.users.exists(&user.id) {
            return Err(taken(User::KEY_FIELD, user.id));
        }
        if self.user_identifier_taken(&user.e_identifier, None) {
            return Err(taken("E_Identifier", &user.e_identifier));
        }
        Ok(self.users.add(user)?.clone())
    }

    pub fn patch_user(&mut self, id: i32, incoming: &User) -> Result<()> {
        let mut merged = self
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found::<User>(id))?;

        merged.patch(incoming);
        if !incoming.e_identifier.is_empty()
            && !eq_ignore_case(&merged.e_identifier, &incoming.e_identifier)
        {
            if self.user_identifier_taken(&incoming.e_identifier, Some(id)) {
                return Err(taken("E_Identifier", &incoming.e_identifier));
            }
            merged.e_identifier = incoming.e_identifier.clone();
        }

        merged.validate()?;
        self.users.update(&id, merged)?;
        Ok(())
    }

    // --- Clients ---

    pub fn create_client(&mut self, client: Client) -> Result<Client> {
        client.validate()?;
        if self.clients.exists(&client.key()) {
            return Err(taken(Client::KEY_FIELD, &client.e_identifier));
        }
        Ok(self.clients.add(client)?.clone())
    }

    pub fn patch_client(&mut self, e_identifier: &str, incoming: &Client) -> Result<()> {
        let key = Ident::new(e_identifier);
        let mut merged = self
            .clients
            .get(&key)
            .cloned()
            .ok_or_else(|| not_found::<Client>(e_identifier))?;

        if let Some(new_identifier) =
            identifier_change(&self.clients, &merged.e_identifier, &incoming.e_identifier)?
        {
            merged.e_identifier = new_identifier;
        }
        if !incoming.e_domain.is_empty() && is_reserved_domain(&incoming.e_domain) {
            return Err(NutriError::BadRequest(format!(
                "E_Domain cannot be '{ADMIN_DOMAIN}' or '{NUTRITIONIST_DOMAIN}'"
            )));
        }

        merged.patch(incoming);
        merged.validate()?;
        self.clients.update(&key, merged)?;
        Ok(())
    }

    // --- Nutritionists ---

    fn generate_code(&mut self) -> i32 {
        let nutritionists = &self.nutritionists;
        let code = self
            .ids
            .next_unique(NUTRITIONIST_CODE, |c| nutritionists.any(|n| i64::from(n.code) == c));
        // NUTRITIONIST_CODE lies well inside i32.
        code as i32
    }

    fn code_taken(&self, code: i32) -> bool {
        self.nutritionists.any(|n| n.code == code)
    }

    pub fn create_nutritionist(&mut self, mut nutritionist: Nutritionist) -> Result<Nutritionist> {
        nutritionist.validate()?;
        if self.nutritionists.exists(&nutritionist.key()) {
            return Err(taken(Nutritionist::KEY_FIELD, &nutritionist.e_identifier));
        }

        if nutritionist.code == 0 {
            nutritionist.code = self.generate_code();
        } else if self.code_taken(nutritionist.code) {
            return Err(taken("Code", nutritionist.code));
        }

        Ok(self.nutritionists.add(nutritionist)?.clone())
    }

    pub fn patch_nutritionist(&mut self, e_identifier: &str, incoming: &Nutritionist) -> Result<()> {
        let key = Ident::new(e_identifier);
        let mut merged = self
            .nutritionists
            .get(&key)
            .cloned()
            .ok_or_else(|| not_found::<Nutritionist>(e_identifier))?;

        if let Some(new_identifier) =
            identifier_change(&self.nutritionists, &merged.e_identifier, &incoming.e_identifier)?
        {
            merged.e_identifier = new_identifier;
        }

        if incoming.code != 0 {
            if incoming.code != merged.code && self.code_taken(incoming.code) {
                return Err(taken("Code", incoming.code));
            }
            merged.code = incoming.code;
        } else if merged.code == 0 {
            merged.code = self.generate_code();
        }

        merged.patch(incoming);
        merged.validate()?;
        self.nutritionists.update(&key, merged)?;
        Ok(())
    }

    /// True if some nutritionist holds `code`.
    pub fn verify_code(&self, code: i32) -> bool {
        self.code_taken(code)
    }

    // --- Admins ---

    /// `E_Domain` may arrive in any casing and is stored as [`ADMIN_DOMAIN`].
    pub fn create_admin(&mut self, mut admin: Admin) -> Result<Admin> {
        admin.validate()?;
        admin.e_domain = ADMIN_DOMAIN.to_string();
        if self.admins.exists(&admin.key()) {
            return Err(taken(Admin::KEY_FIELD, &admin.e_identifier));
        }
        Ok(self.admins.add(admin)?.clone())
    }

    pub fn patch_admin(&mut self, e_identifier: &str, incoming: &Admin) -> Result<()> {
        let key = Ident::new(e_identifier);
        let mut merged = self
            .admins
            .get(&key)
            .cloned()
            .ok_or_else(|| not_found::<Admin>(e_identifier))?;

        if let Some(new_identifier) =
            identifier_change(&self.admins, &merged.e_identifier, &incoming.e_identifier)?
        {
            merged.e_identifier = new_identifier;
        }

        merged.patch(incoming);
        merged.validate()?;
        self.admins.update(&key, merged)?;
        Ok(())
    }

    // --- Products ---

    /// Stores `product` under a freshly drawn bar code. Any bar code in the
    /// payload is discarded.
    pub fn create_product(&mut self, mut product: Product) -> Result<Product> {
        product.validate()?;
        let products = &self.products;
        product.bar_code = self.ids.next_unique(BAR_CODE, |c| products.exists(&c));
        Ok(self.products.add(product)?.clone())
    }

    pub fn patch_product(&mut self, bar_code: i64, incoming: &Product) -> Result<()> {
        if incoming.bar_code != bar_code {
            return Err(NutriError::BadRequest(
                "BarCode in the body does not match the route".to_string(),
            ));
        }
        let mut merged = self
            .products
            .get(&bar_code)
            .cloned()
            .ok_or_else(|| not_found::<Product>(bar_code))?;

        merged.patch(incoming);
        merged.validate()?;
        self.products.update(&bar_code, merged)?;
        Ok(())
    }

    // --- Dishes ---

    /// Stores `dish` under a freshly drawn bar code. Any bar code in the
    /// payload is discarded.
    pub fn create_dish(&mut self, mut dish: Dish) -> Result<Dish> {
        dish.validate()?;
        let dishes = &self.dishes;
        dish.bar_code = self.ids.next_unique(BAR_CODE, |c| dishes.exists(&c));
        Ok(self.dishes.add(dish)?.clone())
    }

    pub fn patch_dish(&mut self, bar_code: i64, incoming: &Dish) -> Result<()> {
        if incoming.bar_code != bar_code {
            return Err(NutriError::BadRequest(
                "BarCode in the body does not match the route".to_string(),
            ));
        }
        let mut merged = self
            .dishes
            .get(&bar_code)
            .cloned()
            .ok_or_else(|| not_found::<Dish>(bar_code))?;

        merged.patch(incoming);
        merged.validate()?;
        self.dishes.update(&bar_code, merged)?;
        Ok(())
    }
}
