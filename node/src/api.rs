// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

use nutri_core::error::NutriResult;
use nutri_core::state::{HasStore, NutriState};
use nutri_core::storage::EntityStore;
use nutri_core::types::{Admin, Client, Dish, Entity, Ident, Nutritionist, Product, User};

/// Escaped when a key is written as one path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// An entity exposed as a REST collection under [`Resource::ROUTE`].
pub trait Resource: Entity {
    const ROUTE: &'static str;

    fn store(state: &NutriState) -> &EntityStore<Self>;

    fn create(state: &mut NutriState, record: Self) -> NutriResult<Self>;

    fn patch(state: &mut NutriState, key: &Self::Key, incoming: &Self) -> NutriResult<()>;

    /// Path segment identifying this record, as the client sent it.
    fn path_key(&self) -> String;

    /// Route of this record, with the key percent-encoded.
    fn location(&self) -> String {
        format!("{}/{}", Self::ROUTE, utf8_percent_encode(&self.path_key(), PATH_SEGMENT))
    }
}

impl Resource for User {
    const ROUTE: &'static str = "/api/users";

    fn store(state: &NutriState) -> &EntityStore<Self> {
        HasStore::<Self>::store(state)
    }

    fn create(state: &mut NutriState, record: Self) -> NutriResult<Self> {
        state.create_user(record)
    }

    fn patch(state: &mut NutriState, key: &i32, incoming: &Self) -> NutriResult<()> {
        state.patch_user(*key, incoming)
    }

    fn path_key(&self) -> String {
        self.id.to_string()
    }
}

/// Entities keyed by a case-insensitive `E_Identifier`.
macro_rules! identified_resource {
    ($ty:ty, $route:literal, $create:ident, $patch:ident) => {
        impl Resource for $ty {
            const ROUTE: &'static str = $route;

            fn store(state: &NutriState) -> &EntityStore<Self> {
                HasStore::<Self>::store(state)
            }

            fn create(state: &mut NutriState, record: Self) -> NutriResult<Self> {
                state.$create(record)
            }

            fn patch(state: &mut NutriState, key: &Ident, incoming: &Self) -> NutriResult<()> {
                state.$patch(key.as_str(), incoming)
            }

            fn path_key(&self) -> String {
                self.e_identifier.clone()
            }
        }
    };
}

identified_resource!(Client, "/api/clients", create_client, patch_client);
identified_resource!(Nutritionist, "/api/nutritionists", create_nutritionist, patch_nutritionist);
identified_resource!(Admin, "/api/admins", create_admin, patch_admin);

/// Entities keyed by a server-assigned `BarCode`.
macro_rules! bar_coded_resource {
    ($ty:ty, $route:literal, $create:ident, $patch:ident) => {
        impl Resource for $ty {
            const ROUTE: &'static str = $route;

            fn store(state: &NutriState) -> &EntityStore<Self> {
                HasStore::<Self>::store(state)
            }

            fn create(state: &mut NutriState, record: Self) -> NutriResult<Self> {
                state.$create(record)
            }

            fn patch(state: &mut NutriState, key: &i64, incoming: &Self) -> NutriResult<()> {
                state.$patch(*key, incoming)
            }

            fn path_key(&self) -> String {
                self.bar_code.to_string()
            }
        }
    };
}

bar_coded_resource!(Product, "/api/products", create_product, patch_product);
bar_coded_resource!(Dish, "/api/dishes", create_dish, patch_dish);
