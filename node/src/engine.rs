// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::path::Path;
use std::time::Instant;

use nutri_core::error::NutriResult;
use nutri_core::ident::IdGenerator;
use nutri_core::state::NutriState;
use nutri_core::storage::StorePort;
use nutri_persistence::DataDir;

use crate::config::NodeConfig;

/// Port decorator timing every save.
pub struct MeteredPort<P> {
    inner: P,
}

impl<P: StorePort> MeteredPort<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: StorePort> StorePort for MeteredPort<P> {
    fn load(&self) -> NutriResult<Option<Vec<u8>>> {
        self.inner.load()
    }

    fn save(&self, bytes: &[u8]) -> NutriResult<()> {
        let start = Instant::now();
        let result = self.inner.save(bytes);
        metrics::histogram!(
            "nutri_store_persist_duration_seconds",
            start.elapsed().as_secs_f64()
        );
        result
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }
}

pub struct Engine {
    pub state: NutriState,
    data_dir: DataDir,
}

impl Engine {
    /// Loads every entity file under `cfg.data_dir`, creating missing ones.
    pub fn open(cfg: &NodeConfig) -> NutriResult<Self> {
        let data_dir = DataDir::new(&cfg.data_dir);
        let state = NutriState::open(
            |file| -> Box<dyn StorePort> { Box::new(MeteredPort::new(data_dir.file(file))) },
            IdGenerator::from_entropy(),
        )?;

        tracing::info!(
            "Opened stores in {:?}: {} users, {} clients, {} nutritionists, {} admins, {} products, {} dishes",
            data_dir.root(),
            state.users.len(),
            state.clients.len(),
            state.nutritionists.len(),
            state.admins.len(),
            state.products.len(),
            state.dishes.len(),
        );

        Ok(Self { state, data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        self.data_dir.root()
    }
}
