//! Shared fakes for the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use stl_bestiary::catalog::snapshot::{SnapshotError, SnapshotStore};
use stl_bestiary::core::detail::MonsterDetail;
use stl_bestiary::{AuthoritativeEntry, CatalogEntry, FetchError, MonsterId, RemoteSource};

/// In-process source that counts every fetch
pub struct FakeSource {
    catalog: Vec<CatalogEntry>,
    index: Vec<AuthoritativeEntry>,
    fail_catalog: bool,
    fail_index: bool,
    catalog_fetches: AtomicUsize,
    index_fetches: AtomicUsize,
}

impl FakeSource {
    pub fn new(catalog: Vec<CatalogEntry>) -> Self {
        Self {
            catalog,
            index: vec![
                AuthoritativeEntry::new("goblin", "Goblin", "/api/2014/monsters/goblin"),
                AuthoritativeEntry::new("giant-ape", "Giant Ape", "/api/2014/monsters/giant-ape"),
            ],
            fail_catalog: false,
            fail_index: false,
            catalog_fetches: AtomicUsize::new(0),
            index_fetches: AtomicUsize::new(0),
        }
    }

    pub fn failing_catalog() -> Self {
        Self {
            fail_catalog: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn failing_index() -> Self {
        Self {
            fail_index: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn catalog_fetches(&self) -> usize {
        self.catalog_fetches.load(Ordering::SeqCst)
    }

    pub fn index_fetches(&self) -> usize {
        self.index_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteSource for FakeSource {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>, FetchError> {
        self.catalog_fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_catalog {
            return Err(FetchError::Status {
                url: "/monsters.json".to_string(),
                status: 503,
            });
        }
        Ok(self.catalog.clone())
    }

    async fn fetch_monster_index(&self) -> Result<Vec<AuthoritativeEntry>, FetchError> {
        self.index_fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_index {
            return Err(FetchError::Status {
                url: "/api/2014/monsters".to_string(),
                status: 500,
            });
        }
        Ok(self.index.clone())
    }

    async fn fetch_monster_detail(&self, id: &MonsterId) -> Result<MonsterDetail, FetchError> {
        Err(FetchError::Status {
            url: format!("/api/2014/monsters/{id}"),
            status: 404,
        })
    }
}

/// Store whose every operation fails, like a full or disabled storage quota
pub struct BrokenSnapshotStore {
    pub writes: AtomicUsize,
}

impl BrokenSnapshotStore {
    pub fn new() -> Self {
        Self {
            writes: AtomicUsize::new(0),
        }
    }
}

impl SnapshotStore for BrokenSnapshotStore {
    fn read(&self, _key: &str) -> Result<Option<String>, SnapshotError> {
        Err(SnapshotError::Unavailable)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), SnapshotError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Err(SnapshotError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "quota exceeded",
        )))
    }

    fn remove(&self, _key: &str) -> Result<(), SnapshotError> {
        Err(SnapshotError::Unavailable)
    }
}

pub fn sample_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("Goblin Archer").with_download_ref("goblin-archer.stl"),
        CatalogEntry::new("Cave Giant Ape Statue"),
        CatalogEntry::new("Rat Swarm"),
        CatalogEntry::new("Ratfolk"),
    ]
}
