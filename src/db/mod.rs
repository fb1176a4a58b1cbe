use crate::models::{Athlete, AthleteFilter, AthleteResponse, Page};

mod memory;
mod sqlite;

use memory::MemoryRegistry;
use sqlite::SqliteRegistry;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("an athlete with national id {national_id} is already registered")]
    DuplicateKey { national_id: String },
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Athlete store shared by all request handlers.
#[derive(Debug)]
pub enum Registry {
    Memory(MemoryRegistry),
    Sqlite(SqliteRegistry),
}

impl Registry {
    pub fn in_memory() -> Self {
        Registry::Memory(MemoryRegistry::default())
    }

    pub async fn connect_sqlite(database_url: &str) -> Result<Self, RegistryError> {
        Ok(Registry::Sqlite(SqliteRegistry::connect(database_url).await?))
    }

    pub async fn list(&self, filter: &AthleteFilter) -> Result<Vec<AthleteResponse>, RegistryError> {
        let athletes = match self {
            Registry::Memory(registry) => registry.list(filter).await,
            Registry::Sqlite(registry) => registry.list(filter).await?,
        };

        Ok(athletes.iter().map(Athlete::to_response).collect())
    }

    pub async fn list_paginated(
        &self,
        filter: &AthleteFilter,
        limit: usize,
        offset: usize,
    ) -> Result<Page<AthleteResponse>, RegistryError> {
        let (athletes, total) = match self {
            Registry::Memory(registry) => registry.list_page(filter, limit, offset).await,
            Registry::Sqlite(registry) => registry.list_page(filter, limit, offset).await?,
        };

        Ok(Page {
            items: athletes.iter().map(Athlete::to_response).collect(),
            total,
            limit,
            offset,
        })
    }

    /// Insert a new athlete. Fails with `DuplicateKey` if the national id is taken,
    /// leaving the registry untouched.
    pub async fn create(&self, athlete: Athlete) -> Result<(), RegistryError> {
        match self {
            Registry::Memory(registry) => registry.create(athlete).await,
            Registry::Sqlite(registry) => registry.create(athlete).await,
        }
    }

    pub async fn count(&self) -> Result<usize, RegistryError> {
        match self {
            Registry::Memory(registry) => Ok(registry.count().await),
            Registry::Sqlite(registry) => registry.count().await,
        }
    }

    /// Insert the two sample athletes. Already-registered ones are skipped.
    pub async fn seed_defaults(&self) -> Result<(), RegistryError> {
        for athlete in sample_athletes() {
            match self.create(athlete).await {
                Ok(()) => {}
                Err(RegistryError::DuplicateKey { national_id }) => {
                    tracing::debug!("Sample athlete {} already present, skipping", national_id);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }
}

pub fn sample_athletes() -> Vec<Athlete> {
    vec![
        Athlete::new("Atleta 1", "111.111.111-11", "Centro 1", "Categoria A"),
        Athlete::new("Atleta 2", "222.222.222-22", "Centro 2", "Categoria B"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn backends() -> Vec<Registry> {
        vec![
            Registry::in_memory(),
            Registry::connect_sqlite("sqlite::memory:").await.unwrap(),
        ]
    }

    #[tokio::test]
    async fn seeded_list_keeps_insertion_order() {
        for registry in backends().await {
            registry.seed_defaults().await.unwrap();

            let names: Vec<String> = registry
                .list(&AthleteFilter::default())
                .await
                .unwrap()
                .into_iter()
                .map(|a| a.name)
                .collect();

            assert_eq!(names, vec!["Atleta 1", "Atleta 2"], "{registry:?}");
        }
    }

    #[tokio::test]
    async fn seeding_twice_is_harmless() {
        for registry in backends().await {
            registry.seed_defaults().await.unwrap();
            registry.seed_defaults().await.unwrap();
            assert_eq!(registry.count().await.unwrap(), 2);
        }
    }

    #[tokio::test]
    async fn duplicate_create_reports_national_id_and_keeps_state() {
        for registry in backends().await {
            registry.seed_defaults().await.unwrap();

            let err = registry
                .create(Athlete::new("Outro", "111.111.111-11", "Centro 9", "Categoria Z"))
                .await
                .unwrap_err();

            match err {
                RegistryError::DuplicateKey { national_id } => {
                    assert_eq!(national_id, "111.111.111-11")
                }
                other => panic!("unexpected error: {other:?}"),
            }

            let all = registry.list(&AthleteFilter::default()).await.unwrap();
            assert_eq!(all.len(), 2);
            assert!(all.iter().all(|a| a.name != "Outro"));
        }
    }

    #[tokio::test]
    async fn created_athlete_shows_up_in_listing() {
        for registry in backends().await {
            registry.seed_defaults().await.unwrap();
            registry
                .create(Athlete::new("Atleta 3", "333.333.333-33", "Centro 3", "Categoria C"))
                .await
                .unwrap();

            let filter = AthleteFilter::new(None, Some("333.333.333-33".into()));
            let found = registry.list(&filter).await.unwrap();
            assert_eq!(found.len(), 1);
            assert_eq!(found[0].training_center, "Centro 3");

            let all = registry.list(&AthleteFilter::default()).await.unwrap();
            assert_eq!(all.last().map(|a| a.name.as_str()), Some("Atleta 3"));
        }
    }

    #[tokio::test]
    async fn filters_compose() {
        for registry in backends().await {
            registry.seed_defaults().await.unwrap();

            let by_name = AthleteFilter::new(Some("Atleta 2".into()), None);
            assert_eq!(registry.list(&by_name).await.unwrap().len(), 1);

            let mismatch = AthleteFilter::new(Some("Atleta 2".into()), Some("111.111.111-11".into()));
            assert!(registry.list(&mismatch).await.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn page_of_one_at_offset_one() {
        for registry in backends().await {
            registry.seed_defaults().await.unwrap();

            let page = registry
                .list_paginated(&AthleteFilter::default(), 1, 1)
                .await
                .unwrap();

            assert_eq!(page.total, 2);
            assert_eq!(page.items.len(), 1);
            assert_eq!(page.items[0].name, "Atleta 2");
            assert_eq!((page.limit, page.offset), (1, 1));
        }
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() {
        for registry in backends().await {
            registry.seed_defaults().await.unwrap();

            let page = registry
                .list_paginated(&AthleteFilter::default(), 10, 5)
                .await
                .unwrap();

            assert!(page.items.is_empty());
            assert_eq!(page.total, 2);
        }
    }
}
