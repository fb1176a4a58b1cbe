use tokio::sync::RwLock;

use super::RegistryError;
use crate::models::{Athlete, AthleteFilter};

/// Process-local registry. Writes hold the lock across the uniqueness check and the append.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    athletes: RwLock<Vec<Athlete>>,
}

impl MemoryRegistry {
    pub async fn list(&self, filter: &AthleteFilter) -> Vec<Athlete> {
        self.athletes
            .read()
            .await
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect()
    }

    pub async fn list_page(
        &self,
        filter: &AthleteFilter,
        limit: usize,
        offset: usize,
    ) -> (Vec<Athlete>, usize) {
        let athletes = self.athletes.read().await;
        let matching = athletes.iter().filter(|a| filter.matches(a));

        let total = matching.clone().count();
        let page = matching.skip(offset).take(limit).cloned().collect();

        (page, total)
    }

    pub async fn create(&self, athlete: Athlete) -> Result<(), RegistryError> {
        let mut athletes = self.athletes.write().await;

        if athletes.iter().any(|a| a.national_id == athlete.national_id) {
            return Err(RegistryError::DuplicateKey {
                national_id: athlete.national_id,
            });
        }

        athletes.push(athlete);
        Ok(())
    }

    pub async fn count(&self) -> usize {
        self.athletes.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_duplicates_admit_exactly_one() {
        let registry = Arc::new(MemoryRegistry::default());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let registry = Arc::clone(&registry);
                tokio::spawn(async move {
                    registry
                        .create(Athlete::new(format!("Atleta {i}"), "999", "Centro", "Categoria"))
                        .await
                })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(registry.count().await, 1);
    }
}
