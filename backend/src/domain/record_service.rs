use std::sync::Arc;

use shared::{FilterSet, Record, RecordId, ResourceFields};
use tracing::{info, warn};

use super::{ServerResource, ServiceError};
use crate::storage::RecordStorage;

/// Service for managing the records of one resource type
pub struct RecordService<F: ResourceFields> {
    storage: Arc<dyn RecordStorage<F>>,
}

impl<F: ResourceFields> Clone for RecordService<F> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<F: ServerResource> RecordService<F> {
    pub fn new(storage: Arc<dyn RecordStorage<F>>) -> Self {
        Self { storage }
    }

    /// List records matching every active filter, in storage order
    pub async fn list_records(&self, filters: &FilterSet) -> Result<Vec<Record<F>>, ServiceError> {
        info!("Listing {} records with filters: {:?}", F::LABEL, filters);

        let records: Vec<Record<F>> = self
            .storage
            .list_records()
            .await?
            .into_iter()
            .filter(|record| record.fields.matches(filters))
            .collect();

        info!("Found {} {} records", records.len(), F::LABEL);
        Ok(records)
    }

    pub async fn get_record(&self, id: RecordId) -> Result<Record<F>, ServiceError> {
        info!("Getting {}: {}", F::LABEL, id);

        self.storage.get_record(id).await?.ok_or_else(|| {
            warn!("{} not found: {}", F::LABEL, id);
            ServiceError::not_found::<F>(id)
        })
    }

    /// Validate and store a new record; the storage assigns the ID
    pub async fn create_record(&self, fields: F) -> Result<Record<F>, ServiceError> {
        info!("Creating {}: {:?}", F::LABEL, fields);

        fields.validate().map_err(ServiceError::Validation)?;
        let record = self.storage.store_record(fields).await?;

        info!("Created {} with ID: {}", F::LABEL, record.id);
        Ok(record)
    }

    /// Replace every mutable field of an existing record
    pub async fn update_record(&self, id: RecordId, fields: F) -> Result<Record<F>, ServiceError> {
        info!("Updating {}: {}", F::LABEL, id);

        if self.storage.get_record(id).await?.is_none() {
            warn!("{} not found: {}", F::LABEL, id);
            return Err(ServiceError::not_found::<F>(id));
        }
        fields.validate().map_err(ServiceError::Validation)?;

        let record = self
            .storage
            .replace_record(id, fields)
            .await?
            .ok_or_else(|| ServiceError::not_found::<F>(id))?;

        info!("Updated {} with ID: {}", F::LABEL, record.id);
        Ok(record)
    }

    pub async fn delete_record(&self, id: RecordId) -> Result<(), ServiceError> {
        info!("Deleting {}: {}", F::LABEL, id);

        if !self.storage.delete_record(id).await? {
            warn!("{} not found: {}", F::LABEL, id);
            return Err(ServiceError::not_found::<F>(id));
        }

        info!("Deleted {} with ID: {}", F::LABEL, id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStorage;
    use shared::{AnimalFields, CareFields};

    fn animal(name: &str, habitat: &str) -> AnimalFields {
        AnimalFields {
            name: name.to_string(),
            description: String::new(),
            birth_date: "2019-01-10".to_string(),
            species: "Girafa".to_string(),
            habitat: habitat.to_string(),
            origin_country: "Quênia".to_string(),
        }
    }

    fn animal_service() -> RecordService<AnimalFields> {
        RecordService::new(Arc::new(InMemoryStorage::new()))
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let service = animal_service();

        let created = service.create_record(animal("Gigi", "Savana")).await.unwrap();
        let listed = service.list_records(&FilterSet::new()).await.unwrap();

        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_fields() {
        let service = animal_service();

        let err = service.create_record(animal("", "Savana")).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(service.list_records(&FilterSet::new()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_applies_filters() {
        let service = animal_service();
        service.create_record(animal("Gigi", "Savana")).await.unwrap();
        service.create_record(animal("Kiko", "Floresta")).await.unwrap();

        let filters = FilterSet::new().with("habitat", "Savana");
        let listed = service.list_records(&filters).await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].fields.name, "Gigi");
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_id() {
        let service = animal_service();
        let created = service.create_record(animal("Gigi", "Savana")).await.unwrap();

        let replacement = AnimalFields {
            description: "Transferida".to_string(),
            ..animal("Gigi", "Montanha")
        };
        let updated = service.update_record(created.id, replacement.clone()).await.unwrap();
        let fetched = service.get_record(created.id).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(fetched.fields, replacement);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found_even_when_invalid() {
        let service = animal_service();

        let err = service.update_record(42, AnimalFields::default()).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound { id: 42, .. }));
    }

    #[tokio::test]
    async fn test_delete_twice_reports_not_found() {
        let service: RecordService<CareFields> =
            RecordService::new(Arc::new(InMemoryStorage::new()));
        let created = service
            .create_record(CareFields {
                care_name: "Limpeza".to_string(),
                description: String::new(),
                frequency: "Diária".to_string(),
            })
            .await
            .unwrap();

        service.delete_record(created.id).await.unwrap();
        let err = service.delete_record(created.id).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound { .. }));
        assert!(service.get_record(created.id).await.is_err());
    }
}
