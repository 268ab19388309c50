use crate::DomainError;
use crate::MoleculeRecord;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Trait que define operaciones de persistencia para el catálogo molecular.
pub trait CatalogRepository: Send + Sync {
    /// Guarda una ficha bajo su CAS y devuelve el CAS.
    fn save_record(&self, cas: &str, record: MoleculeRecord) -> Result<String, DomainError>;

    /// Recupera una ficha por su CAS.
    fn get_record(&self, cas: &str) -> Result<Option<MoleculeRecord>, DomainError>;

    /// Devuelve el catálogo completo como mapa CAS → ficha.
    fn snapshot(&self) -> Result<HashMap<String, MoleculeRecord>, DomainError>;

    /// Reemplaza el contenido del catálogo (p. ej. tras un enriquecimiento).
    fn replace_all(&self, records: HashMap<String, MoleculeRecord>) -> Result<(), DomainError>;

    /// Elimina una ficha del catálogo.
    fn delete_record(&self, cas: &str) -> Result<(), DomainError>;
}

/// Implementación en memoria para tests y desarrollo.
pub struct InMemoryCatalogRepository {
    records: Arc<Mutex<HashMap<String, MoleculeRecord>>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self { records: Arc::new(Mutex::new(HashMap::new())) }
    }

    // Helper to map poisoned mutex errors into DomainError
    fn lock_map<'a, T>(&'a self, m: &'a Mutex<T>, name: &str) -> Result<std::sync::MutexGuard<'a, T>, DomainError> {
        m.lock()
         .map_err(|e| DomainError::IoError(format!("Mutex '{}' poisoned: {}", name, e)))
    }
}

impl Default for InMemoryCatalogRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    fn save_record(&self, cas: &str, record: MoleculeRecord) -> Result<String, DomainError> {
        if cas.trim().is_empty() {
            return Err(DomainError::ValidationError("El CAS no puede estar vacío".to_string()));
        }
        let mut records = self.lock_map(&self.records, "records")?;
        records.insert(cas.to_string(), record);
        Ok(cas.to_string())
    }

    fn get_record(&self, cas: &str) -> Result<Option<MoleculeRecord>, DomainError> {
        let records = self.lock_map(&self.records, "records")?;
        Ok(records.get(cas).cloned())
    }

    fn snapshot(&self) -> Result<HashMap<String, MoleculeRecord>, DomainError> {
        let records = self.lock_map(&self.records, "records")?;
        Ok(records.clone())
    }

    fn replace_all(&self, new_records: HashMap<String, MoleculeRecord>) -> Result<(), DomainError> {
        let mut records = self.lock_map(&self.records, "records")?;
        *records = new_records;
        Ok(())
    }

    fn delete_record(&self, cas: &str) -> Result<(), DomainError> {
        let mut records = self.lock_map(&self.records, "records")?;
        if records.remove(cas).is_none() {
            return Err(DomainError::ValidationError(format!("No existe ficha para el CAS {}", cas)));
        }
        Ok(())
    }
}
