// odor_descriptor.rs
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Descriptor olfativo de una molécula.
///
/// Fuentes: The Good Scents Company, Arctander 1969, Leffingwell 2002,
/// PubChem. Los textos quedan en francés tal como figuran en las fichas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OdorDescriptor {
  /// Facetas en frío: "citron, frais, vert, pétillant".
  #[serde(default)]
  pub odor: Option<String>,
  /// Rendido en caliente (difusor, bougie).
  #[serde(default)]
  pub odor_hot: Option<String>,
  /// Umbral de detección (ppm).
  #[serde(default)]
  pub threshold: Option<f64>,
  /// Familia olfativa: floral, agrume, boisé, gourmand, ...
  #[serde(default)]
  pub odor_family: Option<String>,
  /// Nota de pirámide: tête / cœur / fond, compuestas con '/'.
  #[serde(default)]
  pub odor_note: Option<String>,
  #[serde(default)]
  pub sweet: bool,
  /// Texto olfativo sin curar tal como lo devuelve PubChem.
  #[serde(default)]
  pub pubchem_raw: Option<String>,
  #[serde(default)]
  pub pubchem_cid: Option<u64>,
}

/// Tabla inmutable de descriptores olfativos, indexada por CAS.
///
/// Se hidrata una sola vez desde un fichero JSON; si el fichero no existe la
/// tabla queda vacía y el resto del sistema sigue funcionando sin facetas.
/// Un JSON presente pero malformado sí es un error.
#[derive(Debug, Clone, Default)]
pub struct OdorDescriptorTable {
  entries: HashMap<String, OdorDescriptor>,
}

impl OdorDescriptorTable {
  pub fn empty() -> Self {
    Self::default()
  }

  pub fn from_entries(entries: HashMap<String, OdorDescriptor>) -> Self {
    Self { entries }
  }

  pub fn load_from_path(path: &Path) -> Result<Self, DomainError> {
    if !path.exists() {
      return Ok(Self::empty());
    }
    let raw = std::fs::read_to_string(path)?;
    let entries: HashMap<String, OdorDescriptor> = serde_json::from_str(&raw)?;
    Ok(Self { entries })
  }

  pub fn get(&self, cas: &str) -> Option<&OdorDescriptor> {
    self.entries.get(cas)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_file_yields_empty_table() -> Result<(), DomainError> {
    let table = OdorDescriptorTable::load_from_path(Path::new("/nonexistent/odor-descriptors.json"))?;
    assert!(table.is_empty());
    assert!(table.get("78-70-6").is_none());
    Ok(())
  }

  #[test]
  fn parses_descriptor_entries() -> Result<(), DomainError> {
    let raw = r#"{
      "5392-40-5": {
        "odor": "citron, frais, vert, pétillant",
        "odor_hot": "citron intense, zeste frais",
        "threshold": 0.003,
        "odor_family": "agrume",
        "odor_note": "tête"
      },
      "121-33-5": {
        "odor": "vanille, sucré, crémeux",
        "odor_hot": "vanille intense, gourmand",
        "odor_family": "gourmand",
        "odor_note": "fond",
        "sweet": true
      }
    }"#;
    let entries: HashMap<String, OdorDescriptor> = serde_json::from_str(raw)?;
    let table = OdorDescriptorTable::from_entries(entries);
    assert_eq!(table.len(), 2);
    let citral = table.get("5392-40-5").ok_or_else(|| DomainError::ValidationError("falta citral".into()))?;
    assert_eq!(citral.threshold, Some(0.003));
    assert!(!citral.sweet);
    let vanilline = table.get("121-33-5").ok_or_else(|| DomainError::ValidationError("falta vanilline".into()))?;
    assert!(vanilline.sweet);
    assert_eq!(vanilline.odor_note.as_deref(), Some("fond"));
    Ok(())
  }

  #[test]
  fn malformed_json_is_an_error() {
    let err = serde_json::from_str::<HashMap<String, OdorDescriptor>>("{ not json").map(|_| ()).map_err(DomainError::from);
    assert!(matches!(err, Err(DomainError::SerializationError(_))));
  }
}
