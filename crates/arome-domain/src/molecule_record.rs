// molecule_record.rs
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Método usado para estimar una propiedad faltante.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstimationMethod {
  /// bp ≈ f(punto de inflamación) por correlación de perfumería.
  FlashPointCorrelation,
  /// logP ≈ f(familia, masa molecular).
  FamilyMolecularWeight,
  /// Constante tabulada por familia química.
  FamilyTable,
  /// Presión de vapor vía Clausius-Clapeyron desde el punto de ebullición.
  ClausiusClapeyron,
  /// Umbral olfativo ≈ f(familia, volatilidad).
  FamilyVolatility,
}

impl fmt::Display for EstimationMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let label = match self {
      Self::FlashPointCorrelation => "corrélation FP",
      Self::FamilyMolecularWeight => "famille+MW",
      Self::FamilyTable => "famille",
      Self::ClausiusClapeyron => "Clausius-Clapeyron",
      Self::FamilyVolatility => "famille+volatilité",
    };
    write!(f, "{}", label)
  }
}

/// Procedencia de un valor de propiedad tras la fusión de fuentes.
///
/// La prioridad al enriquecer es siempre: medido > pre-existente > estimado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "method")]
pub enum PropertySource {
  Measured,
  PreExisting,
  Estimated(EstimationMethod),
}

impl PropertySource {
  pub fn is_measured(&self) -> bool {
    matches!(self, Self::Measured)
  }
}

impl fmt::Display for PropertySource {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Measured => write!(f, "mesuré"),
      Self::PreExisting => write!(f, "pré-existant"),
      Self::Estimated(m) => write!(f, "estimé ({})", m),
    }
  }
}

/// Valor numérico de una propiedad con su procedencia.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Property {
  pub value: f64,
  pub source: PropertySource,
}

impl Property {
  pub fn measured(value: f64) -> Self {
    Self { value, source: PropertySource::Measured }
  }

  pub fn pre_existing(value: f64) -> Self {
    Self { value, source: PropertySource::PreExisting }
  }

  pub fn estimated(value: f64, method: EstimationMethod) -> Self {
    Self { value, source: PropertySource::Estimated(method) }
  }
}

impl fmt::Display for Property {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} ({})", self.value, self.source)
  }
}

/// Ficha de una molécula del catálogo.
///
/// Los cinco huecos de propiedad (`boiling_point`, `logp`, `density`,
/// `vapor_pressure`, `odor_threshold`) empiezan vacíos o con valores
/// pre-existentes y se completan durante el enriquecimiento. Los campos
/// olfativos se copian desde la tabla de descriptores cuando existe una
/// entrada para el CAS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoleculeRecord {
  name: String,
  family: String,
  /// Masa molecular (g/mol), si se conoce.
  pub molecular_weight: Option<f64>,
  /// Punto de inflamación (°C), si se conoce.
  pub flash_point: Option<f64>,
  /// Clase de volatilidad declarada: très_haute / haute / moyenne / basse.
  pub volatility: Option<String>,
  /// Punto de ebullición (°C).
  pub boiling_point: Option<Property>,
  /// Coeficiente de partición octanol/agua (XLogP).
  pub logp: Option<Property>,
  /// Densidad (g/mL) a 20 °C.
  pub density: Option<Property>,
  /// Presión de vapor (Pa) a 25 °C.
  pub vapor_pressure: Option<Property>,
  /// Umbral de percepción olfativa (µg/m³ en aire).
  pub odor_threshold: Option<Property>,
  /// Facetas olfativas en frío ("citron, frais, vert, ...").
  pub odor_descriptors: Option<String>,
  /// Nota de pirámide: tête / cœur / fond (compuestas con '/').
  pub odor_note: Option<String>,
  pub is_sweet: bool,
  pub pubchem_raw: Option<String>,
  pub pubchem_cid: Option<u64>,
}

impl MoleculeRecord {
  pub fn new(name: &str, family: &str) -> Result<Self, DomainError> {
    if name.trim().is_empty() {
      return Err(DomainError::ValidationError("El nombre de la molécula no puede estar vacío".to_string()));
    }
    if family.trim().is_empty() {
      return Err(DomainError::ValidationError("La familia química no puede estar vacía".to_string()));
    }
    Ok(Self { name: name.to_string(),
              family: family.to_string(),
              molecular_weight: None,
              flash_point: None,
              volatility: None,
              boiling_point: None,
              logp: None,
              density: None,
              vapor_pressure: None,
              odor_threshold: None,
              odor_descriptors: None,
              odor_note: None,
              is_sweet: false,
              pubchem_raw: None,
              pubchem_cid: None })
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn family(&self) -> &str {
    &self.family
  }

  pub fn with_molecular_weight(mut self, mw: f64) -> Self {
    self.molecular_weight = Some(mw);
    self
  }

  pub fn with_flash_point(mut self, fp: f64) -> Self {
    self.flash_point = Some(fp);
    self
  }

  pub fn with_volatility(mut self, volatility: &str) -> Self {
    self.volatility = Some(volatility.to_string());
    self
  }

  /// Indica si las cinco propiedades físico-químicas están resueltas.
  pub fn is_fully_enriched(&self) -> bool {
    self.boiling_point.is_some()
    && self.logp.is_some()
    && self.density.is_some()
    && self.vapor_pressure.is_some()
    && self.odor_threshold.is_some()
  }
}

impl fmt::Display for MoleculeRecord {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "MoleculeRecord({}, familia: {})", self.name, self.family)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn record_requires_name_and_family() {
    assert!(MoleculeRecord::new("", "terpène").is_err());
    assert!(MoleculeRecord::new("Linalol", "  ").is_err());
    assert!(MoleculeRecord::new("Linalol", "terpène-alcool").is_ok());
  }

  #[test]
  fn builder_helpers_set_optional_fields() -> Result<(), DomainError> {
    let rec = MoleculeRecord::new("Linalol", "terpène-alcool")?.with_molecular_weight(154.25)
                                                               .with_flash_point(76.0)
                                                               .with_volatility("haute");
    assert_eq!(rec.molecular_weight, Some(154.25));
    assert_eq!(rec.flash_point, Some(76.0));
    assert_eq!(rec.volatility.as_deref(), Some("haute"));
    assert!(!rec.is_fully_enriched());
    Ok(())
  }

  #[test]
  fn property_display_includes_source() {
    let p = Property::estimated(176.0, EstimationMethod::FlashPointCorrelation);
    assert_eq!(p.to_string(), "176 (estimé (corrélation FP))");
    assert_eq!(Property::measured(198.0).to_string(), "198 (mesuré)");
  }

  #[test]
  fn record_roundtrips_through_json() -> Result<(), DomainError> {
    let mut rec = MoleculeRecord::new("Vanilline", "aldéhyde-aromatique")?.with_molecular_weight(152.15);
    rec.boiling_point = Some(Property::measured(285.0));
    let json = serde_json::to_string(&rec)?;
    let back: MoleculeRecord = serde_json::from_str(&json)?;
    assert_eq!(rec, back);
    Ok(())
  }
}
