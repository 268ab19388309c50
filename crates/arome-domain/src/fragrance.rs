// fragrance.rs
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Componente de una fórmula de perfumería: una molécula identificada por su
/// CAS con su rango de dosificación en porcentaje.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FragranceComponent {
  cas_number: String,
  name: String,
  pub percentage_min: Option<f64>,
  pub percentage_max: Option<f64>,
}

impl FragranceComponent {
  pub fn new(cas_number: &str, name: &str, percentage_min: Option<f64>, percentage_max: Option<f64>)
             -> Result<Self, DomainError> {
    if cas_number.trim().is_empty() {
      return Err(DomainError::ValidationError("El número CAS no puede estar vacío".to_string()));
    }
    if name.trim().is_empty() {
      return Err(DomainError::ValidationError("El nombre del componente no puede estar vacío".to_string()));
    }
    for pct in [percentage_min, percentage_max].into_iter().flatten() {
      if !(0.0..=100.0).contains(&pct) {
        return Err(DomainError::ValidationError(format!("Porcentaje fuera de rango [0, 100]: {}", pct)));
      }
    }
    Ok(Self { cas_number: cas_number.to_string(), name: name.to_string(), percentage_min, percentage_max })
  }

  pub fn cas_number(&self) -> &str {
    &self.cas_number
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// Peso del componente en el análisis: el máximo declarado, o en su defecto
  /// el mínimo, o 0.0 si no hay dosificación.
  pub fn weight(&self) -> f64 {
    self.percentage_max.or(self.percentage_min).unwrap_or(0.0)
  }
}

impl fmt::Display for FragranceComponent {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} ({}): {}%", self.name, self.cas_number, self.weight())
  }
}
