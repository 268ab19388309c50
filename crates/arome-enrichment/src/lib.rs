//! Enriquecimiento de propiedades físico-químicas del catálogo molecular.

mod enricher;
mod estimators;
mod measured;

pub use enricher::{EnrichmentStats, PropertyEnricher};
pub use estimators::{estimate_boiling_point, estimate_density, estimate_odor_threshold,
                     estimate_partition_coefficient, estimate_vapor_pressure};
pub use measured::{MeasuredProperties, MEASURED_TABLE};
