mod catalog;
mod errors;
mod fragrance;
mod molecule_record;
mod odor_descriptor;

pub use catalog::{CatalogRepository, InMemoryCatalogRepository};
pub use errors::DomainError;
pub use fragrance::FragranceComponent;
pub use molecule_record::{EstimationMethod, MoleculeRecord, Property, PropertySource};
pub use odor_descriptor::{OdorDescriptor, OdorDescriptorTable};
