//! Análisis olfativo: perfil de una fórmula y diagnóstico de problemas.

mod diagnostic;
mod profile;

pub use diagnostic::{diagnose_olfactory_issue, DiagnosticReport, Suspect};
pub use profile::{analyze_olfactory_profile, FamilyBucket, OlfactoryProfile, OlfactoryPyramid, ProfileEntry};
