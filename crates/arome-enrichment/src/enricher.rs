//! Motor de enriquecimiento: fusiona las tres fuentes de cada propiedad.
//!
//! Prioridad por propiedad: valor medido > valor pre-existente en la ficha >
//! estimación. Cada hueco conserva su procedencia, de modo que re-enriquecer
//! un catálogo ya enriquecido es idempotente.

use crate::estimators::{estimate_boiling_point, estimate_density, estimate_odor_threshold,
                        estimate_partition_coefficient, estimate_vapor_pressure};
use crate::measured::MEASURED_TABLE;
use arome_domain::{EstimationMethod, MoleculeRecord, OdorDescriptorTable, Property};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Contadores del enriquecimiento por lotes. Solo se contabilizan punto de
/// ebullición y logP, las dos propiedades críticas del flujo original;
/// densidad, presión de vapor y umbral se completan pero no se cuentan, y un
/// valor pre-existente cae en el cubo `estimated`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentStats {
    pub total: usize,
    pub bp_measured: usize,
    pub bp_estimated: usize,
    pub logp_measured: usize,
    pub logp_estimated: usize,
}

/// Enriquecedor de fichas moleculares contra la tabla de descriptores.
pub struct PropertyEnricher<'a> {
    descriptors: &'a OdorDescriptorTable,
}

impl<'a> PropertyEnricher<'a> {
    pub fn new(descriptors: &'a OdorDescriptorTable) -> Self {
        Self { descriptors }
    }

    /// Devuelve una copia de la ficha con los cinco huecos de propiedad
    /// resueltos y los campos olfativos fusionados.
    pub fn enrich_molecule(&self, cas: &str, record: &MoleculeRecord) -> MoleculeRecord {
        let mut enriched = record.clone();
        let measured = MEASURED_TABLE.get(cas);

        // Punto de ebullición
        if let Some(bp) = measured.and_then(|p| p.bp) {
            enriched.boiling_point = Some(Property::measured(bp));
        } else if enriched.boiling_point.is_none() {
            enriched.boiling_point = estimate_boiling_point(record.flash_point, record.family())
                .map(|v| Property::estimated(v, EstimationMethod::FlashPointCorrelation));
        }

        // LogP
        if let Some(logp) = measured.and_then(|p| p.logp) {
            enriched.logp = Some(Property::measured(logp));
        } else if enriched.logp.is_none() {
            let v = estimate_partition_coefficient(record.family(), record.molecular_weight);
            enriched.logp = Some(Property::estimated(v, EstimationMethod::FamilyMolecularWeight));
        }

        // Densidad
        if let Some(density) = measured.and_then(|p| p.density) {
            enriched.density = Some(Property::measured(density));
        } else if enriched.density.is_none() {
            let v = estimate_density(record.family(), record.molecular_weight);
            enriched.density = Some(Property::estimated(v, EstimationMethod::FamilyTable));
        }

        // Presión de vapor: la estimación parte del bp recién resuelto,
        // no del que traía la ficha.
        if let Some(vp) = measured.and_then(|p| p.vp) {
            enriched.vapor_pressure = Some(Property::measured(vp));
        } else if enriched.vapor_pressure.is_none() {
            let bp_hint = enriched.boiling_point.map(|p| p.value);
            enriched.vapor_pressure = estimate_vapor_pressure(bp_hint, record.family())
                .map(|v| Property::estimated(v, EstimationMethod::ClausiusClapeyron));
        }

        // Umbral olfativo
        if let Some(ot) = measured.and_then(|p| p.ot) {
            enriched.odor_threshold = Some(Property::measured(ot));
        } else if enriched.odor_threshold.is_none() {
            let v = estimate_odor_threshold(record.family(), record.volatility.as_deref());
            enriched.odor_threshold = Some(Property::estimated(v, EstimationMethod::FamilyVolatility));
        }

        // Facetas olfativas desde la tabla de descriptores
        if let Some(desc) = self.descriptors.get(cas) {
            if let Some(odor) = desc.odor.as_deref() {
                if !odor.is_empty() {
                    enriched.odor_descriptors = Some(odor.to_string());
                }
            }
            if desc.sweet {
                enriched.is_sweet = true;
            }
            if enriched.odor_note.is_none() {
                enriched.odor_note = desc.odor_note.clone();
            }
            if let Some(raw) = desc.pubchem_raw.as_deref() {
                enriched.pubchem_raw = Some(raw.to_string());
            }
            if let Some(cid) = desc.pubchem_cid {
                enriched.pubchem_cid = Some(cid);
            }
        }

        enriched
    }

    /// Enriquece el catálogo completo in situ y devuelve los contadores.
    pub fn enrich_all(&self, catalog: &mut HashMap<String, MoleculeRecord>) -> EnrichmentStats {
        let mut stats = EnrichmentStats::default();
        for (cas, record) in catalog.iter_mut() {
            let enriched = self.enrich_molecule(cas, record);
            stats.total += 1;
            if enriched.boiling_point.map_or(false, |p| p.source.is_measured()) {
                stats.bp_measured += 1;
            } else {
                stats.bp_estimated += 1;
            }
            if enriched.logp.map_or(false, |p| p.source.is_measured()) {
                stats.logp_measured += 1;
            } else {
                stats.logp_estimated += 1;
            }
            *record = enriched;
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arome_domain::{DomainError, OdorDescriptor, PropertySource};

    fn descriptor_table() -> OdorDescriptorTable {
        let raw = r#"{
          "78-70-6": {
            "odor": "floral, lavande, boisé, citronné",
            "odor_hot": "floral intense, lavande prononcée",
            "threshold": 0.006,
            "odor_family": "floral",
            "odor_note": "tête/cœur"
          },
          "121-33-5": {
            "odor": "vanille, sucré, crémeux",
            "odor_family": "gourmand",
            "odor_note": "fond",
            "sweet": true,
            "pubchem_raw": "Odor: vanilla; sweet",
            "pubchem_cid": 1183
          }
        }"#;
        let entries: HashMap<String, OdorDescriptor> =
            serde_json::from_str(raw).unwrap_or_default();
        OdorDescriptorTable::from_entries(entries)
    }

    #[test]
    fn measured_values_always_win() -> Result<(), DomainError> {
        let table = descriptor_table();
        let enricher = PropertyEnricher::new(&table);
        // la ficha trae un bp pre-existente que debe perder contra el medido
        let mut rec = MoleculeRecord::new("Linalol", "terpène-alcool")?.with_molecular_weight(154.25);
        rec.boiling_point = Some(Property::pre_existing(250.0));
        let enriched = enricher.enrich_molecule("78-70-6", &rec);
        let bp = enriched.boiling_point.ok_or_else(|| DomainError::ValidationError("sin bp".into()))?;
        assert_eq!(bp.value, 198.0);
        assert!(bp.source.is_measured());
        assert_eq!(enriched.odor_descriptors.as_deref(), Some("floral, lavande, boisé, citronné"));
        assert_eq!(enriched.odor_note.as_deref(), Some("tête/cœur"));
        Ok(())
    }

    #[test]
    fn pre_existing_values_survive_when_not_measured() -> Result<(), DomainError> {
        let table = OdorDescriptorTable::empty();
        let enricher = PropertyEnricher::new(&table);
        let mut rec = MoleculeRecord::new("Molécula X", "ester")?.with_flash_point(90.0);
        rec.logp = Some(Property::pre_existing(3.2));
        let enriched = enricher.enrich_molecule("0-00-0", &rec);
        assert_eq!(enriched.logp, Some(Property::pre_existing(3.2)));
        // el bp se estimó porque no había ni medido ni pre-existente
        let bp = enriched.boiling_point.ok_or_else(|| DomainError::ValidationError("sin bp".into()))?;
        assert_eq!(bp.value, (90.0f64 * 1.5 + 73.0).round());
        assert_eq!(bp.source, PropertySource::Estimated(EstimationMethod::FlashPointCorrelation));
        Ok(())
    }

    #[test]
    fn re_enrichment_is_idempotent() -> Result<(), DomainError> {
        let table = descriptor_table();
        let enricher = PropertyEnricher::new(&table);
        let rec = MoleculeRecord::new("Vanilline", "aldéhyde-aromatique")?.with_molecular_weight(152.15);
        let once = enricher.enrich_molecule("121-33-5", &rec);
        let twice = enricher.enrich_molecule("121-33-5", &once);
        assert_eq!(once, twice);
        assert!(once.is_sweet);
        assert_eq!(once.pubchem_raw.as_deref(), Some("Odor: vanilla; sweet"));
        assert_eq!(once.pubchem_cid, Some(1183));
        Ok(())
    }

    #[test]
    fn vapor_pressure_estimate_uses_fresh_boiling_point() -> Result<(), DomainError> {
        let table = OdorDescriptorTable::empty();
        let enricher = PropertyEnricher::new(&table);
        // CAS desconocido: bp estimado desde fp, y vp desde ese bp
        let rec = MoleculeRecord::new("Molécula Y", "cétone")?.with_flash_point(60.0);
        let enriched = enricher.enrich_molecule("0-00-0", &rec);
        let bp = enriched.boiling_point.ok_or_else(|| DomainError::ValidationError("sin bp".into()))?;
        let vp = enriched.vapor_pressure.ok_or_else(|| DomainError::ValidationError("sin vp".into()))?;
        assert_eq!(bp.value, 163.0);
        assert_eq!(vp.source, PropertySource::Estimated(EstimationMethod::ClausiusClapeyron));
        assert!(vp.value >= 0.0001);
        Ok(())
    }

    #[test]
    fn enrich_all_counts_only_bp_and_logp() -> Result<(), DomainError> {
        let table = OdorDescriptorTable::empty();
        let enricher = PropertyEnricher::new(&table);
        let mut catalog = HashMap::new();
        catalog.insert("78-70-6".to_string(),
                       MoleculeRecord::new("Linalol", "terpène-alcool")?.with_molecular_weight(154.25));
        catalog.insert("0-00-0".to_string(),
                       MoleculeRecord::new("Molécula X", "ester")?.with_flash_point(90.0).with_molecular_weight(180.0));
        let stats = enricher.enrich_all(&mut catalog);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.bp_measured, 1);
        assert_eq!(stats.bp_estimated, 1);
        assert_eq!(stats.logp_measured, 1);
        assert_eq!(stats.logp_estimated, 1);
        // el catálogo quedó mutado in situ
        assert!(catalog.values().all(|r| r.is_fully_enriched()));
        Ok(())
    }

    #[test]
    fn pre_existing_values_count_in_the_estimated_bucket() -> Result<(), DomainError> {
        let table = OdorDescriptorTable::empty();
        let enricher = PropertyEnricher::new(&table);
        let mut rec = MoleculeRecord::new("Molécula X", "ester")?.with_flash_point(90.0).with_molecular_weight(180.0);
        rec.boiling_point = Some(Property::pre_existing(210.0));
        let mut catalog = HashMap::new();
        catalog.insert("0-00-0".to_string(), rec);
        let stats = enricher.enrich_all(&mut catalog);
        assert_eq!(stats.bp_measured, 0);
        assert_eq!(stats.bp_estimated, 1);
        Ok(())
    }
}
