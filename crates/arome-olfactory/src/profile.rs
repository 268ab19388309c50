//! Análisis del perfil olfativo de una fórmula.
//!
//! Proyecta cada componente sobre la tabla de descriptores y construye el
//! reparto por familias olfativas, la pirámide tête/cœur/fond y las listas de
//! vigilancia (rendido a chaud, moléculas dulces, notas verdes). Los
//! componentes sin descriptor no participan, pero cuentan en `total`.

use arome_domain::{FragranceComponent, OdorDescriptorTable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Un componente proyectado sobre su descriptor olfativo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileEntry {
    pub name: String,
    pub cas: String,
    pub pct: f64,
    pub odor: String,
    pub odor_hot: Option<String>,
    pub threshold: Option<f64>,
    pub odor_family: Option<String>,
}

/// Familia olfativa con su peso acumulado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyBucket {
    pub name: String,
    pub pct: f64,
    pub molecules: Vec<ProfileEntry>,
}

/// Pirámide olfativa. Las notas compuestas ("tête/cœur") aportan la entrada
/// a cada nivel que nombran.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OlfactoryPyramid {
    #[serde(rename = "tête")]
    pub tete: Vec<ProfileEntry>,
    #[serde(rename = "cœur")]
    pub coeur: Vec<ProfileEntry>,
    pub fond: Vec<ProfileEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OlfactoryProfile {
    /// Familias ordenadas por peso no creciente.
    pub families: Vec<FamilyBucket>,
    pub pyramid: OlfactoryPyramid,
    pub hot_alerts: Vec<ProfileEntry>,
    pub sweet_molecules: Vec<ProfileEntry>,
    pub green_molecules: Vec<ProfileEntry>,
    /// Componentes con descriptor olfativo.
    pub coverage: usize,
    /// Componentes recibidos.
    pub total: usize,
}

fn by_pct_desc(a: &ProfileEntry, b: &ProfileEntry) -> Ordering {
    b.pct.partial_cmp(&a.pct).unwrap_or(Ordering::Equal)
}

/// Una molécula cambia fuerte a chaud si su rendido caliente no está ya en
/// mayúsculas y menciona intensidad.
fn changes_strongly_when_hot(odor_hot: &str) -> bool {
    !odor_hot.is_empty()
    && odor_hot != odor_hot.to_uppercase()
    && (odor_hot.contains("intense") || odor_hot.contains("fort") || odor_hot.contains("INTENSE"))
}

fn is_sweet(odor: &str) -> bool {
    odor.contains("sucré") || odor.contains("caramel") || odor.contains("vanille") || odor.contains("miel")
}

fn is_green(odor: &str) -> bool {
    odor.contains("vert") || odor.contains("herbe") || odor.contains("feuille")
}

pub fn analyze_olfactory_profile(components: &[FragranceComponent], descriptors: &OdorDescriptorTable)
                                 -> OlfactoryProfile {
    let mut families: Vec<FamilyBucket> = Vec::new();
    let mut pyramid = OlfactoryPyramid::default();
    let mut hot_alerts = Vec::new();
    let mut sweet_molecules = Vec::new();
    let mut green_molecules = Vec::new();
    let mut coverage = 0;

    for comp in components {
        let desc = match descriptors.get(comp.cas_number()) {
            Some(d) => d,
            None => continue,
        };
        let odor = match desc.odor.as_deref() {
            Some(o) if !o.is_empty() => o,
            _ => continue,
        };
        coverage += 1;

        let entry = ProfileEntry { name: comp.name().to_string(),
                                   cas: comp.cas_number().to_string(),
                                   pct: comp.weight(),
                                   odor: odor.to_string(),
                                   odor_hot: desc.odor_hot.clone(),
                                   threshold: desc.threshold,
                                   odor_family: desc.odor_family.clone() };

        // Familias olfativas
        let fam = desc.odor_family.as_deref().unwrap_or("autre");
        match families.iter_mut().find(|b| b.name == fam) {
            Some(bucket) => {
                bucket.pct += entry.pct;
                bucket.molecules.push(entry.clone());
            }
            None => families.push(FamilyBucket { name: fam.to_string(),
                                                 pct: entry.pct,
                                                 molecules: vec![entry.clone()] }),
        }

        // Pirámide
        let note = desc.odor_note.as_deref().unwrap_or("cœur");
        for n in note.split('/') {
            match n.trim() {
                "tête" => pyramid.tete.push(entry.clone()),
                "cœur" => pyramid.coeur.push(entry.clone()),
                "fond" => pyramid.fond.push(entry.clone()),
                _ => {}
            }
        }

        if desc.odor_hot.as_deref().map_or(false, changes_strongly_when_hot) {
            hot_alerts.push(entry.clone());
        }
        if is_sweet(odor) {
            sweet_molecules.push(entry.clone());
        }
        if is_green(odor) {
            green_molecules.push(entry);
        }
    }

    families.sort_by(|a, b| b.pct.partial_cmp(&a.pct).unwrap_or(Ordering::Equal));
    hot_alerts.sort_by(by_pct_desc);
    sweet_molecules.sort_by(by_pct_desc);
    green_molecules.sort_by(by_pct_desc);

    OlfactoryProfile { families,
                       pyramid,
                       hot_alerts,
                       sweet_molecules,
                       green_molecules,
                       coverage,
                       total: components.len() }
}
