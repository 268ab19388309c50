//! Diagnóstico de problemas olfativos de una fórmula.
//!
//! Cada problema conocido produce una lista de moléculas sospechosas y las
//! acciones correctivas correspondientes; los textos de remediación quedan en
//! francés tal como se entregan al formulador. Una etiqueta desconocida se
//! devuelve intacta con listas vacías.

use crate::profile::{analyze_olfactory_profile, ProfileEntry};
use arome_domain::{FragranceComponent, OdorDescriptorTable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Molécula señalada por el diagnóstico, con su justificación.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suspect {
    pub name: String,
    pub cas: String,
    pub pct: f64,
    pub odor: Option<String>,
    pub odor_hot: Option<String>,
    pub threshold: Option<f64>,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub issue: String,
    pub suspects: Vec<Suspect>,
    pub solutions: Vec<String>,
    pub analysis_summary: String,
}

impl DiagnosticReport {
    fn empty(issue: &str) -> Self {
        Self { issue: issue.to_string(), suspects: Vec::new(), solutions: Vec::new(), analysis_summary: String::new() }
    }
}

fn hot_change_suspect(entry: &ProfileEntry) -> Suspect {
    let explanation = format!("{} ({}%) — froid: \"{}\" → chaud: \"{}\"",
                              entry.name,
                              entry.pct,
                              entry.odor,
                              entry.odor_hot.as_deref().unwrap_or(""));
    Suspect { name: entry.name.clone(),
              cas: entry.cas.clone(),
              pct: entry.pct,
              odor: Some(entry.odor.clone()),
              odor_hot: entry.odor_hot.clone(),
              threshold: entry.threshold,
              explanation }
}

pub fn diagnose_olfactory_issue(issue: &str, components: &[FragranceComponent], descriptors: &OdorDescriptorTable)
                                -> DiagnosticReport {
    let analysis = analyze_olfactory_profile(components, descriptors);
    let mut result = DiagnosticReport::empty(issue);

    match issue {
        "sweet-when-hot" | "sucré_à_chaud" => {
            result.suspects = analysis.sweet_molecules.iter().map(hot_change_suspect).collect();
            result.solutions = vec![
                "Baisser la mèche d'un cran → réduit la temp. bain de cire de ~5°C, atténue la volatilisation des notes sucrées".to_string(),
                "Cire plus dure (fusion élevée) → ralentit la diffusion des gourmands".to_string(),
                "Réduire le % parfum de 0.5-1%".to_string(),
            ];
            if result.suspects.iter().any(|s| s.pct > 5.0) {
                result.solutions.push(
                    "⚠ Molécule sucrée >5% — le sucré sera difficile à corriger sans reformulation fournisseur".to_string(),
                );
            }
            let total: f64 = result.suspects.iter().map(|s| s.pct).sum();
            result.analysis_summary = format!("{} molécule(s) sucrée(s) détectée(s), totalisant {:.1}% de la composition",
                                              result.suspects.len(),
                                              total);
        }
        "green-too-strong" | "vert_trop_fort" => {
            result.suspects = analysis.green_molecules.iter().map(hot_change_suspect).collect();
            result.solutions = vec![
                "Monter la mèche d'un cran → les notes vertes de tête se dissipent plus vite à température élevée".to_string(),
                "Augmenter le % de muscs/fixateurs → masquage des notes vertes".to_string(),
                "Ajouter un soupçon de vanilline → contre-balance le vert par du sucré".to_string(),
            ];
            let total: f64 = result.suspects.iter().map(|s| s.pct).sum();
            result.analysis_summary =
                format!("{} molécule(s) verte(s), {:.1}% de la composition", result.suspects.len(), total);
        }
        "low-diffusion" | "diffusion_faible" => {
            // Notas de fondo: pesadas, difunden poco a temperatura ambiente
            let mut total_heavy = 0.0;
            for comp in components {
                let desc = match descriptors.get(comp.cas_number()) {
                    Some(d) => d,
                    None => continue,
                };
                let note = match desc.odor_note.as_deref() {
                    Some(n) => n,
                    None => continue,
                };
                if !note.split('/').any(|n| n.trim() == "fond") {
                    continue;
                }
                total_heavy += comp.weight();
                result.suspects.push(Suspect { name: comp.name().to_string(),
                                               cas: comp.cas_number().to_string(),
                                               pct: comp.weight(),
                                               odor: desc.odor.clone(),
                                               odor_hot: None,
                                               threshold: None,
                                               explanation: "Note de fond lourde — diffuse peu à température ambiante".to_string() });
            }
            result.suspects.sort_by(|a, b| b.pct.partial_cmp(&a.pct).unwrap_or(Ordering::Equal));
            result.solutions = vec![
                "Augmenter la mèche → plus de chaleur, meilleure volatilisation des notes de fond".to_string(),
                "Cire avec point de fusion plus bas → bain plus chaud, meilleure diffusion".to_string(),
                "Augmenter le % parfum de 0.5-1% pour compenser les notes lourdes".to_string(),
            ];
            result.analysis_summary =
                format!("{:.1}% de notes de fond lourdes — peut limiter la diffusion", total_heavy);
        }
        "off-note" | "odeur_parasite" => {
            // Moléculas con umbral minúsculo: perceptibles incluso en trazas
            for comp in components {
                let desc = match descriptors.get(comp.cas_number()) {
                    Some(d) => d,
                    None => continue,
                };
                let threshold = match desc.threshold {
                    Some(t) if t < 0.01 => t,
                    _ => continue,
                };
                result.suspects.push(Suspect { name: comp.name().to_string(),
                                               cas: comp.cas_number().to_string(),
                                               pct: comp.weight(),
                                               odor: desc.odor.clone(),
                                               odor_hot: desc.odor_hot.clone(),
                                               threshold: Some(threshold),
                                               explanation: format!("Seuil de détection très bas ({} ppm) — perceptible même en traces",
                                                                    threshold) });
            }
            result.suspects.sort_by(|a, b| {
                a.threshold.partial_cmp(&b.threshold).unwrap_or(Ordering::Equal)
            });
            result.solutions = vec![
                "Identifier quelle note parasite vous percevez et la croiser avec les suspects ci-dessus".to_string(),
                "Les molécules à seuil <0.01 ppm peuvent dominer même à <1% de la composition".to_string(),
                "Solution : reformulation fournisseur pour réduire la molécule identifiée".to_string(),
            ];
            result.analysis_summary = format!("{} molécule(s) à seuil très bas détectée(s)", result.suspects.len());
        }
        _ => {}
    }

    result
}
