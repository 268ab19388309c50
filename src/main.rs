use std::collections::HashMap;
use std::error::Error;
use std::io::{self, Write};
use std::path::Path;

use arome_domain::{CatalogRepository, FragranceComponent, InMemoryCatalogRepository, MoleculeRecord,
                   OdorDescriptorTable};
use arome_enrichment::PropertyEnricher;
use arome_olfactory::{analyze_olfactory_profile, diagnose_olfactory_issue};

/// Pequeño menú interactivo para explorar el catálogo molecular y el análisis
/// olfativo de una fórmula de demostración.
///
/// Opciones soportadas:
/// 1) Ver catálogo (tabla con CAS y propiedades)
/// 2) Enriquecer catálogo (completa propiedades faltantes)
/// 3) Ver ficha por CAS
/// 4) Analizar perfil olfativo de la fórmula demo
/// 5) Diagnosticar un problema olfativo
/// 6) Salir
fn main() -> Result<(), Box<dyn Error>> {
    // Cargar variables de entorno (.env si existe) y la tabla de descriptores
    dotenvy::dotenv().ok();
    let descriptors_path =
        std::env::var("ODOR_DESCRIPTORS_PATH").unwrap_or_else(|_| "seeds/odor-descriptors.json".to_string());
    let descriptors = OdorDescriptorTable::load_from_path(Path::new(&descriptors_path))
        .map_err(|e| Box::new(e) as Box<dyn Error>)?;
    println!("Tabla de descriptores: {} entradas ({})", descriptors.len(), descriptors_path);

    let repo = InMemoryCatalogRepository::new();
    seed_catalog(&repo)?;
    let formula = demo_formula()?;

    loop {
        println!("\n== Arôme CLI menu ==");
        println!("1) Ver catálogo");
        println!("2) Enriquecer catálogo");
        println!("3) Ver ficha por CAS");
        println!("4) Analizar perfil olfativo (fórmula demo)");
        println!("5) Diagnosticar problema olfativo");
        println!("6) Salir");
        print!("Elige una opción: ");
        io::stdout().flush().ok();

        let mut choice = String::new();
        io::stdin().read_line(&mut choice)?;
        match choice.trim() {
            "1" => {
                match repo.snapshot() {
                    Ok(catalog) => {
                        println!("\nCAS          | NOMBRE                  | FAMILIA            | BP");
                        println!("---------------------------------------------------------------------");
                        let mut entries: Vec<_> = catalog.iter().collect();
                        entries.sort_by(|a, b| a.0.cmp(b.0));
                        for (cas, rec) in entries {
                            let bp = rec.boiling_point.map(|p| p.to_string()).unwrap_or_else(|| "-".into());
                            println!("{:12} | {:23} | {:18} | {}", cas, rec.name(), rec.family(), bp);
                        }
                    }
                    Err(e) => eprintln!("Error listando catálogo: {}", e),
                }
            }
            "2" => {
                let enricher = PropertyEnricher::new(&descriptors);
                match repo.snapshot() {
                    Ok(mut catalog) => {
                        let stats = enricher.enrich_all(&mut catalog);
                        match repo.replace_all(catalog) {
                            Ok(()) => println!("Enriquecimiento completado: {}", serde_json::to_string_pretty(&stats)?),
                            Err(e) => eprintln!("Error guardando catálogo: {}", e),
                        }
                    }
                    Err(e) => eprintln!("Error leyendo catálogo: {}", e),
                }
            }
            "3" => {
                let cas = prompt("CAS de la molécula: ")?;
                match repo.get_record(cas.trim()) {
                    Ok(Some(rec)) => println!("{}", serde_json::to_string_pretty(&rec)?),
                    Ok(None) => println!("No hay ficha para el CAS {}", cas.trim()),
                    Err(e) => eprintln!("Error leyendo ficha: {}", e),
                }
            }
            "4" => {
                let profile = analyze_olfactory_profile(&formula, &descriptors);
                println!("Cobertura: {}/{} componentes con descriptor", profile.coverage, profile.total);
                for fam in &profile.families {
                    println!("  {:12} {:>5.1}%", fam.name, fam.pct);
                }
                if !profile.hot_alerts.is_empty() {
                    println!("Alertas a chaud:");
                    for e in &profile.hot_alerts {
                        println!("  {} ({}%): {}", e.name, e.pct, e.odor_hot.as_deref().unwrap_or(""));
                    }
                }
            }
            "5" => {
                let issue = prompt("Problema (sweet-when-hot / green-too-strong / low-diffusion / off-note): ")?;
                let report = diagnose_olfactory_issue(issue.trim(), &formula, &descriptors);
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            "6" => {
                println!("Saliendo...");
                break;
            }
            other => {
                println!("Opción inválida: {}", other);
            }
        }
    }

    Ok(())
}

/// Catálogo de demostración: fichas mínimas que el enriquecimiento completa.
fn seed_catalog(repo: &InMemoryCatalogRepository) -> Result<(), Box<dyn Error>> {
    let mut seeds: HashMap<&str, MoleculeRecord> = HashMap::new();
    seeds.insert("78-70-6",
                 MoleculeRecord::new("Linalol", "terpène-alcool")?.with_molecular_weight(154.25)
                                                                  .with_volatility("haute"));
    seeds.insert("5989-27-5",
                 MoleculeRecord::new("D-Limonène", "terpène")?.with_molecular_weight(136.24)
                                                              .with_volatility("très_haute"));
    seeds.insert("121-33-5",
                 MoleculeRecord::new("Vanilline", "aldéhyde-aromatique")?.with_molecular_weight(152.15)
                                                                         .with_volatility("basse"));
    seeds.insert("5392-40-5",
                 MoleculeRecord::new("Citral", "aldéhyde-aliphatique")?.with_molecular_weight(152.23)
                                                                       .with_flash_point(91.0));
    seeds.insert("1222-05-5",
                 MoleculeRecord::new("Galaxolide", "musc-polycyclique")?.with_molecular_weight(258.4)
                                                                        .with_volatility("basse"));
    seeds.insert("8046-19-3", MoleculeRecord::new("Styrax résinoïde", "baume")?.with_flash_point(100.0));
    for (cas, rec) in seeds {
        repo.save_record(cas, rec)?;
    }
    Ok(())
}

/// Fórmula de demostración para las opciones de análisis y diagnóstico.
fn demo_formula() -> Result<Vec<FragranceComponent>, Box<dyn Error>> {
    Ok(vec![FragranceComponent::new("5989-27-5", "D-Limonène", Some(8.0), Some(12.0))?,
            FragranceComponent::new("78-70-6", "Linalol", Some(3.0), Some(5.0))?,
            FragranceComponent::new("5392-40-5", "Citral", Some(0.5), Some(1.5))?,
            FragranceComponent::new("121-33-5", "Vanilline", None, Some(6.0))?,
            FragranceComponent::new("1222-05-5", "Galaxolide", Some(2.0), Some(4.0))?,
            FragranceComponent::new("8046-19-3", "Styrax résinoïde", None, Some(1.0))?])
}

fn prompt(msg: &str) -> io::Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s)
}
