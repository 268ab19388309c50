//! Modelos de estimación para propiedades físico-químicas faltantes.
//!
//! Cada estimador es una función pura. Las reglas por familia se evalúan en
//! orden fijo, con coincidencia de subcadena insensible a mayúsculas; gana la
//! primera regla que aplica. Correlaciones de perfumería:
//!   bp ≈ f(punto de inflamación, familia)
//!   logP ≈ f(familia, MW)
//!   densidad ≈ constante por familia
//!   presión de vapor ≈ Clausius-Clapeyron desde bp
//!   umbral olfativo ≈ f(familia, volatilidad)

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Punto de ebullición (°C) desde el punto de inflamación.
/// Devuelve `None` si no hay punto de inflamación del que partir.
pub fn estimate_boiling_point(flash_point: Option<f64>, family: &str) -> Option<f64> {
    let fp = flash_point?;
    let fam = family.to_lowercase();
    let bp = if fam.contains("alcool") || fam.contains("phénol") {
        fp * 1.35 + 95.0 // liaison H → bp más alto
    } else if fam.contains("musc") || fam.contains("lactone") {
        fp * 1.8 + 70.0 // MW elevado
    } else if fam.contains("aldéhyde") {
        fp * 1.4 + 85.0
    } else {
        fp * 1.5 + 73.0
    };
    Some(bp.round())
}

/// LogP (octanol/agua) desde familia y masa molecular.
/// Sin MW conocido devuelve 2.5 como neutro.
pub fn estimate_partition_coefficient(family: &str, molecular_weight: Option<f64>) -> f64 {
    let fam = family.to_lowercase();
    let mw = match molecular_weight {
        Some(mw) => mw,
        None => return 2.5,
    };

    // Hidrocarburos puros (muy apolares)
    if fam.contains("terpène") && !fam.contains("alcool") && !fam.contains("oxyde") {
        return round2(0.025 * mw + 1.0); // ~4.4 para MW 136
    }
    // Sesquiterpenos (aún más apolares)
    if fam.contains("sesqui") {
        return round2(0.028 * mw + 0.5); // ~6.2 para MW 204
    }
    // Terpenoles (medianamente polares)
    if fam.contains("terpène-alcool") || fam.contains("terpénol") {
        return round2(0.022 * mw - 0.4); // ~3.0 para MW 154
    }
    if fam.contains("oxyde") {
        return round2(0.018 * mw);
    }
    if fam.contains("musc") {
        return round2(0.02 * mw + 0.5); // ~5.7 para MW 258
    }
    if fam.contains("ester") || fam.contains("acétate") || fam.contains("salicylate") {
        return round2(0.02 * mw + 0.2);
    }
    if fam.contains("aldéhyde") {
        if fam.contains("aromatique") {
            return round2(0.01 * mw + 0.2); // polar
        }
        return round2(0.025 * mw - 0.3); // alifático → apolar
    }
    if fam.contains("cétone") || fam.contains("ionone") {
        return round2(0.018 * mw - 0.3);
    }
    if fam.contains("phénol") {
        return round2(0.015 * mw + 0.1);
    }
    if fam.contains("alcool") {
        return round2(0.015 * mw - 0.5);
    }
    if fam.contains("lactone") {
        return round2(0.02 * mw - 0.2);
    }
    if fam.contains("coumarine") {
        return 1.4;
    }
    round2(0.02 * mw)
}

/// Densidad (g/mL) a 20 °C por familia. Las comparaciones contra un MW
/// desconocido no aplican (cae al valor base de la familia).
pub fn estimate_density(family: &str, molecular_weight: Option<f64>) -> f64 {
    let fam = family.to_lowercase();
    if fam.contains("terpène") && !fam.contains("alcool") {
        return 0.845;
    }
    if fam.contains("terpène-alcool") {
        return 0.870;
    }
    if fam.contains("sesqui") {
        return 0.910;
    }
    if fam.contains("musc") {
        return if molecular_weight.map_or(false, |mw| mw > 250.0) { 0.990 } else { 0.950 };
    }
    if fam.contains("phénol") {
        return 1.060;
    }
    if fam.contains("aldéhyde-aromatique") || fam.contains("aldéhyde-cinnam") {
        return 1.050;
    }
    if fam.contains("aldéhyde") {
        return 0.830;
    }
    if fam.contains("ester-salicylate") {
        return 1.050;
    }
    if fam.contains("ester") {
        return 0.900;
    }
    if fam.contains("cétone") {
        return 0.920;
    }
    if fam.contains("alcool") {
        return if molecular_weight.map_or(false, |mw| mw < 150.0) { 0.830 } else { 0.920 };
    }
    if fam.contains("lactone") {
        return 0.950;
    }
    if fam.contains("oxyde") {
        return 0.920;
    }
    0.900
}

/// Presión de vapor a 25 °C (Pa) desde el punto de ebullición.
/// Clausius-Clapeyron simplificado: ln(P/101325) = -ΔHvap/R × (1/T - 1/Tb),
/// con ΔHvap ≈ factor de Trouton × Tb(K).
pub fn estimate_vapor_pressure(boiling_point: Option<f64>, family: &str) -> Option<f64> {
    let bp = boiling_point?;
    const T: f64 = 298.15; // 25 °C
    const R: f64 = 8.314;
    let tb = bp + 273.15;

    // La liaison H sube ΔHvap
    let fam = family.to_lowercase();
    let mut trouton_factor = 88.0;
    if fam.contains("alcool") || fam.contains("phénol") {
        trouton_factor = 110.0;
    }
    if fam.contains("acide") {
        trouton_factor = 115.0;
    }

    let dhvap = trouton_factor * tb;
    let ln_p = 101325.0_f64.ln() - dhvap / R * (1.0 / T - 1.0 / tb);
    let p = ln_p.exp();

    Some(((p * 1000.0).round() / 1000.0).max(0.0001))
}

/// Umbral de percepción olfativa (µg/m³ en aire) por familia, con la clase de
/// volatilidad como último recurso.
pub fn estimate_odor_threshold(family: &str, volatility: Option<&str>) -> f64 {
    let fam = family.to_lowercase();
    let vol = volatility.unwrap_or("").to_lowercase();

    // Aldehídos y tioles → umbral muy bajo
    if fam.contains("aldéhyde") && fam.contains("aliphatique") {
        return 5.0;
    }
    if fam.contains("aldéhyde") && fam.contains("aromatique") {
        return 30.0;
    }
    if fam.contains("thiol") || fam.contains("soufre") {
        return 0.01;
    }
    // Almizcles → umbral bajo (muy potentes)
    if fam.contains("musc") {
        return 1.0;
    }
    // Iononas → umbral extremadamente bajo
    if fam.contains("ionone") {
        return 0.1;
    }
    if fam.contains("terpène") && !fam.contains("alcool") {
        return 50.0;
    }
    if fam.contains("terpène-alcool") {
        return 30.0;
    }
    if fam.contains("ester") {
        return 50.0;
    }
    if fam.contains("phénol") {
        return 5.0;
    }
    // Alcoholes → umbral alto (poco potentes)
    if fam.contains("alcool") {
        return 500.0;
    }
    if fam.contains("cétone") {
        return 100.0;
    }
    if fam.contains("lactone") {
        return 15.0;
    }
    match vol.as_str() {
        "très_haute" => 50.0,
        "haute" => 30.0,
        "moyenne" => 20.0,
        "basse" => 10.0,
        _ => 50.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boiling_point_uses_family_correlation() {
        // alcool: 60 × 1.35 + 95 = 176
        assert_eq!(estimate_boiling_point(Some(60.0), "alcool"), Some(176.0));
        // musc: 100 × 1.8 + 70 = 250
        assert_eq!(estimate_boiling_point(Some(100.0), "musc-macrocyclique"), Some(250.0));
        // aldéhyde: 80 × 1.4 + 85 = 197
        assert_eq!(estimate_boiling_point(Some(80.0), "aldéhyde-aliphatique"), Some(197.0));
        // défaut: 50 × 1.5 + 73 = 148
        assert_eq!(estimate_boiling_point(Some(50.0), "terpène"), Some(148.0));
        assert_eq!(estimate_boiling_point(None, "terpène"), None);
    }

    #[test]
    fn boiling_point_accepts_zero_flash_point() {
        assert_eq!(estimate_boiling_point(Some(0.0), "terpène"), Some(73.0));
    }

    #[test]
    fn partition_coefficient_defaults_without_mw() {
        assert_eq!(estimate_partition_coefficient("", None), 2.5);
        assert_eq!(estimate_partition_coefficient("terpène", None), 2.5);
    }

    #[test]
    fn partition_coefficient_family_rules_in_order() {
        // terpène puro: 0.025 × 136 + 1.0 = 4.4
        assert_eq!(estimate_partition_coefficient("terpène", Some(136.0)), 4.4);
        // terpène-alcool contiene "alcool", así que no entra en la primera regla
        assert_eq!(estimate_partition_coefficient("terpène-alcool", Some(154.0)), round2(0.022 * 154.0 - 0.4));
        // sesquiterpène gana antes que la regla de terpenoles
        assert_eq!(estimate_partition_coefficient("sesquiterpène", Some(204.0)), round2(0.028 * 204.0 + 0.5));
        assert_eq!(estimate_partition_coefficient("coumarine", Some(146.0)), 1.4);
        // mayúsculas irrelevantes
        assert_eq!(estimate_partition_coefficient("MUSC", Some(258.0)), round2(0.02 * 258.0 + 0.5));
    }

    #[test]
    fn density_mw_comparisons_skip_unknown_mw() {
        // musc con MW alto vs. desconocido
        assert_eq!(estimate_density("musc", Some(258.0)), 0.990);
        assert_eq!(estimate_density("musc", None), 0.950);
        // alcool ligero vs. desconocido
        assert_eq!(estimate_density("alcool", Some(100.0)), 0.830);
        assert_eq!(estimate_density("alcool", None), 0.920);
        assert_eq!(estimate_density("familia-desconocida", None), 0.900);
    }

    #[test]
    fn density_orders_aromatic_aldehyde_before_plain() {
        assert_eq!(estimate_density("aldéhyde-aromatique", None), 1.050);
        assert_eq!(estimate_density("aldéhyde-aliphatique", None), 0.830);
        assert_eq!(estimate_density("ester-salicylate", None), 1.050);
        assert_eq!(estimate_density("ester", None), 0.900);
    }

    #[test]
    fn vapor_pressure_is_floored_and_rounded() {
        // bp muy alto → presión minúscula, pero nunca ≤ 0
        let p = estimate_vapor_pressure(Some(600.0), "alcool");
        assert_eq!(p, Some(0.0001));
        // bp bajo → presión alta y acotada a 3 decimales
        let q = estimate_vapor_pressure(Some(20.0), "terpène").unwrap();
        assert!(q >= 0.0001);
        assert_eq!(q, (q * 1000.0).round() / 1000.0);
        assert_eq!(estimate_vapor_pressure(None, "terpène"), None);
    }

    #[test]
    fn vapor_pressure_trouton_factor_by_family() {
        // a igual bp, un alcool evapora menos que un terpène
        let terp = estimate_vapor_pressure(Some(200.0), "terpène").unwrap();
        let alc = estimate_vapor_pressure(Some(200.0), "alcool").unwrap();
        assert!(alc < terp);
    }

    #[test]
    fn odor_threshold_family_then_volatility() {
        assert_eq!(estimate_odor_threshold("aldéhyde-aliphatique", None), 5.0);
        assert_eq!(estimate_odor_threshold("aldéhyde-aromatique", None), 30.0);
        assert_eq!(estimate_odor_threshold("thiol", None), 0.01);
        assert_eq!(estimate_odor_threshold("musc", Some("basse")), 1.0);
        assert_eq!(estimate_odor_threshold("ionone", None), 0.1);
        assert_eq!(estimate_odor_threshold("terpène", None), 50.0);
        assert_eq!(estimate_odor_threshold("terpène-alcool", None), 30.0);
        // sin familia reconocida, decide la volatilidad
        assert_eq!(estimate_odor_threshold("", Some("très_haute")), 50.0);
        assert_eq!(estimate_odor_threshold("", Some("haute")), 30.0);
        assert_eq!(estimate_odor_threshold("", Some("moyenne")), 20.0);
        assert_eq!(estimate_odor_threshold("", Some("basse")), 10.0);
        assert_eq!(estimate_odor_threshold("", None), 50.0);
    }
}
