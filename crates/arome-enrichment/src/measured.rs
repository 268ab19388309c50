//! Valores medidos de referencia, indexados por CAS.
//!
//! Fuentes: PubChem, The Good Scents Company, Sigma-Aldrich, Leffingwell.
//! bp (°C), logp (XLogP), density (g/mL a 20 °C), vp (Pa a 25 °C),
//! ot (µg/m³ en aire). Estos valores siempre ganan sobre cualquier dato
//! pre-existente o estimado.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
pub struct MeasuredProperties {
    pub bp: Option<f64>,
    pub logp: Option<f64>,
    pub density: Option<f64>,
    pub vp: Option<f64>,
    pub ot: Option<f64>,
}

fn m(bp: f64, logp: f64, density: f64, vp: f64, ot: Option<f64>) -> MeasuredProperties {
    MeasuredProperties { bp: Some(bp), logp: Some(logp), density: Some(density), vp: Some(vp), ot }
}

// bp verificado contra PubChem; el resto de propiedades se estima
fn bp_only(bp: f64) -> MeasuredProperties {
    MeasuredProperties { bp: Some(bp), logp: None, density: None, vp: None, ot: None }
}

pub static MEASURED_TABLE: Lazy<HashMap<&'static str, MeasuredProperties>> = Lazy::new(|| {
    let mut t = HashMap::new();
    // ── Terpènes ─────────────────────────────────────
    t.insert("80-56-8", m(155.0, 4.83, 0.858, 590.0, Some(62.0))); // α-Pinène
    t.insert("127-91-3", m(166.0, 4.83, 0.872, 390.0, Some(140.0))); // β-Pinène
    t.insert("5989-27-5", m(176.0, 4.57, 0.841, 190.0, Some(38.0))); // D-Limonène
    t.insert("79-92-5", m(159.0, 4.22, 0.842, 330.0, Some(100.0))); // Camphène
    t.insert("99-87-6", m(177.0, 4.10, 0.857, 150.0, Some(12.0))); // p-Cymène
    t.insert("123-35-3", m(167.0, 4.17, 0.794, 280.0, Some(15.0))); // Myrcène
    t.insert("99-85-4", m(183.0, 4.50, 0.849, 130.0, Some(260.0))); // γ-Terpinène
    t.insert("586-62-9", m(186.0, 4.47, 0.863, 120.0, Some(200.0))); // Terpinolène
    t.insert("3338-55-4", m(172.0, 4.45, 0.789, 200.0, Some(34.0))); // cis-Ocimène
    // ── Terpène-alcools ──────────────────────────────
    t.insert("78-70-6", m(198.0, 2.97, 0.860, 21.0, Some(6.0))); // Linalol
    t.insert("106-22-9", m(225.0, 3.91, 0.855, 3.3, Some(40.0))); // Citronellol
    t.insert("106-24-1", m(230.0, 3.56, 0.889, 2.3, Some(7.5))); // Géraniol
    t.insert("106-25-2", m(225.0, 3.56, 0.878, 2.8, Some(30.0))); // Nérol
    t.insert("98-55-5", m(219.0, 2.98, 0.935, 4.5, Some(330.0))); // α-Terpinéol
    t.insert("507-70-0", m(212.0, 2.85, 0.991, 6.7, Some(140.0))); // Bornéol
    t.insert("89-78-1", m(212.0, 3.38, 0.890, 7.5, Some(40.0))); // L-Menthol
    t.insert("7212-44-4", m(255.0, 4.20, 0.877, 0.5, Some(300.0))); // Nérolidol
    // ── Oxydes terpéniques ───────────────────────────
    t.insert("470-82-6", m(176.0, 2.74, 0.922, 267.0, Some(12.0))); // Eucalyptol
    t.insert("16409-43-1", m(200.0, 2.54, 0.876, 12.0, Some(0.5))); // Oxyde de rose
    // ── Aldéhydes ────────────────────────────────────
    t.insert("5392-40-5", m(229.0, 3.45, 0.888, 3.0, Some(32.0))); // Citral
    t.insert("112-31-2", m(208.0, 4.09, 0.830, 11.0, Some(3.0))); // Décanal
    t.insert("112-44-7", m(223.0, 4.61, 0.830, 4.5, Some(5.0))); // Undécanal
    t.insert("110-41-8", m(238.0, 5.13, 0.833, 2.0, Some(1.0))); // 2-Méthylundécanal
    t.insert("104-55-2", m(248.0, 1.90, 1.050, 2.9, Some(60.0))); // Cinnamaldéhyde
    t.insert("122-78-1", m(195.0, 1.50, 1.045, 19.0, Some(4.0))); // Phénylacétaldéhyde
    t.insert("107-75-5", m(241.0, 0.76, 0.953, 0.6, Some(5.0))); // Hydroxycitronellal
    t.insert("121-33-5", m(285.0, 1.05, 1.056, 0.02, Some(25.0))); // Vanilline
    t.insert("120-57-0", m(263.0, 1.15, 1.095, 0.1, Some(36.0))); // Héliotropine
    t.insert("4460-86-0", m(229.0, 3.16, 0.855, 3.0, Some(13.0))); // Citronellal
    t.insert("100-52-7", m(179.0, 1.48, 1.044, 127.0, Some(350.0))); // Benzaldéhyde
    // ── Cétones ──────────────────────────────────────
    t.insert("76-22-2", m(204.0, 2.38, 0.992, 33.0, Some(300.0))); // Camphre
    t.insert("10458-14-7", m(209.0, 3.04, 0.901, 12.0, Some(180.0))); // Menthone
    t.insert("127-51-5", m(267.0, 4.10, 0.933, 0.3, Some(0.3))); // α-Isométhyl ionone
    t.insert("79-77-6", m(267.0, 4.21, 0.901, 0.3, Some(0.1))); // β-Ionone
    // ── Esters ───────────────────────────────────────
    t.insert("115-95-7", m(220.0, 3.56, 0.895, 5.0, Some(45.0))); // Acétate de linalyle
    t.insert("105-87-3", m(242.0, 4.04, 0.907, 1.5, Some(40.0))); // Acétate de géranyle
    t.insert("141-12-8", m(227.0, 3.56, 0.909, 3.0, Some(60.0))); // Acétate de néryle
    t.insert("150-84-5", m(229.0, 4.00, 0.895, 2.5, Some(50.0))); // Acétate de citronellyle
    t.insert("142-92-7", m(171.0, 2.83, 0.878, 190.0, Some(2.0))); // Acétate d'hexyle
    t.insert("5655-61-8", m(227.0, 3.41, 0.983, 2.5, Some(150.0))); // Acétate de bornyle
    t.insert("87-20-7", m(277.0, 4.03, 1.053, 0.08, Some(3.0))); // Salicylate d'isoamyle
    t.insert("2050-08-0", m(283.0, 4.54, 1.053, 0.06, Some(5.0))); // Salicylate d'amyle
    // ── Phénols ──────────────────────────────────────
    t.insert("97-53-0", m(254.0, 2.49, 1.066, 1.2, Some(6.0))); // Eugénol
    t.insert("97-54-1", m(266.0, 2.58, 1.088, 0.5, Some(3.0))); // Isoeugénol
    // ── Sesquiterpènes ───────────────────────────────
    t.insert("87-44-5", m(262.0, 6.30, 0.905, 0.2, Some(64.0))); // β-Caryophyllène
    t.insert("17699-14-8", m(260.0, 6.00, 0.913, 0.25, Some(50.0))); // Farnésène
    // ── Muscs ────────────────────────────────────────
    t.insert("1222-05-5", m(330.0, 5.90, 1.004, 0.0007, Some(1.5))); // Galaxolide
    t.insert("21145-77-7", m(340.0, 5.70, 0.998, 0.0004, Some(5.0))); // Tonalide
    t.insert("105-95-3", m(332.0, 4.93, 1.004, 0.0009, Some(0.5))); // Éthylène brassylate
    t.insert("541-91-3", m(327.0, 6.30, 0.922, 0.001, Some(0.5))); // Muscone
    t.insert("3391-83-1", m(310.0, 4.80, 0.990, 0.002, Some(1.0))); // Exaltolide
    // ── Alcools ──────────────────────────────────────
    t.insert("60-12-8", m(220.0, 1.36, 1.017, 4.5, Some(750.0))); // Alcool phényléthylique
    t.insert("100-51-6", m(205.0, 1.10, 1.045, 12.0, Some(5000.0))); // Alcool benzylique
    t.insert("3391-86-4", m(175.0, 2.60, 0.837, 43.0, Some(1.0))); // 1-Octèn-3-ol
    // ── Lactones ─────────────────────────────────────
    t.insert("104-67-6", m(280.0, 3.60, 0.945, 0.05, Some(10.0))); // γ-Undécalactone
    t.insert("706-14-9", m(255.0, 2.58, 0.960, 0.3, Some(11.0))); // δ-Décalactone
    t.insert("713-95-1", m(302.0, 4.58, 0.940, 0.01, Some(40.0))); // δ-Dodécalactone
    // ── Solvants / bases ─────────────────────────────
    t.insert("25265-71-8", m(232.0, -0.64, 1.023, 3.2, None)); // DPG
    t.insert("57-55-6", m(188.0, -0.92, 1.036, 20.0, None)); // Propylène glycol
    t.insert("120-51-4", m(323.0, 3.97, 1.118, 0.004, None)); // Benzoate de benzyle
    // ── Coumarines & autres ──────────────────────────
    t.insert("91-64-5", m(302.0, 1.39, 0.935, 0.013, Some(60.0))); // Coumarine
    t.insert("4180-23-8", m(234.0, 3.39, 0.988, 2.0, Some(50.0))); // trans-Anéthole
    // ── BP vérifiés (cruzados con PubChem) ───────────
    t.insert("118-58-1", bp_only(320.0)); // Salicylate de benzyle
    t.insert("101-86-0", bp_only(308.0)); // α-Hexylcinnamaldéhyde
    t.insert("122-40-7", bp_only(289.0)); // Amylcinnamaldéhyde
    t.insert("80-54-6", bp_only(279.0)); // Lilial
    t.insert("4602-84-0", bp_only(283.0)); // Farnésol
    t.insert("77-53-2", bp_only(299.0)); // Cédrol
    t.insert("23696-85-7", bp_only(274.0)); // Damascénone
    t.insert("18479-58-8", bp_only(198.0)); // Dihydromyrcénol
    t.insert("6485-40-1", bp_only(231.0)); // L-Carvone
    t.insert("124-13-0", bp_only(167.0)); // Octanal
    t.insert("124-19-6", bp_only(191.0)); // Nonanal
    t.insert("112-54-9", bp_only(240.0)); // Dodécanal
    t.insert("118-71-8", bp_only(293.0)); // Maltol
    t.insert("4940-11-8", bp_only(290.0)); // Éthyl maltol
    t.insert("121-32-4", bp_only(295.0)); // Éthyl vanilline
    t.insert("103-95-7", bp_only(270.0)); // Cyclamen aldéhyde
    t.insert("125-12-2", bp_only(226.0)); // Acétate d'isobornyle
    t.insert("80-26-2", bp_only(220.0)); // Acétate de terpinyle
    t
});
