// src/noyau/format.rs

use super::erreur::ErreurCalc;

/* ------------------------ Lecture de l’affichage ------------------------ */

/// Lit l’affichage comme un flottant.
/// Accepte "7", "7.", ".5", "-2.5", "1e21", "Infinity", "NaN" (relecture d’un résultat).
/// Refuse "", ".", et tout texte contenant une parenthèse.
pub fn lire_nombre(texte: &str) -> Result<f64, ErreurCalc> {
    texte
        .parse::<f64>()
        .map_err(|_| ErreurCalc::NombreInvalide {
            texte: texte.to_string(),
        })
}

/* ------------------------ Rendu du résultat ------------------------ */

/// Forme décimale par défaut :
/// - fini : plus courte représentation exacte, partie fractionnaire toujours présente (10.0, 0.1)
/// - non fini : Infinity / -Infinity / NaN
pub fn formater_resultat(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Debug garde toujours ".0" (ou bascule en notation 1e16)
    format!("{v:?}")
}
