// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du noyau (aucune ne fait paniquer l’UI).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    /// L’affichage ne se lit pas comme un nombre au moment d’un opérateur ou de "=".
    #[error("nombre invalide: {texte:?}")]
    NombreInvalide { texte: String },

    /// Libellé de bouton (ou touche) hors du jeu de jetons.
    #[error("libellé inconnu: {libelle:?}")]
    LibelleInconnu { libelle: String },
}
