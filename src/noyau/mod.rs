//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - jetons.rs       : jetons (boutons / touches) + opérateurs
//! - format.rs       : lecture de l’affichage + rendu du résultat
//! - accumulateur.rs : machine d’état à deux opérandes
//! - erreur.rs       : erreurs typées

pub mod accumulateur;
pub mod erreur;
pub mod format;
pub mod jetons;

#[cfg(test)]
mod tests_accumulateur;


// API publique minimale
pub use accumulateur::{Accumulateur, TEXTE_ERREUR};
pub use erreur::ErreurCalc;
pub use jetons::{Jeton, Operateur};
