//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l’accumulateur du noyau et traduire ses issues pour l’écran
//! (message d’erreur sous l’affichage), sans logique de dessin.
//!
//! Contrats :
//! - Toute entrée (bouton ou clavier) passe par un `Jeton`, une seule fois.
//! - Aucune panique sur une saisie : les erreurs deviennent un message.

use tracing::trace;

use crate::noyau::{Accumulateur, ErreurCalc, Jeton};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- machine d’état ---
    pub accumulateur: Accumulateur,

    // --- sorties ---
    pub erreur: String, // détail de la dernière saisie rejetée (vide sinon)
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// Bouton du pavé : libellé -> jeton.
    pub fn appuyer(&mut self, libelle: &str) {
        match libelle.parse::<Jeton>() {
            Ok(jeton) => self.appliquer(jeton),
            Err(e) => trace!(erreur = %e, "libellé ignoré"),
        }
    }

    /// Un jeton (bouton ou clavier) -> accumulateur, puis mise à jour du message.
    pub fn appliquer(&mut self, jeton: Jeton) {
        match self.accumulateur.traiter(jeton) {
            Ok(()) => self.erreur.clear(),
            Err(e @ ErreurCalc::NombreInvalide { .. }) => self.erreur = e.to_string(),
            Err(e) => trace!(erreur = %e, "jeton ignoré"),
        }
    }

    pub fn affichage(&self) -> &str {
        self.accumulateur.affichage()
    }
}
