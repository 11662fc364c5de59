//! Noyau — accumulateur à deux opérandes
//!
//! Un jeton par appel, traité jusqu’au bout :
//! - chiffre / point        : écrase l’affichage (saisie neuve) ou s’y ajoute
//! - parenthèses            : ajoutées telles quelles, jamais évaluées
//! - opérateur              : mémorise le 1er opérande, ou résout l’opération en attente (chaînage)
//! - "="                    : résout l’opération en attente
//! - C / <-                 : remise à zéro / retrait du dernier caractère
//!
//! Pas de priorité, pas d’arbre : a op b, puis le résultat devient le nouveau a.
//! Division par zéro : ±Infinity / NaN (IEEE), pas une erreur.

use tracing::{debug, warn};

use super::erreur::ErreurCalc;
use super::format::{formater_resultat, lire_nombre};
use super::jetons::{Jeton, Operateur};

/// Texte affiché quand l’affichage ne se lit pas comme un nombre.
pub const TEXTE_ERREUR: &str = "Erreur";

#[derive(Clone, Debug, Default)]
pub struct Accumulateur {
    affichage: String,
    operateur: Option<Operateur>,
    premier: f64,
    second: f64,
    resultat: f64,
    saisie_neuve: bool,
    en_erreur: bool,
}

impl Accumulateur {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture de l’état ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn operateur(&self) -> Option<Operateur> {
        self.operateur
    }

    pub fn premier_operande(&self) -> f64 {
        self.premier
    }

    pub fn second_operande(&self) -> f64 {
        self.second
    }

    pub fn resultat(&self) -> f64 {
        self.resultat
    }

    pub fn attend_saisie_neuve(&self) -> bool {
        self.saisie_neuve
    }

    pub fn en_erreur(&self) -> bool {
        self.en_erreur
    }

    /* ------------------------ Entrées ------------------------ */

    /// Libellé de bouton -> jeton -> traitement.
    pub fn traiter_libelle(&mut self, libelle: &str) -> Result<(), ErreurCalc> {
        let jeton: Jeton = libelle.parse()?;
        self.traiter(jeton)
    }

    /// Point d’entrée unique : un jeton, une transition.
    ///
    /// En cas d’affichage illisible (opérateur ou "="), l’accumulateur est remis à zéro,
    /// l’affichage montre [`TEXTE_ERREUR`] et l’erreur est renvoyée à l’appelant.
    pub fn traiter(&mut self, jeton: Jeton) -> Result<(), ErreurCalc> {
        debug!(%jeton, affichage = %self.affichage, "jeton");

        let issue = match jeton {
            Jeton::Chiffre(_) | Jeton::Point | Jeton::OuvrePar | Jeton::FermePar => {
                self.saisir(jeton);
                Ok(())
            }
            Jeton::Efface => {
                self.effacer();
                Ok(())
            }
            Jeton::Retour => {
                self.retour_arriere();
                Ok(())
            }
            Jeton::Egal => self.egal(),
            Jeton::Operateur(op) => self.choisir_operateur(op),
        };

        if let Err(e) = &issue {
            self.signaler_erreur(e);
        }
        issue
    }

    /* ------------------------ Transitions ------------------------ */

    fn saisir(&mut self, jeton: Jeton) {
        let Some(c) = jeton.caractere() else {
            return;
        };

        // Les parenthèses s’ajoutent toujours (sauf sur "Erreur") ; seuls chiffres/point écrasent.
        let ecrase = match jeton {
            Jeton::OuvrePar | Jeton::FermePar => self.en_erreur,
            _ => self.saisie_neuve || self.en_erreur,
        };

        if ecrase {
            self.affichage.clear();
            if !matches!(jeton, Jeton::OuvrePar | Jeton::FermePar) {
                self.saisie_neuve = false;
            }
        }
        self.en_erreur = false;
        self.affichage.push(c);
    }

    /// C : remise à zéro complète.
    pub fn effacer(&mut self) {
        *self = Self::default();
    }

    /// <- : retire le dernier caractère (no-op si vide ; efface "Erreur" d’un coup).
    fn retour_arriere(&mut self) {
        if self.en_erreur {
            self.affichage.clear();
            self.en_erreur = false;
            return;
        }
        self.affichage.pop();
    }

    fn egal(&mut self) -> Result<(), ErreurCalc> {
        self.resoudre_en_attente()?;
        self.operateur = None;
        Ok(())
    }

    fn choisir_operateur(&mut self, op: Operateur) -> Result<(), ErreurCalc> {
        if self.operateur.is_some() {
            // Chaînage : le résultat intermédiaire devient le 1er opérande.
            self.premier = self.resoudre_en_attente()?;
        } else {
            self.premier = lire_nombre(&self.affichage)?;
        }
        self.operateur = Some(op);
        self.saisie_neuve = true;
        Ok(())
    }

    /// Résolution commune à "=" et au chaînage :
    /// second := affichage ; résultat := premier op second ; affichage := résultat.
    ///
    /// Sans opérateur en attente, l’affichage est quand même lu (erreur si illisible)
    /// mais le résultat précédent est conservé et réaffiché.
    fn resoudre_en_attente(&mut self) -> Result<f64, ErreurCalc> {
        self.second = lire_nombre(&self.affichage)?;
        if let Some(op) = self.operateur {
            self.resultat = op.appliquer(self.premier, self.second);
        }
        self.affichage = formater_resultat(self.resultat);
        Ok(self.resultat)
    }

    fn signaler_erreur(&mut self, e: &ErreurCalc) {
        warn!(erreur = %e, "saisie rejetée, accumulateur remis à zéro");
        *self = Self {
            affichage: TEXTE_ERREUR.to_string(),
            saisie_neuve: true,
            en_erreur: true,
            ..Self::default()
        };
    }
}
