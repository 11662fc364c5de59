//! Campagne de tests : comportements observables de l’accumulateur.
//!
//! Chaque scénario est une suite de libellés de boutons, exactement comme le pavé les envoie.

use super::{Accumulateur, ErreurCalc, Operateur, TEXTE_ERREUR};

fn taper(acc: &mut Accumulateur, libelles: &[&str]) {
    for l in libelles {
        acc.traiter_libelle(l)
            .unwrap_or_else(|e| panic!("libelle={l:?} err={e}"));
    }
}

fn affichage_apres(libelles: &[&str]) -> String {
    let mut acc = Accumulateur::new();
    taper(&mut acc, libelles);
    acc.affichage().to_string()
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn saisie_concatene_apres_clear() {
    let suites: [&[&str]; 4] = [
        &["1", "2", "3"],
        &["0", ".", "5"],
        &["9", "9", "9", "9", "9"],
        &["."],
    ];
    for suite in suites {
        let mut acc = Accumulateur::new();
        taper(&mut acc, &["4", "+", "C"]);
        taper(&mut acc, suite);
        assert_eq!(acc.affichage(), suite.concat(), "suite={suite:?}");
    }
}

#[test]
fn parentheses_ajoutees_jamais_evaluees() {
    assert_eq!(affichage_apres(&["(", "7", ")"]), "(7)");
    assert_eq!(affichage_apres(&["7", "(", ")"]), "7()");
}

#[test]
fn chiffre_apres_operateur_ecrase() {
    let mut acc = Accumulateur::new();
    taper(&mut acc, &["1", "2", "×"]);
    assert!(acc.attend_saisie_neuve());
    taper(&mut acc, &["3"]);
    assert_eq!(acc.affichage(), "3");
    assert!(!acc.attend_saisie_neuve());
    taper(&mut acc, &["4"]);
    assert_eq!(acc.affichage(), "34");
}

#[test]
fn operateur_laisse_l_affichage_intact() {
    let mut acc = Accumulateur::new();
    taper(&mut acc, &["1", "2", "÷"]);
    assert_eq!(acc.affichage(), "12");
    assert_eq!(acc.operateur(), Some(Operateur::Divise));
    assert_eq!(acc.premier_operande(), 12.0);
}

/* ------------------------ Clear / Backspace ------------------------ */

#[test]
fn clear_remet_tout_a_zero() {
    let mut acc = Accumulateur::new();
    taper(&mut acc, &["7", "+", "3", "+", "2", "C"]);
    assert_eq!(acc.affichage(), "");
    assert_eq!(acc.operateur(), None);
    assert_eq!(acc.premier_operande(), 0.0);
    assert_eq!(acc.second_operande(), 0.0);
    assert_eq!(acc.resultat(), 0.0);
}

#[test]
fn backspace_retire_le_dernier_caractere() {
    assert_eq!(affichage_apres(&["1", "2", "3", "<-"]), "12");
    assert_eq!(affichage_apres(&["1", "<-", "<-"]), "");
}

#[test]
fn backspace_sur_vide_est_un_no_op() {
    let mut acc = Accumulateur::new();
    assert_eq!(acc.traiter_libelle("<-"), Ok(()));
    assert_eq!(acc.affichage(), "");
    assert!(!acc.en_erreur());
}

/* ------------------------ Calcul ------------------------ */

#[test]
fn addition_simple() {
    assert_eq!(affichage_apres(&["7", "+", "3", "="]), "10.0");
}

#[test]
fn quatre_operations() {
    assert_eq!(affichage_apres(&["9", "-", "4", "="]), "5.0");
    assert_eq!(affichage_apres(&["6", "×", "7", "="]), "42.0");
    assert_eq!(affichage_apres(&["1", "÷", "4", "="]), "0.25");
    assert_eq!(affichage_apres(&["3", "-", "8", "="]), "-5.0");
    assert_eq!(affichage_apres(&["1", ".", "5", "+", ".", "5", "="]), "2.0");
}

#[test]
fn chainage_resultat_intermediaire() {
    let mut acc = Accumulateur::new();
    taper(&mut acc, &["7", "+", "3", "+"]);
    assert_eq!(acc.affichage(), "10.0");
    assert_eq!(acc.premier_operande(), 10.0);
    taper(&mut acc, &["2", "="]);
    assert_eq!(acc.affichage(), "12.0");
    assert_eq!(acc.operateur(), None);
}

#[test]
fn chainage_sans_priorite() {
    // 2 + 3 × 4 = (2+3)×4
    assert_eq!(affichage_apres(&["2", "+", "3", "×", "4", "="]), "20.0");
}

#[test]
fn resultat_reutilise_apres_egal() {
    assert_eq!(affichage_apres(&["7", "+", "3", "=", "×", "2", "="]), "20.0");
}

#[test]
fn chiffre_apres_egal_s_ajoute() {
    // "=" ne demande pas de saisie neuve : le chiffre prolonge le résultat affiché.
    assert_eq!(affichage_apres(&["7", "+", "3", "=", "5"]), "10.05");
}

#[test]
fn egal_sans_operateur_reaffiche_le_resultat() {
    // Rien en attente : "=" lit l’affichage mais garde le dernier résultat (0 au départ).
    let mut acc = Accumulateur::new();
    taper(&mut acc, &["7", "="]);
    assert_eq!(acc.affichage(), "0.0");
    assert_eq!(acc.resultat(), 0.0);
    assert_eq!(acc.second_operande(), 7.0);
}

#[test]
fn egal_repete_apres_saisie_garde_le_resultat() {
    let mut acc = Accumulateur::new();
    taper(&mut acc, &["7", "+", "3", "=", "5"]);
    assert_eq!(acc.affichage(), "10.05");
    taper(&mut acc, &["="]);
    assert_eq!(acc.affichage(), "10.0");
    assert_eq!(acc.resultat(), 10.0);
}

#[test]
fn egal_sans_operateur_sur_texte_illisible() {
    let mut acc = Accumulateur::new();
    taper(&mut acc, &["7", "+", "3", "=", "("]);
    assert!(acc.traiter_libelle("=").is_err());
    assert_eq!(acc.affichage(), TEXTE_ERREUR);
}

#[test]
fn operateur_double_reutilise_l_affichage() {
    // 7 + + : la seconde pression résout 7+7.
    assert_eq!(affichage_apres(&["7", "+", "+"]), "14.0");
}

/* ------------------------ Division par zéro ------------------------ */

#[test]
fn division_par_zero_infinity() {
    let mut acc = Accumulateur::new();
    taper(&mut acc, &["5", "÷", "0", "="]);
    assert_eq!(acc.affichage(), "Infinity");
    assert!(acc.resultat().is_infinite());
    assert!(!acc.en_erreur());
}

#[test]
fn division_par_zero_negatif_et_nan() {
    assert_eq!(affichage_apres(&["0", "-", "5", "=", "÷", "0", "="]), "-Infinity");
    assert_eq!(affichage_apres(&["0", "÷", "0", "="]), "NaN");
}

#[test]
fn infinity_se_rechaine() {
    assert_eq!(affichage_apres(&["5", "÷", "0", "=", "×", "0", "="]), "NaN");
}

/* ------------------------ Texte illisible ------------------------ */

#[test]
fn egal_sur_vide_signale_erreur() {
    let mut acc = Accumulateur::new();
    let e = acc.traiter_libelle("=");
    assert_eq!(
        e,
        Err(ErreurCalc::NombreInvalide {
            texte: String::new()
        })
    );
    assert_eq!(acc.affichage(), TEXTE_ERREUR);
    assert!(acc.en_erreur());
}

#[test]
fn parenthese_non_evaluable() {
    let mut acc = Accumulateur::new();
    taper(&mut acc, &["(", "3", ")"]);
    assert!(acc.traiter_libelle("+").is_err());
    assert_eq!(acc.affichage(), TEXTE_ERREUR);
    assert_eq!(acc.operateur(), None);
    assert_eq!(acc.premier_operande(), 0.0);
}

#[test]
fn erreur_au_milieu_d_un_chainage_remet_a_zero() {
    let mut acc = Accumulateur::new();
    taper(&mut acc, &["7", "+", "."]);
    assert!(acc.traiter_libelle("=").is_err());
    assert_eq!(acc.operateur(), None);
    assert_eq!(acc.resultat(), 0.0);
}

#[test]
fn reprise_apres_erreur() {
    let mut acc = Accumulateur::new();
    let _ = acc.traiter_libelle("=");
    taper(&mut acc, &["4"]);
    assert_eq!(acc.affichage(), "4");
    assert!(!acc.en_erreur());
    taper(&mut acc, &["+", "1", "="]);
    assert_eq!(acc.affichage(), "5.0");
}

#[test]
fn backspace_efface_erreur() {
    let mut acc = Accumulateur::new();
    let _ = acc.traiter_libelle("+");
    taper(&mut acc, &["<-"]);
    assert_eq!(acc.affichage(), "");
    assert!(!acc.en_erreur());
}

#[test]
fn libelle_inconnu_ne_touche_pas_l_etat() {
    let mut acc = Accumulateur::new();
    taper(&mut acc, &["4", "2"]);
    assert!(matches!(
        acc.traiter_libelle("sqrt"),
        Err(ErreurCalc::LibelleInconnu { .. })
    ));
    assert_eq!(acc.affichage(), "42");
    assert!(!acc.en_erreur());
}
