// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Clavier : même chemin que les boutons (un jeton par touche)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;
use tracing::trace;

use crate::noyau::Jeton;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Clavier global (pas de champ texte : l’affichage est en lecture seule).
        let jetons: Vec<Jeton> = ctx.input(|i| i.events.iter().flat_map(jetons_clavier).collect());
        for jeton in jetons {
            self.appliquer(jeton);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

/// Événement clavier -> jetons.
/// Texte : chaque caractère reconnu ("7", ".", "*", "/", "=", …).
/// Touches : Enter = "=", Backspace = "<-", Escape = "C".
fn jetons_clavier(ev: &egui::Event) -> Vec<Jeton> {
    match ev {
        egui::Event::Text(texte) => texte
            .chars()
            .filter_map(|c| {
                let mut tampon = [0u8; 4];
                match c.encode_utf8(&mut tampon).parse::<Jeton>() {
                    Ok(j) => Some(j),
                    Err(e) => {
                        trace!(erreur = %e, "caractère ignoré");
                        None
                    }
                }
            })
            .collect(),
        egui::Event::Key {
            key, pressed: true, ..
        } => match key {
            egui::Key::Enter => vec![Jeton::Egal],
            egui::Key::Backspace => vec![Jeton::Retour],
            egui::Key::Escape => vec![Jeton::Efface],
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
