// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Affichage : une ligne, alignée à droite, lecture seule
// - Pavé : grille 5×4, chaque clic envoie son libellé à l’accumulateur

use eframe::egui;

use super::etat::AppCalc;

/// Pavé, rangée par rangée (libellés = jetons).
const PAVE: [[&str; 4]; 5] = [
    ["C", "<-", "(", ")"],
    ["7", "8", "9", "÷"],
    ["4", "5", "6", "×"],
    ["1", "2", "3", "-"],
    ["0", ".", "=", "+"],
];

const ESPACEMENT: f32 = 8.0;
const HAUTEUR_BOUTON: f32 = 48.0;
const TAILLE_TEXTE_BOUTON: f32 = 22.0;
const TAILLE_AFFICHAGE: f32 = 30.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACEMENT, ESPACEMENT);

        self.ui_affichage(ui);

        ui.add_space(ESPACEMENT);

        self.ui_pave(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                // hauteur fixe : l’affichage vide ne doit pas “sauter”
                ui.set_min_height(TAILLE_AFFICHAGE * 1.3);
                let mut texte = egui::RichText::new(self.affichage())
                    .monospace()
                    .size(TAILLE_AFFICHAGE);
                if self.accumulateur.en_erreur() {
                    texte = texte.color(ui.visuals().error_fg_color);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(texte);
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let largeur = ((ui.available_width() - 3.0 * ESPACEMENT) / 4.0).max(40.0);

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([ESPACEMENT, ESPACEMENT])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for libelle in rangee {
                        let bouton =
                            egui::Button::new(egui::RichText::new(libelle).size(TAILLE_TEXTE_BOUTON));
                        if ui.add_sized([largeur, HAUTEUR_BOUTON], bouton).clicked() {
                            self.appuyer(libelle);
                        }
                    }
                    ui.end_row();
                }
            });
    }
}
