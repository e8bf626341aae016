// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé type calculatrice : gros boutons, une frappe par clic
// - Les boutons d'opérateur passent par leur tag (0→+ … 3→/), comme les
//   boutons d'origine : la conversion index→opérateur reste dans le noyau
//
// Note :
// - Le champ d'opération est en lecture seule : la seule entrée légale
//   est la frappe bouton par bouton (le moteur valide chaque frappe).

use eframe::egui;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité "calc"
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Compte sur moi");
        ui.add_space(6.0);

        self.ui_operation(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_operation(&mut self, ui: &mut egui::Ui) {
        ui.label("Opération :");
        let operation = self.operation();
        let texte = if operation.is_empty() {
            "0"
        } else {
            operation.as_str()
        };
        Self::champ_monospace(ui, "operation_out", texte, 2);

        if let Some(titre) = self.titre_erreur_courante() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, titre);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_compte_sur_moi")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_chiffre(ui, "7");
                self.bouton_chiffre(ui, "8");
                self.bouton_chiffre(ui, "9");
                self.bouton_operateur(ui, "/", 3);
                ui.end_row();

                self.bouton_chiffre(ui, "4");
                self.bouton_chiffre(ui, "5");
                self.bouton_chiffre(ui, "6");
                self.bouton_operateur(ui, "*", 2);
                ui.end_row();

                self.bouton_chiffre(ui, "1");
                self.bouton_chiffre(ui, "2");
                self.bouton_chiffre(ui, "3");
                self.bouton_operateur(ui, "-", 1);
                ui.end_row();

                self.bouton_chiffre(ui, "0");
                self.bouton_ac(ui);
                self.bouton_egal(ui);
                self.bouton_operateur(ui, "+", 0);
                ui.end_row();
            });
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, chiffre: &str) {
        let resp = ui.add_sized([46.0, 32.0], egui::Button::new(chiffre));
        if resp.clicked() {
            self.appuyer_chiffre(chiffre);
        }
    }

    fn bouton_operateur(&mut self, ui: &mut egui::Ui, label: &str, tag: usize) {
        let resp = ui.add_sized([46.0, 32.0], egui::Button::new(label));
        if resp.clicked() {
            self.appuyer_operateur(tag);
        }
    }

    fn bouton_egal(&mut self, ui: &mut egui::Ui) {
        let resp = ui
            .add_sized([46.0, 32.0], egui::Button::new("="))
            .on_hover_text("Évalue l'opération");
        if resp.clicked() {
            self.appuyer_egal();
        }
    }

    fn bouton_ac(&mut self, ui: &mut egui::Ui) {
        let resp = ui
            .add_sized([46.0, 32.0], egui::Button::new("AC"))
            .on_hover_text("Remise à zéro totale");
        if resp.clicked() {
            self.tout_effacer();
        }
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule "stable", sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }
}
