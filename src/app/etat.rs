//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : détenir le moteur et le pont observateur, et offrir les actions
//! "boutons" (chiffre, opérateur par tag, égal, AC) sans logique d'affichage.
//!
//! Contrats :
//! - Aucune validation de frappe ici : le moteur garde seul sa grammaire.
//! - Le moteur ne détient l'affichage qu'en Weak : la vue peut mourir seule.
//! - Les titres d'erreur localisés vivent ici, pas dans le noyau.

use std::cell::RefCell;
use std::rc::Rc;

use crate::noyau::{ErreurCalculatrice, Moteur, ObservateurCalculatrice};

/* ------------------------ Localisation des erreurs ------------------------ */

/// Table des titres affichables — le collaborateur de localisation.
/// Le noyau n'expose que la variante typée.
pub fn titre_erreur(erreur: ErreurCalculatrice) -> &'static str {
    match erreur {
        ErreurCalculatrice::AjoutOperateurImpossible => {
            "Impossible d'ajouter un opérateur ici"
        }
        ErreurCalculatrice::AjoutEgalImpossible => {
            "Impossible d'ajouter le signe égal"
        }
        ErreurCalculatrice::DivisionParZero => "Division par zéro impossible",
        ErreurCalculatrice::ConversionOperateurImpossible => "Opérateur inconnu",
    }
}

/* ------------------------ Pont observateur ------------------------ */

/// Réceptacle des publications du moteur, côté présentation.
/// Intérieur mutable : le moteur publie à travers `&self`.
#[derive(Default)]
pub struct Affichage {
    operation: RefCell<String>,
    erreur: RefCell<Option<ErreurCalculatrice>>,
}

impl ObservateurCalculatrice for Affichage {
    fn operation_changee(&self, operation: &str) {
        *self.operation.borrow_mut() = operation.to_string();
    }

    fn erreur_produite(&self, erreur: ErreurCalculatrice) {
        *self.erreur.borrow_mut() = Some(erreur);
    }
}

/* ------------------------ État applicatif ------------------------ */

pub struct AppCalc {
    moteur: Moteur,
    affichage: Rc<Affichage>,
}

impl Default for AppCalc {
    fn default() -> Self {
        let affichage = Rc::new(Affichage::default());
        let mut moteur = Moteur::default();
        let observateur: Rc<dyn ObservateurCalculatrice> = affichage.clone();
        moteur.definir_observateur(Rc::downgrade(&observateur));
        Self { moteur, affichage }
    }
}

impl AppCalc {
    /* ------------------------ Lectures pour la vue ------------------------ */

    /// Texte courant de l'opération (dernier texte publié).
    pub fn operation(&self) -> String {
        self.affichage.operation.borrow().clone()
    }

    /// Titre localisé de la dernière erreur, s'il y en a une à montrer.
    pub fn titre_erreur_courante(&self) -> Option<&'static str> {
        self.affichage.erreur.borrow().map(titre_erreur)
    }

    /* ------------------------ Actions "boutons" ------------------------ */

    pub fn appuyer_chiffre(&mut self, chiffre: &str) {
        self.oublier_erreur();
        self.moteur.ajouter_chiffre(chiffre);
    }

    /// Les boutons d'opérateur sont câblés par tag (0→+ … 3→/),
    /// comme sur le pavé d'origine.
    pub fn appuyer_operateur(&mut self, tag: usize) {
        self.oublier_erreur();
        self.moteur.ajouter_operateur_par_index(tag);
    }

    pub fn appuyer_egal(&mut self) {
        self.oublier_erreur();
        self.moteur.evaluer();
    }

    /// AC : remise à zéro totale.
    pub fn tout_effacer(&mut self) {
        self.oublier_erreur();
        self.moteur.effacer();
    }

    // Une nouvelle frappe masque l'erreur précédente.
    fn oublier_erreur(&mut self) {
        *self.affichage.erreur.borrow_mut() = None;
    }
}
