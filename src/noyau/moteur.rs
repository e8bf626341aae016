// src/noyau/moteur.rs
//
// Moteur d'opération incrémentale.
//
// Une seule chaîne mutable (l'opération en cours), possédée exclusivement
// ici. Chaque frappe est validée AVANT toute mutation : aucune mutation
// partielle n'est jamais observable. Toute écriture passe par `ecrire`,
// qui publie le nouveau texte à l'observateur — impossible d'oublier la
// notification.
//
// États : Vide, Saisie, Résultat, Erreur. Le prochain chiffre ré-entre
// toujours depuis Vide (remise à zéro implicite).

use std::rc::Weak;

use super::erreur::ErreurCalculatrice;
use super::operateur::{est_operateur, est_prioritaire, Operateur};
use super::reduction::{reduire, EchecReduction};

/// Marqueur interne d'état d'erreur — la seule chaîne d'affichage du noyau.
pub const MESSAGE_ERREUR: &str = "Erreur";

/// Marqueur de résultat.
pub const SIGNE_EGAL: &str = "=";

const ZERO: &str = "0";
const ZERO_NEGATIF: &str = "-0";

/// Observateur côté présentation. Le moteur le détient en `Weak` :
/// la couche d'affichage peut être détruite indépendamment du moteur.
pub trait ObservateurCalculatrice {
    /// Publié à chaque mutation acceptée, avec le texte complet.
    fn operation_changee(&self, operation: &str);

    /// Publié à chaque refus de garde. La localisation du titre
    /// appartient au collaborateur, pas au noyau.
    fn erreur_produite(&self, erreur: ErreurCalculatrice);
}

#[derive(Default)]
pub struct Moteur {
    operation: String,
    observateur: Option<Weak<dyn ObservateurCalculatrice>>,
}

impl Moteur {
    /// Branche (ou remplace) l'observateur. Référence non possédante.
    pub fn definir_observateur(&mut self, observateur: Weak<dyn ObservateurCalculatrice>) {
        self.observateur = Some(observateur);
    }

    /// Texte complet de l'opération en cours.
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /* ------------------------ Prédicats d'état ------------------------ */

    fn elements(&self) -> Vec<&str> {
        self.operation.split_whitespace().collect()
    }

    fn vaut_zero(&self) -> bool {
        self.operation == ZERO
    }

    fn a_un_resultat(&self) -> bool {
        self.operation.contains(SIGNE_EGAL)
    }

    fn a_message_erreur(&self) -> bool {
        self.operation == MESSAGE_ERREUR
    }

    fn prete_pour_nouveau_calcul(&self) -> bool {
        self.operation.is_empty() || self.vaut_zero() || self.a_un_resultat() || self.a_message_erreur()
    }

    fn dernier_element_est_nombre(&self) -> bool {
        self.operation
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_digit())
    }

    fn assez_d_elements(&self) -> bool {
        self.elements().len() >= 3
    }

    /* ------------------------ Frappes entrantes ------------------------ */

    /// Ajoute un chiffre, sous réserve de validation.
    ///
    /// Le refus est silencieux (pas d'erreur typée) : rejeter un chiffre
    /// fait partie de l'interaction normale, pas des fautes.
    pub fn ajouter_chiffre(&mut self, chiffre: &str) {
        if self.prete_pour_nouveau_calcul() {
            self.effacer();
        }

        if chiffre == ZERO && !self.operation.is_empty() {
            let elements = self.elements();
            let (Some(&premier), Some(&dernier)) = (elements.first(), elements.last()) else {
                return;
            };

            // "0" n'étend jamais un zéro de tête isolé : il faut soit
            // démarrer un nouveau nombre après un opérateur, soit étendre
            // un nombre déjà non nul.
            if !(est_operateur(dernier) || (premier != ZERO && dernier != ZERO)) {
                return;
            }

            // "-0" ne devient jamais "-00" ; table de vérité du composé
            // conservée telle quelle ("-0 * -" + "0" reste légal).
            if !((premier != ZERO_NEGATIF && est_operateur(dernier)) || dernier != ZERO_NEGATIF) {
                return;
            }
        } else if matches!(self.elements().last(), Some(&ZERO) | Some(&ZERO_NEGATIF)) {
            // Un chiffre non nul n'étend jamais "0" ni "-0".
            return;
        }

        // Une opération réduite au seul "-" amorce un nombre négatif :
        // le signe se colle au chiffre, sans espace.
        let ajout = if self.operation == Operateur::Moins.symbole() {
            self.effacer();
            format!("{}{chiffre}", Operateur::Moins.symbole())
        } else {
            chiffre.to_string()
        };

        let texte = format!("{}{ajout}", self.operation);
        self.ecrire(texte);
    }

    /// Ajoute un opérateur (espaces autour), ou amorce un nombre négatif,
    /// ou signale `AjoutOperateurImpossible`.
    pub fn ajouter_operateur(&mut self, operateur: Operateur) {
        if operateur == Operateur::Moins {
            // Amorce d'un nouveau nombre négatif : calcul prêt à repartir
            // et pas de "0" nu dans l'opération.
            if self.prete_pour_nouveau_calcul() && !self.elements().contains(&ZERO) {
                self.ecrire(Operateur::Moins.symbole().to_string());
                return;
            }

            // Après * ou / : moins unaire collé, pour "2 * -3".
            let apres_prioritaire = self
                .elements()
                .last()
                .is_some_and(|element| est_prioritaire(element));
            if apres_prioritaire {
                let texte = format!("{}{}", self.operation, Operateur::Moins.symbole());
                self.ecrire(texte);
                return;
            }
        }

        if !(self.dernier_element_est_nombre() && !self.a_un_resultat()) {
            self.signaler(ErreurCalculatrice::AjoutOperateurImpossible);
            return;
        }

        let texte = format!("{} {} ", self.operation, operateur.symbole());
        self.ecrire(texte);
    }

    /// Sélection d'opérateur par index externe (tag de bouton).
    pub fn ajouter_operateur_par_index(&mut self, index: usize) {
        match Operateur::depuis_index(index) {
            Some(operateur) => self.ajouter_operateur(operateur),
            None => self.signaler(ErreurCalculatrice::ConversionOperateurImpossible),
        }
    }

    /// Réduit l'opération et lui accole " = {résultat}".
    ///
    /// Garde d'idempotence : évaluer une opération qui contient déjà un
    /// résultat est refusé (`AjoutEgalImpossible`), texte inchangé.
    pub fn evaluer(&mut self) {
        let gardes = self.dernier_element_est_nombre()
            && self.assez_d_elements()
            && !self.a_un_resultat()
            && !self.vaut_zero();
        if !gardes {
            self.signaler(ErreurCalculatrice::AjoutEgalImpossible);
            return;
        }

        let elements: Vec<String> = self.elements().iter().map(|e| e.to_string()).collect();

        match reduire(elements) {
            Ok(resultat) => {
                let texte = format!("{} {SIGNE_EGAL} {resultat}", self.operation);
                self.ecrire(texte);
            }
            Err(EchecReduction::DivisionParZero) => {
                self.ecrire(MESSAGE_ERREUR.to_string());
                self.signaler(ErreurCalculatrice::DivisionParZero);
            }
            Err(EchecReduction::OperandeInvalide) => {
                // Pas d'erreur typée dédiée : le marqueur suffit.
                self.ecrire(MESSAGE_ERREUR.to_string());
            }
        }
    }

    /// Remise à zéro explicite (publie le texte vide).
    pub fn effacer(&mut self) {
        self.ecrire(String::new());
    }

    /* ------------------------ Publication ------------------------ */

    // Unique point d'écriture : mute PUIS publie.
    fn ecrire(&mut self, texte: String) {
        self.operation = texte;
        if let Some(observateur) = self.observateur.as_ref().and_then(Weak::upgrade) {
            observateur.operation_changee(&self.operation);
        }
    }

    fn signaler(&self, erreur: ErreurCalculatrice) {
        if let Some(observateur) = self.observateur.as_ref().and_then(Weak::upgrade) {
            observateur.erreur_produite(erreur);
        }
    }
}
