//! Noyau — moteur d'opération à frappe incrémentale
//!
//! Organisation interne :
//! - operateur.rs : les quatre opérateurs (symbole, priorité, index externe)
//! - erreur.rs    : taxonomie fermée des refus (sans texte d'affichage)
//! - moteur.rs    : état de l'opération + gardes de frappe + publication
//! - reduction.rs : réduction gauche→droite avec report des non-prioritaires
//! - format.rs    : résultat compact façon "%g" + conversion d'opérandes
//!
//! Le noyau ne connaît ni l'UI ni la localisation : il publie le texte
//! complet à chaque mutation et une erreur typée à chaque refus, via un
//! observateur non possédé (Weak).

pub mod erreur;
pub mod format;
pub mod moteur;
pub mod operateur;
pub mod reduction;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalculatrice;
pub use moteur::{Moteur, ObservateurCalculatrice, MESSAGE_ERREUR};
pub use operateur::Operateur;
