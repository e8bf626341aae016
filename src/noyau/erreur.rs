// src/noyau/erreur.rs
//
// Taxonomie fermée des refus de la calculatrice. Tous récupérables.
// Les titres affichables vivent côté app (table de localisation) :
// le noyau ne transporte aucune chaîne d'affichage ici.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErreurCalculatrice {
    /// Opérateur demandé à une position interdite par la grammaire
    /// (l'opération se termine déjà par un opérateur, ou un résultat est présent).
    AjoutOperateurImpossible,

    /// Évaluation demandée sans assez d'éléments, avec un résultat déjà
    /// présent, sur une opération vide/zéro, ou ne finissant pas par un nombre.
    AjoutEgalImpossible,

    /// Diviseur nul rencontré pendant la réduction.
    DivisionParZero,

    /// Index de sélection hors de la plage des opérateurs.
    ConversionOperateurImpossible,
}
