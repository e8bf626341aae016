// src/noyau/operateur.rs

/// Les quatre opérateurs du pavé.
///
/// L'ordre des variantes fait partie du contrat : il sert d'index externe
/// (tag de bouton) via [`Operateur::depuis_index`] — 0→Plus … 3→Division.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Multiplication,
    Division,
}

impl Operateur {
    /// Toutes les variantes, dans l'ordre des index externes.
    pub const TOUS: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Multiplication,
        Operateur::Division,
    ];

    /// Symbole canonique tel qu'il apparaît dans l'opération.
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Multiplication => "*",
            Operateur::Division => "/",
        }
    }

    /// Multiplication et division passent avant plus et moins.
    pub fn est_prioritaire(self) -> bool {
        matches!(self, Operateur::Multiplication | Operateur::Division)
    }

    /// Conversion depuis un index externe (tag de bouton).
    /// Hors bornes => None (jamais de panique).
    pub fn depuis_index(index: usize) -> Option<Operateur> {
        Self::TOUS.get(index).copied()
    }

    /// Reconnaît un symbole isolé ("+", "-", "*", "/").
    pub fn depuis_symbole(symbole: &str) -> Option<Operateur> {
        Self::TOUS.iter().copied().find(|op| op.symbole() == symbole)
    }
}

/* ------------------------ Prédicats sur éléments ------------------------ */

/// L'élément est-il exactement un symbole d'opérateur ?
pub fn est_operateur(element: &str) -> bool {
    Operateur::depuis_symbole(element).is_some()
}

/// L'élément est-il un opérateur prioritaire (* ou /) ?
pub fn est_prioritaire(element: &str) -> bool {
    Operateur::depuis_symbole(element).is_some_and(Operateur::est_prioritaire)
}
