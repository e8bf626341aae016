// src/noyau/reduction.rs
//
// Réduction gauche→droite avec report des paires non prioritaires.
// Pas de parenthèses, opérateurs binaires seulement : la liste d'éléments
// est toujours de longueur impaire >= 3 à l'entrée (garanti par les gardes
// du moteur), donc les accès [0..3] dans la boucle sont sûrs.

use num_traits::Zero;

use super::format::{convertir_operande, format_compact};
use super::operateur::{est_prioritaire, Operateur};

/// Échec interne de la réduction. Le moteur traduit :
/// - DivisionParZero   => marqueur d'erreur + erreur typée
/// - OperandeInvalide  => marqueur d'erreur seul (pas d'erreur typée)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EchecReduction {
    DivisionParZero,
    OperandeInvalide,
}

/// Réduit la liste d'éléments en un seul texte de résultat (format compact).
///
/// Boucle tant qu'il reste du travail :
/// - si la liste active est réduite à un élément, on ré-injecte la queue
///   différée (bas de priorité remis à plus tard) ;
/// - si le triple suivant est prioritaire et pas le triple courant, on
///   diffère la paire courante (le signe de l'opérande de tête est replié
///   dans l'opérande différé, l'opérateur différé est toujours "+") ;
/// - sinon on replie les trois premiers éléments et on réinsère le résultat
///   formaté en tête.
pub fn reduire(elements: Vec<String>) -> Result<String, EchecReduction> {
    let mut actifs = elements;
    let mut differes: Vec<String> = Vec::new();

    while actifs.len() > 1 || !differes.is_empty() {
        if actifs.len() == 1 && !differes.is_empty() {
            actifs.append(&mut differes);
        }

        if actifs.len() > 3 && est_prioritaire(&actifs[3]) && !est_prioritaire(&actifs[1]) {
            differer_paire_non_prioritaire(&mut actifs, &mut differes);
        }

        let gauche =
            convertir_operande(&actifs[0]).ok_or(EchecReduction::OperandeInvalide)?;
        let droite =
            convertir_operande(&actifs[2]).ok_or(EchecReduction::OperandeInvalide)?;
        let operateur =
            Operateur::depuis_symbole(&actifs[1]).ok_or(EchecReduction::OperandeInvalide)?;

        let resultat = appliquer(operateur, gauche, droite)?;

        actifs.drain(..3);
        actifs.insert(0, format_compact(resultat));
    }

    Ok(actifs.into_iter().next().unwrap_or_default())
}

/// Met de côté la paire (opérande de tête, opérateur non prioritaire) pour
/// laisser le triple prioritaire remonter en tête.
///
/// Le signe est replié dans l'opérande différé ("1 - 2 * 3" diffère "+ 1"
/// puis fusionne "-" et "2" en "-2"). Si la tête est un "-" nu (placebo de
/// nombre négatif), c'est le drapeau de négation qui est différé.
fn differer_paire_non_prioritaire(actifs: &mut Vec<String>, differes: &mut Vec<String>) {
    let tete_negative = actifs[0] == Operateur::Moins.symbole();
    let signe = if tete_negative {
        Operateur::Moins
    } else {
        Operateur::Plus
    };
    differes.push(signe.symbole().to_string());

    if tete_negative {
        actifs[0].remove(0);
    }
    differes.push(actifs.remove(0));

    // L'opérateur restant en tête fusionne avec l'opérande qui le suit :
    // le triple prioritaire commence maintenant à l'index 0.
    let suite = actifs.remove(1);
    actifs[0].push_str(&suite);
}

fn appliquer(operateur: Operateur, gauche: f64, droite: f64) -> Result<f64, EchecReduction> {
    match operateur {
        Operateur::Plus => Ok(gauche + droite),
        Operateur::Moins => Ok(gauche - droite),
        Operateur::Multiplication => {
            // Court-circuit : un opérande nul (y compris "-0" textuel,
            // -0.0 == 0.0 en IEEE 754) force exactement 0.
            if gauche.is_zero() || droite.is_zero() {
                return Ok(0.0);
            }
            Ok(gauche * droite)
        }
        Operateur::Division => {
            if droite.is_zero() {
                return Err(EchecReduction::DivisionParZero);
            }
            Ok(gauche / droite)
        }
    }
}
