// src/noyau/format.rs

use num_traits::Zero;

/// Précision du format compact (équivalent "%g" C : 6 chiffres significatifs).
const CHIFFRES_SIGNIFICATIFS: usize = 6;

/* ------------------------ Texte -> f64 ------------------------ */

/// Conversion d'un élément en opérande f64 pour la réduction.
///
/// Refuse les valeurs non représentables : en Rust, un numéral trop long
/// (ex: 309 fois "9") parse vers ±inf au lieu d'échouer — on le rejette
/// explicitement pour que la réduction bascule sur le marqueur d'erreur.
pub fn convertir_operande(texte: &str) -> Option<f64> {
    texte.parse::<f64>().ok().filter(|v| v.is_finite())
}

/* ------------------------ f64 -> texte compact ------------------------ */

/// Format compact façon "%g" : 6 chiffres significatifs, zéros de queue
/// et point final retirés, notation scientifique (exposant signé sur deux
/// chiffres) quand l'exposant décimal sort de [-4, 6).
pub fn format_compact(valeur: f64) -> String {
    if valeur.is_zero() {
        // -0.0 garde son signe (quotient 0/-n), comme "%g".
        return if valeur.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Normalisation d.ddddd e±x, arrondi compris (y compris le report 9.99999→10).
    let scientifique = format!("{:.*e}", CHIFFRES_SIGNIFICATIFS - 1, valeur);
    let Some((mantisse, exposant_txt)) = scientifique.split_once('e') else {
        return scientifique;
    };
    let Ok(exposant) = exposant_txt.parse::<i32>() else {
        return scientifique;
    };

    let signe = if mantisse.starts_with('-') { "-" } else { "" };
    let chiffres: String = mantisse.chars().filter(char::is_ascii_digit).collect();

    if exposant < -4 || exposant >= CHIFFRES_SIGNIFICATIFS as i32 {
        let utiles = chiffres.trim_end_matches('0');
        let (tete, queue) = utiles.split_at(1);
        return if queue.is_empty() {
            format!("{signe}{tete}e{exposant:+03}")
        } else {
            format!("{signe}{tete}.{queue}e{exposant:+03}")
        };
    }

    if exposant >= 0 {
        let coupure = exposant as usize + 1;
        let entiere = &chiffres[..coupure];
        let fraction = chiffres[coupure..].trim_end_matches('0');
        if fraction.is_empty() {
            format!("{signe}{entiere}")
        } else {
            format!("{signe}{entiere}.{fraction}")
        }
    } else {
        let zeros = "0".repeat((-exposant) as usize - 1);
        let fraction_complete = format!("{zeros}{chiffres}");
        let fraction = fraction_complete.trim_end_matches('0');
        format!("{signe}0.{fraction}")
    }
}
