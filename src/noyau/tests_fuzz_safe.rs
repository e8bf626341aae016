//! Fuzz safe frappe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le moteur de frappes aléatoires sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - nombre de frappes borné
//! - budget temps global
//! - les refus (opérateur mal placé, égal prématuré, index hors bornes)
//!   sont *normaux* ici : on vérifie seulement que le texte publié reste
//!   bien formé après chaque frappe.

use std::time::{Duration, Instant};

use super::moteur::{Moteur, MESSAGE_ERREUR, SIGNE_EGAL};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Invariants sur le texte publié ------------------------ */

fn verifier_texte(texte: &str) {
    // Jamais deux espaces consécutifs : les opérateurs sont espacés une fois.
    assert!(!texte.contains("  "), "double espace dans {texte:?}");

    // L'état d'erreur est exactement le marqueur, jamais un mélange.
    if texte.contains(MESSAGE_ERREUR) {
        assert_eq!(texte, MESSAGE_ERREUR);
    }

    // Si un résultat est présent, sa queue se relit comme un nombre.
    if let Some((_, resultat)) = texte.rsplit_once(&format!(" {SIGNE_EGAL} ")) {
        assert!(
            resultat.parse::<f64>().is_ok(),
            "résultat illisible dans {texte:?}"
        );
    }
}

/* ------------------------ Campagne ------------------------ */

/// Rejoue `frappes` frappes pseudo-aléatoires et rend le moteur final.
/// Mix : chiffres 0..=9, opérateur par index 0..=4 (4 = index invalide,
/// exprès), égal, effacement.
fn campagne(seed: u64, frappes: usize) -> Moteur {
    let mut rng = Rng::new(seed);
    let mut moteur = Moteur::default();

    for _ in 0..frappes {
        let tirage = rng.pick(14);
        match tirage {
            0..=9 => moteur.ajouter_chiffre(&tirage.to_string()),
            10 | 11 => moteur.ajouter_operateur_par_index(rng.pick(5) as usize),
            12 => moteur.evaluer(),
            _ => moteur.effacer(),
        }
        verifier_texte(moteur.operation());
    }

    moteur
}

#[test]
fn fuzz_texte_bien_forme_sur_vingt_seeds() {
    let start = Instant::now();
    for seed in 1..=20 {
        let _ = campagne(seed, 400);
        budget(start, Duration::from_secs(10));
    }
}

#[test]
fn fuzz_deterministe_meme_seed_meme_texte() {
    let a = campagne(42, 600);
    let b = campagne(42, 600);
    assert_eq!(a.operation(), b.operation());
}

#[test]
fn fuzz_toujours_recuperable_par_une_frappe() {
    // Quel que soit l'état final (résultat, erreur, saisie), effacer puis
    // un chiffre repart proprement.
    for seed in [7, 99, 123_456] {
        let mut moteur = campagne(seed, 300);
        moteur.effacer();
        moteur.ajouter_chiffre("7");
        assert_eq!(moteur.operation(), "7");
    }
}
