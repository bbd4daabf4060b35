//! Noyau — évaluation (pipeline réel)
//!
//! tokenize (crochets réduits au passage) -> réduction par précédence -> valeur
//!
//! Le noyau n’affiche rien : la démarche est rendue sous forme de texte,
//! l’appelant décide quoi en faire.

use super::erreur::ErreurCalcul;
use super::jetons::{format_tokens, tokenize};
use super::reduction::evaluer_trace;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub etapes: String,
    pub note: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    pub demarche: DemarcheNoyau,
}

/// API publique : évalue une expression (déjà “trimée” par l’appelant).
///
/// Entrée vide => 0.0 (le refus d’une entrée vide appartient à la session).
/// Un crochet non fermé arrête tout avant la réduction.
pub fn eval_expression(expression: &str) -> Result<Evaluation, ErreurCalcul> {
    // 1) Jetons (les sous-expressions sont déjà des valeurs)
    let jetons = tokenize(expression)?;
    let jetons_txt = format_tokens(&jetons);
    log::debug!("jetons: {jetons_txt}");

    // 2) Réduction
    let mut etapes = String::new();
    let valeur = evaluer_trace(&jetons, &mut etapes)?;

    // 3) Démarche
    let demarche = DemarcheNoyau {
        jetons: jetons_txt,
        etapes,
        note: "Pipeline: jetons (crochets réduits au passage) → réduction par précédence (** > * / > + -, gauche à droite) → valeur.".into(),
    };

    Ok(Evaluation { valeur, demarche })
}
