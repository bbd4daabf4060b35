//! Noyau d’évaluation (précédence + crochets)
//!
//! Organisation interne :
//! - erreur.rs    : taxonomie des erreurs
//! - jetons.rs    : Jeton + table des précédences + tokenisation (crochets réduits au passage)
//! - reduction.rs : table des opérations + réduction par précédence
//! - eval.rs      : pipeline complet + démarche
//! - format.rs    : affichage du résultat (décimal, digits, fraction)
//!
//! jetons.rs et reduction.rs sont mutuellement récursifs :
//! un crochet est tokenisé, réduit, puis remis dans la suite comme une seule Valeur.

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod reduction;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use eval::eval_expression;
