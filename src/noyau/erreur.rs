//! Noyau — erreurs.
//!
//! Une seule taxonomie pour tout le noyau (jetons + réduction).
//! Choix de politique :
//! - division par zéro / opérateur inconnu => PAS d’erreur (0.0, comportement de base)
//! - opérateur en bordure / jetons restants => erreur explicite (pas de résultat “au hasard”)

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErreurCalcul {
    /// Crochet ouvert jamais refermé (même famille) avant la fin de l’entrée.
    CrochetNonFerme {
        ouvrant: char,
        /// Position (en caractères) dans l’entrée de départ.
        position: usize,
    },

    /// Jeton Valeur/Variable dont le texte n’est pas un nombre (ex: `x`, `2+3`).
    OperandeNonNumerique { texte: String },

    /// Opérateur sans opérande à gauche ou à droite.
    OperateurSansOperande { operateur: String, index: usize },

    /// Réduction terminée avec plus d’un jeton (ex: `2 3`).
    JetonsRestants { restants: usize },

    /// Garde-fou : imbrication de crochets au-delà de la limite.
    ImbricationTropProfonde { limite: usize },
}

impl fmt::Display for ErreurCalcul {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CrochetNonFerme { ouvrant, position } => {
                write!(f, "crochet '{ouvrant}' non fermé (position {position})")
            }
            Self::OperandeNonNumerique { texte } => {
                write!(f, "opérande non numérique: '{texte}'")
            }
            Self::OperateurSansOperande { operateur, index } => write!(
                f,
                "expression invalide: opérateur '{operateur}' sans opérande (jeton {index})"
            ),
            Self::JetonsRestants { restants } => write!(
                f,
                "expression invalide: {restants} jetons restants après réduction"
            ),
            Self::ImbricationTropProfonde { limite } => {
                write!(f, "imbrication trop profonde (limite: {limite})")
            }
        }
    }
}

impl std::error::Error for ErreurCalcul {}
