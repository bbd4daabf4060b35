// src/noyau/reduction.rs
//
// Réduction par précédence
// ------------------------
// Règle :
// - le premier opérateur (de gauche à droite) de plus forte précédence est appliqué
// - x op y remplacés par un seul jeton Valeur (nouvelle suite, jamais d’édition en place)
// jusqu’à ce qu’il ne reste plus d’opérateur.
// Réalisé par un passage linéaire par niveau de précédence (voir `reduire`).
//
// Gauche à droite à précédence égale, y compris pour ** :
// "2 ** 3 ** 2" = (2 ** 3) ** 2 = 64.

use super::erreur::ErreurCalcul;
use super::jetons::Jeton;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Soustraction,
    Multiplication,
    Division,
    Exposant,
    Aucune,
}

impl Operation {
    /// Table des opérations. Texte inconnu => Aucune.
    pub fn depuis_texte(texte: &str) -> Self {
        match texte {
            "+" => Operation::Addition,
            "-" => Operation::Soustraction,
            "*" => Operation::Multiplication,
            "/" => Operation::Division,
            "**" => Operation::Exposant,
            _ => Operation::Aucune,
        }
    }

    /// x op y.
    /// Division par zéro => 0.0 ; opération inconnue => 0.0 (jamais d’erreur ici).
    pub fn appliquer(self, x: f64, y: f64) -> f64 {
        match self {
            Operation::Addition => x + y,
            Operation::Soustraction => x - y,
            Operation::Multiplication => x * y,
            Operation::Division => {
                if y != 0.0 {
                    x / y
                } else {
                    0.0
                }
            }
            Operation::Exposant => x.powf(y),
            Operation::Aucune => 0.0,
        }
    }
}

/// Réduit une suite de jetons à un nombre.
///
/// - suite vide => 0.0
/// - un seul jeton restant => sa valeur
/// - plusieurs jetons restants => erreur (pas de résultat partiel)
pub fn evaluer(jetons: &[Jeton]) -> Result<f64, ErreurCalcul> {
    reduire(jetons, None)
}

/// Comme `evaluer`, en ajoutant une ligne `x op y = r` par réduction dans `etapes`.
pub fn evaluer_trace(jetons: &[Jeton], etapes: &mut String) -> Result<f64, ErreurCalcul> {
    reduire(jetons, Some(etapes))
}

/// Un passage par niveau de précédence, du plus fort au plus faible.
///
/// Dans un passage, chaque opérateur du niveau est plié avec ses voisins, de gauche
/// à droite, dans une NOUVELLE suite. Une valeur pliée a la précédence -1 : elle ne
/// change jamais l’opérateur suivant, c’est donc le même ordre d’application que
/// “premier opérateur de précédence max” répété. Coût : O(n × niveaux).
fn reduire(jetons: &[Jeton], mut etapes: Option<&mut String>) -> Result<f64, ErreurCalcul> {
    // copie privée : la suite de l’appelant n’est jamais touchée
    let mut courant: Vec<Jeton> = jetons.to_vec();

    for niveau in niveaux(&courant) {
        let mut out: Vec<Jeton> = Vec::with_capacity(courant.len());
        let mut reste = courant.into_iter();

        while let Some(jeton) = reste.next() {
            if !(jeton.est_operateur() && jeton.precedence() == niveau) {
                out.push(jeton);
                continue;
            }

            // index de l’opérateur dans la suite courante (tout ce qui précède est déjà plié)
            let index = out.len();
            let (Some(gauche), Some(droite)) = (out.pop(), reste.next()) else {
                return Err(ErreurCalcul::OperateurSansOperande {
                    operateur: jeton.texte().to_string(),
                    index,
                });
            };

            let x = gauche.nombre()?;
            let y = droite.nombre()?;
            let op = jeton.texte();
            let r = Operation::depuis_texte(op).appliquer(x, y);

            log::debug!("réduction: {x} {op} {y} = {r}");
            if let Some(e) = etapes.as_deref_mut() {
                push_etape(e, &format!("{x} {op} {y} = {r}"));
            }

            out.push(Jeton::valeur(r));
        }

        courant = out;
    }

    match courant.as_slice() {
        [] => Ok(0.0),
        [seul] => seul.nombre(),
        reste => Err(ErreurCalcul::JetonsRestants {
            restants: reste.len(),
        }),
    }
}

/// Précédences distinctes des opérateurs présents, de la plus forte à la plus faible.
fn niveaux(jetons: &[Jeton]) -> Vec<i32> {
    let mut niveaux: Vec<i32> = jetons
        .iter()
        .filter(|j| j.est_operateur())
        .map(Jeton::precedence)
        .collect();
    niveaux.sort_unstable_by(|a, b| b.cmp(a));
    niveaux.dedup();
    niveaux
}

fn push_etape(etapes: &mut String, ligne: &str) {
    if !etapes.is_empty() {
        etapes.push('\n');
    }
    etapes.push_str(ligne);
}
