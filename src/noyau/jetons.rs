// src/noyau/jetons.rs
//
// Jetons + tokenisation
// ---------------------
// - Découpage par espaces (un segment = un jeton)
// - Crochets ( [ { : le contenu est tokenisé PUIS réduit tout de suite (récursif),
//   et la valeur obtenue revient dans la suite comme un seul jeton Valeur
// - Multiplication implicite : "2(3)" => 2 * 3
//
// NOTE: seule la profondeur de la MÊME famille est suivie.
// "(1 + 2]" n’est pas diagnostiqué comme mélange : la '(' reste simplement non fermée.

use std::fmt;

use super::erreur::ErreurCalcul;
use super::reduction::evaluer;

/// Garde-fou : profondeur maximale de crochets imbriqués.
pub const PROFONDEUR_MAX: usize = 256;

/// Précédence des jetons qui ne sont pas des opérateurs.
pub const SANS_PRECEDENCE: i32 = -1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Genre {
    Valeur,
    Variable,
    Operateur,
    #[default]
    Vide,
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Genre::Valeur => "Valeur",
            Genre::Variable => "Variable",
            Genre::Operateur => "Opérateur",
            Genre::Vide => "Vide",
        };
        f.write_str(s)
    }
}

/// Jeton immuable : les champs sont fixés à la construction.
/// La réduction remplace des jetons, elle n’en modifie jamais.
#[derive(Clone, Debug, PartialEq)]
pub struct Jeton {
    texte: String,
    genre: Genre,
    precedence: i32,
}

impl Default for Jeton {
    /// Jeton sentinelle (aucun opérateur).
    fn default() -> Self {
        Self {
            texte: String::new(),
            genre: Genre::Vide,
            precedence: SANS_PRECEDENCE,
        }
    }
}

impl Jeton {
    /// Jeton Valeur portant un nombre déjà calculé.
    /// Le texte est la plus courte écriture décimale qui relit exactement `x`.
    pub fn valeur(x: f64) -> Self {
        Self {
            texte: format!("{x}"),
            genre: Genre::Valeur,
            precedence: SANS_PRECEDENCE,
        }
    }

    pub fn operateur(texte: &str) -> Self {
        Self {
            texte: texte.to_string(),
            genre: Genre::Operateur,
            precedence: precedence(texte),
        }
    }

    /// Classe un segment par son premier caractère.
    /// Segment vide => aucun jeton.
    pub fn depuis_segment(segment: &str) -> Option<Self> {
        let premier = segment.chars().next()?;

        let jeton = if premier.is_ascii_digit() {
            Self {
                texte: segment.to_string(),
                genre: Genre::Valeur,
                precedence: SANS_PRECEDENCE,
            }
        } else if premier.is_alphabetic() {
            Self {
                texte: segment.to_string(),
                genre: Genre::Variable,
                precedence: SANS_PRECEDENCE,
            }
        } else {
            Self::operateur(segment)
        };

        Some(jeton)
    }

    pub fn texte(&self) -> &str {
        &self.texte
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn precedence(&self) -> i32 {
        self.precedence
    }

    pub fn est_operateur(&self) -> bool {
        self.genre == Genre::Operateur
    }

    /// Conversion numérique (Valeur ou Variable).
    /// Pas de coercition silencieuse : un texte illisible est une erreur.
    pub fn nombre(&self) -> Result<f64, ErreurCalcul> {
        self.texte
            .parse::<f64>()
            .map_err(|_| ErreurCalcul::OperandeNonNumerique {
                texte: self.texte.clone(),
            })
    }
}

/// Table des précédences (fixe). Texte inconnu => 0 (plus faible, jamais de panique).
pub fn precedence(operateur: &str) -> i32 {
    match operateur {
        "+" | "-" => 1,
        "*" | "/" => 2,
        "**" => 3,
        _ => 0,
    }
}

/// Familles de crochets : ouvrant -> fermant.
fn fermant_de(c: char) -> Option<char> {
    match c {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

/// Tokenise une expression (déjà “trimée” par l’appelant).
///
/// Les sous-expressions entre crochets sont évaluées pendant le balayage :
/// la suite rendue ne contient donc jamais de crochet.
pub fn tokenize(expression: &str) -> Result<Vec<Jeton>, ErreurCalcul> {
    let chars: Vec<char> = expression.chars().collect();
    tokenize_tranche(&chars, 0, 0)
}

/// `decalage` : position de `chars[0]` dans l’entrée de départ (pour les messages).
fn tokenize_tranche(
    chars: &[char],
    decalage: usize,
    profondeur: usize,
) -> Result<Vec<Jeton>, ErreurCalcul> {
    if profondeur > PROFONDEUR_MAX {
        return Err(ErreurCalcul::ImbricationTropProfonde {
            limite: PROFONDEUR_MAX,
        });
    }

    let mut out: Vec<Jeton> = Vec::new();
    let mut segment = String::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Crochet ouvrant : sous-expression
        if let Some(fermant) = fermant_de(c) {
            vider_segment(&mut segment, &mut out);

            // multiplication implicite : valeur/variable suivie d’un crochet
            if out.last().is_some_and(|j| !j.est_operateur()) {
                out.push(Jeton::operateur("*"));
            }

            let fin = trouver_fermant(chars, i, c, fermant).ok_or(
                ErreurCalcul::CrochetNonFerme {
                    ouvrant: c,
                    position: decalage + i,
                },
            )?;

            let interieur = tokenize_tranche(&chars[i + 1..fin], decalage + i + 1, profondeur + 1)?;
            let valeur = evaluer(&interieur)?;
            log::debug!(
                "sous-expression {:?} = {valeur}",
                chars[i + 1..fin].iter().collect::<String>()
            );

            out.push(Jeton::valeur(valeur));
            i = fin + 1;
            continue;
        }

        if c.is_whitespace() {
            vider_segment(&mut segment, &mut out);
            i += 1;
            continue;
        }

        segment.push(c);
        i += 1;
    }

    vider_segment(&mut segment, &mut out);
    Ok(out)
}

fn vider_segment(segment: &mut String, out: &mut Vec<Jeton>) {
    if let Some(j) = Jeton::depuis_segment(segment) {
        out.push(j);
    }
    segment.clear();
}

/// Cherche le fermant correspondant à `chars[debut]`.
/// Compteur de profondeur : +1 sur un ouvrant de la même famille, -1 sur un fermant ;
/// le bon fermant est celui qui fait passer le compteur sous zéro.
fn trouver_fermant(chars: &[char], debut: usize, ouvrant: char, fermant: char) -> Option<usize> {
    let mut profondeur: i32 = 0;

    for (k, &c) in chars.iter().enumerate().skip(debut + 1) {
        if c == ouvrant {
            profondeur += 1;
        } else if c == fermant {
            profondeur -= 1;
            if profondeur < 0 {
                return Some(k);
            }
        }
    }

    None
}

/// Format utilitaire (démarche) : `texte:Genre` séparés par des espaces.
pub fn format_tokens(tokens: &[Jeton]) -> String {
    tokens
        .iter()
        .map(|j| format!("{}:{}", j.texte(), j.genre()))
        .collect::<Vec<_>>()
        .join(" ")
}
