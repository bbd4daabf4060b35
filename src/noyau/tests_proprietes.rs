//! Tests de propriétés (campagne) : invariants + politiques + limites contrôlées.
//!
//! Notes (aligné avec l’état actuel du noyau) :
//! - Les jetons sont séparés par des espaces : "2+3" est UN segment (non numérique).
//! - Pas de moins unaire : un résultat négatif ne se relit pas comme expression.
//!   L’aller-retour texte est donc testé sur des résultats positifs ou nuls.
//! - ** est appliqué de gauche à droite, comme les autres opérateurs.

use std::time::{Duration, Instant};

use super::erreur::ErreurCalcul;
use super::eval_expression;
use super::format::format_nombre;
use super::jetons::PROFONDEUR_MAX;

fn eval_ok(expr: &str) -> f64 {
    eval_expression(expr)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
        .valeur
}

fn eval_err(expr: &str) -> ErreurCalcul {
    match eval_expression(expr) {
        Ok(ev) => panic!("expr={expr:?} devait échouer, obtenu {}", ev.valeur),
        Err(e) => e,
    }
}

fn assert_vaut(expr: &str, attendu: f64) {
    assert_eq!(eval_ok(expr), attendu, "expr={expr:?}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Ordre et précédence ------------------------ */

#[test]
fn prop_gauche_a_droite_plus_moins() {
    assert_vaut("10 - 3 - 2", 5.0);
    assert_vaut("10 - 3 + 2", 9.0);
    assert_vaut("1 + 2 - 3 + 4 - 5", -1.0);
}

#[test]
fn prop_precedence() {
    assert_vaut("2 + 3 * 4", 14.0);
    assert_vaut("2 * 3 + 4", 10.0);
    assert_vaut("2 + 3 ** 2 * 2", 20.0);
    assert_vaut("8 / 2 * 4", 16.0);
}

#[test]
fn prop_exposant_gauche_a_droite() {
    // (2 ** 3) ** 2, pas 2 ** (3 ** 2)
    assert_vaut("2 ** 3 ** 2", 64.0);
    assert_vaut("2 ** [3 ** 2]", 512.0);
}

/* ------------------------ Crochets ------------------------ */

#[test]
fn prop_crochet_equivaut_substitution() {
    let interieur = eval_ok("2 + 3");
    let avec_crochet = eval_ok("(2 + 3) * 4");
    let substitue = eval_ok(&format!("{} * 4", format_nombre(interieur)));
    assert_eq!(avec_crochet, 20.0);
    assert_eq!(avec_crochet, substitue);
}

#[test]
fn prop_crochets_imbriques() {
    assert_vaut("((1 + 2) * (3 + 4))", 21.0);
    assert_vaut("{[(1 + 1) * 2] + 1} * 2", 10.0);
}

#[test]
fn prop_multiplication_implicite() {
    assert_vaut("2(3)", 6.0);
    assert_vaut("2(3)(4)", 24.0);
    assert_vaut("1 + 2[3 + 1]", 9.0);
}

#[test]
fn prop_crochet_vide() {
    assert_vaut("()", 0.0);
    assert_vaut("5 + []", 5.0);
}

#[test]
fn prop_crochet_non_ferme() {
    assert!(matches!(
        eval_err("(1 + 2"),
        ErreurCalcul::CrochetNonFerme { ouvrant: '(', .. }
    ));
    assert!(matches!(
        eval_err("2 * {3 + (4)"),
        ErreurCalcul::CrochetNonFerme { ouvrant: '{', .. }
    ));
}

#[test]
fn prop_familles_melangees_non_corrigees() {
    // aucune “réparation” : la '(' n’a pas de ')' => non fermée
    assert!(matches!(
        eval_err("(1 + 2]"),
        ErreurCalcul::CrochetNonFerme { ouvrant: '(', .. }
    ));
    // familles différentes bien imbriquées : OK
    assert_vaut("[(1 + 2) * 2]", 6.0);
}

/* ------------------------ Dégradations silencieuses (base) ------------------------ */

#[test]
fn prop_division_par_zero() {
    let v = eval_ok("5 / 0");
    assert_eq!(v.to_bits(), 0.0_f64.to_bits());
    assert_vaut("1 + 5 / (2 - 2)", 1.0);
}

#[test]
fn prop_operateur_inconnu() {
    assert_vaut("7 % 2", 0.0);
    assert_vaut("7 ^ 2", 0.0);
}

/* ------------------------ Politiques d’erreur ------------------------ */

#[test]
fn prop_jetons_restants() {
    assert_eq!(
        eval_err("1 2 3"),
        ErreurCalcul::JetonsRestants { restants: 3 }
    );
}

#[test]
fn prop_operateur_sans_operande() {
    assert!(matches!(
        eval_err("- 3"),
        ErreurCalcul::OperateurSansOperande { .. }
    ));
    assert!(matches!(
        eval_err("(3 *)"),
        ErreurCalcul::OperateurSansOperande { .. }
    ));
}

#[test]
fn prop_variable_jamais_resolue() {
    assert!(matches!(
        eval_err("x * 2"),
        ErreurCalcul::OperandeNonNumerique { .. }
    ));
    assert!(matches!(
        eval_err("2(x)"),
        ErreurCalcul::OperandeNonNumerique { .. }
    ));
}

/* ------------------------ Aller-retour texte ------------------------ */

#[test]
fn prop_aller_retour_texte() {
    for expr in [
        "1 / 3",
        "2 ** 0.5",
        "(1 + 2) / 7",
        "10 ** 20",
        "0.1 + 0.2",
        "22 / 7 * 3",
        "5 / 0",
    ] {
        let v = eval_ok(expr);
        let relu = eval_ok(&format_nombre(v));
        assert_eq!(relu.to_bits(), v.to_bits(), "expr={expr:?} v={v}");
    }
}

/* ------------------------ Limites (bornées) ------------------------ */

#[test]
fn prop_imbrication_sous_la_limite() {
    let n = PROFONDEUR_MAX;
    let s = format!("{}1 + 1{}", "(".repeat(n), ")".repeat(n));
    assert_vaut(&s, 2.0);
}

#[test]
fn prop_imbrication_au_dela_de_la_limite() {
    let n = PROFONDEUR_MAX + 1;
    let s = format!("{}1{}", "[".repeat(n), "]".repeat(n));
    assert_eq!(
        eval_err(&s),
        ErreurCalcul::ImbricationTropProfonde {
            limite: PROFONDEUR_MAX
        }
    );
}

#[test]
fn prop_longue_chaine_bornee() {
    // temps linéaire : 20 000 termes doivent passer largement sous le budget
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let expr = vec!["1"; 20_000].join(" + ");
    assert_vaut(&expr, 20_000.0);
    budget(t0, max);

    let expr = vec!["2 * 3"; 5_000].join(" + ");
    assert_vaut(&expr, 30_000.0);
    budget(t0, max);

    let expr = vec!["2"; 200].join(" * ");
    assert_vaut(&expr, 2f64.powi(200));
    budget(t0, max);
}
