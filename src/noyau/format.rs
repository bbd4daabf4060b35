// src/noyau/format.rs
//
// Affichage du résultat :
// - format_nombre   : écriture décimale la plus courte qui relit exactement le f64
// - format_lecture  : nombre fixe de décimales
// - format_fraction : plus simple p/q (q borné) dont le f64 le plus proche est EXACTEMENT v

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Dénominateur maximal de la lecture fractionnaire.
pub const DENOMINATEUR_MAX: u32 = 1_000_000;

/// Garde-fou : nombre de termes de fraction continue examinés.
const MAX_TERMES: usize = 64;

pub fn format_nombre(v: f64) -> String {
    format!("{v}")
}

pub fn format_lecture(v: f64, digits: usize) -> String {
    format!("{v:.digits$}")
}

fn format_rat_pretty(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/// Lecture fractionnaire : None si entier, non fini, ou si aucune fraction
/// de dénominateur ≤ DENOMINATEUR_MAX ne retombe exactement sur `v`.
pub fn format_fraction(v: f64) -> Option<String> {
    fraction_simple(v).map(|r| format_rat_pretty(&r))
}

/// Réduites successives de la fraction continue de |v| :
/// la première qui se reconvertit en `v` est la plus simple.
fn fraction_simple(v: f64) -> Option<BigRational> {
    let exact = BigRational::from_float(v)?;
    if exact.is_integer() {
        return None;
    }

    let borne = BigInt::from(DENOMINATEUR_MAX);
    let negatif = exact.is_negative();
    let mut reste = exact.abs();

    // h(-2)=0, h(-1)=1 ; k(-2)=1, k(-1)=0
    let (mut h0, mut h1) = (BigInt::zero(), BigInt::one());
    let (mut k0, mut k1) = (BigInt::one(), BigInt::zero());

    for _ in 0..MAX_TERMES {
        let a = reste.floor().to_integer();

        let h2 = &a * &h1 + &h0;
        let k2 = &a * &k1 + &k0;
        if k2 > borne {
            return None;
        }

        let mut candidat = BigRational::new(h2.clone(), k2.clone());
        if negatif {
            candidat = -candidat;
        }
        if candidat.to_f64() == Some(v) {
            return Some(candidat);
        }

        let frac = &reste - BigRational::from_integer(a);
        if frac.is_zero() {
            return None;
        }
        reste = frac.recip();

        h0 = h1;
        h1 = h2;
        k0 = k1;
        k1 = k2;
    }

    None
}
