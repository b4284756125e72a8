//! Prebuilt dictionaries of mathematical constants.

use intrel_real::constants::{self, constant};
use intrel_real::Real;

use crate::dictionary::Dictionary;

/// π, e, √2 and ln 2. Small enough to search at double precision.
#[must_use]
pub fn small_dictionary<T: Real>() -> Dictionary<T> {
    let mut d = Dictionary::new();
    d.insert_positive(constant::<T>(constants::PI), "π");
    d.insert_positive(constant::<T>(constants::E), "e");
    d.insert_positive(T::sqrt2(), "√2");
    d.insert_positive(T::ln2(), "ln(2)");
    d
}

/// The curated table of constants used by [`identify`](fn@crate::identify).
///
/// Contains powers, reciprocals, logarithms and exponentials of the
/// Euler-Mascheroni constant γ, Apéry's constant ζ(3), π, e, Catalan's G,
/// the Glaisher-Kinkelin constant A, Khinchin's K₀ and the omega constant
/// Ω, together with small square roots, logarithms of the primes up to 19,
/// ln φ and exp φ. Values that come out non-positive or non-finite at the
/// working precision are left out.
///
/// Searching all of it needs far more than double precision.
#[must_use]
pub fn standard_dictionary<T: Real>() -> Dictionary<T> {
    let mut d = Dictionary::new();
    let int = |n: i64| T::from_i64(n);
    let one = T::one;

    let gamma: T = constant(constants::EULER_GAMMA);
    d.insert_positive(gamma.clone(), "γ");
    d.insert_positive(gamma.powu(2), "γ²");
    d.insert_positive(gamma.powu(3), "γ³");
    d.insert_positive(one() / gamma.clone(), "1/γ");
    d.insert_positive(one() / gamma.powu(2), "1/γ²");
    d.insert_positive(one() / gamma.powu(3), "1/γ³");
    d.insert_positive(-gamma.ln(), "-ln(γ)");
    d.insert_positive(gamma.exp(), "exp(γ)");

    let zeta3: T = constant(constants::ZETA_THREE);
    d.insert_positive(zeta3.sqrt(), "√ζ(3)");
    d.insert_positive(zeta3.clone(), "ζ(3)");
    d.insert_positive(one() / zeta3.clone(), "1/ζ(3)");
    d.insert_positive(one() / zeta3.powu(2), "1/ζ(3)²");
    d.insert_positive(one() / zeta3.powu(3), "1/ζ(3)³");
    d.insert_positive(zeta3.ln(), "ln(ζ(3))");
    d.insert_positive(zeta3.exp(), "exp(ζ(3))");
    d.insert_positive(zeta3.powu(2), "ζ(3)²");
    d.insert_positive(zeta3.powu(3), "ζ(3)³");
    d.insert_positive(zeta3.powu(4), "ζ(3)⁴");

    let pi: T = constant(constants::PI);
    d.insert_positive(pi.clone(), "π");
    d.insert_positive(one() / pi.clone(), "1/π");
    d.insert_positive(one() / pi.powu(2), "1/π²");
    d.insert_positive(pi.sqrt(), "√π");
    d.insert_positive(pi.powf(&(one() / int(3))), "∛π");
    d.insert_positive(pi.ln(), "ln(π)");
    d.insert_positive(pi.powu(2), "π²");
    d.insert_positive(pi.powu(3), "π³");

    let e: T = constant(constants::E);
    d.insert_positive(e.clone(), "e");
    d.insert_positive(e.sqrt(), "√e");
    for n in [2, 3, 5, 7, 11] {
        d.insert_positive(int(n).sqrt(), format!("√{n}"));
    }

    // φ itself is a rational combination of 1 and √5; its logarithm is not.
    let phi: T = constant(constants::PHI);
    d.insert_positive(phi.ln(), "ln(φ)");
    d.insert_positive(phi.exp(), "exp(φ)");

    let catalan: T = constant(constants::CATALAN);
    d.insert_positive(catalan.clone(), "G");
    d.insert_positive(catalan.powu(2), "G²");
    d.insert_positive(one() / catalan.clone(), "1/G");
    d.insert_positive(-catalan.ln(), "-ln(G)");
    d.insert_positive(catalan.exp(), "exp(G)");
    d.insert_positive(catalan.sqrt(), "√G");

    let glaisher: T = constant(constants::GLAISHER);
    d.insert_positive(glaisher.clone(), "A");
    d.insert_positive(glaisher.powu(2), "A²");
    d.insert_positive(one() / glaisher.clone(), "1/A");
    d.insert_positive(glaisher.ln(), "ln(A)");
    d.insert_positive(glaisher.exp(), "exp(A)");

    let khinchin: T = constant(constants::KHINCHIN);
    d.insert_positive(khinchin.clone(), "K₀");
    d.insert_positive(khinchin.ln(), "ln(K₀)");
    d.insert_positive(khinchin.exp(), "exp(K₀)");
    d.insert_positive(one() / khinchin.clone(), "1/K₀");
    d.insert_positive(khinchin.powu(2), "K₀²");

    d.insert_positive(int(2).ln(), "ln(2)");
    d.insert_positive(-int(2).ln().ln(), "-ln(ln(2))");
    for p in [3, 5, 7, 11, 13, 17, 19] {
        d.insert_positive(int(p).ln(), format!("ln({p})"));
    }

    let omega: T = constant(constants::OMEGA);
    d.insert_positive(omega.clone(), "Ω");
    d.insert_positive(omega.powu(2), "Ω²");
    d.insert_positive(one() / omega, "1/Ω");

    d
}
