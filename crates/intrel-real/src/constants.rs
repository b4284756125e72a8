//! Mathematical constants as decimal expansions.
//!
//! Each constant carries 120 significant digits, enough for a
//! `BigFloat` of roughly 390 bits. Types with more precision than that
//! get the constant rounded at the 120th digit.
//!
//! Use [`Real::from_decimal`](crate::Real::from_decimal) or [`constant`] to
//! obtain a value at a given type.

use crate::traits::Real;

/// π.
pub const PI: &str =
    "3.14159265358979323846264338327950288419716939937510582097494459230781640628620899862803482534211706798214808651328230665";

/// Euler's number e.
pub const E: &str =
    "2.71828182845904523536028747135266249775724709369995957496696762772407663035354759457138217852516642742746639193200305992";

/// The Euler–Mascheroni constant γ.
pub const EULER_GAMMA: &str =
    "0.577215664901532860606512090082402431042159335939923598805767234884867726777664670936947063291746749514631447249807082481";

/// Apéry's constant ζ(3).
pub const ZETA_THREE: &str =
    "1.20205690315959428539973816151144999076498629234049888179227155534183820578631309018645587360933525814619915779526071942";

/// Catalan's constant G.
pub const CATALAN: &str =
    "0.915965594177219015054603514932384110774149374281672134266498119621763019776254769479356512926115106248574422619196199579";

/// The Glaisher–Kinkelin constant A.
pub const GLAISHER: &str =
    "1.28242712910062263687534256886979172776768892732500119206374002174040630885882646112973649195820237439420646120399000749";

/// Khinchin's constant K₀.
pub const KHINCHIN: &str =
    "2.68545200106530644530971483548179569382038229399446295305115234555721885953715200280114117493184769799515346590528809008";

/// The omega constant Ω = W₀(1).
pub const OMEGA: &str =
    "0.567143290409783872999968662210355549753815787186512508135131079223045793086684566693219446961752294557638024972866789785";

/// The golden ratio φ.
pub const PHI: &str =
    "1.61803398874989484820458683436563811772030917980576286213544862270526046281890244970720720418939113748475408807538689175";

/// Parses a constant from this table at the precision of `T`.
///
/// # Panics
///
/// Panics if `digits` is not a decimal expansion. Every constant in this
/// module parses.
#[must_use]
pub fn constant<T: Real>(digits: &str) -> T {
    T::from_decimal(digits).unwrap_or_else(|| panic!("not a decimal constant: {digits}"))
}
