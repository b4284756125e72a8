//! Human-readable reports of dictionary relations.

use std::fmt::Write;

use intrel_pslq::relation::write_combination;
use intrel_pslq::Relation;
use intrel_real::Real;

use crate::dictionary::Dictionary;

/// Renders a relation found among the values of `dictionary`:
///
/// ```text
/// As
///     c₀⋅v₀ ± |c₁|⋅v₁ … = Σ,
/// it is likely that
///     c₀⋅s₀ ± |c₁|⋅s₁ … = 0.
/// ```
///
/// where the `vᵢ` are values and the `sᵢ` their symbols. Each line is
/// indented with a tab.
#[must_use]
pub fn render_relation<T: Real>(dictionary: &Dictionary<T>, relation: &Relation<T>) -> String {
    let mut out = String::from("As\n\t");
    // Writing into a String cannot fail.
    let _ = write_combination(&mut out, relation.terms(), |term| term.value.clone());
    let _ = write!(out, " = {},\nit is likely that\n\t", relation.residual());
    let _ = write_combination(&mut out, relation.terms(), |term| {
        dictionary.symbol(term.index).unwrap_or("?").to_owned()
    });
    out.push_str(" = 0.");
    out
}
