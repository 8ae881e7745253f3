//! Equation reference cards
//!
//! Each experiment carries a short list of governing equations and a
//! variable glossary. The lab has no widget toolkit, so cards are rendered
//! as plain text for logs and terminals.

/// An equation with its name and formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equation {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

/// Render a titled card with the equations followed by the variable glossary
pub fn format_equation_card(
    title: &str,
    equations: &[Equation],
    variables: &[(&str, &str)],
) -> String {
    let mut out = format!("== {title} ==\n");

    for eq in equations {
        out.push_str(&format!("  {}: {}\n", eq.name, eq.formula));
        out.push_str(&format!("      {}\n", eq.description));
    }

    if !variables.is_empty() {
        let width = variables
            .iter()
            .map(|(symbol, _)| symbol.chars().count())
            .max()
            .unwrap_or(0);

        out.push_str("  Variables:\n");
        for (symbol, meaning) in variables {
            let pad = width - symbol.chars().count();
            out.push_str(&format!("    {symbol}{:pad$}  {meaning}\n", ""));
        }
    }

    out
}
