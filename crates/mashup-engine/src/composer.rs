//! Natural-language description of a selection.
//!
//! The sentence follows a fixed template:
//!
//! ```text
//! For {persona}, who struggle with {problem}, we're building a {format | solution}
//! using {technology} [that {action_verb}s their workflow ]with a {business_model} model
//! [, focusing on {trend} principles].
//! ```
//!
//! Everything except the technology is lower-cased. The channel never appears.

use mashup_core::Selection;

/// Compose the idea description for a selection.
pub fn compose_description(selection: &Selection) -> String {
    let mut description = format!(
        "For {}, who struggle with {}, ",
        selection.persona.to_lowercase(),
        selection.problem.to_lowercase()
    );

    match &selection.format {
        Some(format) => {
            description.push_str(&format!("we're building a {} ", format.to_lowercase()))
        }
        None => description.push_str("we're building a solution "),
    }

    description.push_str(&format!("using {} ", selection.technology));

    // Plain "s" suffix, no pluralization rules.
    if let Some(verb) = &selection.action_verb {
        description.push_str(&format!("that {}s their workflow ", verb.to_lowercase()));
    }

    description.push_str(&format!(
        "with a {} model",
        selection.business_model.to_lowercase()
    ));

    if let Some(trend) = &selection.trend {
        description.push_str(&format!(", focusing on {} principles", trend.to_lowercase()));
    }

    description.push('.');
    description
}
