//! Generation prompt construction.
//!
//! The prompt is a pure function of the scenario selection: a narrative
//! template interpolated with the three selected option names, followed by
//! the fixed camera and technical directives. No I/O, no randomness; equal
//! selections always produce byte-identical prompts.

use crate::scenario::ScenarioSelection;

/// Fixed technical directives appended to every prompt. The camera rig,
/// resolution, and frame rate never vary between runs.
pub const TECHNICAL_DIRECTIVES: &str =
    "Observational realism, accidental discovery feel. 4K, 24fps, realistic skin texture. No music.";

/// Build the full generation prompt for a scenario selection.
pub fn build_prompt(selection: &ScenarioSelection) -> String {
    format!(
        "Raw, unedited found-footage of a {subject}. {behavior}. \
         Handheld consumer camera, unsteady grip, minor shake, occasional focus hunting, \
         hidden behind foliage at human eye level. \
         {lighting} filtered through dense prehistoric forest canopy, uneven exposure. \
         Massive size, heavy footsteps, tail shifting naturally. \
         Humid air, drifting fog, muddy terrain. {directives}",
        subject = selection.subject.display_name(),
        behavior = selection.behavior.display_name(),
        lighting = selection.lighting.display_name(),
        directives = TECHNICAL_DIRECTIVES,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{Behavior, Lighting, Subject};

    #[test]
    fn prompt_is_deterministic() {
        let selection = ScenarioSelection::new(
            Subject::Triceratops,
            Behavior::Grazing,
            Lighting::Dusk,
        );
        assert_eq!(build_prompt(&selection), build_prompt(&selection));
    }

    #[test]
    fn prompt_contains_selected_phrases_verbatim() {
        let selection = ScenarioSelection::new(
            Subject::Triceratops,
            Behavior::Grazing,
            Lighting::Dusk,
        );
        let prompt = build_prompt(&selection);
        assert!(prompt.contains("Triceratops"));
        assert!(prompt.contains("Grazing peacefully"));
        assert!(prompt.contains("Dusk with deep shadows"));
        assert!(prompt.ends_with(TECHNICAL_DIRECTIVES));
    }

    #[test]
    fn differing_selections_produce_differing_prompts() {
        let base = ScenarioSelection::default();
        let mut other = base;
        other.lighting = Lighting::GoldenHour;
        assert_ne!(build_prompt(&base), build_prompt(&other));

        let mut third = base;
        third.subject = Subject::Velociraptor;
        assert_ne!(build_prompt(&base), build_prompt(&third));
    }
}
