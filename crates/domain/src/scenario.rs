//! Scenario value objects - the three fixed option sets an operator picks from.
//!
//! Each option set is a closed enum, so an out-of-set value is unrepresentable.
//! String parsing (for UI dropdowns and environment overrides) goes through
//! `from_str`, which is case-insensitive on the display name.

/// Observation target species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    TyrannosaurusRex,
    Triceratops,
    Brachiosaurus,
    Velociraptor,
    Stegosaurus,
    Spinosaurus,
    Pterodactyl,
    Ankylosaurus,
}

impl Subject {
    /// All subjects, in display order.
    pub const ALL: [Subject; 8] = [
        Self::TyrannosaurusRex,
        Self::Triceratops,
        Self::Brachiosaurus,
        Self::Velociraptor,
        Self::Stegosaurus,
        Self::Spinosaurus,
        Self::Pterodactyl,
        Self::Ankylosaurus,
    ];

    /// Human-facing name, exactly as it appears in the generation prompt.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::TyrannosaurusRex => "Tyrannosaurus Rex",
            Self::Triceratops => "Triceratops",
            Self::Brachiosaurus => "Brachiosaurus",
            Self::Velociraptor => "Velociraptor",
            Self::Stegosaurus => "Stegosaurus",
            Self::Spinosaurus => "Spinosaurus",
            Self::Pterodactyl => "Pterodactyl",
            Self::Ankylosaurus => "Ankylosaurus",
        }
    }

    /// Parse from a display name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.display_name().eq_ignore_ascii_case(s.trim()))
    }
}

impl Default for Subject {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Observed behavior of the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Behavior {
    Grazing,
    Hunting,
    Drinking,
    WalkingInFog,
    Resting,
    Nesting,
    TerritorialDisplay,
}

impl Behavior {
    /// All behaviors, in display order.
    pub const ALL: [Behavior; 7] = [
        Self::Grazing,
        Self::Hunting,
        Self::Drinking,
        Self::WalkingInFog,
        Self::Resting,
        Self::Nesting,
        Self::TerritorialDisplay,
    ];

    /// Human-facing name, exactly as it appears in the generation prompt.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Grazing => "Grazing peacefully",
            Self::Hunting => "Hunting through dense ferns",
            Self::Drinking => "Drinking from a misty riverbed",
            Self::WalkingInFog => "Walking slowly through thick fog",
            Self::Resting => "Resting in a shaded hollow",
            Self::Nesting => "Nesting among giant ferns",
            Self::TerritorialDisplay => "Engaged in a territorial display",
        }
    }

    /// Parse from a display name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.display_name().eq_ignore_ascii_case(s.trim()))
    }
}

impl Default for Behavior {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl std::fmt::Display for Behavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Lighting conditions at the observation site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lighting {
    MorningSun,
    Dusk,
    OvercastMidday,
    GoldenHour,
}

impl Lighting {
    /// All lighting conditions, in display order.
    pub const ALL: [Lighting; 4] = [
        Self::MorningSun,
        Self::Dusk,
        Self::OvercastMidday,
        Self::GoldenHour,
    ];

    /// Human-facing name, exactly as it appears in the generation prompt.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::MorningSun => "Filtered morning sunlight",
            Self::Dusk => "Dusk with deep shadows",
            Self::OvercastMidday => "Overcast and humid midday",
            Self::GoldenHour => "Golden hour glow through canopy",
        }
    }

    /// Parse from a display name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.display_name().eq_ignore_ascii_case(s.trim()))
    }
}

impl Default for Lighting {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl std::fmt::Display for Lighting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The operator's current scenario choice.
///
/// Lives for the whole session; defaults to the first value of each option
/// set and is only ever changed by explicit selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScenarioSelection {
    pub subject: Subject,
    pub behavior: Behavior,
    pub lighting: Lighting,
}

impl ScenarioSelection {
    pub fn new(subject: Subject, behavior: Behavior, lighting: Lighting) -> Self {
        Self {
            subject,
            behavior,
            lighting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_first_options() {
        let selection = ScenarioSelection::default();
        assert_eq!(selection.subject, Subject::TyrannosaurusRex);
        assert_eq!(selection.behavior, Behavior::Grazing);
        assert_eq!(selection.lighting, Lighting::MorningSun);
    }

    #[test]
    fn option_sets_are_fixed_size() {
        assert_eq!(Subject::ALL.len(), 8);
        assert_eq!(Behavior::ALL.len(), 7);
        assert_eq!(Lighting::ALL.len(), 4);
    }

    #[test]
    fn parses_display_names_case_insensitively() {
        assert_eq!(Subject::from_str("triceratops"), Some(Subject::Triceratops));
        assert_eq!(
            Behavior::from_str("Grazing Peacefully"),
            Some(Behavior::Grazing)
        );
        assert_eq!(Lighting::from_str(" dusk with deep shadows "), Some(Lighting::Dusk));
        assert_eq!(Subject::from_str("Dragon"), None);
    }
}
