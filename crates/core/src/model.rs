use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(anyhow!("Unknown theme '{}': expected light|dark", other)),
        }
    }
}

/// Named accent color variant shared by goals and the app-wide accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKey {
    Blue,
    Violet,
    Emerald,
    Rose,
}

impl PaletteKey {
    pub const ALL: [PaletteKey; 4] = [
        PaletteKey::Blue,
        PaletteKey::Violet,
        PaletteKey::Emerald,
        PaletteKey::Rose,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteKey::Blue => "blue",
            PaletteKey::Violet => "violet",
            PaletteKey::Emerald => "emerald",
            PaletteKey::Rose => "rose",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            PaletteKey::Blue => (0x3b, 0x82, 0xf6),
            PaletteKey::Violet => (0x8b, 0x5c, 0xf6),
            PaletteKey::Emerald => (0x10, 0xb9, 0x81),
            PaletteKey::Rose => (0xf4, 0x3f, 0x5e),
        }
    }

    pub fn next(self) -> Self {
        match self {
            PaletteKey::Blue => PaletteKey::Violet,
            PaletteKey::Violet => PaletteKey::Emerald,
            PaletteKey::Emerald => PaletteKey::Rose,
            PaletteKey::Rose => PaletteKey::Blue,
        }
    }
}

impl fmt::Display for PaletteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaletteKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blue" => Ok(PaletteKey::Blue),
            "violet" => Ok(PaletteKey::Violet),
            "emerald" => Ok(PaletteKey::Emerald),
            "rose" => Ok(PaletteKey::Rose),
            other => Err(anyhow!(
                "Unknown palette key '{}': expected blue|violet|emerald|rose",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Amazing,
    Happy,
    Neutral,
    Sad,
    Stressed,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Amazing,
        Mood::Happy,
        Mood::Neutral,
        Mood::Sad,
        Mood::Stressed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Amazing => "amazing",
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
            Mood::Sad => "sad",
            Mood::Stressed => "stressed",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Amazing => "🤩",
            Mood::Happy => "😊",
            Mood::Neutral => "😐",
            Mood::Sad => "😔",
            Mood::Stressed => "😰",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mood {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "amazing" => Ok(Mood::Amazing),
            "happy" => Ok(Mood::Happy),
            "neutral" => Ok(Mood::Neutral),
            "sad" => Ok(Mood::Sad),
            "stressed" => Ok(Mood::Stressed),
            other => Err(anyhow!(
                "Unknown mood '{}': expected amazing|happy|neutral|sad|stressed",
                other
            )),
        }
    }
}

/// The goal fields that can be edited in place. Color is only chosen at
/// creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalField {
    Title,
    Current,
    Target,
}

impl GoalField {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalField::Title => "title",
            GoalField::Current => "current",
            GoalField::Target => "target",
        }
    }
}

impl fmt::Display for GoalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cosmetic shortcut buttons. Triggering one only fires a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Reading,
    Workout,
    Spanish,
}

impl QuickAction {
    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::Reading => "Log Reading",
            QuickAction::Workout => "Log Workout",
            QuickAction::Spanish => "Practice Spanish",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub id: u64,
    pub title: String,
    pub current: i64,
    pub target: i64,
    pub color: PaletteKey,
}

impl Goal {
    /// Progress as a rounded percentage. Values above 100 are reported as-is;
    /// the division is guarded, so a non-positive target reads as 0.
    pub fn progress_percent(&self) -> i64 {
        if self.target <= 0 {
            return 0;
        }
        ((self.current as f64 / self.target as f64) * 100.0).round() as i64
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn theme_round_trips_through_strings() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.as_str().parse::<Theme>().unwrap(), theme);
        }
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn palette_cycle_visits_every_key() {
        let mut seen = Vec::new();
        let mut key = PaletteKey::Blue;
        for _ in 0..PaletteKey::ALL.len() {
            seen.push(key);
            key = key.next();
        }
        assert_eq!(seen, PaletteKey::ALL.to_vec());
        assert_eq!(key, PaletteKey::Blue);
    }

    #[test]
    fn mood_parses_case_insensitively() {
        assert_eq!("Stressed".parse::<Mood>().unwrap(), Mood::Stressed);
        assert!("meh".parse::<Mood>().is_err());
    }

    #[test]
    fn progress_exceeding_target_is_not_clamped() {
        let goal = Goal {
            id: 1,
            title: "Read".into(),
            current: 30,
            target: 24,
            color: PaletteKey::Blue,
        };
        assert_eq!(goal.progress_percent(), 125);
    }

    #[test]
    fn progress_with_non_positive_target_is_guarded() {
        let mut goal = Goal {
            id: 1,
            title: "Read".into(),
            current: 12,
            target: 0,
            color: PaletteKey::Blue,
        };
        assert_eq!(goal.progress_percent(), 0);
        goal.target = -3;
        assert_eq!(goal.progress_percent(), 0);
    }
}
