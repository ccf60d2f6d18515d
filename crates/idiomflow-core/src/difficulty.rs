#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse a difficulty label, ignoring case and surrounding whitespace
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Canonical spelling for known labels, anything else trimmed as-is
    pub fn canonical_label(label: &str) -> String {
        match Self::parse(label) {
            Some(level) => level.as_str().to_string(),
            None => label.trim().to_string(),
        }
    }

    /// Sort position of a free-text label; unknown labels go last
    pub fn rank(label: &str) -> u8 {
        match Self::parse(label) {
            Some(Difficulty::Easy) => 0,
            Some(Difficulty::Medium) => 1,
            Some(Difficulty::Hard) => 2,
            None => 3,
        }
    }
}
