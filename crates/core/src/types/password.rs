//! Password strength scoring.
//!
//! Purely informational: the score drives the strength meter next to the
//! password field and never blocks a submission. Actual password storage
//! uses a salted hash; see the storefront auth service.

/// Label shown on the strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weak => write!(f, "Weak"),
            Self::Medium => write!(f, "Medium"),
            Self::Strong => write!(f, "Strong"),
        }
    }
}

/// The result of scoring a candidate password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordStrength {
    /// Raw score, 0 to 5.
    pub score: u8,
    /// Label derived from the score.
    pub label: StrengthLabel,
}

impl PasswordStrength {
    /// Score a candidate password.
    ///
    /// One point each for: length ≥ 8, length ≥ 12, an uppercase letter,
    /// a digit, and a symbol. Score ≥ 5 is Strong, ≥ 3 is Medium.
    #[must_use]
    pub fn score(password: &str) -> Self {
        let mut score = 0_u8;

        if password.len() >= 8 {
            score += 1;
        }
        if password.len() >= 12 {
            score += 1;
        }
        if password.chars().any(|c| c.is_ascii_uppercase()) {
            score += 1;
        }
        if password.chars().any(|c| c.is_ascii_digit()) {
            score += 1;
        }
        if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
            score += 1;
        }

        let label = match score {
            5.. => StrengthLabel::Strong,
            3..=4 => StrengthLabel::Medium,
            _ => StrengthLabel::Weak,
        };

        Self { score, label }
    }
}
