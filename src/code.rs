//! The sample effect-chain configuration shown in the code editor, and its (line-based) syntax
//! highlighting.

use crate::theme::{self, Colour};

/// The languages offered by the editor's language selector
pub const LANGUAGES: [&str; 4] = ["YAML", "JSON", "XML", "Python"];

/// The configuration text shown in the code editors
pub const SAMPLE_CONFIG: &str = "\
# My Custom Effect Chain
- type: Gain
  gain: 1.0
- type: Compressor
  threshold: -15.0
  ratio: 4.0
  attack: 10.0
  release: 100.0
- type: Filter
  type: LowPass
  frequency: 2500.0
  q: 0.707
- type: Delay
  time: 450.0
  feedback: 0.3
  mix: 0.4
- type: Reverb
  room_size: 0.6
  wet: 0.3
";

/// How a single line of configuration is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Comment,
    /// The `- type:` line which starts a new effect
    Keyword,
    Property,
    Plain,
}

impl LineKind {
    /// Classifies a line by its first non-whitespace characters
    pub fn classify(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            LineKind::Comment
        } else if trimmed.starts_with("- type:") {
            LineKind::Keyword
        } else if line.contains(':') {
            LineKind::Property
        } else {
            LineKind::Plain
        }
    }

    pub fn colour(self) -> Colour {
        match self {
            LineKind::Comment => theme::COMMENT,
            LineKind::Keyword => theme::KEYWORD,
            LineKind::Property => theme::PROPERTY,
            LineKind::Plain => theme::EDITOR_TEXT,
        }
    }
}

/// Splits `text` into lines, paired with the colour each should be drawn in
pub fn highlight(text: &str) -> impl Iterator<Item = (&str, Colour)> {
    text.lines()
        .map(|line| (line, LineKind::classify(line).colour()))
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn classify_each_kind() {
        assert_eq!(LineKind::classify("# My Custom Effect Chain"), LineKind::Comment);
        assert_eq!(LineKind::classify("  # indented comment"), LineKind::Comment);
        assert_eq!(LineKind::classify("- type: Gain"), LineKind::Keyword);
        assert_eq!(LineKind::classify("  gain: 1.0"), LineKind::Property);
        // Nested `type` keys are properties, not new effects
        assert_eq!(LineKind::classify("  type: LowPass"), LineKind::Property);
        assert_eq!(LineKind::classify(""), LineKind::Plain);
        assert_eq!(LineKind::classify("- Gain"), LineKind::Plain);
    }

    #[test]
    fn comments_win_over_colons() {
        assert_eq!(LineKind::classify("# type: Gain"), LineKind::Comment);
    }

    #[test]
    fn sample_config_highlighting() {
        let kinds = SAMPLE_CONFIG.lines().map(LineKind::classify).collect_vec();
        assert_eq!(kinds.len(), 19);
        assert_eq!(kinds[0], LineKind::Comment);
        let keywords = kinds.iter().filter(|&&k| k == LineKind::Keyword).count();
        assert_eq!(keywords, 5);
        let properties = kinds.iter().filter(|&&k| k == LineKind::Property).count();
        assert_eq!(properties, 13);

        let (line, colour) = highlight(SAMPLE_CONFIG).nth(1).unwrap();
        assert_eq!(line, "- type: Gain");
        assert_eq!(colour, theme::KEYWORD);
    }
}
