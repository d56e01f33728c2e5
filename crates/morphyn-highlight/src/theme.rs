//! Highlighting themes.

use crate::HighlightError;
use morphyn_lexer::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A 24-bit RGB color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Color {
    type Err = HighlightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || HighlightError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = HighlightError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// How one category is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Foreground color. `None` keeps the default text color.
    pub color: Option<Color>,
    pub bold: bool,
    pub italic: bool,
}

impl Style {
    pub const PLAIN: Style = Style {
        color: None,
        bold: false,
        italic: false,
    };

    pub const fn color(color: Color) -> Self {
        Self {
            color: Some(color),
            bold: false,
            italic: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        *self == Style::PLAIN
    }
}

/// On-disk theme format. Category keys are resolved when loading.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ThemeFile {
    name: Option<String>,
    background: Option<Color>,
    styles: BTreeMap<String, Style>,
}

/// Styles for every token category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    background: Option<Color>,
    styles: BTreeMap<Category, Style>,
}

impl Default for Theme {
    fn default() -> Self {
        let styles = [
            (Category::Keyword, Style::color(Color::rgb(0x00, 0x80, 0x00)).bold()),
            (Category::Constant, Style::color(Color::rgb(0x00, 0x80, 0x00))),
            (Category::Builtin, Style::color(Color::rgb(0x00, 0x80, 0x80))),
            (Category::Operator, Style::color(Color::rgb(0x66, 0x66, 0x66))),
            (Category::ComparisonOperator, Style::color(Color::rgb(0x66, 0x66, 0x66))),
            (Category::ArithmeticOperator, Style::color(Color::rgb(0x66, 0x66, 0x66))),
            (Category::WordOperator, Style::color(Color::rgb(0xaa, 0x22, 0xff)).bold()),
            (Category::Number, Style::color(Color::rgb(0x66, 0x66, 0x66))),
            (Category::String, Style::color(Color::rgb(0xba, 0x21, 0x21))),
            (Category::ClassName, Style::color(Color::rgb(0x00, 0x00, 0xff)).bold()),
            (Category::FunctionName, Style::color(Color::rgb(0x00, 0x00, 0xff))),
            (Category::FieldName, Style::color(Color::rgb(0x19, 0x17, 0x7c))),
            (Category::Identifier, Style::PLAIN),
            (Category::Punctuation, Style::PLAIN),
            (Category::Comment, Style::color(Color::rgb(0x3d, 0x7b, 0x7b)).italic()),
            (Category::Whitespace, Style::PLAIN),
        ];

        Self {
            name: "default".to_string(),
            background: None,
            styles: styles.into_iter().collect(),
        }
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style for one category.
    pub fn with(mut self, category: Category, style: Style) -> Self {
        self.styles.insert(category, style);
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Style for `category`; categories without an entry are plain.
    pub fn style(&self, category: Category) -> Style {
        self.styles.get(&category).copied().unwrap_or(Style::PLAIN)
    }

    /// Parse a JSON theme. Entries override the default theme per category.
    pub fn from_json_str(json: &str) -> Result<Self, HighlightError> {
        let file: ThemeFile = serde_json::from_str(json)?;
        let mut theme = Theme::default();

        if let Some(name) = file.name {
            theme.name = name;
        }
        theme.background = file.background.or(theme.background);

        for (key, style) in file.styles {
            let category =
                Category::from_key(&key).ok_or(HighlightError::UnknownCategory(key))?;
            theme.styles.insert(category, style);
        }

        Ok(theme)
    }

    /// Load a JSON theme file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HighlightError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let theme = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), name = %theme.name, "loaded theme");
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parse() {
        assert_eq!("#ff8000".parse::<Color>().ok(), Some(Color::rgb(255, 128, 0)));
        assert_eq!(Color::rgb(1, 2, 255).to_string(), "#0102ff");
        assert!("ff8000".parse::<Color>().is_err());
        assert!("#ff80".parse::<Color>().is_err());
        assert!("#gg8000".parse::<Color>().is_err());
    }

    #[test]
    fn test_default_theme_covers_keywords() {
        let theme = Theme::default();
        assert!(theme.style(Category::Keyword).bold);
        assert!(theme.style(Category::Whitespace).is_plain());
    }

    #[test]
    fn test_partial_override() {
        let theme = Theme::from_json_str(
            r##"{ "name": "dusk", "styles": { "keyword": { "color": "#c678dd" } } }"##,
        )
        .unwrap();
        assert_eq!(theme.name(), "dusk");
        assert_eq!(
            theme.style(Category::Keyword),
            Style::color(Color::rgb(0xc6, 0x78, 0xdd))
        );
        assert_eq!(
            theme.style(Category::String),
            Theme::default().style(Category::String)
        );
    }

    #[test]
    fn test_unknown_category() {
        let err = Theme::from_json_str(r#"{ "styles": { "keywords": {} } }"#).unwrap_err();
        assert!(matches!(err, HighlightError::UnknownCategory(key) if key == "keywords"));
    }
}
