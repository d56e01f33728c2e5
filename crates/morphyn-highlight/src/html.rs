//! HTML output.
//!
//! Class names are the short names used by Pygments stylesheets.

use crate::{Formatter, HighlightError, Theme};
use morphyn_lexer::{Category, Token};
use std::fmt::Write as _;

/// Options for HTML output.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Wrap the fragment in a complete document with an embedded stylesheet.
    pub full_document: bool,
    /// Class of the wrapping `<div>`.
    pub css_class: String,
    /// Prefix every line with its number.
    pub line_numbers: bool,
    /// Document title, only used with `full_document`.
    pub title: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            full_document: false,
            css_class: "highlight".to_string(),
            line_numbers: false,
            title: String::new(),
        }
    }
}

/// Short CSS class for a category. Whitespace gets no class.
pub fn css_class(category: Category) -> Option<&'static str> {
    let class = match category {
        Category::Keyword => "k",
        Category::Constant => "kc",
        Category::Builtin => "nb",
        Category::Operator => "o",
        Category::ComparisonOperator => "o-Comparison",
        Category::ArithmeticOperator => "o-Arithmetic",
        Category::WordOperator => "ow",
        Category::Number => "m",
        Category::String => "s2",
        Category::ClassName => "nc",
        Category::FunctionName => "nf",
        Category::FieldName => "nv",
        Category::Identifier => "n",
        Category::Punctuation => "p",
        Category::Comment => "c",
        Category::Whitespace => return None,
    };
    Some(class)
}

/// Escape text for use inside HTML elements and attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders tokens as `<span class="..">` elements inside a `<pre>`.
#[derive(Debug, Clone, Default)]
pub struct HtmlFormatter {
    theme: Theme,
    options: HtmlOptions,
}

impl HtmlFormatter {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            options: HtmlOptions::default(),
        }
    }

    pub fn with_options(mut self, options: HtmlOptions) -> Self {
        self.options = options;
        self
    }

    /// Stylesheet for the current theme, scoped to the wrapper class.
    pub fn stylesheet(&self) -> String {
        let scope = format!(".{}", self.options.css_class);
        let mut css = String::new();

        if let Some(bg) = self.theme.background() {
            let _ = writeln!(css, "{scope} {{ background: {bg}; }}");
        }
        if self.options.line_numbers {
            let _ = writeln!(
                css,
                "{scope} .lineno {{ color: #999999; padding-right: 1em; user-select: none; }}"
            );
        }

        for category in Category::ALL {
            let (Some(class), style) = (css_class(category), self.theme.style(category)) else {
                continue;
            };
            if style.is_plain() {
                continue;
            }

            let mut rules = Vec::new();
            if let Some(color) = style.color {
                rules.push(format!("color: {color}"));
            }
            if style.bold {
                rules.push("font-weight: bold".to_string());
            }
            if style.italic {
                rules.push("font-style: italic".to_string());
            }
            let _ = writeln!(css, "{scope} .{class} {{ {}; }}", rules.join("; "));
        }

        css
    }

    fn body(&self, tokens: &[Token<'_>]) -> String {
        let line_count = tokens.iter().map(|t| t.text.matches('\n').count()).sum::<usize>() + 1;
        let width = line_count.to_string().len();
        let mut line = 1;
        let mut at_line_start = true;

        let mut html = format!(
            "<div class=\"{}\"><pre><code>",
            escape_html(&self.options.css_class)
        );

        for token in tokens {
            let class = css_class(token.category);

            for piece in token.text.split_inclusive('\n') {
                if at_line_start && self.options.line_numbers {
                    let _ = write!(html, "<span class=\"lineno\">{line:>width$}</span>");
                }
                at_line_start = false;

                let (content, newline) = match piece.strip_suffix('\n') {
                    Some(content) => (content, true),
                    None => (piece, false),
                };

                if !content.is_empty() {
                    match class {
                        Some(class) => {
                            let _ = write!(
                                html,
                                "<span class=\"{class}\">{}</span>",
                                escape_html(content)
                            );
                        }
                        None => html.push_str(&escape_html(content)),
                    }
                }

                if newline {
                    html.push('\n');
                    line += 1;
                    at_line_start = true;
                }
            }
        }

        html.push_str("</code></pre></div>\n");
        html
    }
}

impl Formatter for HtmlFormatter {
    fn name(&self) -> &'static str {
        "html"
    }

    fn format(&self, tokens: &[Token<'_>]) -> Result<String, HighlightError> {
        let body = self.body(tokens);
        if !self.options.full_document {
            return Ok(body);
        }

        Ok(format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
            escape_html(&self.options.title),
            self.stylesheet(),
            body
        ))
    }
}
