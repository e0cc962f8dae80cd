//! Slack mrkdwn tokens
//!
//! A small styled-value type that callers hand to text-bearing nodes.
//! `MarkdownText` uses the rendered string, rich text uses the style nesting.
//!
//! ```rust
//! use blockkit_core::mrkdwn::MarkdownToken;
//!
//! let token = MarkdownToken::bold(MarkdownToken::italic("hi"));
//! assert_eq!(token.to_string(), "*_hi_*");
//! ```

use std::fmt;

/// A styled mrkdwn value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkdownToken {
    Plain(String),
    Bold(Box<MarkdownToken>),
    Italic(Box<MarkdownToken>),
    Strikethrough(Box<MarkdownToken>),
    Code(String),
    Link { url: String, text: Option<String> },
    Quote(Box<MarkdownToken>),
    Newline,
}

impl MarkdownToken {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    pub fn bold(inner: impl Into<MarkdownToken>) -> Self {
        Self::Bold(Box::new(inner.into()))
    }

    pub fn italic(inner: impl Into<MarkdownToken>) -> Self {
        Self::Italic(Box::new(inner.into()))
    }

    pub fn strikethrough(inner: impl Into<MarkdownToken>) -> Self {
        Self::Strikethrough(Box::new(inner.into()))
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::Code(text.into())
    }

    pub fn link(url: impl Into<String>, text: Option<&str>) -> Self {
        Self::Link {
            url: url.into(),
            text: text.map(str::to_string),
        }
    }

    pub fn quote(inner: impl Into<MarkdownToken>) -> Self {
        Self::Quote(Box::new(inner.into()))
    }

    /// Text without any markup
    pub fn plain_text(&self) -> String {
        match self {
            Self::Plain(text) | Self::Code(text) => text.clone(),
            Self::Bold(inner)
            | Self::Italic(inner)
            | Self::Strikethrough(inner)
            | Self::Quote(inner) => inner.plain_text(),
            Self::Link { url, text } => text.clone().unwrap_or_else(|| url.clone()),
            Self::Newline => "\n".to_string(),
        }
    }
}

impl From<&str> for MarkdownToken {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_string())
    }
}

impl From<String> for MarkdownToken {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

impl fmt::Display for MarkdownToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(text) => write!(f, "{}", text),
            Self::Bold(inner) => write!(f, "*{}*", inner),
            Self::Italic(inner) => write!(f, "_{}_", inner),
            Self::Strikethrough(inner) => write!(f, "~{}~", inner),
            Self::Code(text) => write!(f, "`{}`", text),
            Self::Link {
                url,
                text: Some(text),
            } => write!(f, "<{}|{}>", url, text),
            Self::Link { url, text: None } => write!(f, "<{}>", url),
            Self::Quote(inner) => writeln!(f, "> {}", inner),
            Self::Newline => writeln!(f),
        }
    }
}

/// Text content accepted by text-bearing constructors
///
/// A raw string stays plain. A token keeps its styling so the receiving node
/// can decide how to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextContent {
    Raw(String),
    Token(MarkdownToken),
}

impl TextContent {
    /// Rendered string form
    pub fn render(&self) -> String {
        match self {
            Self::Raw(text) => text.clone(),
            Self::Token(token) => token.to_string(),
        }
    }

    pub fn is_token(&self) -> bool {
        matches!(self, Self::Token(_))
    }
}

impl From<&str> for TextContent {
    fn from(text: &str) -> Self {
        Self::Raw(text.to_string())
    }
}

impl From<String> for TextContent {
    fn from(text: String) -> Self {
        Self::Raw(text)
    }
}

impl From<&String> for TextContent {
    fn from(text: &String) -> Self {
        Self::Raw(text.clone())
    }
}

impl From<MarkdownToken> for TextContent {
    fn from(token: MarkdownToken) -> Self {
        Self::Token(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_styles() {
        assert_eq!(MarkdownToken::bold("b").to_string(), "*b*");
        assert_eq!(MarkdownToken::italic("i").to_string(), "_i_");
        assert_eq!(MarkdownToken::strikethrough("s").to_string(), "~s~");
        assert_eq!(MarkdownToken::code("c").to_string(), "`c`");
        assert_eq!(MarkdownToken::quote("q").to_string(), "> q\n");
        assert_eq!(MarkdownToken::Newline.to_string(), "\n");
    }

    #[test]
    fn test_render_links() {
        assert_eq!(
            MarkdownToken::link("https://example.com", Some("site")).to_string(),
            "<https://example.com|site>"
        );
        assert_eq!(
            MarkdownToken::link("https://example.com", None).to_string(),
            "<https://example.com>"
        );
    }

    #[test]
    fn test_nested_render_and_plain_text() {
        let token = MarkdownToken::bold(MarkdownToken::strikethrough("gone"));
        assert_eq!(token.to_string(), "*~gone~*");
        assert_eq!(token.plain_text(), "gone");
    }

    #[test]
    fn test_text_content_conversions() {
        let raw: TextContent = "hello".into();
        assert!(!raw.is_token());
        assert_eq!(raw.render(), "hello");

        let styled: TextContent = MarkdownToken::bold("hello").into();
        assert!(styled.is_token());
        assert_eq!(styled.render(), "*hello*");
    }
}
