//! Rich Text
//!
//! Rich text elements (styled text, links, mentions, emoji, dates, colors,
//! broadcasts), the four rich text sub-blocks and the `rich_text` block that
//! contains them.
//!
//! Markdown tokens are decomposed rather than rendered: nested style wrappers
//! become style flags and the innermost text becomes the element text.
//!
//! ```rust
//! use blockkit_core::models::{RichElement, RichText};
//! use blockkit_core::mrkdwn::MarkdownToken;
//!
//! let element = RichText::create(MarkdownToken::bold(MarkdownToken::italic("hi")));
//! let RichElement::Text(text) = element else { panic!("expected text") };
//! let style = text.style().unwrap();
//! assert_eq!(text.text(), "hi");
//! assert!(style.bold && style.italic && !style.code);
//! ```

use serde::Serialize;

use crate::models::blocks::block_id_setter;
use crate::models::field::BLOCK_ID;
use crate::models::node::{accessors, node_family, node_type, ValidationError};
use crate::models::validate::{at_most, Validate};
use crate::mrkdwn::{MarkdownToken, TextContent};

const MAX_LIST_INDENT: u8 = 8;

/// Style flags for text and links
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct RichTextStyle {
    pub bold: bool,
    pub italic: bool,
    pub strike: bool,
    pub code: bool,
}

impl RichTextStyle {
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

/// Style flags for channel, user and user group mentions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct RichMentionStyle {
    pub bold: bool,
    pub italic: bool,
    pub strike: bool,
    pub highlight: bool,
    pub client_highlight: bool,
    pub unlink: bool,
}

/// Audience of a broadcast mention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BroadcastRange {
    Here,
    Channel,
    Everyone,
}

/// Bullet or numbered list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStyle {
    #[default]
    Bullet,
    Ordered,
}

node_type!(RichBroadcastTag => "broadcast" for RichBroadcast);
node_type!(RichColorTag => "color" for RichColor);
node_type!(RichChannelTag => "channel" for RichChannel);
node_type!(RichDateTag => "date" for RichDate);
node_type!(RichEmojiTag => "emoji" for RichEmoji);
node_type!(RichLinkTag => "link" for RichLink);
node_type!(RichTextTag => "text" for RichText);
node_type!(RichUserTag => "user" for RichUser);
node_type!(RichUserGroupTag => "usergroup" for RichUserGroup);

/// `@here`, `@channel` or `@everyone`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichBroadcast {
    #[serde(rename = "type")]
    kind: RichBroadcastTag,
    pub(crate) range: BroadcastRange,
}

impl RichBroadcast {
    pub fn new(range: BroadcastRange) -> Self {
        Self {
            kind: RichBroadcastTag,
            range,
        }
    }
}

/// A hex color swatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichColor {
    #[serde(rename = "type")]
    kind: RichColorTag,
    pub(crate) value: String,
}

impl RichColor {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            kind: RichColorTag,
            value: value.into(),
        }
    }
}

/// Channel mention
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichChannel {
    #[serde(rename = "type")]
    kind: RichChannelTag,
    pub(crate) channel_id: String,
    pub(crate) style: Option<RichMentionStyle>,
}

impl RichChannel {
    pub fn new(channel_id: impl Into<String>) -> Self {
        Self {
            kind: RichChannelTag,
            channel_id: channel_id.into(),
            style: None,
        }
    }

    pub fn with_style(mut self, style: RichMentionStyle) -> Self {
        self.style = Some(style);
        self
    }
}

/// Localized date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichDate {
    #[serde(rename = "type")]
    kind: RichDateTag,
    /// Unix timestamp in seconds
    pub(crate) timestamp: i64,
    /// Template such as `{date_short} at {time}`
    pub(crate) format: String,
    pub(crate) url: Option<String>,
    pub(crate) fallback: Option<String>,
}

impl RichDate {
    pub fn new(timestamp: i64, format: impl Into<String>) -> Self {
        Self {
            kind: RichDateTag,
            timestamp,
            format: format.into(),
            url: None,
            fallback: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Text shown by clients that cannot render the date
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }
}

/// Emoji by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichEmoji {
    #[serde(rename = "type")]
    kind: RichEmojiTag,
    pub(crate) name: String,
    pub(crate) unicode: Option<String>,
}

impl RichEmoji {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            kind: RichEmojiTag,
            name: name.into(),
            unicode: None,
        }
    }

    /// Code point sequence, e.g. `1f600`
    pub fn with_unicode(mut self, unicode: impl Into<String>) -> Self {
        self.unicode = Some(unicode.into());
        self
    }
}

/// Hyperlink
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichLink {
    #[serde(rename = "type")]
    kind: RichLinkTag,
    pub(crate) url: String,
    pub(crate) text: Option<String>,
    #[serde(rename = "unsafe")]
    pub(crate) unsafe_link: bool,
    pub(crate) style: Option<RichTextStyle>,
}

impl RichLink {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            kind: RichLinkTag,
            url: url.into(),
            text: None,
            unsafe_link: false,
            style: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Mark the link as unsafe so clients warn before opening it
    pub fn with_unsafe(mut self, unsafe_link: bool) -> Self {
        self.unsafe_link = unsafe_link;
        self
    }

    pub fn with_style(mut self, style: RichTextStyle) -> Self {
        self.style = Some(style);
        self
    }
}

/// Styled text run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichText {
    #[serde(rename = "type")]
    kind: RichTextTag,
    pub(crate) text: String,
    pub(crate) style: Option<RichTextStyle>,
}

impl RichText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            kind: RichTextTag,
            text: text.into(),
            style: None,
        }
    }

    pub fn with_style(mut self, style: RichTextStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Build a rich element from text content
    ///
    /// Raw strings become unstyled text. Tokens are decomposed: bold, italic,
    /// strikethrough and code set the matching style flags, and a link token
    /// becomes a [`RichLink`] carrying the collected style.
    pub fn create(content: impl Into<TextContent>) -> RichElement {
        match content.into() {
            TextContent::Raw(text) => RichElement::Text(Self::new(text)),
            TextContent::Token(token) => decompose(&token, RichTextStyle::default()),
        }
    }
}

fn decompose(token: &MarkdownToken, mut style: RichTextStyle) -> RichElement {
    let styled = |style: RichTextStyle| (!style.is_plain()).then_some(style);

    match token {
        MarkdownToken::Bold(inner) => {
            style.bold = true;
            decompose(inner, style)
        }
        MarkdownToken::Italic(inner) => {
            style.italic = true;
            decompose(inner, style)
        }
        MarkdownToken::Strikethrough(inner) => {
            style.strike = true;
            decompose(inner, style)
        }
        MarkdownToken::Quote(inner) => decompose(inner, style),
        MarkdownToken::Code(text) => {
            style.code = true;
            let mut node = RichText::new(text.clone());
            node.style = styled(style);
            RichElement::Text(node)
        }
        MarkdownToken::Link { url, text } => {
            let mut link = RichLink::new(url.clone());
            link.text = text.clone();
            link.style = styled(style);
            RichElement::Link(link)
        }
        MarkdownToken::Plain(_) | MarkdownToken::Newline => {
            let mut node = RichText::new(token.plain_text());
            node.style = styled(style);
            RichElement::Text(node)
        }
    }
}

/// User mention
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichUser {
    #[serde(rename = "type")]
    kind: RichUserTag,
    pub(crate) user_id: String,
    pub(crate) style: Option<RichMentionStyle>,
}

impl RichUser {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            kind: RichUserTag,
            user_id: user_id.into(),
            style: None,
        }
    }

    pub fn with_style(mut self, style: RichMentionStyle) -> Self {
        self.style = Some(style);
        self
    }
}

/// User group mention
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichUserGroup {
    #[serde(rename = "type")]
    kind: RichUserGroupTag,
    pub(crate) usergroup_id: String,
    pub(crate) style: Option<RichMentionStyle>,
}

impl RichUserGroup {
    pub fn new(usergroup_id: impl Into<String>) -> Self {
        Self {
            kind: RichUserGroupTag,
            usergroup_id: usergroup_id.into(),
            style: None,
        }
    }

    pub fn with_style(mut self, style: RichMentionStyle) -> Self {
        self.style = Some(style);
        self
    }
}

/// Rich elements carry no length constraints
macro_rules! always_valid {
    ($($node:ty),+) => {
        $(
            impl Validate for $node {
                fn validate(&self) -> Result<(), ValidationError> {
                    Ok(())
                }
            }
        )+
    };
}

always_valid!(
    RichBroadcast,
    RichColor,
    RichChannel,
    RichDate,
    RichEmoji,
    RichLink,
    RichText,
    RichUser,
    RichUserGroup
);

node_family! {
    /// Any rich text element
    #[derive(Eq)]
    pub enum RichElement {
        Text(RichText),
        Link(RichLink),
        Channel(RichChannel),
        User(RichUser),
        UserGroup(RichUserGroup),
        Emoji(RichEmoji),
        Date(RichDate),
        Color(RichColor),
        Broadcast(RichBroadcast),
    }
}

impl From<&str> for RichElement {
    fn from(text: &str) -> Self {
        RichElement::Text(RichText::new(text))
    }
}

impl From<MarkdownToken> for RichElement {
    fn from(token: MarkdownToken) -> Self {
        RichText::create(token)
    }
}

node_type!(RichSectionTag => "rich_text_section" for RichSection);
node_type!(RichTextListTag => "rich_text_list" for RichTextList);
node_type!(RichPreformattedTag => "rich_text_preformatted" for RichPreformatted);
node_type!(RichQuoteTag => "rich_text_quote" for RichQuote);
node_type!(RichTextBlockTag => "rich_text" for RichTextBlock);

/// A run of rich elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichSection {
    #[serde(rename = "type")]
    kind: RichSectionTag,
    pub(crate) block_id: Option<String>,
    pub(crate) elements: Vec<RichElement>,
}

impl RichSection {
    pub fn new() -> Self {
        Self {
            kind: RichSectionTag,
            block_id: None,
            elements: Vec::new(),
        }
    }

    /// A section holding a single element built from text content
    pub fn from_content(content: impl Into<TextContent>) -> Self {
        let mut section = Self::new();
        section.elements.push(RichText::create(content));
        section
    }
}

impl Default for RichSection {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for RichSection {
    fn validate(&self) -> Result<(), ValidationError> {
        BLOCK_ID.check(&self.block_id)?;
        self.elements.iter().try_for_each(Validate::validate)
    }
}

/// A bullet or numbered list of rich sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichTextList {
    #[serde(rename = "type")]
    kind: RichTextListTag,
    pub(crate) block_id: Option<String>,
    pub(crate) elements: Vec<RichSection>,
    pub(crate) style: ListStyle,
    pub(crate) indent: Option<u8>,
    pub(crate) offset: Option<u32>,
    pub(crate) border: Option<u32>,
}

impl RichTextList {
    pub fn new(style: ListStyle) -> Self {
        Self {
            kind: RichTextListTag,
            block_id: None,
            elements: Vec::new(),
            style,
            indent: None,
            offset: None,
            border: None,
        }
    }

    /// Nesting level, at most 8
    pub fn with_indent(mut self, indent: u8) -> Result<Self, ValidationError> {
        self.indent = Some(indent);
        self.validate()?;
        Ok(self)
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_border(mut self, border: u32) -> Self {
        self.border = Some(border);
        self
    }
}

impl Default for RichTextList {
    fn default() -> Self {
        Self::new(ListStyle::default())
    }
}

impl Validate for RichTextList {
    fn validate(&self) -> Result<(), ValidationError> {
        BLOCK_ID.check(&self.block_id)?;
        at_most("indent", self.indent, MAX_LIST_INDENT)?;
        self.elements.iter().try_for_each(Validate::validate)
    }
}

/// A code block of rich elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichPreformatted {
    #[serde(rename = "type")]
    kind: RichPreformattedTag,
    pub(crate) block_id: Option<String>,
    pub(crate) elements: Vec<RichElement>,
    pub(crate) border: Option<u32>,
}

impl RichPreformatted {
    pub fn new() -> Self {
        Self {
            kind: RichPreformattedTag,
            block_id: None,
            elements: Vec::new(),
            border: None,
        }
    }

    pub fn with_border(mut self, border: u32) -> Self {
        self.border = Some(border);
        self
    }
}

impl Default for RichPreformatted {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for RichPreformatted {
    fn validate(&self) -> Result<(), ValidationError> {
        BLOCK_ID.check(&self.block_id)?;
        self.elements.iter().try_for_each(Validate::validate)
    }
}

/// A quoted run of rich elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichQuote {
    #[serde(rename = "type")]
    kind: RichQuoteTag,
    pub(crate) block_id: Option<String>,
    pub(crate) elements: Vec<RichElement>,
    pub(crate) border: Option<u32>,
}

impl RichQuote {
    pub fn new() -> Self {
        Self {
            kind: RichQuoteTag,
            block_id: None,
            elements: Vec::new(),
            border: None,
        }
    }

    pub fn with_border(mut self, border: u32) -> Self {
        self.border = Some(border);
        self
    }
}

impl Default for RichQuote {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for RichQuote {
    fn validate(&self) -> Result<(), ValidationError> {
        BLOCK_ID.check(&self.block_id)?;
        self.elements.iter().try_for_each(Validate::validate)
    }
}

node_family! {
    /// Sub-blocks allowed inside a `rich_text` block
    #[derive(Eq)]
    pub enum RichBlockElement {
        Section(RichSection),
        List(RichTextList),
        Preformatted(RichPreformatted),
        Quote(RichQuote),
    }
}

/// Formatted, structured text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichTextBlock {
    #[serde(rename = "type")]
    kind: RichTextBlockTag,
    pub(crate) block_id: Option<String>,
    pub(crate) elements: Vec<RichBlockElement>,
}

impl RichTextBlock {
    pub fn new() -> Self {
        Self {
            kind: RichTextBlockTag,
            block_id: None,
            elements: Vec::new(),
        }
    }
}

impl Default for RichTextBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for RichTextBlock {
    fn validate(&self) -> Result<(), ValidationError> {
        BLOCK_ID.check(&self.block_id)?;
        self.elements.iter().try_for_each(Validate::validate)
    }
}

block_id_setter!(RichSection, RichTextList, RichPreformatted, RichQuote, RichTextBlock);

accessors!(RichBroadcast { range: copy(BroadcastRange) });
accessors!(RichColor { value: str });
accessors!(RichChannel { channel_id: str, style: copy(Option<RichMentionStyle>) });
accessors!(RichDate {
    timestamp: copy(i64),
    format: str,
    url: opt_str,
    fallback: opt_str,
});
accessors!(RichEmoji { name: str, unicode: opt_str });
accessors!(RichLink {
    url: str,
    text: opt_str,
    unsafe_link: copy(bool),
    style: copy(Option<RichTextStyle>),
});
accessors!(RichText { text: str, style: copy(Option<RichTextStyle>) });
accessors!(RichUser { user_id: str, style: copy(Option<RichMentionStyle>) });
accessors!(RichUserGroup { usergroup_id: str, style: copy(Option<RichMentionStyle>) });
accessors!(RichSection { block_id: opt_str, elements: list(RichElement) });
accessors!(RichTextList {
    block_id: opt_str,
    elements: list(RichSection),
    style: copy(ListStyle),
    indent: copy(Option<u8>),
    offset: copy(Option<u32>),
    border: copy(Option<u32>),
});
accessors!(RichPreformatted {
    block_id: opt_str,
    elements: list(RichElement),
    border: copy(Option<u32>),
});
accessors!(RichQuote {
    block_id: opt_str,
    elements: list(RichElement),
    border: copy(Option<u32>),
});
accessors!(RichTextBlock { block_id: opt_str, elements: list(RichBlockElement) });
