//! Composition Objects
//!
//! Small value types embedded in blocks and elements: text objects, options,
//! confirmation dialogs, filters and file references.
//!
//! # Examples
//!
//! ```rust
//! use blockkit_core::models::{PlainText, SelectOption, SlackFile};
//!
//! let text = PlainText::new("Launch 🚀").unwrap();
//! assert!(text.emoji());
//!
//! let option = SelectOption::new("Small", "s").unwrap();
//! assert_eq!(option.value(), "s");
//!
//! let file = SlackFile::new("https://example.com/cat.png");
//! assert_eq!(file.url(), Some("https://example.com/cat.png"));
//! ```

use serde::Serialize;

use crate::models::field::{describe, FieldDefault, FieldSpec};
use crate::models::node::{accessors, enum_from, node_type, untyped_node, ValidationError};
use crate::models::validate::{exactly_one, secure_url, Measure, Validate};
use crate::mrkdwn::TextContent;
use crate::utils::{contains_emoji, is_url, url_extension};

/// Image file extensions accepted for remote Slack files
pub const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

const TEXT: FieldSpec = describe(
    "text",
    "The text for the block.",
    FieldDefault::Required,
    Some(1),
    Some(3000),
);

/// Visual style of buttons and confirmation dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    Primary,
    Danger,
}

/// Conversation kinds accepted by a [`ConversationFilter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationType {
    Im,
    Mpim,
    Private,
    Public,
}

/// Input interactions that dispatch a `block_actions` payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardEvent {
    OnEnterPressed,
    OnCharacterEntered,
}

/// Where a [`SlackFile`] is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileSource {
    /// Referenced by URL
    Remote,
    /// Uploaded to Slack and referenced by id
    Hosted,
}

node_type!(PlainTextTag => "plain_text" for PlainText);
node_type!(MarkdownTextTag => "mrkdwn" for MarkdownText);

/// Plain text object
///
/// `emoji` is derived from the text and is true whenever the text contains an
/// emoji codepoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlainText {
    #[serde(rename = "type")]
    kind: PlainTextTag,
    pub(crate) text: String,
    pub(crate) emoji: bool,
}

impl PlainText {
    /// Create a plain text object
    ///
    /// # Errors
    ///
    /// Returns a length error when `text` is empty or longer than 3000
    /// characters.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        let node = Self {
            kind: PlainTextTag,
            emoji: contains_emoji(&text),
            text,
        };
        node.validate()?;
        Ok(node)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Validate for PlainText {
    fn validate(&self) -> Result<(), ValidationError> {
        TEXT.check(&self.text)
    }
}

impl Measure for PlainText {
    fn measure(&self) -> Option<usize> {
        self.text.measure()
    }
}

/// mrkdwn text object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkdownText {
    #[serde(rename = "type")]
    kind: MarkdownTextTag,
    pub(crate) text: String,
    pub(crate) verbatim: Option<bool>,
}

impl MarkdownText {
    /// Create a mrkdwn text object
    ///
    /// Markdown tokens are rendered to their mrkdwn string.
    pub fn new(text: impl Into<TextContent>) -> Result<Self, ValidationError> {
        let node = Self {
            kind: MarkdownTextTag,
            text: text.into().render(),
            verbatim: None,
        };
        node.validate()?;
        Ok(node)
    }

    /// Disable automatic link and mention parsing when `true`
    pub fn with_verbatim(mut self, verbatim: bool) -> Self {
        self.verbatim = Some(verbatim);
        self
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Validate for MarkdownText {
    fn validate(&self) -> Result<(), ValidationError> {
        TEXT.check(&self.text)
    }
}

impl Measure for MarkdownText {
    fn measure(&self) -> Option<usize> {
        self.text.measure()
    }
}

/// Either text object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Text {
    Plain(PlainText),
    Markdown(MarkdownText),
}

enum_from!(Text {
    Plain(PlainText),
    Markdown(MarkdownText),
});

impl Text {
    /// Build a text object from content
    ///
    /// Raw strings become plain text, markdown tokens become mrkdwn text.
    pub fn from_content(content: impl Into<TextContent>) -> Result<Self, ValidationError> {
        match content.into() {
            TextContent::Raw(text) => PlainText::new(text).map(Self::Plain),
            token @ TextContent::Token(_) => MarkdownText::new(token).map(Self::Markdown),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain(text) => text.as_str(),
            Self::Markdown(text) => text.as_str(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Plain(_) => PlainTextTag::TAG,
            Self::Markdown(_) => MarkdownTextTag::TAG,
        }
    }
}

impl Validate for Text {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Plain(text) => text.validate(),
            Self::Markdown(text) => text.validate(),
        }
    }
}

impl Measure for Text {
    fn measure(&self) -> Option<usize> {
        self.as_str().measure()
    }
}

/// An item in a selection element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub(crate) text: PlainText,
    pub(crate) value: String,
    pub(crate) description: Option<PlainText>,
    pub(crate) url: Option<String>,
}

impl SelectOption {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            text: PlainText::new(text)?,
            value: value.into(),
            description: None,
            url: None,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Result<Self, ValidationError> {
        self.description = Some(PlainText::new(description)?);
        Ok(self)
    }

    /// URL to load when the option is clicked (overflow menus only)
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

impl Validate for SelectOption {
    fn validate(&self) -> Result<(), ValidationError> {
        self.text.validate()?;
        if let Some(description) = &self.description {
            description.validate()?;
        }
        Ok(())
    }
}

/// A labelled group of options in a select menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionGroup {
    pub(crate) label: PlainText,
    pub(crate) options: Vec<SelectOption>,
}

impl OptionGroup {
    pub fn new(label: impl Into<String>, options: Vec<SelectOption>) -> Result<Self, ValidationError> {
        Ok(Self {
            label: PlainText::new(label)?,
            options,
        })
    }
}

impl Validate for OptionGroup {
    fn validate(&self) -> Result<(), ValidationError> {
        self.label.validate()?;
        self.options.iter().try_for_each(Validate::validate)
    }
}

/// A confirmation step shown before an element's action runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationDialog {
    pub(crate) title: PlainText,
    pub(crate) text: PlainText,
    pub(crate) confirm: PlainText,
    pub(crate) deny: PlainText,
    pub(crate) style: Option<ButtonStyle>,
}

impl ConfirmationDialog {
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        confirm: impl Into<String>,
        deny: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: PlainText::new(title)?,
            text: PlainText::new(text)?,
            confirm: PlainText::new(confirm)?,
            deny: PlainText::new(deny)?,
            style: None,
        })
    }

    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = Some(style);
        self
    }
}

impl Validate for ConfirmationDialog {
    fn validate(&self) -> Result<(), ValidationError> {
        self.title.validate()?;
        self.text.validate()?;
        self.confirm.validate()?;
        self.deny.validate()
    }
}

/// Filter for the conversations listed by conversation select menus
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversationFilter {
    pub(crate) include: Option<Vec<ConversationType>>,
    pub(crate) exclude_external_shared_channels: bool,
    pub(crate) exclude_bot_users: bool,
}

impl ConversationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_include(mut self, include: Vec<ConversationType>) -> Self {
        self.include = Some(include);
        self
    }

    pub fn with_exclude_external_shared_channels(mut self, exclude: bool) -> Self {
        self.exclude_external_shared_channels = exclude;
        self
    }

    pub fn with_exclude_bot_users(mut self, exclude: bool) -> Self {
        self.exclude_bot_users = exclude;
        self
    }
}

/// Which interactions make an input element dispatch actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchActionConfig {
    pub(crate) trigger_actions_on: Vec<KeyboardEvent>,
}

impl DispatchActionConfig {
    pub fn new(trigger_actions_on: Vec<KeyboardEvent>) -> Self {
        Self { trigger_actions_on }
    }
}

/// Reference to a file, either hosted by Slack (`id`) or remote (`url`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackFile {
    pub(crate) id: Option<String>,
    pub(crate) url: Option<String>,
}

impl SlackFile {
    /// Reference a file by URL when `value` looks like one, otherwise by id
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        if is_url(&value) {
            Self::from_url(value)
        } else {
            Self::from_id(value)
        }
    }

    pub fn from_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            url: None,
        }
    }

    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            id: None,
            url: Some(url.into()),
        }
    }

    pub fn source(&self) -> FileSource {
        if self.url.is_some() {
            FileSource::Remote
        } else {
            FileSource::Hosted
        }
    }

    /// Lower-cased extension of the file URL's path
    pub fn extension(&self) -> Option<String> {
        self.url.as_deref().and_then(url_extension)
    }
}

impl Validate for SlackFile {
    fn validate(&self) -> Result<(), ValidationError> {
        exactly_one(("id", &self.id), ("url", &self.url))
    }
}

untyped_node!(
    SelectOption,
    OptionGroup,
    ConfirmationDialog,
    ConversationFilter,
    DispatchActionConfig,
    SlackFile,
);

accessors!(PlainText { text: str, emoji: copy(bool) });
accessors!(MarkdownText { text: str, verbatim: copy(Option<bool>) });
accessors!(SelectOption {
    text: by_ref(PlainText),
    value: str,
    description: opt(PlainText),
    url: opt_str,
});
accessors!(OptionGroup { label: by_ref(PlainText), options: list(SelectOption) });
accessors!(ConfirmationDialog {
    title: by_ref(PlainText),
    text: by_ref(PlainText),
    confirm: by_ref(PlainText),
    deny: by_ref(PlainText),
    style: copy(Option<ButtonStyle>),
});
accessors!(ConversationFilter {
    include: opt_list(ConversationType),
    exclude_external_shared_channels: copy(bool),
    exclude_bot_users: copy(bool),
});
accessors!(DispatchActionConfig { trigger_actions_on: list(KeyboardEvent) });
accessors!(SlackFile { id: opt_str, url: opt_str });

/// Shared source rules for image elements and image blocks
pub(crate) fn check_image_source(
    image_url: &Option<String>,
    slack_file: &Option<SlackFile>,
) -> Result<(), ValidationError> {
    exactly_one(("image_url", image_url), ("slack_file", slack_file))?;
    secure_url("image_url", image_url.as_deref())?;

    if let Some(file) = slack_file {
        file.validate()?;
        if file.source() == FileSource::Remote {
            let extension = file.extension();
            let supported = extension
                .as_deref()
                .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext));
            if !supported {
                return Err(ValidationError::invalid_value(
                    "slack_file",
                    format!(
                        "Unsupported image extension {:?}, expected one of {}",
                        extension.unwrap_or_default(),
                        IMAGE_EXTENSIONS.join(", ")
                    ),
                ));
            }
        }
    }

    Ok(())
}
