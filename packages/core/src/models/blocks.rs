//! Layout Blocks
//!
//! The top-level constituents of a message, modal or home tab, and the closed
//! sets of elements each block field accepts.
//!
//! # Closed sets
//!
//! Fields that accept only some element types hold a field-specific enum.
//! Members of the [`Element`] family are admitted through `TryFrom`, which
//! rejects anything outside the set with an error naming the allowed types:
//!
//! - [`Accessory`]: section accessory, a button or an image
//! - [`ActionElement`]: actions block elements
//! - [`ContextElement`]: context block elements, images and text objects
//! - [`InputElement`]: input block element
//!
//! # Examples
//!
//! ```rust
//! use blockkit_core::models::{Button, DatePicker, SectionBlock};
//!
//! let section = SectionBlock::create("Pick one").unwrap();
//! assert!(section.clone().with_accessory(Button::new("Go").unwrap()).is_ok());
//!
//! let err = section.with_accessory(DatePicker::new()).unwrap_err();
//! assert_eq!(err.to_string(), "accessory must be an instance of button or image");
//! ```

use serde::Serialize;

use crate::behaviors::callable::{ActionCallback, Actionable};
use crate::models::elements::{
    Button, Checkboxes, DatePicker, DateTimePicker, Element, EmailInput, FileInput, ImageElement,
    NumberInput, PlainTextInput, RadioButtons, TimePicker, UrlInput,
};
use crate::models::field::{describe, FieldDefault, FieldSpec, BLOCK_ID};
use crate::models::menus::{
    ChannelMultiSelectMenu, ChannelSelectMenu, ConversationMultiSelectMenu,
    ConversationSelectMenu, ExternalMultiSelectMenu, ExternalSelectMenu, OverflowMenu,
    StaticMultiSelectMenu, StaticSelectMenu, UserMultiSelectMenu, UserSelectMenu,
};
use crate::models::node::{accessors, closed_set, node_family, node_type, ValidationError};
use crate::models::objects::{
    check_image_source, FileSource, MarkdownText, PlainText, SlackFile, Text,
};
use crate::models::rich_text::RichTextBlock;
use crate::models::validate::{exactly_one, secure_url, Validate};
use crate::mrkdwn::TextContent;

const ACTIONS_ELEMENTS: FieldSpec = describe(
    "elements",
    "An array of interactive element objects.",
    FieldDefault::Required,
    None,
    Some(25),
);

const CONTEXT_ELEMENTS: FieldSpec = describe(
    "elements",
    "An array of image elements and text objects.",
    FieldDefault::Required,
    None,
    Some(10),
);

const HEADER_TEXT: FieldSpec = describe(
    "text",
    "The text for the block, in the form of a plain_text text object.",
    FieldDefault::Required,
    None,
    Some(150),
);

const IMAGE_ALT_TEXT: FieldSpec = describe(
    "alt_text",
    "A plain-text summary of the image. This should not contain any markup.",
    FieldDefault::Required,
    None,
    Some(2000),
);

const IMAGE_URL: FieldSpec = describe(
    "image_url",
    "The URL for a publicly hosted image.",
    FieldDefault::Null,
    None,
    Some(3000),
);

const IMAGE_TITLE: FieldSpec = describe(
    "title",
    "An optional title for the image.",
    FieldDefault::Null,
    None,
    Some(2000),
);

const INPUT_LABEL: FieldSpec = describe(
    "label",
    "The label text for the block.",
    FieldDefault::Required,
    None,
    Some(2000),
);

const INPUT_HINT: FieldSpec = describe(
    "hint",
    "An optional hint that appears below an input element.",
    FieldDefault::Null,
    None,
    Some(2000),
);

const MARKDOWN_TEXT: FieldSpec = describe(
    "text",
    "The standard markdown-formatted text.",
    FieldDefault::Required,
    None,
    Some(12000),
);

const SECTION_TEXT: FieldSpec = describe(
    "text",
    "The text for the block, in the form of a text object.",
    FieldDefault::Null,
    Some(1),
    Some(3000),
);

const SECTION_FIELDS: FieldSpec = describe(
    "fields",
    "An array of text objects.",
    FieldDefault::Null,
    Some(1),
    Some(10),
);

const SECTION_FIELD_TEXT: FieldSpec = describe(
    "fields",
    "The text of one section field.",
    FieldDefault::Required,
    None,
    Some(2000),
);

const VIDEO_AUTHOR: FieldSpec = describe(
    "author_name",
    "Author name to be displayed.",
    FieldDefault::Null,
    None,
    Some(50),
);

const VIDEO_TITLE: FieldSpec = describe(
    "title",
    "Video title as a plain_text text object.",
    FieldDefault::Required,
    None,
    Some(200),
);

const VIDEO_DESCRIPTION: FieldSpec = describe(
    "description",
    "Description for the video as a plain_text text object.",
    FieldDefault::Null,
    None,
    Some(200),
);

/// `with_block_id` for every block
macro_rules! block_id_setter {
    ($($node:ty),+ $(,)?) => {
        $(
            impl $node {
                /// Unique identifier for this block, at most 255 characters
                pub fn with_block_id(
                    mut self,
                    block_id: impl Into<String>,
                ) -> Result<Self, $crate::models::ValidationError> {
                    self.block_id = Some(block_id.into());
                    $crate::models::validate::Validate::validate(&self)?;
                    Ok(self)
                }
            }
        )+
    };
}

pub(crate) use block_id_setter;

node_family! {
    /// Section accessories
    #[derive(Eq)]
    pub enum Accessory {
        Button(Button),
        Image(ImageElement),
    }
}

closed_set!(Accessory from Element as "accessory" { Button, Image });

node_family! {
    /// Elements accepted by an actions block
    #[derive(Eq)]
    pub enum ActionElement {
        Button(Button),
        Checkboxes(Checkboxes),
        RadioButtons(RadioButtons),
        DatePicker(DatePicker),
        DateTimePicker(DateTimePicker),
        TimePicker(TimePicker),
        Overflow(OverflowMenu),
        StaticSelect(StaticSelectMenu),
        StaticMultiSelect(StaticMultiSelectMenu),
        ExternalSelect(ExternalSelectMenu),
        ExternalMultiSelect(ExternalMultiSelectMenu),
        UserSelect(UserSelectMenu),
        UserMultiSelect(UserMultiSelectMenu),
        ConversationSelect(ConversationSelectMenu),
        ConversationMultiSelect(ConversationMultiSelectMenu),
        ChannelSelect(ChannelSelectMenu),
        ChannelMultiSelect(ChannelMultiSelectMenu),
    }
}

closed_set!(ActionElement from Element as "elements" {
    Button,
    Checkboxes,
    RadioButtons,
    DatePicker,
    DateTimePicker,
    TimePicker,
    Overflow,
    StaticSelect,
    StaticMultiSelect,
    ExternalSelect,
    ExternalMultiSelect,
    UserSelect,
    UserMultiSelect,
    ConversationSelect,
    ConversationMultiSelect,
    ChannelSelect,
    ChannelMultiSelect,
});

node_family! {
    /// Elements accepted by an input block
    pub enum InputElement {
        Checkboxes(Checkboxes),
        RadioButtons(RadioButtons),
        EmailInput(EmailInput),
        PlainTextInput(PlainTextInput),
        UrlInput(UrlInput),
        NumberInput(NumberInput),
        FileInput(FileInput),
        DatePicker(DatePicker),
        DateTimePicker(DateTimePicker),
        TimePicker(TimePicker),
        StaticSelect(StaticSelectMenu),
        StaticMultiSelect(StaticMultiSelectMenu),
        ExternalSelect(ExternalSelectMenu),
        ExternalMultiSelect(ExternalMultiSelectMenu),
        UserSelect(UserSelectMenu),
        UserMultiSelect(UserMultiSelectMenu),
        ConversationSelect(ConversationSelectMenu),
        ConversationMultiSelect(ConversationMultiSelectMenu),
        ChannelSelect(ChannelSelectMenu),
        ChannelMultiSelect(ChannelMultiSelectMenu),
    }
}

closed_set!(InputElement from Element as "element" {
    Checkboxes,
    RadioButtons,
    EmailInput,
    PlainTextInput,
    UrlInput,
    NumberInput,
    FileInput,
    DatePicker,
    DateTimePicker,
    TimePicker,
    StaticSelect,
    StaticMultiSelect,
    ExternalSelect,
    ExternalMultiSelect,
    UserSelect,
    UserMultiSelect,
    ConversationSelect,
    ConversationMultiSelect,
    ChannelSelect,
    ChannelMultiSelect,
});

node_family! {
    /// Context block items: images and text objects
    #[derive(Eq)]
    pub enum ContextElement {
        Image(ImageElement),
        PlainText(PlainText),
        Markdown(MarkdownText),
    }
}

impl From<Text> for ContextElement {
    fn from(text: Text) -> Self {
        match text {
            Text::Plain(text) => Self::PlainText(text),
            Text::Markdown(text) => Self::Markdown(text),
        }
    }
}

impl TryFrom<Element> for ContextElement {
    type Error = ValidationError;

    fn try_from(value: Element) -> Result<Self, Self::Error> {
        match value {
            Element::Image(image) => Ok(Self::Image(image)),
            other => Err(ValidationError::unexpected_type(
                "elements",
                Self::KINDS,
                other.kind(),
            )),
        }
    }
}

node_type!(ActionsTag => "actions" for ActionsBlock);
node_type!(ContextTag => "context" for ContextBlock);
node_type!(DividerTag => "divider" for DividerBlock);
node_type!(FileTag => "file" for FileBlock);
node_type!(HeaderTag => "header" for HeaderBlock);
node_type!(ImageTag => "image" for ImageBlock);
node_type!(InputTag => "input" for InputBlock);
node_type!(MarkdownTag => "markdown" for MarkdownBlock);
node_type!(SectionTag => "section" for SectionBlock);
node_type!(VideoTag => "video" for VideoBlock);

/// Holds up to 25 interactive elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionsBlock {
    #[serde(rename = "type")]
    kind: ActionsTag,
    pub(crate) block_id: Option<String>,
    pub(crate) elements: Vec<ActionElement>,
}

impl ActionsBlock {
    pub fn new() -> Self {
        Self {
            kind: ActionsTag,
            block_id: None,
            elements: Vec::new(),
        }
    }
}

impl Default for ActionsBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for ActionsBlock {
    fn validate(&self) -> Result<(), ValidationError> {
        BLOCK_ID.check(&self.block_id)?;
        ACTIONS_ELEMENTS.check(&self.elements)?;
        self.elements.iter().try_for_each(Validate::validate)
    }
}

/// Contextual images and text, up to 10 items
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextBlock {
    #[serde(rename = "type")]
    kind: ContextTag,
    pub(crate) block_id: Option<String>,
    pub(crate) elements: Vec<ContextElement>,
}

impl ContextBlock {
    pub fn new() -> Self {
        Self {
            kind: ContextTag,
            block_id: None,
            elements: Vec::new(),
        }
    }
}

impl Default for ContextBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for ContextBlock {
    fn validate(&self) -> Result<(), ValidationError> {
        BLOCK_ID.check(&self.block_id)?;
        CONTEXT_ELEMENTS.check(&self.elements)?;
        self.elements.iter().try_for_each(Validate::validate)
    }
}

/// Horizontal rule between blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DividerBlock {
    #[serde(rename = "type")]
    kind: DividerTag,
    pub(crate) block_id: Option<String>,
}

impl DividerBlock {
    pub fn new() -> Self {
        Self {
            kind: DividerTag,
            block_id: None,
        }
    }
}

impl Default for DividerBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for DividerBlock {
    fn validate(&self) -> Result<(), ValidationError> {
        BLOCK_ID.check(&self.block_id)
    }
}

/// A remote file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileBlock {
    #[serde(rename = "type")]
    kind: FileTag,
    pub(crate) block_id: Option<String>,
    pub(crate) external_id: String,
    source: FileSource,
}

impl FileBlock {
    pub fn new(external_id: impl Into<String>) -> Self {
        Self {
            kind: FileTag,
            block_id: None,
            external_id: external_id.into(),
            source: FileSource::Remote,
        }
    }

    /// Always [`FileSource::Remote`]
    pub fn source(&self) -> FileSource {
        self.source
    }
}

impl Validate for FileBlock {
    fn validate(&self) -> Result<(), ValidationError> {
        BLOCK_ID.check(&self.block_id)
    }
}

/// Large bold plain text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderBlock {
    #[serde(rename = "type")]
    kind: HeaderTag,
    pub(crate) block_id: Option<String>,
    pub(crate) text: PlainText,
}

impl HeaderBlock {
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let node = Self {
            kind: HeaderTag,
            block_id: None,
            text: PlainText::new(text)?,
        };
        node.validate()?;
        Ok(node)
    }
}

impl Validate for HeaderBlock {
    fn validate(&self) -> Result<(), ValidationError> {
        BLOCK_ID.check(&self.block_id)?;
        self.text.validate()?;
        HEADER_TEXT.check(&self.text)
    }
}

/// A standalone image
///
/// Exactly one of `image_url` or `slack_file` is set. `image_url` must be
/// `https://` and a remote `slack_file` must point at a png, jpg, jpeg or gif.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageBlock {
    #[serde(rename = "type")]
    kind: ImageTag,
    pub(crate) block_id: Option<String>,
    pub(crate) alt_text: String,
    pub(crate) image_url: Option<String>,
    pub(crate) slack_file: Option<SlackFile>,
    pub(crate) title: Option<PlainText>,
}

impl ImageBlock {
    pub fn new(image_url: impl Into<String>, alt_text: impl Into<String>) -> Result<Self, ValidationError> {
        let node = Self {
            kind: ImageTag,
            block_id: None,
            alt_text: alt_text.into(),
            image_url: Some(image_url.into()),
            slack_file: None,
            title: None,
        };
        node.validate()?;
        Ok(node)
    }

    pub fn from_slack_file(
        slack_file: SlackFile,
        alt_text: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let node = Self {
            kind: ImageTag,
            block_id: None,
            alt_text: alt_text.into(),
            image_url: None,
            slack_file: Some(slack_file),
            title: None,
        };
        node.validate()?;
        Ok(node)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Result<Self, ValidationError> {
        self.title = Some(PlainText::new(title)?);
        self.validate()?;
        Ok(self)
    }
}

impl Validate for ImageBlock {
    fn validate(&self) -> Result<(), ValidationError> {
        BLOCK_ID.check(&self.block_id)?;
        IMAGE_ALT_TEXT.check(&self.alt_text)?;
        IMAGE_URL.check(&self.image_url)?;
        IMAGE_TITLE.check(&self.title)?;
        check_image_source(&self.image_url, &self.slack_file)
    }
}

/// Collects user input through a single element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputBlock {
    #[serde(rename = "type")]
    kind: InputTag,
    pub(crate) block_id: Option<String>,
    pub(crate) label: PlainText,
    pub(crate) element: InputElement,
    pub(crate) dispatch_action: bool,
    pub(crate) hint: Option<PlainText>,
    pub(crate) optional: bool,
}

impl InputBlock {
    pub fn new(label: impl Into<String>, element: impl Into<Element>) -> Result<Self, ValidationError> {
        let node = Self {
            kind: InputTag,
            block_id: None,
            label: PlainText::new(label)?,
            element: InputElement::try_from(element.into())?,
            dispatch_action: false,
            hint: None,
            optional: false,
        };
        node.validate()?;
        Ok(node)
    }

    /// Dispatch `block_actions` payloads on use, not valid with file inputs
    pub fn with_dispatch_action(mut self, dispatch_action: bool) -> Result<Self, ValidationError> {
        self.dispatch_action = dispatch_action;
        self.validate()?;
        Ok(self)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Result<Self, ValidationError> {
        self.hint = Some(PlainText::new(hint)?);
        self.validate()?;
        Ok(self)
    }

    /// Allow submitting the view with this input empty
    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }
}

impl Validate for InputBlock {
    fn validate(&self) -> Result<(), ValidationError> {
        BLOCK_ID.check(&self.block_id)?;
        INPUT_LABEL.check(&self.label)?;
        INPUT_HINT.check(&self.hint)?;
        self.element.validate()?;
        if self.dispatch_action && matches!(self.element, InputElement::FileInput(_)) {
            return Err(ValidationError::invalid_value(
                "dispatch_action",
                "dispatch_action is not supported with a file_input element",
            ));
        }
        Ok(())
    }
}

/// Standard markdown rendered by the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkdownBlock {
    #[serde(rename = "type")]
    kind: MarkdownTag,
    pub(crate) block_id: Option<String>,
    pub(crate) text: String,
}

impl MarkdownBlock {
    pub fn new(text: impl Into<TextContent>) -> Result<Self, ValidationError> {
        let node = Self {
            kind: MarkdownTag,
            block_id: None,
            text: text.into().render(),
        };
        node.validate()?;
        Ok(node)
    }
}

impl Validate for MarkdownBlock {
    fn validate(&self) -> Result<(), ValidationError> {
        BLOCK_ID.check(&self.block_id)?;
        MARKDOWN_TEXT.check(&self.text)
    }
}

/// Text with an optional accessory, or a grid of text fields
///
/// Exactly one of `text` or `fields` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionBlock {
    #[serde(rename = "type")]
    kind: SectionTag,
    pub(crate) block_id: Option<String>,
    pub(crate) text: Option<Text>,
    pub(crate) accessory: Option<Accessory>,
    pub(crate) expand: bool,
    pub(crate) fields: Option<Vec<Text>>,
}

/// Text objects for section fields, `None` when there are none
fn section_fields<I, C>(fields: I) -> Result<Option<Vec<Text>>, ValidationError>
where
    I: IntoIterator<Item = C>,
    C: Into<TextContent>,
{
    let fields = fields
        .into_iter()
        .map(Text::from_content)
        .collect::<Result<Vec<_>, _>>()?;
    Ok((!fields.is_empty()).then_some(fields))
}

impl SectionBlock {
    /// Create a text section
    ///
    /// Raw strings become plain text, markdown tokens become mrkdwn text.
    pub fn create(content: impl Into<TextContent>) -> Result<Self, ValidationError> {
        let node = Self {
            kind: SectionTag,
            block_id: None,
            text: Some(Text::from_content(content)?),
            accessory: None,
            expand: false,
            fields: None,
        };
        node.validate()?;
        Ok(node)
    }

    /// Create a section of text fields
    pub fn from_fields<I, C>(fields: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = C>,
        C: Into<TextContent>,
    {
        let node = Self {
            kind: SectionTag,
            block_id: None,
            text: None,
            accessory: None,
            expand: false,
            fields: section_fields(fields)?,
        };
        node.validate()?;
        Ok(node)
    }

    /// Set the text fields; fails when the section already has text
    ///
    /// An empty list clears the fields.
    pub fn with_fields<I, C>(mut self, fields: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = C>,
        C: Into<TextContent>,
    {
        self.fields = section_fields(fields)?;
        self.validate()?;
        Ok(self)
    }

    /// Attach a button or image
    pub fn with_accessory(mut self, accessory: impl Into<Element>) -> Result<Self, ValidationError> {
        self.accessory = Some(Accessory::try_from(accessory.into())?);
        self.validate()?;
        Ok(self)
    }

    /// Always render the full text without a "see more" fold
    pub fn with_expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }
}

impl Validate for SectionBlock {
    fn validate(&self) -> Result<(), ValidationError> {
        BLOCK_ID.check(&self.block_id)?;

        exactly_one(("text", &self.text), ("fields", &self.fields))?;

        if let Some(text) = &self.text {
            text.validate()?;
            SECTION_TEXT.check(text)?;
        }
        if let Some(fields) = &self.fields {
            SECTION_FIELDS.check(fields)?;
            for field in fields {
                field.validate()?;
                SECTION_FIELD_TEXT.check(field)?;
            }
        }
        if let Some(accessory) = &self.accessory {
            accessory.validate()?;
        }
        Ok(())
    }
}

/// Embedded video player
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoBlock {
    #[serde(rename = "type")]
    kind: VideoTag,
    pub(crate) block_id: Option<String>,
    pub(crate) alt_text: String,
    pub(crate) author_name: Option<String>,
    pub(crate) description: Option<PlainText>,
    pub(crate) provider_icon_url: Option<String>,
    pub(crate) provider_name: Option<String>,
    pub(crate) title: PlainText,
    pub(crate) title_url: Option<String>,
    pub(crate) thumbnail_url: String,
    pub(crate) video_url: String,
}

impl VideoBlock {
    pub fn new(
        title: impl Into<String>,
        video_url: impl Into<String>,
        thumbnail_url: impl Into<String>,
        alt_text: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let node = Self {
            kind: VideoTag,
            block_id: None,
            alt_text: alt_text.into(),
            author_name: None,
            description: None,
            provider_icon_url: None,
            provider_name: None,
            title: PlainText::new(title)?,
            title_url: None,
            thumbnail_url: thumbnail_url.into(),
            video_url: video_url.into(),
        };
        node.validate()?;
        Ok(node)
    }

    pub fn with_author_name(mut self, author_name: impl Into<String>) -> Result<Self, ValidationError> {
        self.author_name = Some(author_name.into());
        self.validate()?;
        Ok(self)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Result<Self, ValidationError> {
        self.description = Some(PlainText::new(description)?);
        self.validate()?;
        Ok(self)
    }

    /// Non-embeddable `https://` URL for the title
    pub fn with_title_url(mut self, title_url: impl Into<String>) -> Result<Self, ValidationError> {
        self.title_url = Some(title_url.into());
        self.validate()?;
        Ok(self)
    }

    pub fn with_provider(mut self, name: impl Into<String>, icon_url: Option<String>) -> Self {
        self.provider_name = Some(name.into());
        self.provider_icon_url = icon_url;
        self
    }
}

impl Validate for VideoBlock {
    fn validate(&self) -> Result<(), ValidationError> {
        BLOCK_ID.check(&self.block_id)?;
        VIDEO_AUTHOR.check(&self.author_name)?;
        VIDEO_TITLE.check(&self.title)?;
        VIDEO_DESCRIPTION.check(&self.description)?;
        secure_url("video_url", Some(self.video_url.as_str()))?;
        secure_url("title_url", self.title_url.as_deref())
    }
}

block_id_setter!(
    ActionsBlock,
    ContextBlock,
    DividerBlock,
    FileBlock,
    HeaderBlock,
    ImageBlock,
    InputBlock,
    MarkdownBlock,
    SectionBlock,
    VideoBlock,
);

accessors!(ActionsBlock { block_id: opt_str, elements: list(ActionElement) });
accessors!(ContextBlock { block_id: opt_str, elements: list(ContextElement) });
accessors!(DividerBlock { block_id: opt_str });
accessors!(FileBlock { block_id: opt_str, external_id: str });
accessors!(HeaderBlock { block_id: opt_str, text: by_ref(PlainText) });
accessors!(ImageBlock {
    block_id: opt_str,
    alt_text: str,
    image_url: opt_str,
    slack_file: opt(SlackFile),
    title: opt(PlainText),
});
accessors!(InputBlock {
    block_id: opt_str,
    label: by_ref(PlainText),
    element: by_ref(InputElement),
    dispatch_action: copy(bool),
    hint: opt(PlainText),
    optional: copy(bool),
});
accessors!(MarkdownBlock { block_id: opt_str, text: str });
accessors!(SectionBlock {
    block_id: opt_str,
    text: opt(Text),
    accessory: opt(Accessory),
    expand: copy(bool),
    fields: opt_list(Text),
});
accessors!(VideoBlock {
    block_id: opt_str,
    alt_text: str,
    author_name: opt_str,
    description: opt(PlainText),
    provider_icon_url: opt_str,
    provider_name: opt_str,
    title: by_ref(PlainText),
    title_url: opt_str,
    thumbnail_url: str,
    video_url: str,
});

node_family! {
    /// Every top-level block
    pub enum Block {
        Actions(ActionsBlock),
        Context(ContextBlock),
        Divider(DividerBlock),
        File(FileBlock),
        Header(HeaderBlock),
        Image(ImageBlock),
        Input(InputBlock),
        Markdown(MarkdownBlock),
        RichText(RichTextBlock),
        Section(SectionBlock),
        Video(VideoBlock),
    }
}

impl Block {
    pub fn block_id(&self) -> Option<&str> {
        match self {
            Self::Actions(block) => block.block_id(),
            Self::Context(block) => block.block_id(),
            Self::Divider(block) => block.block_id(),
            Self::File(block) => block.block_id(),
            Self::Header(block) => block.block_id(),
            Self::Image(block) => block.block_id(),
            Self::Input(block) => block.block_id(),
            Self::Markdown(block) => block.block_id(),
            Self::RichText(block) => block.block_id(),
            Self::Section(block) => block.block_id(),
            Self::Video(block) => block.block_id(),
        }
    }
}

impl Actionable for Accessory {
    fn bound_actions(&self) -> Vec<ActionCallback> {
        match self {
            Self::Button(button) => button.bound_actions(),
            Self::Image(_) => Vec::new(),
        }
    }
}

impl Actionable for ActionElement {
    fn bound_actions(&self) -> Vec<ActionCallback> {
        match self {
            Self::Button(button) => button.bound_actions(),
            _ => Vec::new(),
        }
    }
}

impl Actionable for Block {
    /// Bound buttons in section accessories and actions blocks
    ///
    /// Input blocks never hold a button, so they contribute nothing.
    fn bound_actions(&self) -> Vec<ActionCallback> {
        match self {
            Self::Section(section) => section
                .accessory
                .as_ref()
                .map(Actionable::bound_actions)
                .unwrap_or_default(),
            Self::Actions(actions) => actions
                .elements
                .iter()
                .flat_map(Actionable::bound_actions)
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl Actionable for [Block] {
    fn bound_actions(&self) -> Vec<ActionCallback> {
        self.iter().flat_map(Actionable::bound_actions).collect()
    }
}

#[cfg(test)]
#[path = "blocks_test.rs"]
mod blocks_test;
