//! Block Kit Builder Facade
//!
//! `BlockKit` is the single entry point for building a message or view. It
//! exposes one factory per node type, owns the ordered top-level block list
//! and registers bound callbacks as blocks are appended.
//!
//! # Append semantics
//!
//! `append` is all or nothing. Every incoming block is validated first, then
//! every bound callback found in the blocks is registered under its element's
//! `action_id`, then the tree is extended. A block that fails validation
//! leaves both the tree and the registry untouched.
//!
//! # Examples
//!
//! ```rust
//! use blockkit_core::services::BlockKit;
//!
//! let mut kit = BlockKit::new();
//! let header = kit.header("Deploy finished").unwrap();
//! let divider = kit.divider();
//! kit.push(header).unwrap().push(divider).unwrap();
//!
//! assert_eq!(
//!     kit.to_json().unwrap(),
//!     r#"{"blocks":[{"type":"header","text":{"type":"plain_text","text":"Deploy finished","emoji":false}},{"type":"divider"}]}"#
//! );
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use crate::behaviors::callable::{Actionable, Callback};
use crate::models::validate::Validate;
use crate::models::{
    ActionsBlock, Block, Button, ChannelMultiSelectMenu, ChannelSelectMenu, Checkboxes,
    ConfirmationDialog, ContextBlock, ConversationFilter, ConversationMultiSelectMenu,
    ConversationSelectMenu, DatePicker, DateTimePicker, DispatchActionConfig, DividerBlock,
    Element, EmailInput, ExternalMultiSelectMenu, ExternalSelectMenu, FileBlock, FileInput,
    HeaderBlock, ImageBlock, ImageElement, InputBlock, KeyboardEvent, ListStyle, MarkdownBlock,
    MarkdownText, Modal, NumberInput, OptionGroup, OverflowMenu, PlainText, PlainTextInput,
    RadioButtons, RichBroadcast, RichChannel, RichColor, RichDate, RichElement, RichEmoji,
    RichLink, RichPreformatted, RichQuote, RichSection, RichText, RichTextBlock, RichTextList,
    RichUser, RichUserGroup, SectionBlock, SelectOption, SlackFile, StaticMultiSelectMenu,
    StaticSelectMenu, TimePicker, UrlInput, UserMultiSelectMenu, UserSelectMenu,
    ValidationError, VideoBlock,
};
use crate::models::rich_text::BroadcastRange;
use crate::mrkdwn::TextContent;
use crate::services::action_registry::ActionRegistry;
use crate::services::config::BlockKitConfig;
use crate::services::error::BlockKitError;
use crate::utils::serialize::{preview_url, strip_nulls, to_json_string, wire_payload};

/// Builder for one top-level block tree
#[derive(Debug, Clone, Default, Serialize)]
pub struct BlockKit {
    blocks: Vec<Block>,

    #[serde(skip)]
    registry: ActionRegistry,

    #[serde(skip)]
    config: BlockKitConfig,
}

impl BlockKit {
    /// Create an empty builder with a fresh registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder that registers into a shared registry
    pub fn with_registry(registry: ActionRegistry) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }

    pub fn with_config(mut self, config: BlockKitConfig) -> Self {
        self.config = config;
        self
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn config(&self) -> &BlockKitConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    // Tree assembly

    /// Validate, bind and append blocks in order
    pub fn append<I, B>(&mut self, blocks: I) -> Result<&mut Self, BlockKitError>
    where
        I: IntoIterator<Item = B>,
        B: Into<Block>,
    {
        let incoming: Vec<Block> = blocks.into_iter().map(Into::into).collect();

        for (index, block) in incoming.iter().enumerate() {
            if let Err(err) = block.validate() {
                tracing::warn!(
                    "Rejected {} block at position {}: {}",
                    block.kind(),
                    self.blocks.len() + index,
                    err
                );
                return Err(err.into());
            }
        }

        let bound = self.registry.bind(&incoming[..]);
        tracing::debug!(
            "Appended {} blocks ({} bound actions)",
            incoming.len(),
            bound
        );

        self.blocks.extend(incoming);
        Ok(self)
    }

    /// Validate, bind and append one block
    pub fn push(&mut self, block: impl Into<Block>) -> Result<&mut Self, BlockKitError> {
        self.append(std::iter::once(block.into()))
    }

    /// Callback registered under `action_id`
    pub fn resolve_action(&self, action_id: &str) -> Result<Callback, BlockKitError> {
        Ok(self.registry.resolve(action_id)?)
    }

    /// Register every bound callback inside `node` without appending it
    ///
    /// Used for surfaces such as modals that are sent on their own.
    pub fn bind<A>(&self, node: &A) -> usize
    where
        A: Actionable + ?Sized,
    {
        self.registry.bind(node)
    }

    // Rendering

    /// `{"blocks": [...]}` with every field present, nulls included
    pub fn to_mapping(&self) -> Result<Map<String, Value>, BlockKitError> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }

    /// Null-stripped JSON using the configured indent
    pub fn to_json(&self) -> Result<String, BlockKitError> {
        let stripped = strip_nulls(Value::Object(self.to_mapping()?));
        Ok(to_json_string(&stripped, self.config.json_indent)?)
    }

    /// The bare block array as the API expects it
    pub fn to_wire(&self) -> Result<Value, BlockKitError> {
        Ok(wire_payload(strip_nulls(Value::Object(self.to_mapping()?))))
    }

    /// Block Kit Builder link for the current tree
    pub fn to_preview_url(&self) -> Result<String, BlockKitError> {
        Ok(preview_url(
            Value::Object(self.to_mapping()?),
            &self.config.preview_base_url,
            self.config.team_id.as_deref(),
        )?)
    }

    // Composition objects

    pub fn plain_text(&self, text: impl Into<String>) -> Result<PlainText, ValidationError> {
        PlainText::new(text)
    }

    pub fn mrkdwn(&self, text: impl Into<TextContent>) -> Result<MarkdownText, ValidationError> {
        MarkdownText::new(text)
    }

    pub fn option(
        &self,
        text: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<SelectOption, ValidationError> {
        SelectOption::new(text, value)
    }

    pub fn option_group(
        &self,
        label: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Result<OptionGroup, ValidationError> {
        OptionGroup::new(label, options)
    }

    pub fn confirm(
        &self,
        title: impl Into<String>,
        text: impl Into<String>,
        confirm: impl Into<String>,
        deny: impl Into<String>,
    ) -> Result<ConfirmationDialog, ValidationError> {
        ConfirmationDialog::new(title, text, confirm, deny)
    }

    pub fn conversation_filter(&self) -> ConversationFilter {
        ConversationFilter::new()
    }

    pub fn dispatch_action_config(&self, trigger_actions_on: Vec<KeyboardEvent>) -> DispatchActionConfig {
        DispatchActionConfig::new(trigger_actions_on)
    }

    pub fn slack_file(&self, value: impl Into<String>) -> SlackFile {
        SlackFile::new(value)
    }

    // Layout blocks

    pub fn actions(&self) -> ActionsBlock {
        ActionsBlock::new()
    }

    pub fn context(&self) -> ContextBlock {
        ContextBlock::new()
    }

    pub fn divider(&self) -> DividerBlock {
        DividerBlock::new()
    }

    pub fn file(&self, external_id: impl Into<String>) -> FileBlock {
        FileBlock::new(external_id)
    }

    pub fn header(&self, text: impl Into<String>) -> Result<HeaderBlock, ValidationError> {
        HeaderBlock::new(text)
    }

    pub fn image(
        &self,
        image_url: impl Into<String>,
        alt_text: impl Into<String>,
    ) -> Result<ImageBlock, ValidationError> {
        ImageBlock::new(image_url, alt_text)
    }

    pub fn input(
        &self,
        label: impl Into<String>,
        element: impl Into<Element>,
    ) -> Result<InputBlock, ValidationError> {
        InputBlock::new(label, element)
    }

    pub fn markdown(&self, text: impl Into<TextContent>) -> Result<MarkdownBlock, ValidationError> {
        MarkdownBlock::new(text)
    }

    pub fn section(&self, text: impl Into<TextContent>) -> Result<SectionBlock, ValidationError> {
        SectionBlock::create(text)
    }

    pub fn video(
        &self,
        title: impl Into<String>,
        video_url: impl Into<String>,
        thumbnail_url: impl Into<String>,
        alt_text: impl Into<String>,
    ) -> Result<VideoBlock, ValidationError> {
        VideoBlock::new(title, video_url, thumbnail_url, alt_text)
    }

    pub fn rich_text(&self) -> RichTextBlock {
        RichTextBlock::new()
    }

    pub fn rich_section(&self) -> RichSection {
        RichSection::new()
    }

    pub fn rich_list(&self, style: ListStyle) -> RichTextList {
        RichTextList::new(style)
    }

    pub fn rich_preformatted(&self) -> RichPreformatted {
        RichPreformatted::new()
    }

    pub fn rich_quote(&self) -> RichQuote {
        RichQuote::new()
    }

    pub fn modal(&self, title: impl Into<String>) -> Result<Modal, ValidationError> {
        Modal::new(title)
    }

    // Elements

    pub fn button(&self, text: impl Into<String>) -> Result<Button, ValidationError> {
        Button::new(text)
    }

    pub fn image_element(
        &self,
        image_url: impl Into<String>,
        alt_text: impl Into<String>,
    ) -> Result<ImageElement, ValidationError> {
        ImageElement::new(image_url, alt_text)
    }

    pub fn checkboxes(&self, options: Vec<SelectOption>) -> Result<Checkboxes, ValidationError> {
        Checkboxes::new(options)
    }

    pub fn radio_buttons(&self, options: Vec<SelectOption>) -> Result<RadioButtons, ValidationError> {
        RadioButtons::new(options)
    }

    pub fn email_input(&self) -> EmailInput {
        EmailInput::new()
    }

    pub fn plain_text_input(&self) -> PlainTextInput {
        PlainTextInput::new()
    }

    pub fn url_input(&self) -> UrlInput {
        UrlInput::new()
    }

    pub fn number_input(&self, is_decimal_allowed: bool) -> NumberInput {
        NumberInput::new(is_decimal_allowed)
    }

    pub fn file_input(&self) -> FileInput {
        FileInput::new()
    }

    pub fn datepicker(&self) -> DatePicker {
        DatePicker::new()
    }

    pub fn datetimepicker(&self) -> DateTimePicker {
        DateTimePicker::new()
    }

    pub fn timepicker(&self) -> TimePicker {
        TimePicker::new()
    }

    pub fn overflow(&self, options: Vec<SelectOption>) -> Result<OverflowMenu, ValidationError> {
        OverflowMenu::new(options)
    }

    pub fn static_select(&self, options: Vec<SelectOption>) -> Result<StaticSelectMenu, ValidationError> {
        StaticSelectMenu::new(options)
    }

    pub fn static_multi_select(
        &self,
        options: Vec<SelectOption>,
    ) -> Result<StaticMultiSelectMenu, ValidationError> {
        StaticMultiSelectMenu::new(options)
    }

    pub fn external_select(&self) -> ExternalSelectMenu {
        ExternalSelectMenu::new()
    }

    pub fn external_multi_select(&self) -> ExternalMultiSelectMenu {
        ExternalMultiSelectMenu::new()
    }

    pub fn user_select(&self) -> UserSelectMenu {
        UserSelectMenu::new()
    }

    pub fn user_multi_select(&self) -> UserMultiSelectMenu {
        UserMultiSelectMenu::new()
    }

    pub fn conversation_select(&self) -> ConversationSelectMenu {
        ConversationSelectMenu::new()
    }

    pub fn conversation_multi_select(&self) -> ConversationMultiSelectMenu {
        ConversationMultiSelectMenu::new()
    }

    pub fn channel_select(&self) -> ChannelSelectMenu {
        ChannelSelectMenu::new()
    }

    pub fn channel_multi_select(&self) -> ChannelMultiSelectMenu {
        ChannelMultiSelectMenu::new()
    }

    // Rich text elements

    /// Unstyled text, or a decomposed markdown token
    pub fn text(&self, content: impl Into<TextContent>) -> RichElement {
        RichText::create(content)
    }

    pub fn link(&self, url: impl Into<String>) -> RichLink {
        RichLink::new(url)
    }

    pub fn channel(&self, channel_id: impl Into<String>) -> RichChannel {
        RichChannel::new(channel_id)
    }

    pub fn user(&self, user_id: impl Into<String>) -> RichUser {
        RichUser::new(user_id)
    }

    pub fn usergroup(&self, usergroup_id: impl Into<String>) -> RichUserGroup {
        RichUserGroup::new(usergroup_id)
    }

    pub fn emoji(&self, name: impl Into<String>) -> RichEmoji {
        RichEmoji::new(name)
    }

    pub fn date(&self, timestamp: i64, format: impl Into<String>) -> RichDate {
        RichDate::new(timestamp, format)
    }

    pub fn color(&self, value: impl Into<String>) -> RichColor {
        RichColor::new(value)
    }

    pub fn broadcast(&self, range: BroadcastRange) -> RichBroadcast {
        RichBroadcast::new(range)
    }
}

#[cfg(test)]
#[path = "block_kit_test.rs"]
mod block_kit_test;
