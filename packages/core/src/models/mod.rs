//! Data Models
//!
//! This module contains the Block Kit node catalog:
//!
//! - `Node` - Serialization contract and fixed wire discriminant for every node
//! - `FieldSpec` - Declarative length constraints for node fields
//! - Composition objects (text, options, confirmation dialogs, files)
//! - Interactive elements and select menus
//! - Layout blocks, rich text sub-blocks and modal surfaces
//!
//! Every node validates on construction and on every setter that touches a
//! constrained field. A node that exists has passed validation.

pub mod blocks;
pub mod elements;
pub mod field;
pub mod menus;
pub mod node;
pub mod objects;
pub mod rich_text;
pub mod surfaces;
pub mod validate;

pub use blocks::{
    Accessory, ActionElement, ActionsBlock, Block, ContextBlock, ContextElement, DividerBlock,
    FileBlock, HeaderBlock, ImageBlock, InputBlock, InputElement, MarkdownBlock, SectionBlock,
    VideoBlock,
};
pub use elements::{
    Button, Checkboxes, DatePicker, DateTimePicker, Element, EmailInput, FileInput, ImageElement,
    NumberInput, PlainTextInput, RadioButtons, TimePicker, UrlInput,
};
pub use field::{FieldDefault, FieldSpec};
pub use menus::{
    ChannelMultiSelectMenu, ChannelSelectMenu, ConversationMultiSelectMenu,
    ConversationSelectMenu, ExternalMultiSelectMenu, ExternalSelectMenu, OverflowMenu,
    StaticMultiSelectMenu, StaticSelectMenu, UserMultiSelectMenu, UserSelectMenu,
};
pub use node::{LengthValidationError, Node, ValidationError};
pub use objects::{
    ButtonStyle, ConfirmationDialog, ConversationFilter, ConversationType, DispatchActionConfig,
    FileSource, KeyboardEvent, MarkdownText, OptionGroup, PlainText, SelectOption, SlackFile,
    Text,
};
pub use rich_text::{
    BroadcastRange, ListStyle, RichBlockElement, RichBroadcast, RichChannel, RichColor, RichDate,
    RichElement, RichEmoji, RichLink, RichMentionStyle, RichPreformatted, RichQuote, RichSection,
    RichText, RichTextBlock, RichTextList, RichTextStyle, RichUser, RichUserGroup,
};
pub use surfaces::Modal;
pub use validate::{Measure, Validate};
