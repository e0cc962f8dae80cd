//! Surfaces
//!
//! Containers that host blocks outside a message. Only modals are modelled.

use serde::Serialize;

use crate::behaviors::callable::{ActionCallback, Actionable};
use crate::models::blocks::Block;
use crate::models::field::{describe, FieldDefault, FieldSpec};
use crate::models::node::{accessors, node_type, ValidationError};
use crate::models::objects::PlainText;
use crate::models::validate::Validate;

const TITLE: FieldSpec = describe(
    "title",
    "The title that appears in the top-left of the modal.",
    FieldDefault::Required,
    None,
    Some(24),
);

const BLOCKS: FieldSpec = describe(
    "blocks",
    "An array of blocks that defines the content of the view.",
    FieldDefault::Required,
    None,
    Some(100),
);

const CLOSE: FieldSpec = describe(
    "close",
    "Text of the button that closes the modal.",
    FieldDefault::Null,
    None,
    Some(24),
);

const SUBMIT: FieldSpec = describe(
    "submit",
    "Text of the button that submits the view.",
    FieldDefault::Null,
    None,
    Some(24),
);

const PRIVATE_METADATA: FieldSpec = describe(
    "private_metadata",
    "A string sent back with interaction payloads.",
    FieldDefault::Null,
    None,
    Some(3000),
);

const CALLBACK_ID: FieldSpec = describe(
    "callback_id",
    "An identifier to recognize interactions and submissions of this view.",
    FieldDefault::Null,
    None,
    Some(255),
);

const EXTERNAL_ID: FieldSpec = describe(
    "external_id",
    "A custom identifier that must be unique for all views on a per-team basis.",
    FieldDefault::Null,
    None,
    Some(255),
);

node_type!(ModalTag => "modal" for Modal);

/// A modal view
///
/// A modal holding an input block must define `submit`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Modal {
    #[serde(rename = "type")]
    kind: ModalTag,
    pub(crate) title: PlainText,
    pub(crate) blocks: Vec<Block>,
    pub(crate) close: Option<PlainText>,
    pub(crate) submit: Option<PlainText>,
    pub(crate) private_metadata: Option<String>,
    pub(crate) callback_id: Option<String>,
    pub(crate) clear_on_close: bool,
    pub(crate) notify_on_close: bool,
    pub(crate) external_id: Option<String>,
    pub(crate) submit_disabled: bool,
}

impl Modal {
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        let node = Self {
            kind: ModalTag,
            title: PlainText::new(title)?,
            blocks: Vec::new(),
            close: None,
            submit: None,
            private_metadata: None,
            callback_id: None,
            clear_on_close: false,
            notify_on_close: false,
            external_id: None,
            submit_disabled: false,
        };
        node.validate()?;
        Ok(node)
    }

    pub fn with_close(mut self, close: impl Into<String>) -> Result<Self, ValidationError> {
        self.close = Some(PlainText::new(close)?);
        self.validate()?;
        Ok(self)
    }

    pub fn with_submit(mut self, submit: impl Into<String>) -> Result<Self, ValidationError> {
        self.submit = Some(PlainText::new(submit)?);
        self.validate()?;
        Ok(self)
    }

    pub fn with_private_metadata(mut self, metadata: impl Into<String>) -> Result<Self, ValidationError> {
        self.private_metadata = Some(metadata.into());
        self.validate()?;
        Ok(self)
    }

    pub fn with_callback_id(mut self, callback_id: impl Into<String>) -> Result<Self, ValidationError> {
        self.callback_id = Some(callback_id.into());
        self.validate()?;
        Ok(self)
    }

    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Result<Self, ValidationError> {
        self.external_id = Some(external_id.into());
        self.validate()?;
        Ok(self)
    }

    /// Clear every view in the stack when this modal closes
    pub fn with_clear_on_close(mut self, clear_on_close: bool) -> Self {
        self.clear_on_close = clear_on_close;
        self
    }

    /// Send a `view_closed` event when the user closes this modal
    pub fn with_notify_on_close(mut self, notify_on_close: bool) -> Self {
        self.notify_on_close = notify_on_close;
        self
    }

    pub fn with_submit_disabled(mut self, submit_disabled: bool) -> Self {
        self.submit_disabled = submit_disabled;
        self
    }
}

accessors!(Modal {
    title: by_ref(PlainText),
    blocks: list(Block),
    close: opt(PlainText),
    submit: opt(PlainText),
    private_metadata: opt_str,
    callback_id: opt_str,
    clear_on_close: copy(bool),
    notify_on_close: copy(bool),
    external_id: opt_str,
    submit_disabled: copy(bool),
});

impl Validate for Modal {
    fn validate(&self) -> Result<(), ValidationError> {
        TITLE.check(&self.title)?;
        BLOCKS.check(&self.blocks)?;
        CLOSE.check(&self.close)?;
        SUBMIT.check(&self.submit)?;
        PRIVATE_METADATA.check(&self.private_metadata)?;
        CALLBACK_ID.check(&self.callback_id)?;
        EXTERNAL_ID.check(&self.external_id)?;
        self.blocks.iter().try_for_each(Validate::validate)?;

        let has_input = self.blocks.iter().any(|block| matches!(block, Block::Input(_)));
        if has_input && self.submit.is_none() {
            return Err(ValidationError::invalid_value(
                "submit",
                "submit is required when the modal contains an input block",
            ));
        }
        Ok(())
    }
}

impl Actionable for Modal {
    fn bound_actions(&self) -> Vec<ActionCallback> {
        self.blocks[..].bound_actions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviors::Collect;
    use crate::models::blocks::{DividerBlock, InputBlock, SectionBlock};
    use crate::models::elements::{Button, PlainTextInput};
    use crate::models::Node;

    #[test]
    fn test_title_limit() {
        assert!(Modal::new("a".repeat(24)).is_ok());
        let err = Modal::new("a".repeat(25)).unwrap_err();
        assert_eq!(err.to_string(), "title: Length 25 exceeds maximum 24");
    }

    #[test]
    fn test_input_block_requires_submit() {
        let input = InputBlock::new("Name", PlainTextInput::new()).unwrap();
        let modal = Modal::new("Survey").unwrap();
        let err = modal.with_child(input.clone()).unwrap_err();
        assert_eq!(err.field(), "submit");

        let modal = modal.with_submit("Send").unwrap().with_child(input).unwrap();
        assert_eq!(modal.submit().map(PlainText::text), Some("Send"));
        assert_eq!(modal.blocks().len(), 1);
    }

    #[test]
    fn test_serialization_order() {
        let modal = Modal::new("Hello")
            .unwrap()
            .with_close("Cancel")
            .unwrap()
            .with_child(DividerBlock::new())
            .unwrap();

        let mapping = modal.to_mapping().unwrap();
        let keys: Vec<&str> = mapping.keys().map(String::as_str).collect();
        assert_eq!(&keys[..4], &["type", "title", "blocks", "close"]);
        assert_eq!(mapping["type"], "modal");
        assert_eq!(mapping["blocks"][0]["type"], "divider");
    }

    #[test]
    fn test_metadata_limits() {
        let modal = Modal::new("Hello").unwrap();
        assert!(modal.clone().with_private_metadata("x".repeat(3001)).is_err());
        assert!(modal.clone().with_callback_id("x".repeat(256)).is_err());
        assert!(modal.with_external_id("ext-1").is_ok());
    }

    #[test]
    fn test_bound_actions() {
        let button = Button::new("Go")
            .unwrap()
            .with_action_id("go")
            .unwrap()
            .on_click(|| {});
        let section = SectionBlock::create("Hi").unwrap().with_accessory(button).unwrap();
        let modal = Modal::new("Hello").unwrap().with_child(section).unwrap();

        let actions = modal.bound_actions();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].action_id, "go");
    }
}
