//! Child composition
//!
//! Container nodes expose their child list through [`Collect`]. Composing
//! never mutates the receiver: `with_children` clones it, replaces the child
//! field and validates the clone.
//!
//! Items are first converted into the container's source family and then
//! admitted into the closed set the child field accepts. An actions block
//! takes any [`Element`] and rejects the ones that are not interactive:
//!
//! ```rust
//! use blockkit_core::behaviors::Collect;
//! use blockkit_core::models::{ActionsBlock, Button, Element, PlainTextInput};
//!
//! let empty = ActionsBlock::new();
//! let actions = empty.with_child(Button::new("Go").unwrap()).unwrap();
//! assert_eq!(actions.children().len(), 1);
//! assert!(empty.children().is_empty());
//!
//! assert!(empty.with_child(Element::from(PlainTextInput::new())).is_err());
//! ```

use tracing::trace;

use crate::models::blocks::{ActionElement, ActionsBlock, Block, ContextBlock, ContextElement};
use crate::models::elements::{Checkboxes, Element, RadioButtons};
use crate::models::menus::{OverflowMenu, StaticMultiSelectMenu, StaticSelectMenu};
use crate::models::objects::SelectOption;
use crate::models::rich_text::{
    RichBlockElement, RichElement, RichPreformatted, RichQuote, RichSection, RichTextBlock,
    RichTextList,
};
use crate::models::surfaces::Modal;
use crate::models::validate::Validate;
use crate::models::ValidationError;

mod sealed {
    /// Raw write access to the child field, kept out of reach of callers
    pub trait ChildSlot {
        /// Closed set stored in the child field
        type Child;

        fn set_children(&mut self, children: Vec<Self::Child>);
    }
}

/// A node with one ordered child list
///
/// The child list only changes through [`Collect::with_children`], so every
/// composed node has passed validation.
pub trait Collect: Validate + Clone + Sized + sealed::ChildSlot {
    /// Wire name of the child field
    const CHILD_FIELD: &'static str;

    /// Family that composed items are converted into
    type Source;

    /// Admit a source item into the child set
    fn admit(item: Self::Source) -> Result<Self::Child, ValidationError>;

    fn children(&self) -> &[Self::Child];

    /// A validated copy whose children are exactly `items`, in order
    fn with_children<I, T>(&self, items: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Self::Source>,
    {
        let children = items
            .into_iter()
            .map(|item| Self::admit(item.into()))
            .collect::<Result<Vec<_>, _>>()?;

        trace!(
            field = Self::CHILD_FIELD,
            count = children.len(),
            "composing children"
        );

        let mut node = self.clone();
        sealed::ChildSlot::set_children(&mut node, children);
        node.validate()?;
        Ok(node)
    }

    /// A validated copy holding a single child
    fn with_child<T>(&self, item: T) -> Result<Self, ValidationError>
    where
        T: Into<Self::Source>,
    {
        self.with_children(std::iter::once(item))
    }
}

/// Implement [`Collect`] over a `Vec` field
///
/// Without `from`, the source family is the child set itself.
macro_rules! collect {
    (@impl $node:ty, $field:ident, $source:ty, $child:ty, $admit:expr) => {
        impl sealed::ChildSlot for $node {
            type Child = $child;

            fn set_children(&mut self, children: Vec<Self::Child>) {
                self.$field = children;
            }
        }

        impl Collect for $node {
            const CHILD_FIELD: &'static str = stringify!($field);
            type Source = $source;

            fn admit(item: Self::Source) -> Result<Self::Child, ValidationError> {
                ($admit)(item)
            }

            fn children(&self) -> &[Self::Child] {
                &self.$field
            }
        }
    };
    ($node:ty, $field:ident: $child:ty) => {
        collect!(@impl $node, $field, $child, $child, Ok);
    };
    ($node:ty, $field:ident: $child:ty, from $source:ty) => {
        collect!(@impl $node, $field, $source, $child, <$child>::try_from);
    };
}

collect!(ActionsBlock, elements: ActionElement, from Element);
collect!(ContextBlock, elements: ContextElement);
collect!(RichTextBlock, elements: RichBlockElement);
collect!(RichSection, elements: RichElement);
collect!(RichTextList, elements: RichSection);
collect!(RichPreformatted, elements: RichElement);
collect!(RichQuote, elements: RichElement);
collect!(Checkboxes, options: SelectOption);
collect!(RadioButtons, options: SelectOption);
collect!(OverflowMenu, options: SelectOption);
collect!(StaticSelectMenu, options: SelectOption);
collect!(StaticMultiSelectMenu, options: SelectOption);
collect!(Modal, blocks: Block);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Button, DatePicker, DividerBlock, HeaderBlock, ImageElement, ListStyle, OptionGroup,
        PlainText, PlainTextInput, RichText,
    };
    use crate::mrkdwn::MarkdownToken;

    fn option(value: &str) -> SelectOption {
        SelectOption::new(value, value).unwrap()
    }

    #[test]
    fn test_child_fields() {
        assert_eq!(ActionsBlock::CHILD_FIELD, "elements");
        assert_eq!(ContextBlock::CHILD_FIELD, "elements");
        assert_eq!(RichTextList::CHILD_FIELD, "elements");
        assert_eq!(Checkboxes::CHILD_FIELD, "options");
        assert_eq!(StaticSelectMenu::CHILD_FIELD, "options");
        assert_eq!(Modal::CHILD_FIELD, "blocks");
    }

    #[test]
    fn test_with_children_leaves_receiver_untouched() {
        let empty = ActionsBlock::new();
        let actions = empty
            .with_children(vec![
                Element::from(Button::new("One").unwrap()),
                Element::from(DatePicker::new()),
            ])
            .unwrap();

        assert!(empty.children().is_empty());
        let kinds: Vec<&str> = actions.children().iter().map(ActionElement::kind).collect();
        assert_eq!(kinds, vec!["button", "datepicker"]);
    }

    #[test]
    fn test_with_children_replaces() {
        let actions = ActionsBlock::new()
            .with_child(Button::new("One").unwrap())
            .unwrap()
            .with_child(Button::new("Two").unwrap())
            .unwrap();
        assert_eq!(actions.children().len(), 1);
    }

    #[test]
    fn test_rejects_non_members() {
        let err = ActionsBlock::new()
            .with_child(PlainTextInput::new())
            .unwrap_err();
        match err {
            ValidationError::UnexpectedType { field, found, .. } => {
                assert_eq!(field, "elements");
                assert_eq!(found, "plain_text_input");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_rejects_over_limit() {
        let buttons: Vec<Button> = (0..26)
            .map(|i| Button::new(format!("B{}", i)).unwrap())
            .collect();
        assert!(ActionsBlock::new().with_children(buttons).unwrap_err().is_length());

        let options: Vec<SelectOption> = (0..6).map(|i| option(&i.to_string())).collect();
        let overflow = OverflowMenu::new(vec![option("a")]).unwrap();
        assert!(overflow.with_children(options).is_err());
    }

    #[test]
    fn test_context_accepts_text_and_images() {
        let image = ImageElement::new("https://example.com/a.png", "a").unwrap();
        let context = ContextBlock::new()
            .with_children(vec![
                ContextElement::from(image),
                ContextElement::from(PlainText::new("note").unwrap()),
            ])
            .unwrap();
        assert_eq!(context.children().len(), 2);
    }

    #[test]
    fn test_rich_text_nesting() {
        let section = RichSection::new()
            .with_children(vec![
                RichElement::from("Hello "),
                RichText::create(MarkdownToken::bold("world")),
            ])
            .unwrap();
        let list = RichTextList::new(ListStyle::Ordered)
            .with_children(vec![section.clone(), section.clone()])
            .unwrap();
        let block = RichTextBlock::new()
            .with_children(vec![RichBlockElement::from(section), RichBlockElement::from(list)])
            .unwrap();

        let kinds: Vec<&str> = block.children().iter().map(RichBlockElement::kind).collect();
        assert_eq!(kinds, vec!["rich_text_section", "rich_text_list"]);
    }

    #[test]
    fn test_static_select_options_and_groups_exclusive() {
        let group = OptionGroup::new("Group", vec![option("a")]).unwrap();
        let grouped = StaticSelectMenu::new(vec![option("x")])
            .unwrap()
            .with_option_groups(vec![group])
            .unwrap();

        assert!(grouped.with_children(vec![option("b")]).is_err());
    }

    #[test]
    fn test_modal_blocks() {
        let modal = Modal::new("Hello").unwrap();
        let composed = modal
            .with_children(vec![
                Block::from(HeaderBlock::new("Title").unwrap()),
                Block::from(DividerBlock::new()),
            ])
            .unwrap();
        assert!(modal.children().is_empty());
        assert_eq!(composed.children().len(), 2);
    }
}
