//! Select Menus
//!
//! Overflow menus and the single/multi select menus for static options,
//! external data sources, users, conversations and public channels.
//! Unlike buttons and inputs, menus keep `action_id` unset unless the caller
//! provides one.

use serde::Serialize;

use crate::models::elements::{action_id_setter, focus_confirm_setters, placeholder_setter, ACTION_ID, PLACEHOLDER};
use crate::models::field::{describe, FieldDefault, FieldSpec};
use crate::models::node::{accessors, node_type, ValidationError};
use crate::models::objects::{
    ConfirmationDialog, ConversationFilter, OptionGroup, PlainText, SelectOption,
};
use crate::models::validate::{at_most_one, Validate};

const OVERFLOW_OPTIONS: FieldSpec = describe(
    "options",
    "An array of up to five option objects to display in the menu.",
    FieldDefault::Required,
    None,
    Some(5),
);

const MENU_OPTIONS: FieldSpec = describe(
    "options",
    "An array of option objects.",
    FieldDefault::Required,
    None,
    Some(100),
);

const OPTION_GROUPS: FieldSpec = describe(
    "option_groups",
    "An array of option group objects.",
    FieldDefault::Null,
    None,
    Some(100),
);

const DEFAULT_MIN_QUERY_LENGTH: u32 = 3;

/// Reject a zero `max_selected_items`
fn check_max_selected(max_selected_items: Option<u32>) -> Result<(), ValidationError> {
    if max_selected_items == Some(0) {
        return Err(ValidationError::invalid_value(
            "max_selected_items",
            "max_selected_items must be at least 1",
        ));
    }
    Ok(())
}

/// Options and option groups of a static menu
fn check_static_options(
    options: &[SelectOption],
    option_groups: &Option<Vec<OptionGroup>>,
) -> Result<(), ValidationError> {
    let options_set = (!options.is_empty()).then_some(());
    at_most_one(("options", &options_set), ("option_groups", option_groups))?;
    MENU_OPTIONS.check(options)?;
    OPTION_GROUPS.check(option_groups)?;
    options.iter().try_for_each(Validate::validate)?;
    if let Some(groups) = option_groups {
        groups.iter().try_for_each(Validate::validate)?;
    }
    Ok(())
}

fn check_menu(
    action_id: &Option<String>,
    placeholder: &Option<PlainText>,
    max_selected_items: Option<u32>,
) -> Result<(), ValidationError> {
    ACTION_ID.check(action_id)?;
    PLACEHOLDER.check(placeholder)?;
    check_max_selected(max_selected_items)
}

node_type!(OverflowTag => "overflow" for OverflowMenu);
node_type!(StaticSelectTag => "static_select" for StaticSelectMenu);
node_type!(StaticMultiSelectTag => "multi_static_select" for StaticMultiSelectMenu);
node_type!(ExternalSelectTag => "external_select" for ExternalSelectMenu);
node_type!(ExternalMultiSelectTag => "multi_external_select" for ExternalMultiSelectMenu);
node_type!(UserSelectTag => "users_select" for UserSelectMenu);
node_type!(UserMultiSelectTag => "multi_users_select" for UserMultiSelectMenu);
node_type!(ConversationSelectTag => "conversations_select" for ConversationSelectMenu);
node_type!(ConversationMultiSelectTag => "multi_conversations_select" for ConversationMultiSelectMenu);
node_type!(ChannelSelectTag => "channels_select" for ChannelSelectMenu);
node_type!(ChannelMultiSelectTag => "multi_channels_select" for ChannelMultiSelectMenu);

/// Overflow menu of up to five options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverflowMenu {
    #[serde(rename = "type")]
    kind: OverflowTag,
    pub(crate) options: Vec<SelectOption>,
    pub(crate) confirm: Option<ConfirmationDialog>,
    pub(crate) action_id: Option<String>,
}

impl OverflowMenu {
    pub fn new(options: Vec<SelectOption>) -> Result<Self, ValidationError> {
        let node = Self {
            kind: OverflowTag,
            options,
            confirm: None,
            action_id: None,
        };
        node.validate()?;
        Ok(node)
    }

    pub fn with_confirm(mut self, confirm: ConfirmationDialog) -> Self {
        self.confirm = Some(confirm);
        self
    }
}

impl Validate for OverflowMenu {
    fn validate(&self) -> Result<(), ValidationError> {
        OVERFLOW_OPTIONS.check(&self.options)?;
        self.options.iter().try_for_each(Validate::validate)?;
        ACTION_ID.check(&self.action_id)
    }
}

/// Single select over a static list of options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticSelectMenu {
    #[serde(rename = "type")]
    kind: StaticSelectTag,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) options: Vec<SelectOption>,
    pub(crate) option_groups: Option<Vec<OptionGroup>>,
    pub(crate) initial_option: Option<SelectOption>,
    pub(crate) confirm: Option<ConfirmationDialog>,
    pub(crate) focus_on_load: Option<bool>,
    pub(crate) placeholder: Option<PlainText>,
    pub(crate) action_id: Option<String>,
}

impl StaticSelectMenu {
    pub fn new(options: Vec<SelectOption>) -> Result<Self, ValidationError> {
        let node = Self {
            kind: StaticSelectTag,
            options,
            option_groups: None,
            initial_option: None,
            confirm: None,
            focus_on_load: None,
            placeholder: None,
            action_id: None,
        };
        node.validate()?;
        Ok(node)
    }

    /// Replace flat options with option groups
    pub fn with_option_groups(mut self, option_groups: Vec<OptionGroup>) -> Result<Self, ValidationError> {
        self.options.clear();
        self.option_groups = Some(option_groups);
        self.validate()?;
        Ok(self)
    }

    pub fn with_initial_option(mut self, initial_option: SelectOption) -> Self {
        self.initial_option = Some(initial_option);
        self
    }
}

impl Validate for StaticSelectMenu {
    fn validate(&self) -> Result<(), ValidationError> {
        check_static_options(&self.options, &self.option_groups)?;
        check_menu(&self.action_id, &self.placeholder, None)
    }
}

/// Multi select over a static list of options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticMultiSelectMenu {
    #[serde(rename = "type")]
    kind: StaticMultiSelectTag,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) options: Vec<SelectOption>,
    pub(crate) option_groups: Option<Vec<OptionGroup>>,
    pub(crate) initial_options: Option<Vec<SelectOption>>,
    pub(crate) confirm: Option<ConfirmationDialog>,
    pub(crate) max_selected_items: Option<u32>,
    pub(crate) focus_on_load: Option<bool>,
    pub(crate) placeholder: Option<PlainText>,
    pub(crate) action_id: Option<String>,
}

impl StaticMultiSelectMenu {
    pub fn new(options: Vec<SelectOption>) -> Result<Self, ValidationError> {
        let node = Self {
            kind: StaticMultiSelectTag,
            options,
            option_groups: None,
            initial_options: None,
            confirm: None,
            max_selected_items: None,
            focus_on_load: None,
            placeholder: None,
            action_id: None,
        };
        node.validate()?;
        Ok(node)
    }

    /// Replace flat options with option groups
    pub fn with_option_groups(mut self, option_groups: Vec<OptionGroup>) -> Result<Self, ValidationError> {
        self.options.clear();
        self.option_groups = Some(option_groups);
        self.validate()?;
        Ok(self)
    }

    pub fn with_initial_options(mut self, initial_options: Vec<SelectOption>) -> Self {
        self.initial_options = Some(initial_options);
        self
    }
}

impl Validate for StaticMultiSelectMenu {
    fn validate(&self) -> Result<(), ValidationError> {
        check_static_options(&self.options, &self.option_groups)?;
        check_menu(&self.action_id, &self.placeholder, self.max_selected_items)
    }
}

/// Single select backed by the app's options load URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalSelectMenu {
    #[serde(rename = "type")]
    kind: ExternalSelectTag,
    pub(crate) initial_option: Option<SelectOption>,
    pub(crate) min_query_length: u32,
    pub(crate) confirm: Option<ConfirmationDialog>,
    pub(crate) focus_on_load: Option<bool>,
    pub(crate) placeholder: Option<PlainText>,
    pub(crate) action_id: Option<String>,
}

impl ExternalSelectMenu {
    pub fn new() -> Self {
        Self {
            kind: ExternalSelectTag,
            initial_option: None,
            min_query_length: DEFAULT_MIN_QUERY_LENGTH,
            confirm: None,
            focus_on_load: None,
            placeholder: None,
            action_id: None,
        }
    }

    pub fn with_initial_option(mut self, initial_option: SelectOption) -> Self {
        self.initial_option = Some(initial_option);
        self
    }

    /// Characters typed before options are requested
    pub fn with_min_query_length(mut self, min_query_length: u32) -> Self {
        self.min_query_length = min_query_length;
        self
    }
}

impl Default for ExternalSelectMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for ExternalSelectMenu {
    fn validate(&self) -> Result<(), ValidationError> {
        check_menu(&self.action_id, &self.placeholder, None)
    }
}

/// Multi select backed by the app's options load URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalMultiSelectMenu {
    #[serde(rename = "type")]
    kind: ExternalMultiSelectTag,
    pub(crate) initial_options: Option<Vec<SelectOption>>,
    pub(crate) min_query_length: u32,
    pub(crate) confirm: Option<ConfirmationDialog>,
    pub(crate) max_selected_items: Option<u32>,
    pub(crate) focus_on_load: Option<bool>,
    pub(crate) placeholder: Option<PlainText>,
    pub(crate) action_id: Option<String>,
}

impl ExternalMultiSelectMenu {
    pub fn new() -> Self {
        Self {
            kind: ExternalMultiSelectTag,
            initial_options: None,
            min_query_length: DEFAULT_MIN_QUERY_LENGTH,
            confirm: None,
            max_selected_items: None,
            focus_on_load: None,
            placeholder: None,
            action_id: None,
        }
    }

    pub fn with_initial_options(mut self, initial_options: Vec<SelectOption>) -> Self {
        self.initial_options = Some(initial_options);
        self
    }

    pub fn with_min_query_length(mut self, min_query_length: u32) -> Self {
        self.min_query_length = min_query_length;
        self
    }
}

impl Default for ExternalMultiSelectMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for ExternalMultiSelectMenu {
    fn validate(&self) -> Result<(), ValidationError> {
        check_menu(&self.action_id, &self.placeholder, self.max_selected_items)
    }
}

/// Single select over workspace users
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSelectMenu {
    #[serde(rename = "type")]
    kind: UserSelectTag,
    pub(crate) initial_user: Option<String>,
    pub(crate) confirm: Option<ConfirmationDialog>,
    pub(crate) focus_on_load: Option<bool>,
    pub(crate) placeholder: Option<PlainText>,
    pub(crate) action_id: Option<String>,
}

impl UserSelectMenu {
    pub fn new() -> Self {
        Self {
            kind: UserSelectTag,
            initial_user: None,
            confirm: None,
            focus_on_load: None,
            placeholder: None,
            action_id: None,
        }
    }

    pub fn with_initial_user(mut self, user_id: impl Into<String>) -> Self {
        self.initial_user = Some(user_id.into());
        self
    }
}

impl Default for UserSelectMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for UserSelectMenu {
    fn validate(&self) -> Result<(), ValidationError> {
        check_menu(&self.action_id, &self.placeholder, None)
    }
}

/// Multi select over workspace users
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserMultiSelectMenu {
    #[serde(rename = "type")]
    kind: UserMultiSelectTag,
    pub(crate) initial_users: Option<Vec<String>>,
    pub(crate) confirm: Option<ConfirmationDialog>,
    pub(crate) max_selected_items: Option<u32>,
    pub(crate) focus_on_load: Option<bool>,
    pub(crate) placeholder: Option<PlainText>,
    pub(crate) action_id: Option<String>,
}

impl UserMultiSelectMenu {
    pub fn new() -> Self {
        Self {
            kind: UserMultiSelectTag,
            initial_users: None,
            confirm: None,
            max_selected_items: None,
            focus_on_load: None,
            placeholder: None,
            action_id: None,
        }
    }

    pub fn with_initial_users(mut self, user_ids: Vec<String>) -> Self {
        self.initial_users = Some(user_ids);
        self
    }
}

impl Default for UserMultiSelectMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for UserMultiSelectMenu {
    fn validate(&self) -> Result<(), ValidationError> {
        check_menu(&self.action_id, &self.placeholder, self.max_selected_items)
    }
}

/// Single select over conversations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationSelectMenu {
    #[serde(rename = "type")]
    kind: ConversationSelectTag,
    pub(crate) initial_conversation: Option<String>,
    pub(crate) default_to_current_conversation: Option<bool>,
    pub(crate) response_url_enabled: bool,
    pub(crate) filter: Option<ConversationFilter>,
    pub(crate) confirm: Option<ConfirmationDialog>,
    pub(crate) focus_on_load: Option<bool>,
    pub(crate) placeholder: Option<PlainText>,
    pub(crate) action_id: Option<String>,
}

impl ConversationSelectMenu {
    pub fn new() -> Self {
        Self {
            kind: ConversationSelectTag,
            initial_conversation: None,
            default_to_current_conversation: None,
            response_url_enabled: false,
            filter: None,
            confirm: None,
            focus_on_load: None,
            placeholder: None,
            action_id: None,
        }
    }

    pub fn with_initial_conversation(mut self, conversation_id: impl Into<String>) -> Self {
        self.initial_conversation = Some(conversation_id.into());
        self
    }

    pub fn with_default_to_current_conversation(mut self, enabled: bool) -> Self {
        self.default_to_current_conversation = Some(enabled);
        self
    }

    /// Send a `response_url` with the view submission (modals only)
    pub fn with_response_url_enabled(mut self, enabled: bool) -> Self {
        self.response_url_enabled = enabled;
        self
    }

    pub fn with_filter(mut self, filter: ConversationFilter) -> Self {
        self.filter = Some(filter);
        self
    }
}

impl Default for ConversationSelectMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for ConversationSelectMenu {
    fn validate(&self) -> Result<(), ValidationError> {
        check_menu(&self.action_id, &self.placeholder, None)
    }
}

/// Multi select over conversations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationMultiSelectMenu {
    #[serde(rename = "type")]
    kind: ConversationMultiSelectTag,
    pub(crate) initial_conversations: Option<Vec<String>>,
    pub(crate) default_to_current_conversation: Option<bool>,
    pub(crate) filter: Option<ConversationFilter>,
    pub(crate) confirm: Option<ConfirmationDialog>,
    pub(crate) max_selected_items: Option<u32>,
    pub(crate) focus_on_load: Option<bool>,
    pub(crate) placeholder: Option<PlainText>,
    pub(crate) action_id: Option<String>,
}

impl ConversationMultiSelectMenu {
    pub fn new() -> Self {
        Self {
            kind: ConversationMultiSelectTag,
            initial_conversations: None,
            default_to_current_conversation: None,
            filter: None,
            confirm: None,
            max_selected_items: None,
            focus_on_load: None,
            placeholder: None,
            action_id: None,
        }
    }

    pub fn with_initial_conversations(mut self, conversation_ids: Vec<String>) -> Self {
        self.initial_conversations = Some(conversation_ids);
        self
    }

    pub fn with_default_to_current_conversation(mut self, enabled: bool) -> Self {
        self.default_to_current_conversation = Some(enabled);
        self
    }

    pub fn with_filter(mut self, filter: ConversationFilter) -> Self {
        self.filter = Some(filter);
        self
    }
}

impl Default for ConversationMultiSelectMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for ConversationMultiSelectMenu {
    fn validate(&self) -> Result<(), ValidationError> {
        check_menu(&self.action_id, &self.placeholder, self.max_selected_items)
    }
}

/// Single select over public channels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelSelectMenu {
    #[serde(rename = "type")]
    kind: ChannelSelectTag,
    pub(crate) initial_channel: Option<String>,
    pub(crate) response_url_enabled: bool,
    pub(crate) confirm: Option<ConfirmationDialog>,
    pub(crate) focus_on_load: Option<bool>,
    pub(crate) placeholder: Option<PlainText>,
    pub(crate) action_id: Option<String>,
}

impl ChannelSelectMenu {
    pub fn new() -> Self {
        Self {
            kind: ChannelSelectTag,
            initial_channel: None,
            response_url_enabled: false,
            confirm: None,
            focus_on_load: None,
            placeholder: None,
            action_id: None,
        }
    }

    pub fn with_initial_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.initial_channel = Some(channel_id.into());
        self
    }

    pub fn with_response_url_enabled(mut self, enabled: bool) -> Self {
        self.response_url_enabled = enabled;
        self
    }
}

impl Default for ChannelSelectMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for ChannelSelectMenu {
    fn validate(&self) -> Result<(), ValidationError> {
        check_menu(&self.action_id, &self.placeholder, None)
    }
}

/// Multi select over public channels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelMultiSelectMenu {
    #[serde(rename = "type")]
    kind: ChannelMultiSelectTag,
    pub(crate) initial_channels: Option<Vec<String>>,
    pub(crate) confirm: Option<ConfirmationDialog>,
    pub(crate) max_selected_items: Option<u32>,
    pub(crate) focus_on_load: Option<bool>,
    pub(crate) placeholder: Option<PlainText>,
    pub(crate) action_id: Option<String>,
}

impl ChannelMultiSelectMenu {
    pub fn new() -> Self {
        Self {
            kind: ChannelMultiSelectTag,
            initial_channels: None,
            confirm: None,
            max_selected_items: None,
            focus_on_load: None,
            placeholder: None,
            action_id: None,
        }
    }

    pub fn with_initial_channels(mut self, channel_ids: Vec<String>) -> Self {
        self.initial_channels = Some(channel_ids);
        self
    }
}

impl Default for ChannelMultiSelectMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for ChannelMultiSelectMenu {
    fn validate(&self) -> Result<(), ValidationError> {
        check_menu(&self.action_id, &self.placeholder, self.max_selected_items)
    }
}

/// `with_max_selected_items` for multi select menus
macro_rules! max_selected_setter {
    ($($node:ty),+) => {
        $(
            impl $node {
                pub fn with_max_selected_items(mut self, max: u32) -> Result<Self, ValidationError> {
                    self.max_selected_items = Some(max);
                    self.validate()?;
                    Ok(self)
                }
            }
        )+
    };
}

max_selected_setter!(
    StaticMultiSelectMenu,
    ExternalMultiSelectMenu,
    UserMultiSelectMenu,
    ConversationMultiSelectMenu,
    ChannelMultiSelectMenu
);

action_id_setter!(
    OverflowMenu,
    StaticSelectMenu,
    StaticMultiSelectMenu,
    ExternalSelectMenu,
    ExternalMultiSelectMenu,
    UserSelectMenu,
    UserMultiSelectMenu,
    ConversationSelectMenu,
    ConversationMultiSelectMenu,
    ChannelSelectMenu,
    ChannelMultiSelectMenu,
);

placeholder_setter!(
    StaticSelectMenu,
    StaticMultiSelectMenu,
    ExternalSelectMenu,
    ExternalMultiSelectMenu,
    UserSelectMenu,
    UserMultiSelectMenu,
    ConversationSelectMenu,
    ConversationMultiSelectMenu,
    ChannelSelectMenu,
    ChannelMultiSelectMenu,
);

focus_confirm_setters!(
    StaticSelectMenu,
    StaticMultiSelectMenu,
    ExternalSelectMenu,
    ExternalMultiSelectMenu,
    UserSelectMenu,
    UserMultiSelectMenu,
    ConversationSelectMenu,
    ConversationMultiSelectMenu,
    ChannelSelectMenu,
    ChannelMultiSelectMenu,
);

accessors!(OverflowMenu {
    options: list(SelectOption),
    confirm: opt(ConfirmationDialog),
    action_id: opt_str,
});
accessors!(StaticSelectMenu {
    options: list(SelectOption),
    option_groups: opt_list(OptionGroup),
    initial_option: opt(SelectOption),
    confirm: opt(ConfirmationDialog),
    focus_on_load: copy(Option<bool>),
    placeholder: opt(PlainText),
    action_id: opt_str,
});
accessors!(StaticMultiSelectMenu {
    options: list(SelectOption),
    option_groups: opt_list(OptionGroup),
    initial_options: opt_list(SelectOption),
    max_selected_items: copy(Option<u32>),
    confirm: opt(ConfirmationDialog),
    focus_on_load: copy(Option<bool>),
    placeholder: opt(PlainText),
    action_id: opt_str,
});
accessors!(ExternalSelectMenu {
    initial_option: opt(SelectOption),
    min_query_length: copy(u32),
    confirm: opt(ConfirmationDialog),
    focus_on_load: copy(Option<bool>),
    placeholder: opt(PlainText),
    action_id: opt_str,
});
accessors!(ExternalMultiSelectMenu {
    initial_options: opt_list(SelectOption),
    min_query_length: copy(u32),
    max_selected_items: copy(Option<u32>),
    confirm: opt(ConfirmationDialog),
    focus_on_load: copy(Option<bool>),
    placeholder: opt(PlainText),
    action_id: opt_str,
});
accessors!(UserSelectMenu {
    initial_user: opt_str,
    confirm: opt(ConfirmationDialog),
    focus_on_load: copy(Option<bool>),
    placeholder: opt(PlainText),
    action_id: opt_str,
});
accessors!(UserMultiSelectMenu {
    initial_users: opt_list(String),
    max_selected_items: copy(Option<u32>),
    confirm: opt(ConfirmationDialog),
    focus_on_load: copy(Option<bool>),
    placeholder: opt(PlainText),
    action_id: opt_str,
});
accessors!(ConversationSelectMenu {
    initial_conversation: opt_str,
    default_to_current_conversation: copy(Option<bool>),
    response_url_enabled: copy(bool),
    filter: opt(ConversationFilter),
    confirm: opt(ConfirmationDialog),
    focus_on_load: copy(Option<bool>),
    placeholder: opt(PlainText),
    action_id: opt_str,
});
accessors!(ConversationMultiSelectMenu {
    initial_conversations: opt_list(String),
    default_to_current_conversation: copy(Option<bool>),
    filter: opt(ConversationFilter),
    max_selected_items: copy(Option<u32>),
    confirm: opt(ConfirmationDialog),
    focus_on_load: copy(Option<bool>),
    placeholder: opt(PlainText),
    action_id: opt_str,
});
accessors!(ChannelSelectMenu {
    initial_channel: opt_str,
    response_url_enabled: copy(bool),
    confirm: opt(ConfirmationDialog),
    focus_on_load: copy(Option<bool>),
    placeholder: opt(PlainText),
    action_id: opt_str,
});
accessors!(ChannelMultiSelectMenu {
    initial_channels: opt_list(String),
    max_selected_items: copy(Option<u32>),
    confirm: opt(ConfirmationDialog),
    focus_on_load: copy(Option<bool>),
    placeholder: opt(PlainText),
    action_id: opt_str,
});
