//! Block Elements
//!
//! Image elements and interactive controls: buttons, option lists, text and
//! number inputs, file inputs and date/time pickers. Select menus live in
//! [`crate::models::menus`], rich text elements in
//! [`crate::models::rich_text`].
//!
//! Buttons, inputs and pickers receive a fresh UUID v4 `action_id` when the
//! caller does not supply one.
//!
//! # Examples
//!
//! ```rust
//! use blockkit_core::models::{Button, ButtonStyle};
//!
//! let button = Button::new("Click me")
//!     .unwrap()
//!     .with_action_id("click_me")
//!     .unwrap()
//!     .with_style(ButtonStyle::Primary);
//!
//! assert_eq!(button.action_id(), Some("click_me"));
//! ```

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};
use serde::Serialize;
use uuid::Uuid;

use crate::behaviors::callable::{BoundCallback, Callable, Callback};
use crate::models::field::{describe, FieldDefault, FieldSpec};
use crate::models::menus::{
    ChannelMultiSelectMenu, ChannelSelectMenu, ConversationMultiSelectMenu,
    ConversationSelectMenu, ExternalMultiSelectMenu, ExternalSelectMenu, OverflowMenu,
    StaticMultiSelectMenu, StaticSelectMenu, UserMultiSelectMenu, UserSelectMenu,
};
use crate::models::node::{accessors, node_family, node_type, ValidationError};
use crate::models::objects::{
    check_image_source, ButtonStyle, ConfirmationDialog, DispatchActionConfig, PlainText,
    SelectOption, SlackFile,
};
use crate::models::rich_text::{
    RichBroadcast, RichChannel, RichColor, RichDate, RichEmoji, RichLink, RichText, RichUser,
    RichUserGroup,
};
use crate::models::validate::{at_most, Validate};

pub(crate) const ACTION_ID: FieldSpec = describe(
    "action_id",
    "An identifier for the action triggered when this element is used.",
    FieldDefault::Null,
    None,
    Some(255),
);

pub(crate) const PLACEHOLDER: FieldSpec = describe(
    "placeholder",
    "Text shown in the element before a value is entered.",
    FieldDefault::Null,
    None,
    Some(150),
);

const ALT_TEXT: FieldSpec = describe(
    "alt_text",
    "A plain-text summary of the image.",
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

const BUTTON_TEXT: FieldSpec = describe(
    "text",
    "A text object that defines the button's text.",
    FieldDefault::Required,
    None,
    Some(75),
);

const BUTTON_URL: FieldSpec = describe(
    "url",
    "A URL to load in the user's browser when the button is clicked.",
    FieldDefault::Null,
    None,
    Some(3000),
);

const BUTTON_VALUE: FieldSpec = describe(
    "value",
    "The value to send along with the interaction payload.",
    FieldDefault::Null,
    None,
    Some(2000),
);

const ACCESSIBILITY_LABEL: FieldSpec = describe(
    "accessibility_label",
    "A label for longer descriptive text about a button element.",
    FieldDefault::Null,
    None,
    Some(75),
);

const CHOICE_OPTIONS: FieldSpec = describe(
    "options",
    "An array of option objects.",
    FieldDefault::Required,
    None,
    Some(10),
);

const TEXT_INPUT_LENGTH: u32 = 3000;
const MAX_FILES: u8 = 10;

/// Fresh UUID v4 used as a default `action_id`
pub(crate) fn generate_action_id() -> String {
    Uuid::new_v4().to_string()
}

/// `with_action_id` for elements with an optional `action_id`
macro_rules! action_id_setter {
    ($($node:ty),+ $(,)?) => {
        $(
            impl $node {
                /// Identifier for the action triggered by this element
                pub fn with_action_id(
                    mut self,
                    action_id: impl Into<String>,
                ) -> Result<Self, $crate::models::ValidationError> {
                    self.action_id = Some(action_id.into());
                    $crate::models::validate::Validate::validate(&self)?;
                    Ok(self)
                }
            }
        )+
    };
}

/// `with_placeholder` for elements with a plain text placeholder
macro_rules! placeholder_setter {
    ($($node:ty),+ $(,)?) => {
        $(
            impl $node {
                pub fn with_placeholder(
                    mut self,
                    placeholder: impl Into<String>,
                ) -> Result<Self, $crate::models::ValidationError> {
                    self.placeholder = Some($crate::models::PlainText::new(placeholder)?);
                    $crate::models::validate::Validate::validate(&self)?;
                    Ok(self)
                }
            }
        )+
    };
}

/// `with_focus_on_load` and `with_confirm` for elements that carry both
macro_rules! focus_confirm_setters {
    ($($node:ty),+ $(,)?) => {
        $(
            impl $node {
                /// Focus this element when the view is opened
                pub fn with_focus_on_load(mut self, focus_on_load: bool) -> Self {
                    self.focus_on_load = Some(focus_on_load);
                    self
                }

                /// Ask the user to confirm before the action fires
                pub fn with_confirm(mut self, confirm: $crate::models::ConfirmationDialog) -> Self {
                    self.confirm = Some(confirm);
                    self
                }
            }
        )+
    };
}

pub(crate) use action_id_setter;
pub(crate) use focus_confirm_setters;
pub(crate) use placeholder_setter;

/// Validate the optional `action_id` and `placeholder` shared by inputs
fn check_common(
    action_id: &Option<String>,
    placeholder: &Option<PlainText>,
) -> Result<(), ValidationError> {
    ACTION_ID.check(action_id)?;
    PLACEHOLDER.check(placeholder)
}

node_type!(ImageElementTag => "image" for ImageElement);
node_type!(ButtonTag => "button" for Button);
node_type!(CheckboxesTag => "checkboxes" for Checkboxes);
node_type!(RadioButtonsTag => "radio_buttons" for RadioButtons);
node_type!(EmailInputTag => "email_text_input" for EmailInput);
node_type!(PlainTextInputTag => "plain_text_input" for PlainTextInput);
node_type!(UrlInputTag => "url_text_input" for UrlInput);
node_type!(NumberInputTag => "number_input" for NumberInput);
node_type!(FileInputTag => "file_input" for FileInput);
node_type!(DatePickerTag => "datepicker" for DatePicker);
node_type!(DateTimePickerTag => "datetimepicker" for DateTimePicker);
node_type!(TimePickerTag => "timepicker" for TimePicker);

/// Image element, usable in sections and context blocks
///
/// Exactly one of `image_url` or `slack_file` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageElement {
    #[serde(rename = "type")]
    kind: ImageElementTag,
    pub(crate) alt_text: String,
    pub(crate) image_url: Option<String>,
    pub(crate) slack_file: Option<SlackFile>,
}

impl ImageElement {
    /// Create an image element from a public `https://` URL
    pub fn new(image_url: impl Into<String>, alt_text: impl Into<String>) -> Result<Self, ValidationError> {
        let node = Self {
            kind: ImageElementTag,
            alt_text: alt_text.into(),
            image_url: Some(image_url.into()),
            slack_file: None,
        };
        node.validate()?;
        Ok(node)
    }

    /// Create an image element from a Slack file reference
    pub fn from_slack_file(
        slack_file: SlackFile,
        alt_text: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let node = Self {
            kind: ImageElementTag,
            alt_text: alt_text.into(),
            image_url: None,
            slack_file: Some(slack_file),
        };
        node.validate()?;
        Ok(node)
    }
}

impl Validate for ImageElement {
    fn validate(&self) -> Result<(), ValidationError> {
        ALT_TEXT.check(&self.alt_text)?;
        IMAGE_URL.check(&self.image_url)?;
        check_image_source(&self.image_url, &self.slack_file)
    }
}

/// Button element
///
/// A button may carry a bound callback, registered under its `action_id`
/// when the button is appended to a [`BlockKit`](crate::services::BlockKit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    #[serde(rename = "type")]
    kind: ButtonTag,
    pub(crate) text: PlainText,
    pub(crate) url: Option<String>,
    pub(crate) style: Option<ButtonStyle>,
    pub(crate) value: Option<String>,
    pub(crate) accessibility_label: Option<String>,
    pub(crate) confirm: Option<ConfirmationDialog>,
    pub(crate) action_id: Option<String>,
    #[serde(skip)]
    callback: Option<BoundCallback>,
}

impl Button {
    /// Create a button with a generated `action_id`
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let node = Self {
            kind: ButtonTag,
            text: PlainText::new(text)?,
            url: None,
            style: None,
            value: None,
            accessibility_label: None,
            confirm: None,
            action_id: Some(generate_action_id()),
            callback: None,
        };
        node.validate()?;
        Ok(node)
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Result<Self, ValidationError> {
        self.url = Some(url.into());
        self.validate()?;
        Ok(self)
    }

    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Result<Self, ValidationError> {
        self.value = Some(value.into());
        self.validate()?;
        Ok(self)
    }

    pub fn with_accessibility_label(
        mut self,
        label: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        self.accessibility_label = Some(label.into());
        self.validate()?;
        Ok(self)
    }

    pub fn with_confirm(mut self, confirm: ConfirmationDialog) -> Self {
        self.confirm = Some(confirm);
        self
    }

    /// Bind a callback to this button's `action_id`
    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.callback = Some(BoundCallback::new(callback));
        self
    }

    /// Bind an existing shared callback
    pub fn with_callback(mut self, callback: Callback) -> Self {
        self.callback = Some(BoundCallback::from(callback));
        self
    }
}

action_id_setter!(Button);

impl Validate for Button {
    fn validate(&self) -> Result<(), ValidationError> {
        self.text.validate()?;
        BUTTON_TEXT.check(&self.text)?;
        BUTTON_URL.check(&self.url)?;
        BUTTON_VALUE.check(&self.value)?;
        ACCESSIBILITY_LABEL.check(&self.accessibility_label)?;
        ACTION_ID.check(&self.action_id)
    }
}

impl Callable for Button {
    fn action_id(&self) -> Option<&str> {
        self.action_id.as_deref()
    }

    fn bound_callback(&self) -> Option<&BoundCallback> {
        self.callback.as_ref()
    }
}

/// A group of checkboxes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checkboxes {
    #[serde(rename = "type")]
    kind: CheckboxesTag,
    pub(crate) options: Vec<SelectOption>,
    pub(crate) initial_options: Option<Vec<SelectOption>>,
    pub(crate) confirm: Option<ConfirmationDialog>,
    pub(crate) focus_on_load: Option<bool>,
    pub(crate) action_id: Option<String>,
}

impl Checkboxes {
    pub fn new(options: Vec<SelectOption>) -> Result<Self, ValidationError> {
        let node = Self {
            kind: CheckboxesTag,
            options,
            initial_options: None,
            confirm: None,
            focus_on_load: None,
            action_id: None,
        };
        node.validate()?;
        Ok(node)
    }

    pub fn with_initial_options(mut self, initial_options: Vec<SelectOption>) -> Result<Self, ValidationError> {
        self.initial_options = Some(initial_options);
        self.validate()?;
        Ok(self)
    }
}

impl Validate for Checkboxes {
    fn validate(&self) -> Result<(), ValidationError> {
        CHOICE_OPTIONS.check(&self.options)?;
        self.options.iter().try_for_each(Validate::validate)?;
        ACTION_ID.check(&self.action_id)
    }
}

/// A group of radio buttons
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadioButtons {
    #[serde(rename = "type")]
    kind: RadioButtonsTag,
    pub(crate) options: Vec<SelectOption>,
    pub(crate) initial_option: Option<SelectOption>,
    pub(crate) confirm: Option<ConfirmationDialog>,
    pub(crate) focus_on_load: Option<bool>,
    pub(crate) action_id: Option<String>,
}

impl RadioButtons {
    pub fn new(options: Vec<SelectOption>) -> Result<Self, ValidationError> {
        let node = Self {
            kind: RadioButtonsTag,
            options,
            initial_option: None,
            confirm: None,
            focus_on_load: None,
            action_id: None,
        };
        node.validate()?;
        Ok(node)
    }

    pub fn with_initial_option(mut self, initial_option: SelectOption) -> Self {
        self.initial_option = Some(initial_option);
        self
    }
}

impl Validate for RadioButtons {
    fn validate(&self) -> Result<(), ValidationError> {
        CHOICE_OPTIONS.check(&self.options)?;
        self.options.iter().try_for_each(Validate::validate)?;
        ACTION_ID.check(&self.action_id)
    }
}

focus_confirm_setters!(Checkboxes, RadioButtons);
action_id_setter!(Checkboxes, RadioButtons);

/// Email address input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailInput {
    #[serde(rename = "type")]
    kind: EmailInputTag,
    pub(crate) dispatch_action_config: Option<DispatchActionConfig>,
    pub(crate) initial_value: Option<String>,
    pub(crate) focus_on_load: Option<bool>,
    pub(crate) placeholder: Option<PlainText>,
    pub(crate) action_id: Option<String>,
}

impl EmailInput {
    pub fn new() -> Self {
        Self {
            kind: EmailInputTag,
            dispatch_action_config: None,
            initial_value: None,
            focus_on_load: None,
            placeholder: None,
            action_id: Some(generate_action_id()),
        }
    }

    pub fn with_initial_value(mut self, initial_value: impl Into<String>) -> Self {
        self.initial_value = Some(initial_value.into());
        self
    }
}

impl Default for EmailInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for EmailInput {
    fn validate(&self) -> Result<(), ValidationError> {
        check_common(&self.action_id, &self.placeholder)
    }
}

/// Single or multi-line free text input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlainTextInput {
    #[serde(rename = "type")]
    kind: PlainTextInputTag,
    pub(crate) multiline: bool,
    pub(crate) min_length: u32,
    pub(crate) max_length: u32,
    pub(crate) dispatch_action_config: Option<DispatchActionConfig>,
    pub(crate) initial_value: Option<String>,
    pub(crate) focus_on_load: Option<bool>,
    pub(crate) placeholder: Option<PlainText>,
    pub(crate) action_id: Option<String>,
}

impl PlainTextInput {
    pub fn new() -> Self {
        Self {
            kind: PlainTextInputTag,
            multiline: false,
            min_length: 0,
            max_length: TEXT_INPUT_LENGTH,
            dispatch_action_config: None,
            initial_value: None,
            focus_on_load: None,
            placeholder: None,
            action_id: Some(generate_action_id()),
        }
    }

    pub fn with_multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    /// Bound the accepted input length
    pub fn with_length(mut self, min_length: u32, max_length: u32) -> Result<Self, ValidationError> {
        self.min_length = min_length;
        self.max_length = max_length;
        self.validate()?;
        Ok(self)
    }

    pub fn with_initial_value(mut self, initial_value: impl Into<String>) -> Self {
        self.initial_value = Some(initial_value.into());
        self
    }
}

impl Default for PlainTextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for PlainTextInput {
    fn validate(&self) -> Result<(), ValidationError> {
        at_most("min_length", Some(self.min_length), TEXT_INPUT_LENGTH)?;
        at_most("max_length", Some(self.max_length), TEXT_INPUT_LENGTH)?;
        at_most("min_length", Some(self.min_length), self.max_length)?;
        check_common(&self.action_id, &self.placeholder)
    }
}

/// URL input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlInput {
    #[serde(rename = "type")]
    kind: UrlInputTag,
    pub(crate) dispatch_action_config: Option<DispatchActionConfig>,
    pub(crate) initial_value: Option<String>,
    pub(crate) focus_on_load: Option<bool>,
    pub(crate) placeholder: Option<PlainText>,
    pub(crate) action_id: Option<String>,
}

impl UrlInput {
    pub fn new() -> Self {
        Self {
            kind: UrlInputTag,
            dispatch_action_config: None,
            initial_value: None,
            focus_on_load: None,
            placeholder: None,
            action_id: Some(generate_action_id()),
        }
    }

    pub fn with_initial_value(mut self, initial_value: impl Into<String>) -> Self {
        self.initial_value = Some(initial_value.into());
        self
    }
}

impl Default for UrlInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for UrlInput {
    fn validate(&self) -> Result<(), ValidationError> {
        check_common(&self.action_id, &self.placeholder)
    }
}

/// Numeric input
///
/// Bounds are kept as JSON numbers so integers stay integers on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberInput {
    #[serde(rename = "type")]
    kind: NumberInputTag,
    pub(crate) is_decimal_allowed: bool,
    pub(crate) min_value: Option<serde_json::Number>,
    pub(crate) max_value: Option<serde_json::Number>,
    pub(crate) dispatch_action_config: Option<DispatchActionConfig>,
    pub(crate) initial_value: Option<String>,
    pub(crate) focus_on_load: Option<bool>,
    pub(crate) placeholder: Option<PlainText>,
    pub(crate) action_id: Option<String>,
}

impl NumberInput {
    pub fn new(is_decimal_allowed: bool) -> Self {
        Self {
            kind: NumberInputTag,
            is_decimal_allowed,
            min_value: None,
            max_value: None,
            dispatch_action_config: None,
            initial_value: None,
            focus_on_load: None,
            placeholder: None,
            action_id: Some(generate_action_id()),
        }
    }

    pub fn with_range(
        mut self,
        min_value: impl Into<serde_json::Number>,
        max_value: impl Into<serde_json::Number>,
    ) -> Result<Self, ValidationError> {
        self.min_value = Some(min_value.into());
        self.max_value = Some(max_value.into());
        self.validate()?;
        Ok(self)
    }

    pub fn with_initial_value(mut self, initial_value: impl Into<String>) -> Self {
        self.initial_value = Some(initial_value.into());
        self
    }
}

impl Validate for NumberInput {
    fn validate(&self) -> Result<(), ValidationError> {
        let bounds = (
            self.min_value.as_ref().and_then(serde_json::Number::as_f64),
            self.max_value.as_ref().and_then(serde_json::Number::as_f64),
        );
        if let (Some(min), Some(max)) = bounds {
            at_most("min_value", Some(min), max)?;
        }
        check_common(&self.action_id, &self.placeholder)
    }
}

/// Dispatch configuration shared by the text-like inputs
macro_rules! dispatch_setter {
    ($($node:ty),+) => {
        $(
            impl $node {
                pub fn with_dispatch_action_config(mut self, config: DispatchActionConfig) -> Self {
                    self.dispatch_action_config = Some(config);
                    self
                }

                pub fn with_focus_on_load(mut self, focus_on_load: bool) -> Self {
                    self.focus_on_load = Some(focus_on_load);
                    self
                }
            }
        )+
    };
}

dispatch_setter!(EmailInput, PlainTextInput, UrlInput, NumberInput);
action_id_setter!(EmailInput, PlainTextInput, UrlInput, NumberInput);
placeholder_setter!(EmailInput, PlainTextInput, UrlInput, NumberInput);

/// File upload input, only valid inside input blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInput {
    #[serde(rename = "type")]
    kind: FileInputTag,
    pub(crate) filetypes: Option<Vec<String>>,
    pub(crate) max_files: u8,
    pub(crate) action_id: Option<String>,
}

impl FileInput {
    pub fn new() -> Self {
        Self {
            kind: FileInputTag,
            filetypes: None,
            max_files: MAX_FILES,
            action_id: Some(generate_action_id()),
        }
    }

    /// Restrict uploads to the given extensions
    pub fn with_filetypes<I, S>(mut self, filetypes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filetypes = Some(filetypes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_max_files(mut self, max_files: u8) -> Result<Self, ValidationError> {
        self.max_files = max_files;
        self.validate()?;
        Ok(self)
    }
}

impl Default for FileInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for FileInput {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.max_files == 0 {
            return Err(ValidationError::invalid_value(
                "max_files",
                "max_files must be at least 1",
            ));
        }
        at_most("max_files", Some(self.max_files), MAX_FILES)?;
        ACTION_ID.check(&self.action_id)
    }
}

action_id_setter!(FileInput);

/// Calendar date picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatePicker {
    #[serde(rename = "type")]
    kind: DatePickerTag,
    pub(crate) initial_date: Option<NaiveDate>,
    pub(crate) confirm: Option<ConfirmationDialog>,
    pub(crate) focus_on_load: Option<bool>,
    pub(crate) placeholder: Option<PlainText>,
    pub(crate) action_id: Option<String>,
}

impl DatePicker {
    pub fn new() -> Self {
        Self {
            kind: DatePickerTag,
            initial_date: None,
            confirm: None,
            focus_on_load: None,
            placeholder: None,
            action_id: Some(generate_action_id()),
        }
    }

    /// Preselected date, sent as `YYYY-MM-DD`
    pub fn with_initial_date(mut self, initial_date: NaiveDate) -> Self {
        self.initial_date = Some(initial_date);
        self
    }
}

impl Default for DatePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for DatePicker {
    fn validate(&self) -> Result<(), ValidationError> {
        check_common(&self.action_id, &self.placeholder)
    }
}

/// Date and time picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateTimePicker {
    #[serde(rename = "type")]
    kind: DateTimePickerTag,
    /// Unix timestamp in seconds
    pub(crate) initial_date_time: Option<i64>,
    pub(crate) confirm: Option<ConfirmationDialog>,
    pub(crate) focus_on_load: Option<bool>,
    pub(crate) action_id: Option<String>,
}

impl DateTimePicker {
    pub fn new() -> Self {
        Self {
            kind: DateTimePickerTag,
            initial_date_time: None,
            confirm: None,
            focus_on_load: None,
            action_id: Some(generate_action_id()),
        }
    }

    pub fn with_initial_date_time<Tz: TimeZone>(mut self, initial: DateTime<Tz>) -> Self {
        self.initial_date_time = Some(initial.timestamp());
        self
    }
}

impl Default for DateTimePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for DateTimePicker {
    fn validate(&self) -> Result<(), ValidationError> {
        ACTION_ID.check(&self.action_id)
    }
}

/// Time picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimePicker {
    #[serde(rename = "type")]
    kind: TimePickerTag,
    /// Preselected time as `HH:mm`
    pub(crate) initial_time: Option<String>,
    pub(crate) confirm: Option<ConfirmationDialog>,
    pub(crate) focus_on_load: Option<bool>,
    pub(crate) placeholder: Option<PlainText>,
    /// IANA timezone name, e.g. `America/Chicago`
    pub(crate) timezone: Option<String>,
    pub(crate) action_id: Option<String>,
}

impl TimePicker {
    pub fn new() -> Self {
        Self {
            kind: TimePickerTag,
            initial_time: None,
            confirm: None,
            focus_on_load: None,
            placeholder: None,
            timezone: None,
            action_id: Some(generate_action_id()),
        }
    }

    pub fn with_initial_time(mut self, initial_time: NaiveTime) -> Self {
        self.initial_time = Some(initial_time.format("%H:%M").to_string());
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }
}

impl Default for TimePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for TimePicker {
    fn validate(&self) -> Result<(), ValidationError> {
        check_common(&self.action_id, &self.placeholder)
    }
}

focus_confirm_setters!(DatePicker, DateTimePicker, TimePicker);
action_id_setter!(DatePicker, DateTimePicker, TimePicker);
placeholder_setter!(DatePicker, TimePicker);

accessors!(ImageElement {
    alt_text: str,
    image_url: opt_str,
    slack_file: opt(SlackFile),
});
accessors!(Button {
    text: by_ref(PlainText),
    url: opt_str,
    style: copy(Option<ButtonStyle>),
    value: opt_str,
    accessibility_label: opt_str,
    confirm: opt(ConfirmationDialog),
    action_id: opt_str,
});
accessors!(Checkboxes {
    options: list(SelectOption),
    initial_options: opt_list(SelectOption),
    confirm: opt(ConfirmationDialog),
    focus_on_load: copy(Option<bool>),
    action_id: opt_str,
});
accessors!(RadioButtons {
    options: list(SelectOption),
    initial_option: opt(SelectOption),
    confirm: opt(ConfirmationDialog),
    focus_on_load: copy(Option<bool>),
    action_id: opt_str,
});
accessors!(EmailInput {
    dispatch_action_config: opt(DispatchActionConfig),
    initial_value: opt_str,
    focus_on_load: copy(Option<bool>),
    placeholder: opt(PlainText),
    action_id: opt_str,
});
accessors!(PlainTextInput {
    multiline: copy(bool),
    min_length: copy(u32),
    max_length: copy(u32),
    dispatch_action_config: opt(DispatchActionConfig),
    initial_value: opt_str,
    focus_on_load: copy(Option<bool>),
    placeholder: opt(PlainText),
    action_id: opt_str,
});
accessors!(UrlInput {
    dispatch_action_config: opt(DispatchActionConfig),
    initial_value: opt_str,
    focus_on_load: copy(Option<bool>),
    placeholder: opt(PlainText),
    action_id: opt_str,
});
accessors!(NumberInput {
    is_decimal_allowed: copy(bool),
    min_value: opt(serde_json::Number),
    max_value: opt(serde_json::Number),
    dispatch_action_config: opt(DispatchActionConfig),
    initial_value: opt_str,
    focus_on_load: copy(Option<bool>),
    placeholder: opt(PlainText),
    action_id: opt_str,
});
accessors!(FileInput {
    filetypes: opt_list(String),
    max_files: copy(u8),
    action_id: opt_str,
});
accessors!(DatePicker {
    initial_date: copy(Option<NaiveDate>),
    confirm: opt(ConfirmationDialog),
    focus_on_load: copy(Option<bool>),
    placeholder: opt(PlainText),
    action_id: opt_str,
});
accessors!(DateTimePicker {
    initial_date_time: copy(Option<i64>),
    confirm: opt(ConfirmationDialog),
    focus_on_load: copy(Option<bool>),
    action_id: opt_str,
});
accessors!(TimePicker {
    initial_time: opt_str,
    confirm: opt(ConfirmationDialog),
    focus_on_load: copy(Option<bool>),
    placeholder: opt(PlainText),
    timezone: opt_str,
    action_id: opt_str,
});

node_family! {
    /// Every block element
    pub enum Element {
        Image(ImageElement),
        Button(Button),
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
        RichText(RichText),
        RichLink(RichLink),
        RichChannel(RichChannel),
        RichUser(RichUser),
        RichUserGroup(RichUserGroup),
        RichEmoji(RichEmoji),
        RichDate(RichDate),
        RichColor(RichColor),
        RichBroadcast(RichBroadcast),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Node;

    #[test]
    fn test_button_generates_action_id() {
        let first = Button::new("Go").unwrap();
        let second = Button::new("Go").unwrap();
        let id = first.action_id.clone().unwrap();
        assert!(Uuid::parse_str(&id).is_ok());
        assert_ne!(first.action_id, second.action_id);
    }

    #[test]
    fn test_button_serialization_skips_callback() {
        let button = Button::new("Go")
            .unwrap()
            .with_action_id("go")
            .unwrap()
            .on_click(|| {});
        let json = button.to_json(None).unwrap();
        assert_eq!(
            json,
            r#"{"type":"button","text":{"type":"plain_text","text":"Go","emoji":false},"action_id":"go"}"#
        );
    }

    #[test]
    fn test_button_limits() {
        assert!(Button::new("x".repeat(75)).is_ok());
        assert!(Button::new("x".repeat(76)).unwrap_err().is_length());
        let button = Button::new("Go").unwrap();
        assert!(button.clone().with_action_id("a".repeat(256)).is_err());
        assert!(button.with_value("v".repeat(2001)).is_err());
    }

    #[test]
    fn test_inputs_generate_action_ids() {
        assert!(EmailInput::new().action_id.is_some());
        assert!(PlainTextInput::new().action_id.is_some());
        assert!(UrlInput::new().action_id.is_some());
        assert!(NumberInput::new(false).action_id.is_some());
        assert!(FileInput::new().action_id.is_some());
        assert!(DatePicker::new().action_id.is_some());
        assert!(DateTimePicker::new().action_id.is_some());
        assert!(TimePicker::new().action_id.is_some());
    }

    #[test]
    fn test_plain_text_input_defaults() {
        let mapping = PlainTextInput::new().to_mapping().unwrap();
        assert_eq!(mapping["type"], "plain_text_input");
        assert_eq!(mapping["multiline"], false);
        assert_eq!(mapping["min_length"], 0);
        assert_eq!(mapping["max_length"], 3000);
    }

    #[test]
    fn test_plain_text_input_length_bounds() {
        assert!(PlainTextInput::new().with_length(10, 20).is_ok());
        assert!(PlainTextInput::new().with_length(30, 20).is_err());
        assert!(PlainTextInput::new().with_length(3001, 4000).is_err());
    }

    #[test]
    fn test_plain_text_input_max_length_capped() {
        let input = PlainTextInput::new().with_length(10, 3000).unwrap();
        assert_eq!(input.max_length(), 3000);

        let err = PlainTextInput::new().with_length(10, 5000).unwrap_err();
        assert_eq!(err.field(), "max_length");
    }

    #[test]
    fn test_number_input_range() {
        let input = NumberInput::new(false).with_range(1, 10).unwrap();
        let mapping = input.to_mapping().unwrap();
        assert_eq!(mapping["min_value"], 1);
        assert_eq!(mapping["max_value"], 10);
        assert!(NumberInput::new(false).with_range(10, 1).is_err());
    }

    #[test]
    fn test_file_input_max_files() {
        assert!(FileInput::new().with_max_files(10).is_ok());
        assert!(FileInput::new().with_max_files(11).is_err());
        assert!(FileInput::new().with_max_files(0).is_err());

        let input = FileInput::new().with_filetypes(["pdf", "png"]);
        let mapping = input.to_mapping().unwrap();
        assert_eq!(mapping["filetypes"], serde_json::json!(["pdf", "png"]));
    }

    #[test]
    fn test_pickers_format_initial_values() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let picker = DatePicker::new().with_initial_date(date);
        assert_eq!(picker.to_mapping().unwrap()["initial_date"], "2024-03-09");

        let time = NaiveTime::from_hms_opt(7, 5, 0).unwrap();
        let picker = TimePicker::new().with_initial_time(time);
        assert_eq!(picker.to_mapping().unwrap()["initial_time"], "07:05");

        let moment = chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let picker = DateTimePicker::new().with_initial_date_time(moment);
        assert_eq!(picker.initial_date_time(), Some(1_704_067_200));
    }

    #[test]
    fn test_image_element_requires_secure_url() {
        assert!(ImageElement::new("https://example.com/a.png", "alt").is_ok());
        let err = ImageElement::new("http://example.com/a.png", "alt").unwrap_err();
        assert_eq!(err.field(), "image_url");
    }

    #[test]
    fn test_element_kind() {
        let element = Element::from(Button::new("Go").unwrap());
        assert_eq!(element.kind(), "button");
        assert!(Element::KINDS.contains(&"multi_static_select"));
        assert!(Element::KINDS.contains(&"usergroup"));
    }

    #[test]
    fn test_choice_option_limit() {
        let options: Vec<SelectOption> = (0..11)
            .map(|i| SelectOption::new(format!("Option {}", i), i.to_string()).unwrap())
            .collect();
        assert!(Checkboxes::new(options[..10].to_vec()).is_ok());
        assert!(Checkboxes::new(options.clone()).is_err());
        assert!(RadioButtons::new(options).is_err());
    }
}
