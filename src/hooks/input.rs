use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub type Validator = fn(&str) -> bool;
pub type Formatter = fn(&str) -> String;

/// Per-field state behind [`use_input`]. `touched` gates error display so a
/// pristine field never shows red.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputState {
    pub value: String,
    pub touched: bool,
}

impl InputState {
    pub fn has_error(&self, is_valid: bool) -> bool {
        self.touched && !is_valid
    }
}

pub enum InputAction {
    Change(String),
    Blur,
    Reset,
}

impl Reducible for InputState {
    type Action = InputAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            InputAction::Change(value) => Self {
                value,
                touched: self.touched,
            },
            InputAction::Blur => Self {
                value: self.value.clone(),
                touched: true,
            },
            InputAction::Reset => Self::default(),
        }
        .into()
    }
}

#[derive(Clone, PartialEq)]
pub struct UseInputHandle {
    pub value: String,
    pub is_valid: bool,
    pub has_error: bool,
    pub on_change: Callback<InputEvent>,
    pub on_blur: Callback<FocusEvent>,
    /// Marks the field touched without a real blur, used at submit time.
    pub touch: Callback<()>,
    pub reset: Callback<()>,
}

#[hook]
pub fn use_input(validate: Validator) -> UseInputHandle {
    use_input_with(validate, None)
}

/// Like [`use_input`], but pipes every change through `format` before it is
/// stored, so the displayed value is always masked.
#[hook]
pub fn use_formatted_input(validate: Validator, format: Formatter) -> UseInputHandle {
    use_input_with(validate, Some(format))
}

#[hook]
fn use_input_with(validate: Validator, format: Option<Formatter>) -> UseInputHandle {
    let state = use_reducer(InputState::default);

    let on_change = {
        let state = state.clone();

        Callback::from(move |event: InputEvent| {
            if let Some(raw) = target_value(&event) {
                let value = match format {
                    Some(format) => format(&raw),
                    None => raw,
                };
                state.dispatch(InputAction::Change(value));
            }
        })
    };

    let on_blur = {
        let state = state.clone();

        Callback::from(move |_: FocusEvent| state.dispatch(InputAction::Blur))
    };

    let touch = {
        let state = state.clone();

        Callback::from(move |_| state.dispatch(InputAction::Blur))
    };

    let reset = {
        let state = state.clone();

        Callback::from(move |_| state.dispatch(InputAction::Reset))
    };

    let is_valid = validate(&state.value);

    UseInputHandle {
        value: state.value.clone(),
        is_valid,
        has_error: state.has_error(is_valid),
        on_change,
        on_blur,
        touch,
        reset,
    }
}

// The same hook backs <input> and <select> fields.
fn target_value(event: &InputEvent) -> Option<String> {
    if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
        return Some(input.value());
    }

    event
        .target_dyn_into::<HtmlSelectElement>()
        .map(|select| select.value())
}
