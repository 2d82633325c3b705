use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    /// Submit buttons trigger the enclosing form instead of their own click
    /// handler.
    #[prop_or_default]
    pub submit: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &Props) -> Html {
    html! {
        <button
            type={if props.submit { "submit" } else { "button" }}
            class={classes!("btn", props.class.clone())}
            onclick={props.onclick.clone()}
            disabled={props.disabled}
        >
            { for props.children.iter() }
        </button>
    }
}
