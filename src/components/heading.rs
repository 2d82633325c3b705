use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum Level {
    H1,
    H2,
    H3,
}

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    #[prop_or(Level::H2)]
    pub level: Level,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Heading)]
pub fn heading(props: &Props) -> Html {
    let class = props.class.clone();
    let children = html! { { for props.children.iter() } };

    match props.level {
        Level::H1 => html! { <h1 {class}>{ children }</h1> },
        Level::H2 => html! { <h2 {class}>{ children }</h2> },
        Level::H3 => html! { <h3 {class}>{ children }</h3> },
    }
}
