use super::button::Button;
use super::card::Card;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    pub on_close: Callback<MouseEvent>,
    #[prop_or_default]
    pub is_loading: bool,
    #[prop_or_default]
    pub error: bool,
    #[prop_or_default]
    pub error_status_code: Option<u16>,
}

/// Overlay reflecting the submission state. Closing is the parent's call,
/// which ignores it while a request is in flight.
#[function_component(CallToActionModal)]
pub fn call_to_action_modal(props: &Props) -> Html {
    let status = if props.is_loading {
        html! { <p>{ "Enviando inscrição..." }</p> }
    } else if props.error {
        html! {
            <>
                <p class="error-text">{ "Não foi possível concluir a inscrição." }</p>
                {
                    match props.error_status_code {
                        Some(code) => html! {
                            <p class="error-text">{ format!("Erro {code}") }</p>
                        },
                        None => html! {},
                    }
                }
            </>
        }
    } else {
        html! { <p>{ "Inscrição realizada com sucesso!" }</p> }
    };

    html! {
        <div class="modal">
            <div class="backdrop" onclick={props.on_close.clone()}></div>
            <Card class="modal-card">
                { status }
                <Button onclick={props.on_close.clone()} disabled={props.is_loading}>
                    { "Fechar" }
                </Button>
            </Card>
        </div>
    }
}
