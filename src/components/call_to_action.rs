use super::button::Button;
use super::card::Card;
use super::heading::Heading;
use super::modal::CallToActionModal;
use crate::hooks::{use_formatted_input, use_http, use_input, JsonPost};
use crate::phone;
use crate::player::{ExperienceLevel, PlayerRegistration};
use yew::prelude::*;

const PLAYER_ENDPOINT: &str = "http://localhost:8080/player";

fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

fn is_experience(value: &str) -> bool {
    value.parse::<ExperienceLevel>().is_ok()
}

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    /// Emitted after a successful registration is dismissed, so the parent
    /// refreshes its ranking view.
    pub on_ranking: Callback<()>,
}

#[function_component(CallToAction)]
pub fn call_to_action(props: &Props) -> Html {
    let http = use_http();
    let modal_shown = use_state(|| false);

    let name = use_input(not_blank);
    let number = use_formatted_input(phone::is_valid, phone::format);
    let experience = use_input(is_experience);

    let form_is_valid = name.is_valid && number.is_valid && experience.is_valid;

    let on_submit = {
        let name = name.clone();
        let number = number.clone();
        let experience = experience.clone();
        let modal_shown = modal_shown.clone();
        let send = http.send.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            name.touch.emit(());
            number.touch.emit(());
            experience.touch.emit(());
            if !form_is_valid {
                return;
            }

            modal_shown.set(true);
            let player = PlayerRegistration {
                name: name.value.clone(),
                number: number.value.clone(),
                experience: experience.value.clone(),
            };
            match serde_json::to_value(&player) {
                Ok(body) => send.emit(JsonPost {
                    url: PLAYER_ENDPOINT.to_string(),
                    body,
                }),
                Err(err) => log::error!("could not encode registration: {err}"),
            }
        })
    };

    let on_modal_close = {
        let modal_shown = modal_shown.clone();
        let is_loading = http.is_loading;
        let error = http.error;
        let reset_name = name.reset.clone();
        let reset_number = number.reset.clone();
        let reset_experience = experience.reset.clone();
        let on_ranking = props.on_ranking.clone();

        Callback::from(move |_: MouseEvent| {
            if is_loading {
                return;
            }

            modal_shown.set(false);
            if !error {
                reset_name.emit(());
                reset_number.emit(());
                reset_experience.emit(());
                on_ranking.emit(());
            }
        })
    };

    html! {
        <section class="cta container">
            <Card>
                <div>
                    <Heading class="margin-bottom-lg">{ "Entre no Ranking" }</Heading>
                </div>
                <div>
                    <form onsubmit={on_submit}>
                        <div class="margin-bottom-md relative">
                            <label for="name">{ "Atleta" }</label>
                            <input
                                name="name"
                                id="name"
                                type="text"
                                placeholder="Digite seu nome completo"
                                value={name.value.clone()}
                                oninput={name.on_change.clone()}
                                onblur={name.on_blur.clone()}
                                class={classes!(name.has_error.then_some("error"))}
                            />
                            if name.has_error {
                                <p class="error-text">{ "Por favor, preencha seu nome" }</p>
                            }
                        </div>
                        <div class="margin-bottom-md">
                            <label for="number">{ "Celular" }</label>
                            <input
                                name="number"
                                id="number"
                                type="tel"
                                placeholder="(95) 99999-9999"
                                value={number.value.clone()}
                                oninput={number.on_change.clone()}
                                onblur={number.on_blur.clone()}
                                class={classes!(number.has_error.then_some("error"))}
                            />
                            if number.has_error {
                                <p class="error-text">{ "Por favor, utilize um número de celular válido" }</p>
                            }
                        </div>
                        <div class="margin-bottom-md">
                            <label for="experience">{ "Qual a sua experiência no tênis?" }</label>
                            <select
                                name="experience"
                                id="experience"
                                value={experience.value.clone()}
                                oninput={experience.on_change.clone()}
                                onblur={experience.on_blur.clone()}
                                class={classes!(experience.has_error.then_some("error"))}
                            >
                                <option value="" selected={experience.value.is_empty()}>
                                    { "Selecione uma das opções:" }
                                </option>
                                { for ExperienceLevel::ALL.iter().map(|level| html! {
                                    <option
                                        value={level.label()}
                                        selected={experience.value == level.label()}
                                    >
                                        { level.label() }
                                    </option>
                                }) }
                            </select>
                            if experience.has_error {
                                <p class="error-text">{ "Por favor, selecione a sua experiência" }</p>
                            }
                        </div>
                        <Button submit={true} class="margin-top-sm">
                            { "Inscreva-se" }
                        </Button>
                    </form>
                </div>
            </Card>
            if *modal_shown {
                <CallToActionModal
                    on_close={on_modal_close}
                    is_loading={http.is_loading}
                    error={http.error}
                    error_status_code={http.error_status_code}
                />
            }
        </section>
    }
}
