use super::call_to_action::CallToAction;
use yew::prelude::*;

/// Root of the page. The ranking list itself lives elsewhere; here the
/// refresh signal only bumps a counter so collaborators can key off it.
#[function_component(App)]
pub fn app() -> Html {
    let ranking_version = use_state(|| 0u32);

    let on_ranking = {
        let ranking_version = ranking_version.clone();

        Callback::from(move |_| {
            let next = *ranking_version + 1;
            log::info!("registration confirmed, refreshing ranking (v{next})");
            ranking_version.set(next);
        })
    };

    html! {
        <main data-ranking-version={ranking_version.to_string()}>
            <CallToAction {on_ranking} />
        </main>
    }
}
