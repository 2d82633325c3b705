use gloo_net::http::{Request, Response};
use serde_json::Value;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// A JSON POST request as handed to [`UseHttpHandle::send`].
#[derive(Clone, Debug, PartialEq)]
pub struct JsonPost {
    pub url: String,
    pub body: Value,
}

/// Request lifecycle as seen by the UI. A new request wipes any previous
/// error before loading starts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestState {
    pub is_loading: bool,
    pub error: bool,
    pub error_status_code: Option<u16>,
}

pub enum RequestAction {
    Start,
    Success,
    Failure(Option<u16>),
}

impl Reducible for RequestState {
    type Action = RequestAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RequestAction::Start => Self {
                is_loading: true,
                error: false,
                error_status_code: None,
            },
            RequestAction::Success => Self::default(),
            RequestAction::Failure(code) => Self {
                is_loading: false,
                error: true,
                error_status_code: code,
            },
        }
        .into()
    }
}

#[derive(Clone, PartialEq)]
pub struct UseHttpHandle {
    pub is_loading: bool,
    pub error: bool,
    pub error_status_code: Option<u16>,
    pub send: Callback<JsonPost>,
}

/// Fire-and-observe JSON POST hook. The response body is never inspected,
/// only the status class; transport errors surface with no status code.
#[hook]
pub fn use_http() -> UseHttpHandle {
    let state = use_reducer(RequestState::default);

    let send = {
        let state = state.clone();

        Callback::from(move |post: JsonPost| {
            if state.is_loading {
                return;
            }
            state.dispatch(RequestAction::Start);

            let state = state.clone();
            spawn_local(async move {
                match post_json(&post).await {
                    Ok(response) if response.ok() => {
                        log::info!("POST {} ok ({})", post.url, response.status());
                        state.dispatch(RequestAction::Success);
                    }
                    Ok(response) => {
                        log::warn!("POST {} failed with status {}", post.url, response.status());
                        state.dispatch(RequestAction::Failure(Some(response.status())));
                    }
                    Err(err) => {
                        log::warn!("POST {} failed: {err:#}", post.url);
                        state.dispatch(RequestAction::Failure(None));
                    }
                }
            });
        })
    };

    UseHttpHandle {
        is_loading: state.is_loading,
        error: state.error,
        error_status_code: state.error_status_code,
        send,
    }
}

async fn post_json(post: &JsonPost) -> anyhow::Result<Response> {
    let response = Request::post(&post.url)
        .header("Content-Type", "application/json")
        .json(&post.body)?
        .send()
        .await?;

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: RequestState, action: RequestAction) -> RequestState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn test_start_sets_loading_and_clears_previous_error() {
        let failed = reduce(RequestState::default(), RequestAction::Failure(Some(500)));
        let state = reduce(failed, RequestAction::Start);

        assert!(state.is_loading);
        assert!(!state.error);
        assert_eq!(state.error_status_code, None);
    }

    #[test]
    fn test_success_clears_loading() {
        let state = reduce(RequestState::default(), RequestAction::Start);
        let state = reduce(state, RequestAction::Success);
        assert_eq!(state, RequestState::default());
    }

    #[test]
    fn test_failure_records_status_code() {
        let state = reduce(RequestState::default(), RequestAction::Start);
        let state = reduce(state, RequestAction::Failure(Some(404)));

        assert!(!state.is_loading);
        assert!(state.error);
        assert_eq!(state.error_status_code, Some(404));
    }

    #[test]
    fn test_transport_failure_has_no_status_code() {
        let state = reduce(RequestState::default(), RequestAction::Failure(None));
        assert!(state.error);
        assert_eq!(state.error_status_code, None);
    }
}
