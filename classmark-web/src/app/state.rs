use crate::api::ApiClient;
use crate::app::phase::Phase;
use crate::session::BrowserTokenStore;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub phase: UseStateHandle<Phase>,
    pub api: ApiClient,
}

#[hook]
pub fn use_app_state() -> AppState {
    let api = use_memo((), |()| {
        ApiClient::new(Rc::new(BrowserTokenStore::default()))
    });
    AppState {
        phase: use_state(|| Phase::Boot),
        api: (*api).clone(),
    }
}
