//! Page State
//!
//! Each page owns one `ViewState` signal. The fetch started on mount writes
//! its outcome only while the page is still mounted.

use leptos::*;
use octofit::models::resolve_all;
use octofit::pages::Page;
use octofit::view::ViewState;
use std::cell::Cell;
use std::rc::Rc;

use crate::api;

/// Create the page's state signal and start its fetch
pub fn use_page_state<P: Page>() -> ReadSignal<ViewState<P::Record>> {
    let (state, set_state) = create_signal(ViewState::<P::Record>::new());

    let alive = Rc::new(Cell::new(true));
    let alive_for_cleanup = Rc::clone(&alive);
    on_cleanup(move || alive_for_cleanup.set(false));

    let url = api::resolver().resolve(P::RESOURCE);
    create_effect(move |_| {
        let alive = Rc::clone(&alive);
        let url = url.clone();
        spawn_local(async move {
            let outcome = api::fetch_records(&url)
                .await
                .map(|records| resolve_all::<P::Record>(&records));

            if let Err(e) = &outcome {
                web_sys::console::warn_1(&format!("Failed to fetch {}: {}", url, e).into());
            }

            if alive.get() {
                set_state.update(|s| *s = std::mem::take(s).apply(outcome));
            }
        });
    });

    state
}
