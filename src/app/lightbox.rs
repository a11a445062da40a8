use leptos::{ev, ev::MouseEvent, prelude::*};
use wasm_bindgen::JsCast;

use crate::interaction::LightboxState;

const FULL_IMG_ATTR: &str = "data-full-img";

#[derive(Debug, Clone, Copy)]
struct LightboxContext(RwSignal<LightboxState>);

pub fn provide_lightbox() -> RwSignal<LightboxState> {
    let state = RwSignal::new(LightboxState::default());
    provide_context(LightboxContext(state));
    state
}

fn use_lightbox() -> RwSignal<LightboxState> {
    expect_context::<LightboxContext>().0
}

/// Wraps content that opens its full-size image in the lightbox when clicked.
/// Styling goes on the wrapper through `attr:class`.
#[component]
pub fn Previewable(#[prop(into)] full_img: String, children: Children) -> impl IntoView {
    let lightbox = use_lightbox();
    let on_click = move |ev: MouseEvent| {
        let full_img = ev
            .current_target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.get_attribute(FULL_IMG_ATTR));
        lightbox.update(|state| state.open(full_img.as_deref()));
    };

    view! {
        <div data-full-img=full_img on:click=on_click>
            {children()}
        </div>
    }
}

#[component]
pub fn Lightbox() -> impl IntoView {
    let state = use_lightbox();

    Effect::new(move |_| {
        window_event_listener(ev::keydown, move |ev| {
            state.maybe_update(|s| s.handle_key(&ev.key()));
        })
    });

    let on_backdrop = move |ev: MouseEvent| {
        let is_backdrop = ev.target().is_some() && ev.target() == ev.current_target();
        state.update(|s| s.handle_backdrop_click(is_backdrop));
    };

    view! {
        <Show when=move || state.with(LightboxState::is_open)>
            <div id="imageModal" class="modal" role="dialog" aria-modal="true" on:click=on_backdrop>
                <button
                    class="close-modal"
                    aria-label="Close preview"
                    on:click=move |_| state.update(LightboxState::close)
                >
                    "×"
                </button>
                <img
                    id="fullImage"
                    class="modal-content"
                    alt="Full size preview"
                    src=move || state.with(|s| s.image().unwrap_or_default().to_string())
                />
            </div>
        </Show>
    }
}
