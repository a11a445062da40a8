use leptos::{html::Div, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::interaction::{RevealState, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

/// Fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let target = NodeRef::<Div>::new();
    let (reveal, set_reveal) = signal(RevealState::default());

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let intersecting = entries.iter().any(|entry| entry.is_intersecting());
            set_reveal.update(|state| {
                state.observe(intersecting);
            });
        },
        UseIntersectionObserverOptions::default()
            .root_margin(REVEAL_ROOT_MARGIN)
            .thresholds(vec![REVEAL_THRESHOLD]),
    );

    // only runs in the browser, so server markup is never hidden
    Effect::new(move |_| set_reveal.update(RevealState::arm));

    Effect::new(move |_| {
        if reveal.get() == RevealState::Revealed {
            stop();
        }
    });

    view! {
        <div
            node_ref=target
            class=move || match reveal.get().class() {
                Some(revealed) if class.is_empty() => revealed.to_string(),
                Some(revealed) => format!("{class} {revealed}"),
                None => class.clone(),
            }
            style=move || reveal.get().style().unwrap_or_default()
        >
            {children()}
        </div>
    }
}
