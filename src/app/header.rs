use leptos::{ev::MouseEvent, prelude::*};

use crate::interaction::{anchor_target, MenuState};

const NAV_LINKS: [(&str, &str); 3] = [
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
];

#[component]
pub fn Header(#[prop(into)] logo: String) -> impl IntoView {
    let (menu, set_menu) = signal(MenuState::default());
    let close_menu = move |_: MouseEvent| set_menu.update(MenuState::close);

    view! {
        <header class="header">
            <nav class="nav-container">
                <SectionLink href="#home" class="logo">
                    {logo}
                    <span class="accent">"."</span>
                </SectionLink>
                <button
                    class="menu-btn"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| set_menu.update(MenuState::toggle)
                >
                    <i class=move || menu.get().icon_class()></i>
                </button>
                <ul class=move || menu.get().list_class()>
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <li on:click=close_menu>
                                    <SectionLink href class="nav-link">
                                        {label}
                                    </SectionLink>
                                </li>
                            }
                        })
                        .collect_view()}
                    <li on:click=close_menu>
                        <SectionLink href="#contact" class="nav-btn">
                            "Contact Me"
                        </SectionLink>
                    </li>
                </ul>
            </nav>
        </header>
    }
}

/// Anchor that scrolls smoothly to in-page `#id` targets instead of jumping.
/// Other hrefs behave like a plain link.
#[component]
pub fn SectionLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = anchor_target(&href).map(str::to_string);
    let on_click = move |ev: MouseEvent| {
        let Some(id) = target.as_deref() else {
            return;
        };
        ev.prevent_default();
        scroll_to(id);
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}

fn scroll_to(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        log::debug!("no scroll target with id {id}");
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}
