use leptos::prelude::*;

use super::{header::SectionLink, lightbox::Previewable};
use crate::portfolio::Profile;

pub const PROFILE_IMAGE: &str = "/images/My-Image.jpeg";
pub const RESUME: &str = "/Resume-2025.pdf";

#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
    let Profile {
        name, role, about, ..
    } = profile;
    let title = name.clone();

    view! {
        <section id="home" class="hero">
            <div class="hero-content">
                <div class="hero-text">
                    <span class="hero-subtitle">"Engineering the Future"</span>
                    <h1 class="hero-title">{title}</h1>
                    <h2 class="hero-role-glitch">{role}</h2>
                    <p class="hero-description">{about}</p>
                    <div class="hero-btns">
                        <SectionLink href="#projects" class="btn btn-primary">
                            "Explore My Work"
                        </SectionLink>
                        <a href=RESUME target="_blank" class="btn btn-secondary" download="Resume-2025.pdf">
                            "Curriculum Vitae"
                        </a>
                    </div>
                </div>
                <Avatar name />
            </div>
        </section>
    }
}

#[component]
fn Avatar(name: String) -> impl IntoView {
    view! {
        <div class="hero-image-container">
            <Previewable full_img=PROFILE_IMAGE attr:class="image-blob">
                <img src=PROFILE_IMAGE alt=name class="profile-img" />
            </Previewable>
        </div>
    }
}
