use leptos::{ev::SubmitEvent, prelude::*};

use super::reveal::Reveal;
use crate::portfolio::{build_year, Profile, Social};

#[component]
pub fn ContactSection(profile: Profile) -> impl IntoView {
    let Profile {
        email,
        phone,
        location,
        ..
    } = profile;

    // Messages have nowhere to go yet; keep the browser from navigating away.
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        log::info!("contact form submitted, no delivery backend configured");
    };

    view! {
        <section id="contact" class="section contact-section">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">"Get In Touch"</h2>
                </Reveal>
                <Reveal class="contact-wrapper">
                    <div class="contact-info">
                        <h3>"Let's build something amazing together."</h3>
                        <p>"Available for freelance projects and full-time collaborations."</p>
                        <ul class="contact-list">
                            <li>
                                <i class="fas fa-envelope"></i>
                                " "
                                <a href=format!("mailto:{email}")>{email.clone()}</a>
                            </li>
                            <li>
                                <i class="fas fa-phone"></i>
                                " "
                                {phone}
                            </li>
                            <li>
                                <i class="fas fa-map-marker-alt"></i>
                                " "
                                {location}
                            </li>
                        </ul>
                    </div>
                    <form class="contact-form" on:submit=on_submit>
                        <input type="text" name="name" placeholder="Your Full Name" required=true />
                        <input type="email" name="email" placeholder="Email Address" required=true />
                        <textarea
                            name="message"
                            placeholder="Message Details"
                            rows="5"
                            required=true
                        ></textarea>
                        <button type="submit" class="btn btn-primary">
                            "Send Message"
                        </button>
                    </form>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
pub fn Footer(name: String, social: Social) -> impl IntoView {
    view! {
        <footer class="glass-footer">
            <div class="footer-content">
                <p>{format!("© {} {name}. Crafted with Passion.", build_year())}</p>
                <div class="social-links">
                    <a
                        href=social.github
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="GitHub Profile"
                    >
                        <i class="fab fa-github"></i>
                    </a>
                    <a
                        href=social.linkedin
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="fab fa-linkedin"></i>
                    </a>
                </div>
            </div>
        </footer>
    }
}
