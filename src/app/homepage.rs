use leptos::{either::Either, prelude::*, server_fn::codec::GetUrl};
use leptos_meta::Title;

#[cfg(feature = "ssr")]
use crate::portfolio::{load_profile, load_projects, load_skills};
use crate::portfolio::{
    PortfolioData, PortfolioError, PortfolioState, Profile, Project, Skill,
};

use super::{
    contact::{ContactSection, Footer},
    gallery::ProjectsSection,
    header::Header,
    hero::Hero,
    lightbox::{provide_lightbox, Lightbox},
    reveal::Reveal,
    skills::SkillsSection,
};

/// Failures are reported once, by `settle_fetched` on the calling side.
#[cfg(feature = "ssr")]
fn respond<T>(loaded: Result<T, PortfolioError>) -> Result<T, ServerFnError> {
    loaded.map_err(ServerFnError::new)
}

#[server(input = GetUrl, endpoint = "portfolio/profile")]
pub async fn get_profile_server() -> Result<Profile, ServerFnError> {
    respond(load_profile())
}

#[server(input = GetUrl, endpoint = "portfolio/skills")]
pub async fn get_skills_server() -> Result<Vec<Skill>, ServerFnError> {
    respond(load_skills())
}

#[server(input = GetUrl, endpoint = "portfolio/projects")]
pub async fn get_projects_server() -> Result<Vec<Project>, ServerFnError> {
    respond(load_projects())
}

#[component]
pub fn HomePage() -> impl IntoView {
    // one-shot: no source signal, so the three requests are issued once
    let portfolio = Resource::new(
        || (),
        |_| async move {
            let (profile, skills, projects) = futures::join!(
                get_profile_server(),
                get_skills_server(),
                get_projects_server()
            );
            settle_fetched(profile, skills, projects)
        },
    );

    view! {
        <Title text="Home" />
        <Suspense fallback=|| view! { <LoadingScreen /> }>
            {move || Suspend::new(async move {
                let state = portfolio.await;
                view! { <PortfolioBody state /> }
            })}
        </Suspense>
    }
}

fn settle_fetched(
    profile: Result<Profile, ServerFnError>,
    skills: Result<Vec<Skill>, ServerFnError>,
    projects: Result<Vec<Project>, ServerFnError>,
) -> PortfolioState {
    let fetch = |e: ServerFnError| PortfolioError::Fetch(e.to_string());
    PortfolioState::settle(
        profile.map_err(fetch),
        skills.map_err(fetch),
        projects.map_err(fetch),
    )
}

/// The page guard: nothing but the placeholder until every document is in.
#[component]
pub fn PortfolioBody(state: PortfolioState) -> impl IntoView {
    match state {
        PortfolioState::Loading => Either::Left(view! { <LoadingScreen /> }),
        PortfolioState::Ready(data) => Either::Right(view! { <PortfolioView data /> }),
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! { <div class="loading-screen">"Preparing Excellence..."</div> }
}

#[component]
fn PortfolioView(data: PortfolioData) -> impl IntoView {
    let PortfolioData {
        profile,
        skills,
        projects,
    } = data;
    provide_lightbox();

    let logo = profile.first_name().to_string();
    let name = profile.name.clone();
    let social = profile.social.clone();

    view! {
        <div class="app-container">
            <Header logo />
            <main>
                <Hero profile=profile.clone() />
                <About />
                <SkillsSection skills />
                <ProjectsSection projects />
                <ContactSection profile />
            </main>
            <Footer name social />
            <Lightbox />
        </div>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="section about-section">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">"Professional Journey"</h2>
                </Reveal>
                <div class="about-grid">
                    <Reveal class="about-card">
                        <h3>"My Mission"</h3>
                        <p>
                            "To create technology that empowers individuals and organizations, focusing on scalability and user-centric design."
                        </p>
                    </Reveal>
                    <Reveal class="about-card">
                        <h3>"Technical Philosophy"</h3>
                        <p>
                            "Clean code, efficient algorithms, and an obsession with detail are the cornerstones of my development process."
                        </p>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
