use leptos::prelude::*;

use super::{lightbox::Previewable, reveal::Reveal};
use crate::portfolio::Project;

#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section id="projects" class="section">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">"Innovation Gallery"</h2>
                </Reveal>
                <div class="projects-layout">
                    {projects
                        .into_iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        title,
        description,
        image,
        link,
        tags,
    } = project;
    let full_img = image.clone();
    let alt = title.clone();

    view! {
        <Reveal class="project-glass-card">
            <div class="project-preview">
                <Previewable full_img>
                    <img src=image alt=alt />
                </Previewable>
                <div class="project-overlay">
                    <a href=link target="_blank" rel="noopener noreferrer" class="view-button">
                        "Launch Case Study"
                    </a>
                </div>
            </div>
            <div class="project-details">
                <h3>{title}</h3>
                <p>{description}</p>
                <div class="project-metatags">
                    {tags
                        .into_iter()
                        .map(|tag| view! { <span class="tag">{tag}</span> })
                        .collect_view()}
                </div>
            </div>
        </Reveal>
    }
}
