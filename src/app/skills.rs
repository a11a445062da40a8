use leptos::prelude::*;

use super::reveal::Reveal;
use crate::portfolio::Skill;

#[component]
pub fn SkillsSection(skills: Vec<Skill>) -> impl IntoView {
    view! {
        <section id="skills" class="section bg-dim">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">"Core Competencies"</h2>
                </Reveal>
                <div class="skills-grid">
                    {skills.into_iter().map(|skill| view! { <SkillItem skill /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillItem(skill: Skill) -> impl IntoView {
    let width = skill.bar_width();
    let Skill { name, icon, level } = skill;

    view! {
        <Reveal class="skill-item">
            <div class="skill-info">
                <span class="skill-name">
                    <i class=icon></i>
                    " "
                    {name}
                </span>
                <span class="skill-percentage">{format!("{level}%")}</span>
            </div>
            <div class="skill-bar">
                <div class="skill-progress" style=width></div>
            </div>
        </Reveal>
    }
}
