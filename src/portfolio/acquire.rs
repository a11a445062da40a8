use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{Document, PortfolioData, Profile, Project, Skill};

/// Page-level data state. Starts `Loading` and only ever moves to `Ready`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortfolioState {
    #[default]
    Loading,
    Ready(PortfolioData),
}

impl PortfolioState {
    /// Combine the three independently fetched documents.
    ///
    /// Every document has to arrive for the page to become `Ready`. Any failure
    /// is logged once (naming the first failing document) and the page stays
    /// in `Loading`.
    pub fn settle<E: Display>(
        profile: Result<Profile, E>,
        skills: Result<Vec<Skill>, E>,
        projects: Result<Vec<Project>, E>,
    ) -> Self {
        match (profile, skills, projects) {
            (Ok(profile), Ok(skills), Ok(projects)) => Self::Ready(PortfolioData {
                profile,
                skills,
                projects,
            }),
            (profile, skills, projects) => {
                let (document, err) = profile
                    .err()
                    .map(|e| (Document::Profile, e.to_string()))
                    .or_else(|| skills.err().map(|e| (Document::Skills, e.to_string())))
                    .or_else(|| projects.err().map(|e| (Document::Projects, e.to_string())))
                    .unwrap_or((Document::Profile, "unknown failure".to_string()));
                log::error!("Error fetching portfolio data ({document}): {err}");
                Self::Loading
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Self::Ready(data) => Some(&data.profile),
            Self::Loading => None,
        }
    }
}
