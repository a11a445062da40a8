mod acquire;

pub use acquire::PortfolioState;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[cfg(not(feature = "hydrate"))]
use dashmap::DashMap;
#[cfg(not(feature = "hydrate"))]
use rust_embed::Embed;
#[cfg(not(feature = "hydrate"))]
use serde::de::DeserializeOwned;
#[cfg(not(feature = "hydrate"))]
use std::sync::LazyLock;

#[cfg(not(feature = "hydrate"))]
static DOCUMENT_CACHE: LazyLock<DashMap<Document, Cached>> = LazyLock::new(DashMap::new);

#[cfg(not(feature = "hydrate"))]
#[derive(Embed)]
#[folder = "data"]
pub struct Assets;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub about: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub social: Social,
}

impl Profile {
    /// Short form of the name used for the navigation logo.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
    pub level: u8,
}

impl Skill {
    /// Fill width of the progress bar. Levels above 100 render as a full bar.
    pub fn bar_width(&self) -> String {
        format!("width: {}%", self.level.min(100))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioData {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}

/// One of the three embedded portfolio documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
    Profile,
    Skills,
    Projects,
}

impl Document {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Profile => "profile.json",
            Self::Skills => "skills.json",
            Self::Projects => "projects.json",
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Profile => "profile",
            Self::Skills => "skills",
            Self::Projects => "projects",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    #[error("Portfolio document not found: {0}")]
    NotFound(Document),
    #[error("Couldn't parse {document}: {message}")]
    Parse { document: Document, message: String },
    #[error("Couldn't fetch portfolio data: {0}")]
    Fetch(String),
}

#[cfg(not(feature = "hydrate"))]
#[derive(Debug, Clone)]
enum Cached {
    Profile(Profile),
    Skills(Vec<Skill>),
    Projects(Vec<Project>),
}

#[cfg(not(feature = "hydrate"))]
fn parse_document<T: DeserializeOwned>(document: Document) -> Result<T, PortfolioError> {
    let file = Assets::get(document.file_name()).ok_or(PortfolioError::NotFound(document))?;
    serde_json::from_slice(&file.data).map_err(|e| PortfolioError::Parse {
        document,
        message: e.to_string(),
    })
}

#[cfg(not(feature = "hydrate"))]
pub fn load_profile() -> Result<Profile, PortfolioError> {
    if let Some(entry) = DOCUMENT_CACHE.get(&Document::Profile) {
        if let Cached::Profile(profile) = &*entry {
            return Ok(profile.clone());
        }
    }
    let profile: Profile = parse_document(Document::Profile)?;
    DOCUMENT_CACHE.insert(Document::Profile, Cached::Profile(profile.clone()));
    Ok(profile)
}

#[cfg(not(feature = "hydrate"))]
pub fn load_skills() -> Result<Vec<Skill>, PortfolioError> {
    if let Some(entry) = DOCUMENT_CACHE.get(&Document::Skills) {
        if let Cached::Skills(skills) = &*entry {
            return Ok(skills.clone());
        }
    }
    let skills: Vec<Skill> = parse_document(Document::Skills)?;
    DOCUMENT_CACHE.insert(Document::Skills, Cached::Skills(skills.clone()));
    Ok(skills)
}

#[cfg(not(feature = "hydrate"))]
pub fn load_projects() -> Result<Vec<Project>, PortfolioError> {
    if let Some(entry) = DOCUMENT_CACHE.get(&Document::Projects) {
        if let Cached::Projects(projects) = &*entry {
            return Ok(projects.clone());
        }
    }
    let projects: Vec<Project> = parse_document(Document::Projects)?;
    DOCUMENT_CACHE.insert(Document::Projects, Cached::Projects(projects.clone()));
    Ok(projects)
}

#[cfg(not(feature = "hydrate"))]
pub fn load_portfolio() -> Result<PortfolioData, PortfolioError> {
    Ok(PortfolioData {
        profile: load_profile()?,
        skills: load_skills()?,
        projects: load_projects()?,
    })
}

/// Year the site was built, used for the footer copyright line.
pub fn build_year() -> i32 {
    use chrono::{DateTime, Datelike, Utc};

    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|dt| dt.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use std::{
        sync::{Mutex, Once},
        thread::{self, ThreadId},
    };

    pub fn profile() -> Profile {
        Profile {
            name: "Ada Lovelace".to_string(),
            role: "Analytical Engine Programmer".to_string(),
            about: "Writes the first published algorithm.".to_string(),
            location: "London, England".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 20 0000 0000".to_string(),
            social: Social {
                linkedin: "https://linkedin.com/in/ada".to_string(),
                github: "https://github.com/ada".to_string(),
            },
        }
    }

    pub fn skill(name: &str, level: u8) -> Skill {
        Skill {
            name: name.to_string(),
            icon: "fas fa-cog".to_string(),
            level,
        }
    }

    pub fn project(title: &str) -> Project {
        Project {
            title: title.to_string(),
            description: format!("{title} description"),
            image: format!("/images/{}.png", title.to_lowercase()),
            link: "#".to_string(),
            tags: vec!["Rust".to_string(), "Leptos".to_string()],
        }
    }

    pub fn data() -> PortfolioData {
        PortfolioData {
            profile: profile(),
            skills: vec![skill("Engines", 90), skill("Notes", 45)],
            projects: vec![project("Bernoulli"), project("Difference"), project("Tables")],
        }
    }

    struct CaptureLogger {
        records: Mutex<Vec<(ThreadId, log::Level, String)>>,
    }

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            self.records.lock().unwrap().push((
                thread::current().id(),
                record.level(),
                record.args().to_string(),
            ));
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger {
        records: Mutex::new(Vec::new()),
    };
    static INIT: Once = Once::new();

    /// `log` records written on the current thread after `start`.
    ///
    /// Tests run on their own threads, so captures don't see each other.
    pub struct LogCapture {
        thread: ThreadId,
        from: usize,
    }

    impl LogCapture {
        pub fn start() -> Self {
            INIT.call_once(|| {
                log::set_logger(&LOGGER).unwrap();
                log::set_max_level(log::LevelFilter::Trace);
            });
            Self {
                thread: thread::current().id(),
                from: LOGGER.records.lock().unwrap().len(),
            }
        }

        pub fn records(&self) -> Vec<(log::Level, String)> {
            LOGGER.records.lock().unwrap()[self.from..]
                .iter()
                .filter(|(t, _, _)| *t == self.thread)
                .map(|(_, level, msg)| (*level, msg.clone()))
                .collect()
        }
    }

    pub fn captured_logs(f: impl FnOnce()) -> Vec<(log::Level, String)> {
        let capture = LogCapture::start();
        f();
        capture.records()
    }
}
