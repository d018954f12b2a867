//! Seeder — canonical default portfolio payload and the two seeding paths.
//!
//! - `ensure_seeded`: lazy path, writes only when no document exists.
//! - `force_refresh`: admin reset, always overwrites with the default payload.
//!
//! Both paths go through one upsert-replace, so racing writers converge on
//! the same singleton instead of duplicating it.

use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::models::portfolio::{
    Education, Experience, PersonalInfo, PortfolioDocument, Project, Skill, Stat, Testimonial,
};
use crate::store::{DocumentStore, StoreError};

/// Outcome of a lazy seed attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    /// The store already held a document; it is handed back unchanged.
    AlreadyPresent(Value),
    Seeded,
}

/// Seeds the default portfolio if the store holds none. Never overwrites.
pub async fn ensure_seeded(store: &dyn DocumentStore) -> Result<SeedOutcome, AppError> {
    if let Some(document) = store.find_portfolio().await? {
        return Ok(SeedOutcome::AlreadyPresent(document));
    }
    write_default(store).await?;
    info!("Seeded empty store with default portfolio data");
    Ok(SeedOutcome::Seeded)
}

/// Unconditionally replaces the stored portfolio with the default payload.
/// Any edits made to the live document are discarded.
pub async fn force_refresh(store: &dyn DocumentStore) -> Result<(), AppError> {
    write_default(store).await?;
    info!("Portfolio document reset to default payload");
    Ok(())
}

async fn write_default(store: &dyn DocumentStore) -> Result<(), AppError> {
    let document = serde_json::to_value(default_portfolio()).map_err(StoreError::from)?;
    store.replace_portfolio(&document).await?;
    Ok(())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn skill(name: &str, level: u8, icon: &str, category: &str) -> Skill {
    Skill {
        name: name.to_string(),
        level,
        icon: icon.to_string(),
        category: category.to_string(),
    }
}

fn stat(label: &str, value: &str, icon: &str) -> Stat {
    Stat {
        label: label.to_string(),
        value: value.to_string(),
        icon: icon.to_string(),
    }
}

/// The canonical portfolio payload. Pure data; building it has no side effects.
pub fn default_portfolio() -> PortfolioDocument {
    PortfolioDocument {
        personal: PersonalInfo {
            name: "Risheek N".to_string(),
            title: "AI-Powered Backend Developer".to_string(),
            subtitle: "REST API Specialist".to_string(),
            email: "risheek2627@gmail.com".to_string(),
            phone: "9901737965".to_string(),
            linkedin: "linkedin.com/in/risheek-n".to_string(),
            bio: "Hey! I'm Risheek, a backend developer passionate about building scalable \
                  REST APIs and AI-powered applications. I merge backend logic with \
                  intelligent systems to create real-world impact."
                .to_string(),
        },
        skills: vec![
            skill("JavaScript", 85, "js", "language"),
            skill("Python", 90, "python", "language"),
            skill("Node.js", 85, "nodejs", "runtime"),
            skill("Express.js", 88, "server", "framework"),
            skill("Streamlit", 80, "streamlit", "framework"),
            skill("MySQL", 82, "database", "database"),
            skill("MongoDB", 85, "mongodb", "database"),
            skill("REST APIs", 90, "api", "backend"),
            skill("Git", 88, "git", "tools"),
            skill("GitHub", 85, "github", "tools"),
        ],
        experience: vec![
            Experience {
                id: 1,
                position: "Backend Developer".to_string(),
                company: "Ants Applied Data Science".to_string(),
                duration: "Aug 2024 – Feb 2025".to_string(),
                kind: "Current".to_string(),
                achievements: strings(&[
                    "JWT-auth APIs with 35% fewer bugs",
                    "MySQL integration for optimized backend",
                    "Scalable architecture for Solar DL project",
                    "Built robust REST API endpoints",
                ]),
                technologies: strings(&["Node.js", "Express.js", "MySQL", "JWT", "REST APIs"]),
            },
            Experience {
                id: 2,
                position: "AI/ML Intern".to_string(),
                company: "Ants Applied Data Science".to_string(),
                duration: "Jan 2024 – Apr 2024".to_string(),
                kind: "Internship".to_string(),
                achievements: strings(&[
                    "ML models for prediction (+25% accuracy)",
                    "Used Python for data analysis and modeling",
                    "Implemented machine learning algorithms",
                    "Data preprocessing and feature engineering",
                ]),
                technologies: strings(&["Python", "Scikit-learn", "Pandas", "NumPy", "ML"]),
            },
        ],
        projects: vec![Project {
            id: 1,
            title: "Movie Recommendation System".to_string(),
            description: "An intelligent movie recommendation platform using collaborative \
                          and content-based filtering algorithms to provide personalized \
                          movie suggestions."
                .to_string(),
            technologies: strings(&["Python", "Streamlit", "TMDB API", "Pandas", "Scikit-learn"]),
            features: strings(&[
                "Collaborative filtering algorithm",
                "Content-based recommendations",
                "Real-time TMDB API integration",
                "Interactive Streamlit interface",
                "User preference learning",
            ]),
            live_url: "#".to_string(),
            code_url: "#".to_string(),
            image: "https://images.unsplash.com/photo-1489875347897-49f64b51c1f8?w=400&q=80"
                .to_string(),
            status: "Completed".to_string(),
            category: "AI/ML".to_string(),
        }],
        education: vec![
            Education {
                id: 1,
                degree: "Diploma in Computer Science".to_string(),
                institution: "Sri Jayachamarajendra Polytechnic".to_string(),
                duration: "2021 – 2024".to_string(),
                kind: "Diploma".to_string(),
                status: "Completed".to_string(),
            },
            Education {
                id: 2,
                degree: "SSLC".to_string(),
                institution: "SMS Public School".to_string(),
                duration: "2018 – 2021".to_string(),
                kind: "Secondary".to_string(),
                status: "Completed".to_string(),
            },
        ],
        testimonials: vec![Testimonial {
            id: 1,
            name: "Tech Mentor".to_string(),
            role: "Senior Developer".to_string(),
            company: "Tech Corp".to_string(),
            message: "Risheek demonstrates exceptional backend development skills and shows \
                      great potential in AI integration."
                .to_string(),
            avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&q=80"
                .to_string(),
        }],
        stats: vec![
            stat("API Endpoints Built", "50+", "server"),
            stat("Bug Reduction", "35%", "shield"),
            stat("Accuracy Improvement", "25%", "target"),
        ],
    }
}
