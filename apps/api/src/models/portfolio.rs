use serde::{Deserialize, Serialize};

/// The singleton portfolio document. Stored whole and replaced whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioDocument {
    pub personal: PersonalInfo,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub testimonials: Vec<Testimonial>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8, // 0 – 100
    pub icon: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: i64,
    pub position: String,
    pub company: String,
    pub duration: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub live_url: String,
    pub code_url: String,
    pub image: String,
    pub status: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: i64,
    pub degree: String,
    pub institution: String,
    pub duration: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub company: String,
    pub message: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub icon: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_uses_camel_case_urls() {
        let project = Project {
            id: 7,
            title: "Demo".to_string(),
            description: "d".to_string(),
            technologies: vec![],
            features: vec![],
            live_url: "https://live".to_string(),
            code_url: "https://code".to_string(),
            image: String::new(),
            status: "Completed".to_string(),
            category: "Web".to_string(),
        };
        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["liveUrl"], "https://live");
        assert_eq!(value["codeUrl"], "https://code");
        assert!(value.get("live_url").is_none());
    }

    #[test]
    fn test_experience_kind_serializes_as_type() {
        let raw = json!({
            "id": 1,
            "position": "Backend Developer",
            "company": "Acme",
            "duration": "2024",
            "type": "Current",
            "achievements": ["Shipped"],
            "technologies": ["Rust"]
        });
        let exp: Experience = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(exp.kind, "Current");
        assert_eq!(serde_json::to_value(&exp).unwrap(), raw);
    }
}
