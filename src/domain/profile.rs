//! Portfolio profile data edited through the profile store

use serde::{Deserialize, Serialize};

/// A showcased project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub github_url: String,
    pub image_url: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

/// A certificate entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub image_url: String,
    pub link: String,
}

/// Everything the portfolio displays about its owner.
///
/// Field names serialize in camelCase so a stored profile stays
/// interchangeable with the browser-side `portfolio_data_v1` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProfile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub profile_pic: String,
    pub github_username: String,
    /// Identifier handed to the stats providers
    pub leetcode_username: String,
    pub ambitions: String,
    pub email: String,
    pub linkedin: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
}

/// Error when editing a profile field by name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileFieldError {
    #[error("Unknown profile field: {0}")]
    UnknownField(String),
}

impl PortfolioProfile {
    /// Names accepted by [`PortfolioProfile::set_field`]
    pub const EDITABLE_FIELDS: [&'static str; 10] = [
        "name",
        "title",
        "bio",
        "profile_pic",
        "github_username",
        "leetcode_username",
        "ambitions",
        "email",
        "linkedin",
        "skills",
    ];

    /// Set a scalar field by its snake_case name.
    ///
    /// `skills` takes a comma-separated list; blank entries are dropped.
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), ProfileFieldError> {
        let slot = match field {
            "name" => &mut self.name,
            "title" => &mut self.title,
            "bio" => &mut self.bio,
            "profile_pic" => &mut self.profile_pic,
            "github_username" => &mut self.github_username,
            "leetcode_username" => &mut self.leetcode_username,
            "ambitions" => &mut self.ambitions,
            "email" => &mut self.email,
            "linkedin" => &mut self.linkedin,
            "skills" => {
                self.skills = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
                return Ok(());
            }
            other => return Err(ProfileFieldError::UnknownField(other.to_string())),
        };
        *slot = value.to_string();
        Ok(())
    }
}

impl Default for PortfolioProfile {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            title: "Software Engineer".to_string(),
            bio: "Engineer focused on reliable systems and measurable execution.".to_string(),
            profile_pic: String::new(),
            github_username: "octocat".to_string(),
            leetcode_username: String::new(),
            ambitions: "Ship resilient infrastructure.".to_string(),
            email: String::new(),
            linkedin: String::new(),
            skills: vec!["Rust".to_string(), "Distributed Systems".to_string()],
            projects: vec![Project {
                id: "proj-01".to_string(),
                title: "solvegauge".to_string(),
                description: "Multi-provider stats fetcher with a concentric ring gauge."
                    .to_string(),
                github_url: "https://github.com/octocat".to_string(),
                image_url: String::new(),
                tech_stack: vec!["Rust".to_string(), "tokio".to_string()],
            }],
            certificates: Vec::new(),
        }
    }
}
