//! Project types offered by the contact form

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of project the visitor is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Website,
    Webapp,
    Ecommerce,
    Tutorial,
    Other,
}

impl ProjectType {
    /// Every option, in the order the select box lists them
    pub const ALL: [ProjectType; 5] = [
        ProjectType::Website,
        ProjectType::Webapp,
        ProjectType::Ecommerce,
        ProjectType::Tutorial,
        ProjectType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Website => "website",
            ProjectType::Webapp => "webapp",
            ProjectType::Ecommerce => "ecommerce",
            ProjectType::Tutorial => "tutorial",
            ProjectType::Other => "other",
        }
    }

    /// Translation key of the option label
    pub fn label_key(&self) -> String {
        format!("contact.projectTypes.{}", self.as_str())
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value is not one of the known project types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown project type: {0}")]
pub struct UnknownProjectType(pub String);

impl FromStr for ProjectType {
    type Err = UnknownProjectType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectType::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownProjectType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_listed_option() {
        for project in ProjectType::ALL {
            assert_eq!(project.as_str().parse::<ProjectType>(), Ok(project));
        }
        assert!("Website".parse::<ProjectType>().is_err());
        assert!("".parse::<ProjectType>().is_err());
    }

    #[test]
    fn label_keys_point_into_contact_namespace() {
        assert_eq!(
            ProjectType::Ecommerce.label_key(),
            "contact.projectTypes.ecommerce"
        );
    }
}
