//! Raw form input and the validated submission

use crate::project::ProjectType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Project,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Project, Field::Message];

    /// Key of the field in the JSON body
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Project => "project",
            Field::Message => "message",
        }
    }

    /// Translation key of the field label
    pub fn label_key(&self) -> String {
        format!("contact.{}", self.as_str())
    }

    pub fn parse(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.as_str() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values as typed into the form, before any validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub message: String,
}

impl ContactInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        project: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            project: project.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Project => &self.project,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Project => self.project = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// A submission that passed validation
///
/// Only [`crate::validate`] and [`crate::parse_body`] construct one, so
/// holding a value means every field constraint holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) project: ProjectType,
    pub(crate) message: String,
}

impl ContactSubmission {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn project(&self) -> ProjectType {
        self.project
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Back to raw input, e.g. to re-validate on the server side
    pub fn to_input(&self) -> ContactInput {
        ContactInput::new(
            self.name.clone(),
            self.email.clone(),
            self.project.as_str(),
            self.message.clone(),
        )
    }
}
