// Application state management
// Contains the activity registry and its signup/unregister mutations

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Name of an activity, the unique registry key (case-sensitive)
pub type ActivityName = String;

/// Domain-level failures for registry mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No activity exists under the given name
    #[error("unknown activity: {0}")]
    UnknownActivity(String),

    /// The email is already on the activity's participant list
    #[error("{email} is already signed up for {activity}")]
    DuplicateSignup {
        /// Activity the signup was attempted on
        activity: String,
        /// Email that was already registered
        email: String,
    },

    /// The email is not on the activity's participant list
    #[error("{email} is not registered for {activity}")]
    NotRegistered {
        /// Activity the unregister was attempted on
        activity: String,
        /// Email that was not found
        email: String,
    },
}

/// A single extracurricular activity offering
///
/// The activity name is not stored here; it is the key under which the
/// record lives in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Human-readable description of the activity
    pub description: String,
    /// Meeting schedule, free-form text
    pub schedule: String,
    /// Maximum number of participants. Informational: reported to clients
    /// but not enforced on signup.
    pub max_participants: u32,
    /// Participant emails, in signup order
    pub participants: Vec<String>,
}

impl Activity {
    /// Create a new activity with an empty participant list
    pub fn new(description: &str, schedule: &str, max_participants: u32) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Create a new activity with a pre-filled participant list
    pub fn with_participants(
        description: &str,
        schedule: &str,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Check whether an email is on the participant list
    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Validate the activity record
    /// Returns Ok(()) if valid, Err with message if invalid
    pub fn validate(&self) -> Result<(), String> {
        if self.max_participants == 0 {
            return Err("max_participants must be positive".to_string());
        }
        for (i, email) in self.participants.iter().enumerate() {
            if self.participants[..i].iter().any(|p| p == email) {
                return Err(format!("duplicate participant: {}", email));
            }
        }
        Ok(())
    }
}

/// Main application state
///
/// Owns the activity registry. Handlers share it behind `Arc<RwLock<..>>`,
/// and every check-then-mutate sequence runs under a single write-lock
/// acquisition so concurrent signups cannot violate participant uniqueness.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Registry of all activities (name -> Activity)
    pub activities: HashMap<ActivityName, Activity>,
}

impl AppState {
    /// Create a new application state with an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an activity by name
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    /// Get the number of activities in the registry
    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }

    /// Add an email to an activity's participant list
    ///
    /// Fails if the activity does not exist or the email is already
    /// registered. On success the email is appended, preserving signup order.
    pub fn signup(&mut self, name: &str, email: &str) -> Result<(), RegistryError> {
        let activity = self
            .activities
            .get_mut(name)
            .ok_or_else(|| RegistryError::UnknownActivity(name.to_string()))?;

        if activity.is_registered(email) {
            return Err(RegistryError::DuplicateSignup {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Remove an email from an activity's participant list
    ///
    /// Fails if the activity does not exist or the email is not registered.
    pub fn unregister(&mut self, name: &str, email: &str) -> Result<(), RegistryError> {
        let activity = self
            .activities
            .get_mut(name)
            .ok_or_else(|| RegistryError::UnknownActivity(name.to_string()))?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RegistryError::NotRegistered {
                activity: name.to_string(),
                email: email.to_string(),
            })?;

        activity.participants.remove(position);
        Ok(())
    }

    /// Load the activity catalog from a file
    /// Replaces all current activities with those loaded from the file
    /// Returns the number of activities loaded, or an error if loading failed
    pub fn load_catalog<P: AsRef<std::path::Path>>(
        &mut self,
        path: P,
    ) -> Result<usize, super::seed::CatalogError> {
        let loaded = super::seed::ActivityCatalog::load_from_file(path)?;
        let count = loaded.len();
        self.activities = loaded;
        Ok(count)
    }
}
