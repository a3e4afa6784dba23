// Activity catalog module
// Handles loading the startup activity dataset from a JSON file,
// with a built-in default catalog as fallback

use super::app_state::{Activity, ActivityName};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Error types for catalog loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// File I/O error
    IoError(String),
    /// JSON deserialization error
    JsonError(String),
    /// Invalid data format
    InvalidData(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::IoError(msg) => write!(f, "IO Error: {}", msg),
            CatalogError::JsonError(msg) => write!(f, "JSON Error: {}", msg),
            CatalogError::InvalidData(msg) => write!(f, "Invalid Data: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Serializable structure for the activity catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogData {
    /// Version of the catalog format (for future migration support)
    version: u32,
    /// Map of activity name to activity record
    activities: HashMap<ActivityName, Activity>,
}

/// Activity catalog loading operations
pub struct ActivityCatalog;

impl ActivityCatalog {
    /// Load the activity catalog from a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to the JSON catalog file
    ///
    /// # Returns
    /// * `Ok(HashMap<ActivityName, Activity>)` if successful
    /// * `Err(CatalogError)` if the file is unreadable, malformed, or invalid
    pub fn load_from_file<P: AsRef<Path>>(
        path: P,
    ) -> Result<HashMap<ActivityName, Activity>, CatalogError> {
        let json = fs::read_to_string(path.as_ref())
            .map_err(|e| CatalogError::IoError(e.to_string()))?;

        let data: CatalogData =
            serde_json::from_str(&json).map_err(|e| CatalogError::JsonError(e.to_string()))?;

        // Validate version (for future migration support)
        if data.version != 1 {
            return Err(CatalogError::InvalidData(format!(
                "Unsupported catalog version: {}",
                data.version
            )));
        }

        for (name, activity) in &data.activities {
            activity
                .validate()
                .map_err(|e| CatalogError::InvalidData(format!("{}: {}", name, e)))?;
        }

        Ok(data.activities)
    }

    /// Get the conventional path for the activity catalog file
    pub fn default_path() -> std::path::PathBuf {
        std::path::PathBuf::from("activities.json")
    }

    /// The built-in activity catalog
    ///
    /// Used when no catalog file is configured or present, so a fresh
    /// checkout serves the school's standard offerings out of the box.
    pub fn default_catalog() -> HashMap<ActivityName, Activity> {
        let mut activities = HashMap::new();
        activities.insert(
            "Chess Club".to_string(),
            Activity::with_participants(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        );
        activities.insert(
            "Programming Class".to_string(),
            Activity::with_participants(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        );
        activities.insert(
            "Gym Class".to_string(),
            Activity::with_participants(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        );
        activities.insert(
            "Soccer Team".to_string(),
            Activity::with_participants(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
                &["liam@mergington.edu", "noah@mergington.edu"],
            ),
        );
        activities.insert(
            "Basketball Team".to_string(),
            Activity::with_participants(
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
                &["ava@mergington.edu", "mia@mergington.edu"],
            ),
        );
        activities.insert(
            "Tennis Club".to_string(),
            Activity::with_participants(
                "Learn tennis fundamentals and play friendly matches",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                16,
                &["isabella@mergington.edu", "lucas@mergington.edu"],
            ),
        );
        activities.insert(
            "Art Studio".to_string(),
            Activity::with_participants(
                "Explore painting, drawing, and sculpture techniques",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
                &["amelia@mergington.edu", "harper@mergington.edu"],
            ),
        );
        activities.insert(
            "Drama Club".to_string(),
            Activity::with_participants(
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
                &["ella@mergington.edu", "scarlett@mergington.edu"],
            ),
        );
        activities.insert(
            "Debate Team".to_string(),
            Activity::with_participants(
                "Develop public speaking and argumentation skills",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["james@mergington.edu", "benjamin@mergington.edu"],
            ),
        );
        activities
    }
}
