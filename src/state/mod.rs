// State management module
// Handles the activity registry and startup catalog seeding

pub mod app_state;
pub mod seed;

pub use app_state::{Activity, ActivityName, AppState, RegistryError};
pub use seed::{ActivityCatalog, CatalogError};
