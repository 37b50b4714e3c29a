pub mod conditions;
pub mod location;
pub mod record;
pub mod schema;
pub mod species;
pub mod summary;

pub use conditions::FieldConditions;
pub use location::{KnownLocation, KnownLocations};
pub use record::SurveyRecord;
pub use species::{SpeciesCatalog, SpeciesEntry};
pub use summary::{MapPoint, SpeciesTotal};
