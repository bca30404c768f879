//! JSON snapshot of plant documents.
//!
//! Stands in for the document store: a file holding an array of plant
//! records, read whole and written whole.

use std::path::Path;

use verdant_types::{PlantId, PlantRecord};

use crate::error::CliError;

/// Read every plant from a snapshot file.
pub fn load_plants(path: &Path) -> Result<Vec<PlantRecord>, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_plants(&contents).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a snapshot from a string.
pub fn parse_plants(contents: &str) -> Result<Vec<PlantRecord>, serde_json::Error> {
    serde_json::from_str(contents)
}

/// Render plants as pretty-printed JSON.
pub fn render_plants(plants: &[PlantRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(plants)
}

/// Overwrite a snapshot file with the given plants.
pub fn save_plants(path: &Path, plants: &[PlantRecord]) -> Result<(), CliError> {
    let rendered = render_plants(plants).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, rendered).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Find a plant by ID.
pub fn find_plant_mut(
    plants: &mut [PlantRecord],
    id: PlantId,
) -> Result<&mut PlantRecord, CliError> {
    plants
        .iter_mut()
        .find(|plant| plant.id == id)
        .ok_or(CliError::PlantNotFound(id))
}
