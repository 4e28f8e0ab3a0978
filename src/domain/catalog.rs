//! Mission catalog: the validated, ordered list of missions for one session

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::mission::{AnswerKey, Badge, Mission, MissionId};

/// Errors raised while building or loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("mission catalog is empty")]
    Empty,

    #[error("duplicate mission id: {0}")]
    DuplicateId(MissionId),

    #[error("mission {0} has no accepted answers")]
    NoAcceptedAnswers(MissionId),

    #[error("failed to read mission pack {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse mission pack {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// An ordered, immutable set of missions
///
/// Deserialization routes through [`Catalog::from_missions`], so a catalog
/// that skips validation cannot be constructed from JSON either.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Mission>", into = "Vec<Mission>")]
pub struct Catalog {
    missions: Vec<Mission>,
}

impl TryFrom<Vec<Mission>> for Catalog {
    type Error = CatalogError;

    fn try_from(missions: Vec<Mission>) -> Result<Self, Self::Error> {
        Self::from_missions(missions)
    }
}

impl From<Catalog> for Vec<Mission> {
    fn from(catalog: Catalog) -> Self {
        catalog.missions
    }
}

impl Catalog {
    /// Build a catalog, rejecting datasets a session could not play through
    pub fn from_missions(missions: Vec<Mission>) -> Result<Self, CatalogError> {
        if missions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for mission in &missions {
            if !seen.insert(mission.id) {
                return Err(CatalogError::DuplicateId(mission.id));
            }
            if mission.answer.is_empty() {
                return Err(CatalogError::NoAcceptedAnswers(mission.id));
            }
        }

        Ok(Self { missions })
    }

    /// Load a mission pack from a JSON file (an array of mission objects)
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let missions: Vec<Mission> =
            serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let catalog = Self::from_missions(missions)?;
        tracing::debug!(
            pack = %path.display(),
            missions = catalog.len(),
            "loaded mission pack"
        );
        Ok(catalog)
    }

    /// The built-in mission set
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    pub fn get(&self, index: usize) -> Option<&Mission> {
        self.missions.get(index)
    }

    pub fn len(&self) -> usize {
        self.missions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }
}

/// The canonical built-in dataset: four broken-HTML repair missions
static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    let missions = vec![
        Mission {
            id: MissionId(1),
            title: "Misión 1: El título principal".to_string(),
            description: "El título más importante de una página se define con la etiqueta h1. \
                          ¡Restaura el título principal!"
                .to_string(),
            broken_code: "... El Planeta Digital ...".to_string(),
            answer: AnswerKey::Single("<h1>El Planeta Digital</h1>".to_string()),
            badge: Badge::new("🏆 Maestro de Títulos"),
        },
        Mission {
            id: MissionId(2),
            title: "Misión 2: El párrafo informativo".to_string(),
            description: "Los párrafos de texto se encierran en etiquetas p. Arregla este \
                          párrafo para que se muestre correctamente."
                .to_string(),
            broken_code: "... HTML es el esqueleto de la web ...".to_string(),
            answer: AnswerKey::Single("<p>HTML es el esqueleto de la web</p>".to_string()),
            badge: Badge::new("✍️ Arquitecto Textual"),
        },
        Mission {
            id: MissionId(3),
            title: "Misión 3: La imagen perdida".to_string(),
            description: "Para mostrar una imagen, se usa la etiqueta img con el atributo src. \
                          ¡Inserta la imagen del cohete!"
                .to_string(),
            broken_code: "... imagen.png ...".to_string(),
            answer: AnswerKey::AnyOf(vec![
                "<img src=\"imagen.png\">".to_string(),
                "<img src=\"imagen.png\"/>".to_string(),
                "<img src='imagen.png'>".to_string(),
                "<img src=\"imagen.png\" alt=\"cohete\">".to_string(),
                "<img alt=\"imagen\" src=\"imagen.png\">".to_string(),
            ]),
            badge: Badge::new("🖼️ Curador Visual"),
        },
        Mission {
            id: MissionId(4),
            title: "Misión 4: El enlace roto".to_string(),
            description: "Los enlaces o hipervínculos se crean con la etiqueta a y el atributo \
                          href. Repara el enlace a la base de datos."
                .to_string(),
            broken_code: "... Ir a la Base de Datos ...".to_string(),
            answer: AnswerKey::Single("<a href=\"#\">Ir a la Base de Datos</a>".to_string()),
            badge: Badge::new("🔗 Conector de Mundos"),
        },
    ];

    Catalog::from_missions(missions).expect("builtin catalog is valid")
});
