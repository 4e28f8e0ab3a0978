//! User-facing feedback messages and their semantic tone

/// Semantic tone of a feedback message, so the presentation layer can pick
/// colors without parsing the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
}

/// A feedback message paired with its tone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub tone: Tone,
}

impl Feedback {
    pub fn success() -> Self {
        Self {
            message: "¡Código correcto! Sistema restaurado.".to_string(),
            tone: Tone::Success,
        }
    }

    pub fn failure() -> Self {
        Self {
            message: "Error en el código. Revisa la sintaxis e inténtalo de nuevo.".to_string(),
            tone: Tone::Failure,
        }
    }
}

/// Summary shown once every mission is solved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalSummary {
    pub headline: String,
    pub detail: String,
}

impl FinalSummary {
    pub fn new() -> Self {
        Self {
            headline: "¡Misión Cumplida, Agente!".to_string(),
            detail: "Has restaurado con éxito todos los sistemas. El código web es estable \
                     gracias a vos."
                .to_string(),
        }
    }
}

impl Default for FinalSummary {
    fn default() -> Self {
        Self::new()
    }
}
