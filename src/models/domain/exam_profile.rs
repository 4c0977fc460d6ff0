use serde::{Deserialize, Serialize};

use crate::constants::exam_prompt::{
    render_prompt, CONNECTION_FAILED_MESSAGE, EC0201_PROMPT, EC0217_PROMPT,
    GENERATION_FAILED_MESSAGE,
};
use crate::models::domain::question::IdBase;

/// The certification standard an attempt is generated for.
///
/// Each profile carries its own id base, pass rule and failure wording.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamProfile {
    #[default]
    Ec0217,
    Ec0201,
}

impl ExamProfile {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ec0217" | "ec0217.01" => Some(ExamProfile::Ec0217),
            "ec0201" | "ec0201.01" => Some(ExamProfile::Ec0201),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ExamProfile::Ec0217 => "EC0217.01",
            ExamProfile::Ec0201 => "EC0201.01",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ExamProfile::Ec0217 => "Impartición de cursos de formación del capital humano",
            ExamProfile::Ec0201 => "Diseño de cursos de formación del capital humano",
        }
    }

    pub fn prompt(&self, question_count: usize) -> String {
        let template = match self {
            ExamProfile::Ec0217 => EC0217_PROMPT,
            ExamProfile::Ec0201 => EC0201_PROMPT,
        };
        render_prompt(template, question_count)
    }

    pub fn id_base(&self) -> IdBase {
        match self {
            ExamProfile::Ec0217 => IdBase::One,
            ExamProfile::Ec0201 => IdBase::Zero,
        }
    }

    /// Minimum percentage to pass, if this standard defines one.
    pub fn pass_threshold(&self) -> Option<u32> {
        match self {
            ExamProfile::Ec0217 => None,
            ExamProfile::Ec0201 => Some(80),
        }
    }

    /// Lobby message after a failed generation.
    pub fn generation_failed_message(&self) -> &'static str {
        match self {
            ExamProfile::Ec0217 => GENERATION_FAILED_MESSAGE,
            ExamProfile::Ec0201 => CONNECTION_FAILED_MESSAGE,
        }
    }
}

impl std::fmt::Display for ExamProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
