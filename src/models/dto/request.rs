use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SelectAnswerRequest {
    /// Defaults to the question currently shown.
    #[serde(default)]
    pub question_index: Option<usize>,

    #[validate(range(max = 3))]
    pub option: usize,
}
