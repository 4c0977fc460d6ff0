use async_graphql::Enum;
use serde::{Deserialize, Serialize};

/// The screen the exam is currently on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Enum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExamStep {
    #[default]
    Lobby,
    Generating,
    Exam,
    Results,
}

impl std::fmt::Display for ExamStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExamStep::Lobby => write!(f, "lobby"),
            ExamStep::Generating => write!(f, "generating"),
            ExamStep::Exam => write!(f, "exam"),
            ExamStep::Results => write!(f, "results"),
        }
    }
}

/// A user action the exam can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamAction {
    Start,
    Select,
    Next,
    Previous,
    Finish,
    Retry,
    Home,
}

impl std::fmt::Display for ExamAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExamAction::Start => write!(f, "start"),
            ExamAction::Select => write!(f, "select"),
            ExamAction::Next => write!(f, "next"),
            ExamAction::Previous => write!(f, "previous"),
            ExamAction::Finish => write!(f, "finish"),
            ExamAction::Retry => write!(f, "retry"),
            ExamAction::Home => write!(f, "home"),
        }
    }
}
