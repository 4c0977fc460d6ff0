pub mod answer_tracker;
pub mod exam_service;
pub mod exam_session;
pub mod gemini_question_source;
pub mod openai_question_source;
pub mod question_source;
