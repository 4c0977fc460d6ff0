pub mod exam_prompt;
