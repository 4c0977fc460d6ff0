pub mod exam_profile;
pub mod exam_result;
pub mod exam_step;
pub mod question;
pub use exam_profile::ExamProfile;
pub use exam_result::{AnswerRecord, ExamResult};
pub use exam_step::{ExamAction, ExamStep};
pub use question::{assign_ids, IdBase, Question, RawQuestion};
