pub mod exam_view;
pub mod request;
