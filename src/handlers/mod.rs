pub mod exam_handler;
pub mod page_handler;

pub use exam_handler::configure as configure_exam_routes;
pub use page_handler::{health_check, index};
