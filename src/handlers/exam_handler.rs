use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState, errors::AppError, models::dto::request::SelectAnswerRequest,
};

#[get("/api/exam")]
async fn get_exam(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(state.exam_service.view().await))
}

#[post("/api/exam/start")]
async fn start_exam(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let view = state.exam_service.start_exam().await?;
    Ok(HttpResponse::Accepted().json(view))
}

#[post("/api/exam/retry")]
async fn retry_exam(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let view = state.exam_service.retry_exam().await?;
    Ok(HttpResponse::Accepted().json(view))
}

#[post("/api/exam/answers")]
async fn select_answer(
    state: web::Data<AppState>,
    request: web::Json<SelectAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;
    let view = state
        .exam_service
        .select_answer(request.question_index, request.option)
        .await?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/api/exam/next")]
async fn next_question(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(state.exam_service.next_question().await?))
}

#[post("/api/exam/previous")]
async fn previous_question(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(state.exam_service.previous_question().await?))
}

#[post("/api/exam/finish")]
async fn finish_exam(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(state.exam_service.finish_exam().await?))
}

#[post("/api/exam/home")]
async fn go_home(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(state.exam_service.go_home().await?))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_exam)
        .service(start_exam)
        .service(retry_exam)
        .service(select_answer)
        .service(next_question)
        .service(previous_question)
        .service(finish_exam)
        .service(go_home);
}
