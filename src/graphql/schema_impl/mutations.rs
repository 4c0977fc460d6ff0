use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::{
    app_state::AppState,
    graphql::helpers::to_index,
    models::dto::exam_view::ExamView,
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn start_exam(&self, ctx: &Context<'_>) -> Result<ExamView> {
        let state = ctx.data::<AppState>()?;
        state.exam_service.start_exam().await.map_err(|e| e.extend())
    }

    async fn retry_exam(&self, ctx: &Context<'_>) -> Result<ExamView> {
        let state = ctx.data::<AppState>()?;
        state.exam_service.retry_exam().await.map_err(|e| e.extend())
    }

    async fn select_answer(
        &self,
        ctx: &Context<'_>,
        option: i32,
        question_index: Option<i32>,
    ) -> Result<ExamView> {
        let state = ctx.data::<AppState>()?;
        let option = to_index(option, "option").map_err(|e| e.extend())?;
        let question_index = question_index
            .map(|i| to_index(i, "questionIndex"))
            .transpose()
            .map_err(|e| e.extend())?;

        state
            .exam_service
            .select_answer(question_index, option)
            .await
            .map_err(|e| e.extend())
    }

    async fn next_question(&self, ctx: &Context<'_>) -> Result<ExamView> {
        let state = ctx.data::<AppState>()?;
        state.exam_service.next_question().await.map_err(|e| e.extend())
    }

    async fn previous_question(&self, ctx: &Context<'_>) -> Result<ExamView> {
        let state = ctx.data::<AppState>()?;
        state.exam_service.previous_question().await.map_err(|e| e.extend())
    }

    async fn finish_exam(&self, ctx: &Context<'_>) -> Result<ExamView> {
        let state = ctx.data::<AppState>()?;
        state.exam_service.finish_exam().await.map_err(|e| e.extend())
    }

    async fn go_home(&self, ctx: &Context<'_>) -> Result<ExamView> {
        let state = ctx.data::<AppState>()?;
        state.exam_service.go_home().await.map_err(|e| e.extend())
    }
}
