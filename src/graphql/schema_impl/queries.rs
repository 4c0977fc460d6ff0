use async_graphql::{Context, Object, Result};

use crate::{app_state::AppState, models::dto::exam_view::ExamView};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The current screen of the exam and the data it shows.
    async fn exam(&self, ctx: &Context<'_>) -> Result<ExamView> {
        let state = ctx.data::<AppState>()?;
        Ok(state.exam_service.view().await)
    }
}
