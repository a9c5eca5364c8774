use axum::{
    extract::{rejection::FormRejection, State},
    Form, Json,
};

use crate::http::server::AppState;
use crate::slash::command::{FieldValue, SlashCommand};
use crate::slash::payload::SlashResponse;
use crate::slash::SlashError;

/// `POST /slash`
///
/// A body that is not form-encoded is treated as carrying no fields.
pub async fn slash_command(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Json<SlashResponse>, SlashError> {
    let command = match form {
        Ok(Form(pairs)) => SlashCommand::from_pairs(pairs),
        Err(FormRejection::InvalidFormContentType(rejection)) => {
            tracing::debug!(error = %rejection, "Slash command body is not form-encoded");
            SlashCommand::default()
        }
        Err(rejection) => return Err(SlashError::Form(rejection)),
    };

    tracing::info!("Token {}", FieldValue(&command.token));
    tracing::info!("Command {}", FieldValue(&command.command));
    tracing::info!("text {}", FieldValue(&command.text));

    state.verifier.verify(command.token.as_deref())?;

    if let Some(url) = &command.response_url {
        tracing::debug!(response_url = %url, "Delayed responses are not supported, replying inline only");
    }

    Ok(Json(SlashResponse::fleshed_out(state.slash.in_channel)))
}
