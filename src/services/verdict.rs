use crate::services::review_api::{ApiError, Submission};

/// Fixed verdict sentence for a known review status code.
pub fn verdict_for(status: &str) -> Option<&'static str> {
    match status {
        "approved" => Some("Работа проверена: ревьюеру всё понравилось. Ура!"),
        "reviewing" => Some("Работа взята на проверку ревьюером."),
        "rejected" => Some("Работа проверена: у ревьюера есть замечания."),
        _ => None,
    }
}

/// Turn a submission into the chat message announcing its new status.
pub fn compose_message(submission: &Submission) -> Result<String, ApiError> {
    let verdict = verdict_for(&submission.status)
        .ok_or_else(|| ApiError::UnknownStatus(submission.status.clone()))?;

    tracing::info!(homework = %submission.homework_name, status = %submission.status, "verdict updated");
    Ok(format!(
        "Changed review status for \"{}\". {}",
        submission.homework_name, verdict
    ))
}
