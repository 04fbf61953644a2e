use std::io::{self, BufRead, IsTerminal, Write};

use resorts_core::{
    ClientConfig, ConfirmDelete, HttpResortStore, Resort, ResortId, ResortListController,
};

use crate::error::CliError;

pub type Controller = ResortListController<HttpResortStore>;

const SHORT_ID_LEN: usize = 13;

/// Build the controller and run the initial load; a failed load is fatal here.
pub async fn open_controller(api_url: Option<String>) -> Result<Controller, CliError> {
    let config = ClientConfig::resolve(api_url)?;
    let store = HttpResortStore::from_config(&config)?;
    tracing::debug!(api = %store.base_url(), "Using resort API");
    let controller = ResortListController::new(store);
    ensure_success(&controller, controller.load().await, "load resorts").await?;
    Ok(controller)
}

/// Turn a `false` from the controller into an error carrying its last failure.
pub async fn ensure_success(
    controller: &Controller,
    succeeded: bool,
    action: &'static str,
) -> Result<(), CliError> {
    if succeeded {
        return Ok(());
    }
    let reason = controller
        .last_error()
        .await
        .unwrap_or_else(|| "unknown error".to_string());
    Err(CliError::RequestFailed { action, reason })
}

pub fn normalize_resort_identifier(id: &str) -> Result<String, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyResortId)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Find a resort by full ID or a unique ID prefix.
pub fn resolve_resort(records: &[Resort], query: &str) -> Result<Resort, CliError> {
    if let Some(resort) = records.iter().find(|resort| resort.id.as_str() == query) {
        return Ok(resort.clone());
    }

    let matching: Vec<&Resort> = records
        .iter()
        .filter(|resort| resort.id.as_str().starts_with(query))
        .collect();

    match matching.as_slice() {
        [] => Err(CliError::ResortNotFound(query.to_string())),
        [resort] => Ok((*resort).clone()),
        _ => {
            let options = matching
                .iter()
                .take(3)
                .map(|resort| short_id(&resort.id))
                .collect::<Vec<_>>()
                .join(", ");

            Err(CliError::AmbiguousResortId(format!(
                "ID prefix '{query}' is ambiguous; matches: {options}"
            )))
        }
    }
}

pub fn short_id(id: &ResortId) -> String {
    id.as_str().chars().take(SHORT_ID_LEN).collect()
}

pub fn format_resort_lines(resorts: &[Resort]) -> Vec<String> {
    if resorts.is_empty() {
        return vec!["No ski resorts found. Add your first resort with `resorts add`.".to_string()];
    }

    let mut lines = vec![format!("Ski Resorts ({})", resorts.len())];
    lines.extend(resorts.iter().map(|resort| {
        format!(
            "{}  {} | {} | {} slopes | {}",
            short_id(&resort.id),
            resort.name,
            resort.location,
            resort.slopes,
            resort.difficulty
        )
    }));
    lines
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Interactive y/N prompt on stderr; declines when stdin is not a terminal.
pub struct PromptConfirm {
    pub label: String,
}

impl ConfirmDelete for PromptConfirm {
    fn confirm_delete(&self, id: &ResortId) -> bool {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            tracing::warn!("Refusing to delete without a terminal; pass --yes to skip the prompt");
            return false;
        }

        let mut stderr = io::stderr();
        if write!(
            stderr,
            "Are you sure you want to delete {} ({})? [y/N] ",
            self.label,
            short_id(id)
        )
        .and_then(|()| stderr.flush())
        .is_err()
        {
            return false;
        }

        let mut answer = String::new();
        match stdin.lock().read_line(&mut answer) {
            Ok(_) => is_affirmative(&answer),
            Err(error) => {
                tracing::warn!(%error, "Failed to read confirmation");
                false
            }
        }
    }
}
