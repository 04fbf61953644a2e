use resorts_core::{Difficulty, ResortDraft};

use crate::commands::common::{ensure_success, open_controller};
use crate::error::CliError;

pub async fn run_add(draft: ResortDraft, api_url: Option<String>) -> Result<(), CliError> {
    let controller = open_controller(api_url).await?;
    let name = draft.name.clone();
    controller.update_draft(|current| *current = draft).await;

    let created = controller.submit().await;
    ensure_success(&controller, created, "add resort").await?;

    println!(
        "Added '{name}' ({} resorts total)",
        controller.records().await.len()
    );
    Ok(())
}

pub fn build_draft(
    name: String,
    location: String,
    slopes: String,
    difficulty: Difficulty,
) -> ResortDraft {
    ResortDraft {
        name,
        location,
        slopes,
        difficulty,
    }
}
