use resorts_core::{Difficulty, ResortDraft};

use crate::commands::common::{
    ensure_success, normalize_resort_identifier, open_controller, resolve_resort,
};
use crate::error::CliError;

/// Field overrides given on the command line; `None` keeps the current value.
#[derive(Debug, Default)]
pub struct EditOverrides {
    pub name: Option<String>,
    pub location: Option<String>,
    pub slopes: Option<String>,
    pub difficulty: Option<Difficulty>,
}

impl EditOverrides {
    pub fn apply(self, draft: &mut ResortDraft) {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(location) = self.location {
            draft.location = location;
        }
        if let Some(slopes) = self.slopes {
            draft.slopes = slopes;
        }
        if let Some(difficulty) = self.difficulty {
            draft.difficulty = difficulty;
        }
    }
}

pub async fn run_edit(
    id: &str,
    overrides: EditOverrides,
    api_url: Option<String>,
) -> Result<(), CliError> {
    let normalized_id = normalize_resort_identifier(id)?;
    let controller = open_controller(api_url).await?;
    let resort = resolve_resort(&controller.records().await, &normalized_id)?;

    controller.begin_edit(&resort).await;
    let before = controller.draft().await;
    controller.update_draft(|draft| overrides.apply(draft)).await;

    if controller.draft().await == before {
        controller.cancel_edit().await;
        println!("{}", resort.id);
        return Ok(());
    }

    let updated = controller.submit().await;
    ensure_success(&controller, updated, "update resort").await?;
    println!("{}", resort.id);
    Ok(())
}
