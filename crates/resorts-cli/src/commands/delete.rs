use resorts_core::ResortId;

use crate::commands::common::{
    ensure_success, normalize_resort_identifier, open_controller, resolve_resort, PromptConfirm,
};
use crate::error::CliError;

pub async fn run_delete(
    id: &str,
    skip_prompt: bool,
    api_url: Option<String>,
) -> Result<(), CliError> {
    let normalized_id = normalize_resort_identifier(id)?;
    let controller = open_controller(api_url).await?;
    let resort = resolve_resort(&controller.records().await, &normalized_id)?;

    let deleted = if skip_prompt {
        controller
            .delete_record(&resort.id, &|_: &ResortId| true)
            .await
    } else {
        let prompt = PromptConfirm {
            label: format!("'{}'", resort.name),
        };
        controller.delete_record(&resort.id, &prompt).await
    };

    // A declined prompt leaves no recorded failure.
    if !deleted && controller.last_error().await.is_none() {
        println!("Cancelled");
        return Ok(());
    }
    ensure_success(&controller, deleted, "delete resort").await?;

    println!("{}", resort.id);
    Ok(())
}
