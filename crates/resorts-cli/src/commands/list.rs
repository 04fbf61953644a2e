use crate::commands::common::{format_resort_lines, open_controller};
use crate::error::CliError;

pub async fn run_list(as_json: bool, api_url: Option<String>) -> Result<(), CliError> {
    let controller = open_controller(api_url).await?;
    let resorts = controller.records().await;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&resorts)?);
    } else {
        for line in format_resort_lines(&resorts) {
            println!("{line}");
        }
    }

    Ok(())
}
