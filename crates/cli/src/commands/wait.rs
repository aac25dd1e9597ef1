use std::time::Duration;

use bp::Session;
use bp_engine::Engine;

use crate::error::Result;
use crate::output::{CommandInputs, OutputFormat, ResultBuilder, print_result};

pub async fn execute<E: Engine>(
    session: &mut Session<E>,
    url: &str,
    selector: &str,
    timeout_ms: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    session.goto(url).await?;
    session
        .wait_for(selector, timeout_ms.map(Duration::from_millis))
        .await?;

    let result = ResultBuilder::new("wait")
        .inputs(CommandInputs {
            url: Some(url.to_string()),
            selector: Some(selector.to_string()),
            ..Default::default()
        })
        .data(serde_json::json!({ "selector": selector, "found": true }))
        .build();
    print_result(&result, format);
    Ok(())
}
