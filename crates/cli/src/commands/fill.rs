use bp::Session;
use bp_engine::Engine;

use crate::error::Result;
use crate::output::{CommandInputs, OutputFormat, ResultBuilder, print_result};

pub async fn execute<E: Engine>(
    session: &mut Session<E>,
    url: &str,
    selector: &str,
    value: &str,
    format: OutputFormat,
) -> Result<()> {
    session.goto(url).await?;
    session.fill(selector, value).await?;

    let result = ResultBuilder::new("fill")
        .inputs(CommandInputs {
            url: Some(url.to_string()),
            selector: Some(selector.to_string()),
            ..Default::default()
        })
        .data(serde_json::json!({ "selector": selector, "chars": value.len() }))
        .build();
    print_result(&result, format);
    Ok(())
}
