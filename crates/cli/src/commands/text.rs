use bp::Session;
use bp_engine::Engine;

use crate::error::Result;
use crate::output::{CommandInputs, OutputFormat, ResultBuilder, print_result};

pub async fn execute<E: Engine>(
    session: &mut Session<E>,
    url: &str,
    selector: &str,
    format: OutputFormat,
) -> Result<()> {
    session.goto(url).await?;
    let text = session.text(selector).await?;

    let result = ResultBuilder::new("text")
        .inputs(CommandInputs {
            url: Some(url.to_string()),
            selector: Some(selector.to_string()),
            ..Default::default()
        })
        .data(serde_json::json!({ "text": text }))
        .build();
    print_result(&result, format);
    Ok(())
}
