use bp::Session;
use bp_engine::Engine;

use crate::error::Result;
use crate::output::{CommandInputs, OutputFormat, ResultBuilder, print_result};

pub async fn execute<E: Engine>(
    session: &mut Session<E>,
    url: &str,
    format: OutputFormat,
) -> Result<()> {
    session.goto(url).await?;
    let current = session.url().await?;
    let title = session.title().await?;

    let result = ResultBuilder::new("navigate")
        .inputs(CommandInputs {
            url: Some(url.to_string()),
            ..Default::default()
        })
        .data(serde_json::json!({ "url": current, "title": title }))
        .build();
    print_result(&result, format);
    Ok(())
}
