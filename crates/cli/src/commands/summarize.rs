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
    let summary = session.summarize().await?;

    let result = ResultBuilder::new("summarize")
        .inputs(CommandInputs {
            url: Some(url.to_string()),
            ..Default::default()
        })
        .data(summary)
        .build();
    print_result(&result, format);
    Ok(())
}
