use bp::Session;
use bp_engine::Engine;

use crate::error::Result;
use crate::output::{Artifact, CommandInputs, OutputFormat, ResultBuilder, print_result};

pub async fn execute<E: Engine>(
    session: &mut Session<E>,
    url: &str,
    label: &str,
    format: OutputFormat,
) -> Result<()> {
    session.goto(url).await?;
    let path = session.screenshot(label).await?;

    let result = ResultBuilder::new("screenshot")
        .inputs(CommandInputs {
            url: Some(url.to_string()),
            ..Default::default()
        })
        .data(serde_json::json!({ "path": path }))
        .artifact(Artifact::screenshot(path.clone()))
        .build();
    print_result(&result, format);
    Ok(())
}
