use bp::Session;
use bp_engine::Engine;

use crate::error::Result;
use crate::output::{CommandInputs, OutputFormat, ResultBuilder, print_result};

/// Clicks and reports the URL after the click, which may differ when the
/// click triggered a navigation.
pub async fn execute<E: Engine>(
    session: &mut Session<E>,
    url: &str,
    selector: &str,
    format: OutputFormat,
) -> Result<()> {
    session.goto(url).await?;
    session.click(selector).await?;
    let after = session.url().await?;

    let result = ResultBuilder::new("click")
        .inputs(CommandInputs {
            url: Some(url.to_string()),
            selector: Some(selector.to_string()),
            ..Default::default()
        })
        .data(serde_json::json!({ "url": after }))
        .build();
    print_result(&result, format);
    Ok(())
}
