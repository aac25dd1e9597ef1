use bp::Session;
use bp_engine::Engine;

use crate::error::Result;
use crate::output::{CommandInputs, OutputFormat, ResultBuilder, print_result};

/// Runs a search on the page and reports where it landed.
pub async fn execute<E: Engine>(
    session: &mut Session<E>,
    url: &str,
    query: &str,
    selector: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    session.goto(url).await?;
    session.search(query, selector).await?;
    let after = session.url().await?;
    let title = session.title().await?;

    let result = ResultBuilder::new("search")
        .inputs(CommandInputs {
            url: Some(url.to_string()),
            selector: selector.map(str::to_string),
            query: Some(query.to_string()),
            ..Default::default()
        })
        .data(serde_json::json!({ "url": after, "title": title }))
        .build();
    print_result(&result, format);
    Ok(())
}
