use bp::Session;
use bp_engine::Engine;

use crate::error::Result;
use crate::output::{CommandInputs, OutputFormat, ResultBuilder, print_result};

pub async fn execute<E: Engine>(
    session: &mut Session<E>,
    url: &str,
    expression: &str,
    format: OutputFormat,
) -> Result<()> {
    session.goto(url).await?;
    let value = session.evaluate(expression).await?;

    let result = ResultBuilder::new("eval")
        .inputs(CommandInputs {
            url: Some(url.to_string()),
            expression: Some(expression.to_string()),
            ..Default::default()
        })
        .data(value)
        .build();
    print_result(&result, format);
    Ok(())
}
