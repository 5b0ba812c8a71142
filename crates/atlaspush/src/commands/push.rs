//! Push command - validate config and hand off to the uploader

use crate::context::Context;
use crate::output::{print_json, print_lines};
use anyhow::Result;
use atlaspush_core::ConfigOverrides;
use atlaspush_uploader::Push;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct DryRunOutput<'a> {
    source: String,
    program: &'a str,
    argv: Vec<String>,
}

/// Execute `atlaspush push`
///
/// On success the process is replaced by the uploader and this never
/// returns. It only returns for invalid config, a missing uploader, a
/// launch failure, or `--dry-run`.
pub fn run(
    root: Option<PathBuf>,
    overrides: ConfigOverrides,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let ctx = Context::new(root, overrides)?;
    ctx.config.validate()?;

    let push = Push::new(&ctx.env, &ctx.config);

    if dry_run {
        let info = push.resolve().into_result()?;
        let invocation = push.invocation(&info.path);
        let argv = invocation.redacted_argv();

        if json {
            let output = DryRunOutput {
                source: info.source.to_string(),
                program: &invocation.program,
                argv,
            };
            print_json(&serde_json::to_string_pretty(&output)?)?;
        } else {
            print_lines(&argv)?;
        }
        return Ok(());
    }

    match push.push() {
        Ok(never) => match never {},
        Err(e) => Err(e.into()),
    }
}
