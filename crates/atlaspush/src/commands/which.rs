//! Which command - report the uploader binary that a push would run

use crate::context::Context;
use crate::output::{print_json, print_lines};
use anyhow::Result;
use atlaspush_core::ConfigOverrides;
use atlaspush_uploader::{Push, ResolveResult};
use serde_json::json;
use std::path::PathBuf;

/// Execute `atlaspush which`
///
/// Fails with `UPLOADER_NOT_FOUND` when no uploader can be resolved.
pub fn run(root: Option<PathBuf>, uploader_path: Option<String>, json: bool) -> Result<()> {
    let overrides = ConfigOverrides {
        uploader_path,
        ..ConfigOverrides::default()
    };
    let ctx = Context::new(root, overrides)?;
    let result = Push::new(&ctx.env, &ctx.config).resolve();

    if json {
        let value = match &result {
            ResolveResult::Resolved(info) => json!({
                "found": true,
                "path": info.path,
                "source": info.source,
            }),
            ResolveResult::NotFound {
                binary,
                searched_locations,
            } => json!({
                "found": false,
                "binary": binary,
                "searched_locations": searched_locations,
            }),
        };
        print_json(&serde_json::to_string_pretty(&value)?)?;
    }

    let info = result.into_result()?;
    if !json {
        print_lines([format!("{} ({})", info.path, info.source)])?;
    }

    Ok(())
}
