use atlaspush_core::{AtlasPushError, Config, ProcessReplacer, Result};
use serde::Serialize;
use std::convert::Infallible;
use std::path::Path;

/// Command line handed to the uploader
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    pub program: String,
    /// Arguments after the program itself
    pub args: Vec<String>,
    /// Position in `args` of the token value
    #[serde(skip)]
    token_index: Option<usize>,
}

impl Invocation {
    /// Build the uploader command line.
    ///
    /// Order is fixed: `-vcs`, `-include` pairs, `-exclude` pairs,
    /// `-address`, `-token`, then the app and the root directory as the two
    /// trailing positionals. The uploader's parser depends on that order.
    ///
    /// The root is passed as UTF-8. A root that is not valid UTF-8 is
    /// converted lossily, so invalid bytes reach the uploader as U+FFFD.
    pub fn new(program: &str, config: &Config, root: &Path) -> Self {
        let mut args = Vec::new();

        if config.vcs {
            args.push("-vcs".to_string());
        }

        for include in &config.includes {
            args.push("-include".to_string());
            args.push(include.clone());
        }

        for exclude in &config.excludes {
            args.push("-exclude".to_string());
            args.push(exclude.clone());
        }

        if let Some(address) = config.address.as_deref().filter(|a| !a.is_empty()) {
            args.push("-address".to_string());
            args.push(address.to_string());
        }

        let mut token_index = None;
        if let Some(token) = config.token.as_deref().filter(|t| !t.is_empty()) {
            args.push("-token".to_string());
            token_index = Some(args.len());
            args.push(token.to_string());
        }

        args.push(config.app.clone());
        args.push(root.to_string_lossy().into_owned());

        Self {
            program: program.to_string(),
            args,
            token_index,
        }
    }

    /// Full argument vector, program first
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }

    /// Same as [`Invocation::argv`] with the token value masked, for display
    pub fn redacted_argv(&self) -> Vec<String> {
        let mut argv = self.argv();
        if let Some(index) = self.token_index {
            // argv[0] is the program
            argv[index + 1] = "<redacted>".to_string();
        }
        argv
    }
}

/// Replace the current process with the uploader.
///
/// Only returns on launch failure, which is passed through unchanged as
/// [`AtlasPushError::Launch`].
pub fn exec_uploader<R>(invocation: &Invocation, replacer: &R) -> Result<Infallible>
where
    R: ProcessReplacer + ?Sized,
{
    log::info!("handing off to uploader {}", invocation.program);
    log::debug!("uploader argv: {:?}", invocation.redacted_argv());

    replacer
        .replace(&invocation.program, &invocation.args)
        .map_err(AtlasPushError::Launch)
}
