use std::io::{self, Write};
use std::process::ExitCode;

use thriftgen::{
    args::{Arguments, Invocation},
    backend::{Backend, all_backends, check_targets},
    error::{USAGE_EXIT_CODE, UsageError},
    help::{render_help, version_line},
    logging::init_logging,
};

fn main() -> anyhow::Result<ExitCode> {
    let backends = all_backends();

    let arguments = match Arguments::parse_from(std::env::args_os()) {
        Ok(Invocation::Run(arguments)) => arguments,
        Ok(Invocation::Version) => {
            writeln!(io::stdout(), "{}", version_line())?;
            return Ok(ExitCode::SUCCESS);
        }
        Ok(Invocation::Help) => {
            write!(io::stderr(), "{}", render_help(&backends))?;
            return Ok(ExitCode::from(USAGE_EXIT_CODE));
        }
        Err(err) => return usage_failure(&err, &backends),
    };

    init_logging(&arguments.make_log_func());

    match report(&arguments, &backends) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => usage_failure(&err, &backends),
    }
}

fn usage_failure(err: &UsageError, backends: &[Box<dyn Backend>]) -> anyhow::Result<ExitCode> {
    let mut stderr = io::stderr();
    writeln!(stderr, "{}", err.to_string().trim_end())?;
    if err.shows_usage() {
        write!(stderr, "{}", render_help(backends))?;
    }
    Ok(ExitCode::from(USAGE_EXIT_CODE))
}

/// Resolves targets and plugins and reports what would be generated.
fn report(arguments: &Arguments, backends: &[Box<dyn Backend>]) -> Result<(), UsageError> {
    let logs = arguments.make_log_func();
    let targets = arguments.targets()?;
    let plugins = arguments.used_plugins()?;

    logs.info(format!("IDL: {}", arguments.idl()));
    logs.info(format!("Include paths: {}", arguments.includes()));
    logs.info(format!("Recursive: {}", arguments.recursive()));

    for target in &targets {
        logs.info(format!(
            "Target {} -> {}",
            target.language,
            arguments.output(&target.language).display()
        ));
    }

    for plugin in &plugins {
        match &plugin.path {
            Some(path) => logs.info(format!("Plugin {} ({})", plugin.name, path)),
            None => logs.info(format!("Plugin {}", plugin.name)),
        }
    }

    if targets.is_empty() {
        logs.warn("No target language specified (use -g), nothing will be generated");
    }
    logs.multi_warn(check_targets(backends, &targets));

    Ok(())
}
