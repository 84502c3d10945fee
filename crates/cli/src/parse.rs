//! Turn command lines and stdin lines into invocations.

use clap::ArgMatches;

/// One transaction call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub function: String,
    pub args: Vec<String>,
}

/// Invocation named on the command line, if any.
pub fn matches_to_invocation(matches: &ArgMatches) -> Option<Invocation> {
    let function = matches.get_one::<String>("function")?.clone();
    let args = matches
        .get_many::<String>("args")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    Some(Invocation { function, args })
}

/// Parse one stdin line.
///
/// Blank lines and `#` comments yield `Ok(None)`. Arguments follow shell
/// quoting rules, so `"Model 3"` is one argument.
pub fn parse_line(line: &str) -> Result<Option<Invocation>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = shlex::split(trimmed)
        .ok_or_else(|| format!("Invalid quoting: {}", trimmed))?
        .into_iter();
    match tokens.next() {
        Some(function) => Ok(Some(Invocation {
            function,
            args: tokens.collect(),
        })),
        None => Ok(None),
    }
}
