use clap::Args;
use is_terminal::IsTerminal;

use crate::output::OutputFormat;

/// Shared clap argument for commands that accept an output format.
#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct FormatArg {
    /// Output format (`--format` / `-f`)
    #[arg(short = 'f', long = "format", value_enum, env = "APISITES_OUTPUT_FORMAT")]
    pub format: Option<OutputFormat>,
}

impl FormatArg {
    /// Returns the effective output format. If output is piped and no format is
    /// specified, defaults to JSON for machine readability.
    #[must_use]
    pub fn resolve(&self) -> OutputFormat {
        if let Some(format) = self.format {
            return format;
        }

        if std::io::stdout().is_terminal() {
            OutputFormat::Text
        } else {
            OutputFormat::Json
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_format_wins() {
        let arg = FormatArg {
            format: Some(OutputFormat::Jsonl),
        };
        assert_eq!(arg.resolve(), OutputFormat::Jsonl);
    }
}
