use ariadne::Source;
use poly_compute::commands::Error as CommandError;
use poly_parser::parser::error::Error as ParseError;

/// Utility enum to package the errors that can occur while processing one line of input.
#[derive(Debug)]
pub enum Error {
    /// The expression text failed to parse.
    Parse(ParseError),

    /// The differentiation variable was rejected.
    InvalidVariable(String),

    /// The line looked like a command, but its arguments were malformed.
    Usage(&'static str),
}

impl Error {
    /// Report the error to stderr.
    ///
    /// The `ariadne` crate's report type does not implement `Display`, so parse errors can only
    /// be rendered with its `eprint` method.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::Parse(err) => {
                let report = err.build_report("input");
                report.eprint(("input", Source::from(input))).unwrap();
            },
            Self::InvalidVariable(name) => {
                eprintln!("`{name}` is not a valid variable name (letters only)");
            },
            Self::Usage(usage) => eprintln!("{usage}"),
        }
    }
}

impl From<CommandError> for Error {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Parse(err) => Self::Parse(err),
            CommandError::InvalidVariable(name) => Self::InvalidVariable(name),
        }
    }
}
