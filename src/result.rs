use core::fmt;
use std::fmt::Formatter;

/// Result type used by the top level runners. `Ok` holds the process
/// exit code: 0 when everything evaluated, 1 when some expression
/// failed (the failure has already been reported).
pub type CalcResult = Result<u8, CalcErr>;

#[derive(Debug)]
pub struct CalcErr {
    pub kind: CalcErrKind,
}

impl CalcErr {
    pub fn new(kind: CalcErrKind) -> Self {
        Self { kind }
    }

    /// Exit code to use when this error ends the process.
    pub fn exit_code(&self) -> u8 {
        match self.kind {
            CalcErrKind::CouldNotReadSourceFile(_) | CalcErrKind::ReplErr(_) => 2,
        }
    }
}

// Evaluation errors aren't here. They're reported where they happen so
// the REPL can carry on and a file of expressions can be finished.
#[derive(Debug)]
pub enum CalcErrKind {
    CouldNotReadSourceFile(String),
    ReplErr(String),
}

impl fmt::Display for CalcErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl fmt::Display for CalcErrKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use CalcErrKind::*;
        let msg = match self {
            CouldNotReadSourceFile(msg) => format!("Could not read source file: {msg}"),
            ReplErr(msg) => format!("REPL error: {msg}"),
        };
        write!(f, "{msg}")
    }
}
