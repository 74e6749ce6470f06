//! Hard failures (abort the current table's decode) and soft diagnostics
//! (collected on the decoded table, never fatal).

use thiserror::Error;

/// Fatal parse faults. A decode call returns `Err` and produces no
/// `AceTable` at all.
#[derive(Debug, Error)]
pub enum AceError {
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("truncated XSS array: expected {expected} floats, got {got}")]
    TruncatedXss { expected: usize, got: usize },

    #[error("length mismatch in {what}: expected {expected}, got {got}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Soft faults. Collected into `AceTable::diagnostics`; the table that
/// produced them is still usable for everything that did parse.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A secondary distribution referenced a law id with no decoder at all.
    UnknownLaw(i64),
    /// A secondary distribution referenced law 2, 22, or 24: envelope
    /// decoded, payload intentionally not implemented.
    UnsupportedLaw(i64),
    /// `LNW != 0`: a chained law followed the first one in a DLW record.
    /// Only the first law in the chain is decoded.
    UnsupportedChainedLaw { mt: i64, next_law_offset: i64 },
    /// A reaction MT greater than 100 was encountered inside a DLW walk.
    UnsupportedMtAbove100(i64),
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::UnknownLaw(id) => write!(f, "unknown law id {id}"),
            Diagnostic::UnsupportedLaw(id) => write!(f, "law {id} payload not implemented"),
            Diagnostic::UnsupportedChainedLaw { mt, next_law_offset } => write!(
                f,
                "mt {mt}: chained law at offset {next_law_offset} not followed"
            ),
            Diagnostic::UnsupportedMtAbove100(mt) => {
                write!(f, "mt {mt} > 100 in DLW not decoded")
            }
        }
    }
}

/// Emit a diagnostic through both channels: the returned-value list (the
/// assertable one) and the log (so nothing is silent when nobody checks
/// the list).
pub(crate) fn log_diagnostic(diagnostics: &mut Vec<Diagnostic>, d: Diagnostic) {
    log::warn!("{d}");
    diagnostics.push(d);
}
