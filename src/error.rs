use failure::Fail;
use std::io;
use std::num::ParseIntError;

/// Everything that can go wrong while calibrating.
#[derive(Debug, Fail)]
pub enum CalibrationError {
    #[fail(display = "unable to open {}: {}", path, cause)]
    Open {
        path: String,
        #[cause]
        cause: io::Error,
    },

    /// The file opened but its contents couldn't be read as text.
    #[fail(display = "unable to read {}: {}", path, cause)]
    Read {
        path: String,
        #[cause]
        cause: io::Error,
    },

    #[fail(display = "line {}: bad frequency change {:?}", line, token)]
    Parse {
        line: usize,
        token: String,
        #[cause]
        cause: ParseIntError,
    },

    #[fail(display = "empty input, no cycle possible")]
    EmptyInput,

    /// Every running total lands in a distinct residue class modulo the
    /// drift, so the cyclic scan would climb (or fall) forever.
    #[fail(display = "no running total can ever repeat for this input")]
    NeverRepeats,

    #[fail(display = "never found a repeating frequency in {} cycles", cycles)]
    NoRepeat { cycles: usize },
}
