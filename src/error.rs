use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, TrainErr>;

/// The crate's error type.
#[derive(Debug, PartialEq)]
pub enum TrainErr {
    /// A textual boolean flag did not match any accepted token.
    BoolFlag { got: String },

    /// The weight-decay splitter placed a different number of tensors than
    /// the net owns, meaning a layer kind was not covered.
    ParamCountMismatch { got: usize, expected: usize },
}

impl Display for TrainErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Fixed message surfaced by the CLI layer; the rejected token
            // stays available through Debug.
            TrainErr::BoolFlag { .. } => write!(f, "Boolean value expected."),
            TrainErr::ParamCountMismatch { got, expected } => write!(
                f,
                "weight-decay split covered {got} parameter tensors of the net's {expected}"
            ),
        }
    }
}

impl Error for TrainErr {}
