use std::num::NonZeroUsize;

use clap::Parser;

use crate::TrainErr;

/// Converts a textual boolean flag into a native boolean.
///
/// Accepts `true`/`false` in any casing plus the literals `1`/`0`. Anything
/// else is a CLI-format error, fatal to the parse.
///
/// # Errors
/// Returns `TrainErr::BoolFlag` for unrecognized tokens.
pub fn parse_bool(s: &str) -> Result<bool, TrainErr> {
    match s.to_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(TrainErr::BoolFlag { got: s.to_string() }),
    }
}

/// Sweeps the learning rate exponentially to locate a usable training range.
#[derive(Parser, Debug)]
#[command(name = "find-lr", version, about)]
pub struct FindLrArgs {
    /// Learning rate the sweep starts from
    #[arg(long, default_value_t = 1e-5)]
    pub base_lr: f32,

    /// Learning rate the sweep ends at
    #[arg(long, default_value_t = 10.0)]
    pub max_lr: f32,

    /// Number of sweep iterations
    #[arg(long, default_value_t = 100)]
    pub iters: usize,

    /// Sample a CutMix patch each iteration (true/false/1/0)
    #[arg(long, default_value = "false", value_parser = parse_bool, action = clap::ArgAction::Set)]
    pub cutmix: bool,

    /// Input image width in pixels
    #[arg(long, default_value = "32")]
    pub width: NonZeroUsize,

    /// Input image height in pixels
    #[arg(long, default_value = "32")]
    pub height: NonZeroUsize,

    /// Seed for the patch sampler
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_word_forms_case_insensitively() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("FALSE"), Ok(false));
        assert_eq!(parse_bool("True"), Ok(true));
    }

    #[test]
    fn accepts_numeric_literals() {
        assert_eq!(parse_bool("1"), Ok(true));
        assert_eq!(parse_bool("0"), Ok(false));
    }

    #[test]
    fn rejects_anything_else_with_fixed_message() {
        let err = parse_bool("yes").unwrap_err();

        assert_eq!(
            err,
            TrainErr::BoolFlag {
                got: "yes".to_string()
            }
        );
        assert_eq!(err.to_string(), "Boolean value expected.");
    }

    #[test]
    fn cutmix_flag_goes_through_the_bool_parser() {
        let args = FindLrArgs::try_parse_from(["find-lr", "--cutmix", "TRUE"]).unwrap();
        assert!(args.cutmix);

        assert!(FindLrArgs::try_parse_from(["find-lr", "--cutmix", "yes"]).is_err());
    }
}
