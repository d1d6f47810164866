use crate::difficulty::{parse_lenient, parse_strict, Difficulty};
use anyhow::Result;
use clap::Parser;
use std::ffi::{OsStr, OsString};

/// hashcash-solver - find the smallest nonce whose SHA-256 digest of
/// PREFIX followed by the nonce has DIFFICULTY leading zero bits
#[derive(Parser, Debug)]
#[command(name = "hashcash-solver")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Hashcash-style proof-of-work nonce search", long_about = None)]
pub struct Args {
    /// Input the nonce is appended to, used verbatim
    #[arg(value_name = "PREFIX", allow_hyphen_values = true, value_parser = clap::value_parser!(OsString))]
    pub prefix: OsString,

    /// Required number of leading zero bits (0-256)
    #[arg(value_name = "DIFFICULTY", allow_hyphen_values = true)]
    pub difficulty: String,

    /// Reject a malformed DIFFICULTY instead of reading it as its leading digits (or 0)
    #[arg(long)]
    pub strict: bool,

    /// Print the solution as a JSON object
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validated inputs for one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub prefix: Vec<u8>,
    pub difficulty: Difficulty,
}

/// The raw bytes of a command-line argument. Unix arguments need not be UTF-8.
#[cfg(unix)]
pub fn arg_bytes(arg: &OsStr) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    arg.as_bytes().to_vec()
}

#[cfg(not(unix))]
pub fn arg_bytes(arg: &OsStr) -> Vec<u8> {
    arg.to_string_lossy().into_owned().into_bytes()
}

impl TryFrom<&Args> for SolverConfig {
    type Error = anyhow::Error;

    fn try_from(args: &Args) -> Result<Self> {
        let bits = if args.strict {
            parse_strict(&args.difficulty)?
        } else {
            parse_lenient(&args.difficulty)
        };
        Ok(SolverConfig {
            prefix: arg_bytes(&args.prefix),
            difficulty: Difficulty::from_wide(bits)?,
        })
    }
}

#[cfg(test)]
mod test {
    use crate::config::{Args, SolverConfig};
    use crate::error::{ConfigError, SearchError};
    use clap::Parser;

    fn config(argv: &[&str]) -> anyhow::Result<SolverConfig> {
        let args = Args::try_parse_from(argv.iter().copied())?;
        SolverConfig::try_from(&args)
    }

    #[test]
    fn positional() {
        let c = config(&["hashcash-solver", "abc", "12"]).unwrap();
        assert_eq!(c.prefix, b"abc");
        assert_eq!(c.difficulty.bits(), 12);
    }

    #[test]
    fn prefix_is_verbatim() {
        let c = config(&["hashcash-solver", "  spaced -x ", "1"]).unwrap();
        assert_eq!(c.prefix, b"  spaced -x ");
        let c = config(&["hashcash-solver", "", "1"]).unwrap();
        assert!(c.prefix.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_prefix() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let prefix = OsString::from_vec(vec![b'a', 0xff]);
        let args = Args::try_parse_from([
            OsString::from("hashcash-solver"),
            prefix,
            OsString::from("4"),
        ])
        .unwrap();
        let c = SolverConfig::try_from(&args).unwrap();
        assert_eq!(c.prefix, vec![b'a', 0xff]);
        assert_eq!(crate::find(&c.prefix, c.difficulty.bits()), Ok(1));
    }

    #[test]
    fn lenient_by_default() {
        assert_eq!(
            config(&["hashcash-solver", "abc", "nope"]).unwrap().difficulty.bits(),
            0
        );
        assert_eq!(
            config(&["hashcash-solver", "abc", "-3"]).unwrap().difficulty.bits(),
            0
        );
        assert_eq!(
            config(&["hashcash-solver", "abc", "9x"]).unwrap().difficulty.bits(),
            9
        );
    }

    #[test]
    fn strict_rejects() {
        let err = config(&["hashcash-solver", "--strict", "abc", "9x"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::InvalidDifficulty("9x".to_string()))
        );
    }

    #[test]
    fn out_of_range() {
        let err = config(&["hashcash-solver", "abc", "300"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SearchError>(),
            Some(&SearchError::DifficultyOutOfRange {
                requested: 300,
                max: 256
            })
        );
    }

    #[test]
    fn missing_arguments() {
        assert!(Args::try_parse_from(["hashcash-solver"]).is_err());
        assert!(Args::try_parse_from(["hashcash-solver", "abc"]).is_err());
    }
}
