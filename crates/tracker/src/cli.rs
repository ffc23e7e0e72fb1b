//! Command-line arguments

use anyhow::bail;

/// What the binary runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Read face events from stdin and drive the stand
    Track,
    /// Act as the stand: log commands received on the link
    Stand,
}

/// Parsed arguments: `face-guide [--stand] [CONFIG]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub mode: Mode,
    pub config: Option<String>,
}

impl Args {
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<Self> {
        let mut parsed = Args {
            mode: Mode::Track,
            config: None,
        };

        for arg in args {
            match arg.as_str() {
                "--stand" => parsed.mode = Mode::Stand,
                flag if flag.starts_with('-') => bail!("Unknown option: {}", flag),
                path => {
                    if parsed.config.is_some() {
                        bail!("Only one config file may be given");
                    }
                    parsed.config = Some(path.to_string());
                }
            }
        }

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Args> {
        Args::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.mode, Mode::Track);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_stand_with_config() {
        let args = parse(&["--stand", "stand.toml"]).unwrap();
        assert_eq!(args.mode, Mode::Stand);
        assert_eq!(args.config.as_deref(), Some("stand.toml"));
    }

    #[test]
    fn test_rejects_unknown_and_extra() {
        assert!(parse(&["--verbose"]).is_err());
        assert!(parse(&["a.toml", "b.toml"]).is_err());
    }
}
