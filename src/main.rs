mod clock;
mod countdown;
mod display;
mod error;
mod parser;
mod utils;

use clock::{Clock, SystemClock};
use countdown::Countdown;
use error::{ParseError, TimerError};
use log::{debug, LevelFilter};
use std::env;
use std::io;
use std::process;

/// Command-line options.
#[derive(Debug, Default)]
struct Options {
    program: String,
    verbose: bool,
    help: bool,
    duration: Option<String>,
}

fn parse_args(args: &[String]) -> Options {
    let mut opts = Options {
        program: args.first().cloned().unwrap_or_else(|| "ctimer".to_string()),
        ..Options::default()
    };
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "-h" => opts.help = true,
            "-v" => opts.verbose = true,
            _ if opts.duration.is_none() => opts.duration = Some(arg.clone()),
            _ => {}
        }
    }
    opts
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() {
    let mut clock = SystemClock;
    // Parse time counts towards the first interval.
    let start = clock.now().unwrap_or_else(|source| {
        utils::fatal(&TimerError::Clock {
            context: "gettime failed",
            source,
        })
    });

    let args: Vec<String> = env::args().collect();
    let opts = parse_args(&args);
    init_logging(opts.verbose);
    if opts.help {
        utils::print_usage(&opts.program);
    }

    let target = match parser::parse_duration(opts.duration.as_deref()) {
        Ok(secs) => secs,
        Err(ParseError::Usage) => utils::print_usage(&opts.program),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(err.exit_code());
        }
    };
    debug!("waiting {:.3}s", target);

    let stdout = io::stdout();
    match Countdown::new(clock, stdout.lock(), target, start).run() {
        Ok(summary) => debug!(
            "done after {:.6}s: {} iterations, {} sleeps, max interval {:.6}s",
            summary.elapsed, summary.iterations, summary.sleeps, summary.max_interval
        ),
        Err(err) => utils::fatal(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_positional() {
        let opts = parse_args(&args(&["ctimer", "3:30"]));
        assert_eq!(opts.program, "ctimer");
        assert_eq!(opts.duration.as_deref(), Some("3:30"));
        assert!(!opts.verbose);
        assert!(!opts.help);
    }

    #[test]
    fn test_parse_args_flags() {
        let opts = parse_args(&args(&["ctimer", "-v", "1", "2"]));
        assert!(opts.verbose);
        assert_eq!(opts.duration.as_deref(), Some("1"));

        let opts = parse_args(&args(&["ctimer", "-h"]));
        assert!(opts.help);
        assert_eq!(opts.duration, None);
    }

    #[test]
    fn test_parse_args_empty() {
        let opts = parse_args(&[]);
        assert_eq!(opts.program, "ctimer");
        assert_eq!(opts.duration, None);
    }
}
