use crate::error::TimerError;
use std::process;

pub fn print_usage(program: &str) -> ! {
    eprintln!(
        "usage: {} <[time in hrs]:>[time in min]<:[time in secs]>",
        program
    );
    eprintln!("times can be floating point numbers in xxx.yyy format");
    eprintln!();
    eprintln!("Note that precedence goes min, min:sec, and hr:min:sec.");
    eprintln!(
        "So if you want 3.5 hours, you could do 3.5:0:0 or 3:30:0, but 3.5:0 is 3.5 minutes"
    );
    eprintln!();
    eprintln!("   -h   Print this help message");
    eprintln!("   -v   Print timing diagnostics to stderr");
    process::exit(2);
}

/// Two-line report for an environment fault: what failed, then the system's
/// description of why.
pub fn report(err: &TimerError) -> String {
    format!("Error: {}\nReason: {}", err, err.reason())
}

/// Reports an environment fault and terminates with its exit code.
pub fn fatal(err: &TimerError) -> ! {
    eprintln!("{}", report(err));
    process::exit(err.exit_code());
}
