use std::path::PathBuf;

use clap::Parser;

/// Trace file read when no path is given.
pub const DEFAULT_TRACE_FILE: &str = "tmp";

#[derive(Parser, Debug)]
#[command(
    name = "trace-plot",
    about = "Plot the TRACE lines of a motor controller log",
    after_help = "\
EXAMPLES:
    trace-plot                     Plot ./tmp
    trace-plot motor.log           Plot another capture
    RUST_LOG=debug trace-plot      Also log skipped 'value' lines"
)]
pub struct Args {
    /// Log file containing TRACE lines
    #[arg(value_name = "PATH", default_value = DEFAULT_TRACE_FILE)]
    pub path: PathBuf,

    /// Window title (defaults to one naming the file)
    #[arg(long)]
    pub title: Option<String>,
}

impl Args {
    pub fn window_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Trace Plot – {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_tmp() {
        let args = Args::try_parse_from(["trace-plot"]).unwrap();
        assert_eq!(args.path, PathBuf::from("tmp"));
        assert_eq!(args.window_title(), "Trace Plot – tmp");
    }

    #[test]
    fn explicit_path_and_title() {
        let args =
            Args::try_parse_from(["trace-plot", "motor.log", "--title", "bench"]).unwrap();
        assert_eq!(args.path, PathBuf::from("motor.log"));
        assert_eq!(args.window_title(), "bench");
    }
}
