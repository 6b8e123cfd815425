/*!
 * Configuration
 * Run options from the command line and environment
 *
 * Environment variables:
 * - FCFS_OUTPUT: `table` (default) or `json`
 * - FCFS_TRACE_JSON: JSON log output when `1` or `true`
 * - FCFS_SHOW_TIMELINE: append the CPU timeline to table output when `1` or `true`
 * - RUST_LOG: log filter (default: info)
 */

use crate::core::errors::SimError;
use crate::core::types::SimResult;
use std::path::PathBuf;

pub const OUTPUT_ENV: &str = "FCFS_OUTPUT";
pub const TRACE_JSON_ENV: &str = "FCFS_TRACE_JSON";
pub const SHOW_TIMELINE_ENV: &str = "FCFS_SHOW_TIMELINE";

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    /// Parse from string representation
    pub fn from_str(s: &str) -> SimResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" | "text" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(SimError::Configuration(
                format!("Invalid output format '{}'. Valid: table, json", other).into(),
            )),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
        }
    }
}

/// Options for one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimConfig {
    /// Workload file; stdin when `None`
    pub input: Option<PathBuf>,
    pub output: OutputFormat,
    pub trace_json: bool,
    pub show_timeline: bool,
}

impl SimConfig {
    /// Read from the process arguments and environment
    pub fn from_env() -> SimResult<Self> {
        Self::from_sources(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Build from explicit arguments (program name excluded) and an env lookup
    pub fn from_sources<I, F>(args: I, env: F) -> SimResult<Self>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut args = args.into_iter();
        let input = args
            .next()
            .filter(|arg| arg != "-")
            .map(PathBuf::from);

        if let Some(extra) = args.next() {
            return Err(SimError::Configuration(
                format!("Unexpected argument '{}'. Usage: fcfs-sim [WORKLOAD|-]", extra).into(),
            ));
        }

        let output = match env(OUTPUT_ENV) {
            Some(value) => OutputFormat::from_str(&value)?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            input,
            output,
            trace_json: env(TRACE_JSON_ENV).map(|v| is_truthy(&v)).unwrap_or(false),
            show_timeline: env(SHOW_TIMELINE_ENV).map(|v| is_truthy(&v)).unwrap_or(false),
        })
    }
}

fn is_truthy(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(args: &[&str], env: &[(&str, &str)]) -> SimResult<SimConfig> {
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SimConfig::from_sources(args.iter().map(|a| a.to_string()), |key| {
            env.get(key).cloned()
        })
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[], &[]).unwrap();
        assert_eq!(cfg, SimConfig::default());
        assert_eq!(cfg.output.as_str(), "table");
    }

    #[test]
    fn test_input_path_and_stdin_dash() {
        let cfg = config(&["jobs.txt"], &[]).unwrap();
        assert_eq!(cfg.input, Some(PathBuf::from("jobs.txt")));
        assert_eq!(config(&["-"], &[]).unwrap().input, None);
    }

    #[test]
    fn test_env_options() {
        let cfg = config(
            &[],
            &[
                (OUTPUT_ENV, "JSON"),
                (TRACE_JSON_ENV, "true"),
                (SHOW_TIMELINE_ENV, "1"),
            ],
        )
        .unwrap();
        assert_eq!(cfg.output, OutputFormat::Json);
        assert!(cfg.trace_json);
        assert!(cfg.show_timeline);
    }

    #[test]
    fn test_invalid_output_rejected() {
        assert!(matches!(
            config(&[], &[(OUTPUT_ENV, "xml")]),
            Err(SimError::Configuration(_))
        ));
    }

    #[test]
    fn test_extra_argument_rejected() {
        assert!(config(&["a.txt", "b.txt"], &[]).is_err());
    }
}
