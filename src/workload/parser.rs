/*!
 * Workload Text Parser
 * Line-oriented process and kill-event input
 *
 * Format:
 * ```text
 * <process count>
 * <name> <pid> <cpu_burst> <io_start|-> <io_duration|->
 * <kill count>
 * KILL <pid> <tick>
 * ```
 * Blank lines are skipped. A token starting with `#` begins a comment that
 * runs to the end of the line; `#` inside a token is kept. The kill section
 * may be omitted.
 */

use crate::core::errors::SimError;
use crate::core::types::{SimResult, Tick};
use crate::process::types::{KillSpec, ProcessSpec};
use std::str::FromStr;

const DISABLED: &str = "-";
const KILL_VERB: &str = "kill";

/// Upper bound on pre-allocation from a count line that has not been checked
/// against the lines that follow it
const RESERVE_LIMIT: usize = 64;

/// Parsed but not yet validated sections
#[derive(Debug, Default)]
pub(super) struct ParsedSections {
    pub processes: Vec<ProcessSpec>,
    pub kills: Vec<KillSpec>,
}

/// Meaningful lines with their 1-based line numbers
fn content_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input.lines().enumerate().filter_map(|(idx, raw)| {
        let line = strip_comment(raw).trim();
        (!line.is_empty()).then_some((idx + 1, line))
    })
}

/// Cut at the first `#` that opens a token
fn strip_comment(raw: &str) -> &str {
    let cut = raw
        .char_indices()
        .find(|&(idx, c)| {
            c == '#'
                && raw[..idx]
                    .chars()
                    .next_back()
                    .map_or(true, char::is_whitespace)
        })
        .map_or(raw.len(), |(idx, _)| idx);
    &raw[..cut]
}

pub(super) fn parse(input: &str) -> SimResult<ParsedSections> {
    let mut lines = content_lines(input);
    let mut sections = ParsedSections::default();

    let Some((count_line, count_text)) = lines.next() else {
        return Ok(sections);
    };
    let process_count: usize = parse_count(count_line, count_text)?;

    sections.processes.reserve(process_count.min(RESERVE_LIMIT));
    for found in 0..process_count {
        let (line, text) = lines.next().ok_or_else(|| {
            SimError::parse(
                count_line,
                format!("expected {} process lines, found {}", process_count, found),
            )
        })?;
        sections.processes.push(parse_process(line, text)?);
    }

    if let Some((count_line, count_text)) = lines.next() {
        let kill_count: usize = parse_count(count_line, count_text)?;
        sections.kills.reserve(kill_count.min(RESERVE_LIMIT));
        for found in 0..kill_count {
            let (line, text) = lines.next().ok_or_else(|| {
                SimError::parse(
                    count_line,
                    format!("expected {} kill lines, found {}", kill_count, found),
                )
            })?;
            sections.kills.push(parse_kill(line, text)?);
        }
    }

    if let Some((line, _)) = lines.next() {
        return Err(SimError::parse(line, "unexpected trailing input"));
    }

    Ok(sections)
}

fn parse_count(line: usize, text: &str) -> SimResult<usize> {
    parse_digits(line, text, "count")
}

fn parse_process(line: usize, text: &str) -> SimResult<ProcessSpec> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let &[name, pid, burst, io_start, io_duration] = fields.as_slice() else {
        return Err(SimError::parse(
            line,
            format!("expected 5 fields, found {}", fields.len()),
        ));
    };

    Ok(ProcessSpec {
        pid: parse_digits(line, pid, "pid")?,
        name: name.into(),
        cpu_burst: parse_digits(line, burst, "cpu burst")?,
        io_start: parse_optional(line, io_start, "io start")?,
        io_duration: parse_optional(line, io_duration, "io duration")?.unwrap_or(0),
    })
}

fn parse_kill(line: usize, text: &str) -> SimResult<KillSpec> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let &[verb, pid, tick] = fields.as_slice() else {
        return Err(SimError::parse(
            line,
            format!("expected `KILL <pid> <tick>`, found {} fields", fields.len()),
        ));
    };

    if !verb.eq_ignore_ascii_case(KILL_VERB) {
        return Err(SimError::parse(line, format!("unknown event `{}`", verb)));
    }

    Ok(KillSpec {
        pid: parse_digits(line, pid, "pid")?,
        tick: parse_digits(line, tick, "tick")?,
    })
}

/// `-` or an all-digit token
fn parse_optional(line: usize, token: &str, field: &str) -> SimResult<Option<Tick>> {
    if token == DISABLED {
        return Ok(None);
    }
    parse_digits(line, token, field).map(Some)
}

/// All-digit token only: signs, separators and whitespace are rejected
fn parse_digits<T: FromStr>(line: usize, token: &str, field: &str) -> SimResult<T> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SimError::parse(
            line,
            format!("{} must be a non-negative integer, got `{}`", field, token),
        ));
    }
    token
        .parse()
        .map_err(|_| SimError::parse(line, format!("{} `{}` is out of range", field, token)))
}
