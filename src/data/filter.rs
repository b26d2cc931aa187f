use super::error::TraceError;
use super::model::Sample;

// ---------------------------------------------------------------------------
// Line qualification
// ---------------------------------------------------------------------------

/// Tag of the lines the controller emits once per update.
pub const TRACE_TAG: &str = "TRACE";

/// Any line containing this text is skipped, even as part of a longer word.
pub const EXCLUDED_SUBSTRING: &str = "value";

/// Field names in the order they follow the tag.
const FIELDS: [&str; 4] = ["position", "objective", "output", "counter"];

/// Whether `line` is a TRACE record that should be plotted.
///
/// The first space-separated token must be exactly `TRACE`, and the line
/// must not contain `value` anywhere. The second test is a plain substring
/// search over the whole line: `TRACE 1 2 3 4 multivalued` is excluded.
pub fn is_trace_line(line: &str) -> bool {
    has_trace_tag(line) && !line.contains(EXCLUDED_SUBSTRING)
}

fn has_trace_tag(line: &str) -> bool {
    line.split(' ').next() == Some(TRACE_TAG)
}

// ---------------------------------------------------------------------------
// Field parsing
// ---------------------------------------------------------------------------

/// Parse the four numeric fields of a qualifying line.
///
/// Tokens after the fourth field are ignored. `line_no` is only used for
/// error reporting.
pub fn parse_sample(line: &str, line_no: usize) -> Result<Sample, TraceError> {
    let mut tokens = line.split(' ').skip(1);
    let mut values = [0.0f64; 4];

    for (slot, field) in values.iter_mut().zip(FIELDS) {
        let token = tokens.next().ok_or(TraceError::MissingField {
            line: line_no,
            field,
        })?;
        *slot = token
            .trim()
            .parse::<f64>()
            .map_err(|source| TraceError::InvalidNumber {
                line: line_no,
                field,
                token: token.to_string(),
                source,
            })?;
    }

    let [position, objective, output, counter] = values;
    Ok(Sample {
        position,
        objective,
        output,
        counter,
    })
}

/// Keep the qualifying lines, in order, and parse each into a [`Sample`].
///
/// The first malformed qualifying line aborts the whole pass.
pub fn filter_and_parse<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Sample>, TraceError> {
    let mut samples = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if !is_trace_line(line) {
            if has_trace_tag(line) {
                log::debug!(
                    "line {}: skipping TRACE line containing '{EXCLUDED_SUBSTRING}'",
                    i + 1
                );
            }
            continue;
        }
        samples.push(parse_sample(line, i + 1)?);
    }

    Ok(samples)
}
