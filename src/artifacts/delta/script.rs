//! Edit-script model and its text encoding
//!
//! ## Format
//!
//! ```text
//! @codat-delta v1 <base fingerprint>
//! =<n>          copy n bytes from the base
//! -<n>          skip n bytes of the base
//! +<n>:<text>   insert n bytes of text
//! ```
//!
//! Every line ends with `\n`; inserted text is length-prefixed so it may
//! itself contain newlines. The header pins the fingerprint of the base text
//! the script was computed against, so applying it to any other base fails
//! instead of producing garbage.

use crate::artifacts::delta::{Delta, DeltaError};
use crate::artifacts::objects::fingerprint::Fingerprint;

const HEADER_PREFIX: &str = "@codat-delta v1 ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeltaOp {
    Copy(usize),
    Skip(usize),
    Insert(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeltaScript {
    base: Fingerprint,
    ops: Vec<DeltaOp>,
}

impl DeltaScript {
    /// Empty script against the given base text
    pub fn against(base: &str) -> Self {
        DeltaScript {
            base: Fingerprint::of(base),
            ops: Vec::new(),
        }
    }

    /// Script that reproduces `base` unchanged
    pub fn noop(base: &str) -> Self {
        let mut script = Self::against(base);
        script.push(DeltaOp::Copy(base.len()));
        script
    }

    pub fn ops(&self) -> &[DeltaOp] {
        &self.ops
    }

    pub fn is_noop(&self) -> bool {
        self.ops.iter().all(|op| matches!(op, DeltaOp::Copy(_)))
    }

    /// Append an operation, merging it into the previous one when both are
    /// of the same kind. Empty operations are dropped.
    pub fn push(&mut self, op: DeltaOp) {
        match (self.ops.last_mut(), op) {
            (_, DeltaOp::Copy(0) | DeltaOp::Skip(0)) => {}
            (_, DeltaOp::Insert(text)) if text.is_empty() => {}
            (Some(DeltaOp::Copy(n)), DeltaOp::Copy(m)) => *n += m,
            (Some(DeltaOp::Skip(n)), DeltaOp::Skip(m)) => *n += m,
            (Some(DeltaOp::Insert(text)), DeltaOp::Insert(more)) => text.push_str(&more),
            (_, op) => self.ops.push(op),
        }
    }

    pub fn encode(&self) -> Delta {
        let mut encoded = format!("{}{}\n", HEADER_PREFIX, self.base);

        for op in &self.ops {
            match op {
                DeltaOp::Copy(n) => encoded.push_str(&format!("={}\n", n)),
                DeltaOp::Skip(n) => encoded.push_str(&format!("-{}\n", n)),
                DeltaOp::Insert(text) => {
                    encoded.push_str(&format!("+{}:", text.len()));
                    encoded.push_str(text);
                    encoded.push('\n');
                }
            }
        }

        Delta::from(encoded)
    }

    pub fn parse(delta: &Delta) -> Result<Self, DeltaError> {
        let raw = delta.as_str();

        let header_end = raw
            .find('\n')
            .ok_or_else(|| malformed(0, "missing header line"))?;
        let base = raw[..header_end]
            .strip_prefix(HEADER_PREFIX)
            .ok_or_else(|| malformed(0, "unknown delta header"))?;
        let base = Fingerprint::try_parse(base.to_string())
            .map_err(|_| malformed(HEADER_PREFIX.len(), "invalid base fingerprint"))?;

        let mut script = DeltaScript {
            base,
            ops: Vec::new(),
        };
        let mut cursor = header_end + 1;

        while cursor < raw.len() {
            let tag = raw.as_bytes()[cursor];
            let (count, terminator, next) = read_count(raw, cursor + 1)?;

            let op = match (tag, terminator) {
                (b'=', b'\n') => {
                    cursor = next;
                    DeltaOp::Copy(count)
                }
                (b'-', b'\n') => {
                    cursor = next;
                    DeltaOp::Skip(count)
                }
                (b'+', b':') => {
                    let end = next
                        .checked_add(count)
                        .ok_or_else(|| malformed(next, "insert length overflows"))?;
                    let text = raw
                        .get(next..end)
                        .ok_or_else(|| malformed(next, "insert text is truncated"))?;
                    if raw.as_bytes().get(end) != Some(&b'\n') {
                        return Err(malformed(end, "insert text is not terminated"));
                    }
                    cursor = end + 1;
                    DeltaOp::Insert(text.to_string())
                }
                _ => return Err(malformed(cursor, "unknown operation")),
            };

            script.ops.push(op);
        }

        Ok(script)
    }

    pub fn apply(&self, base: &str) -> Result<String, DeltaError> {
        let actual = Fingerprint::of(base);
        if actual != self.base {
            return Err(DeltaError::BaseMismatch {
                expected: self.base.to_string(),
                actual: actual.to_string(),
            });
        }

        let mut output = String::with_capacity(base.len());
        let mut cursor = 0usize;

        for op in &self.ops {
            match op {
                DeltaOp::Copy(n) => {
                    output.push_str(slice(base, cursor, *n)?);
                    cursor += n;
                }
                DeltaOp::Skip(n) => {
                    slice(base, cursor, *n)?;
                    cursor += n;
                }
                DeltaOp::Insert(text) => output.push_str(text),
            }
        }

        if cursor != base.len() {
            return Err(DeltaError::OutOfBounds(format!(
                "{} trailing base bytes not consumed",
                base.len() - cursor
            )));
        }

        Ok(output)
    }
}

fn slice(base: &str, start: usize, len: usize) -> Result<&str, DeltaError> {
    start
        .checked_add(len)
        .and_then(|end| base.get(start..end))
        .ok_or_else(|| {
            DeltaError::OutOfBounds(format!(
                "{} bytes at offset {} of a {} byte base",
                len,
                start,
                base.len()
            ))
        })
}

/// Read a decimal count starting at `start`; returns the count, the byte
/// that terminated it and the offset right after that byte.
fn read_count(raw: &str, start: usize) -> Result<(usize, u8, usize), DeltaError> {
    let digits = raw.as_bytes()[start..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits == 0 {
        return Err(malformed(start, "expected a byte count"));
    }

    let count = raw[start..start + digits]
        .parse::<usize>()
        .map_err(|e| malformed(start, &e.to_string()))?;
    let terminator = *raw
        .as_bytes()
        .get(start + digits)
        .ok_or_else(|| malformed(start + digits, "unexpected end of delta"))?;

    Ok((count, terminator, start + digits + 1))
}

fn malformed(offset: usize, reason: &str) -> DeltaError {
    DeltaError::Malformed {
        offset,
        reason: reason.to_string(),
    }
}
