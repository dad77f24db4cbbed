use crate::artifacts::delta::script::{DeltaOp, DeltaScript};
use crate::artifacts::delta::{Delta, DeltaCodec, DeltaError};
use similar::{ChangeTag, TextDiff};

/// Line-oriented delta codec
///
/// Diffs line by line with Myers' algorithm and encodes the result as a
/// byte-counted edit script. Unchanged runs are stored as copy counts, so a
/// delta only carries the inserted text.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineDeltaCodec;

impl LineDeltaCodec {
    pub fn script(&self, old: &str, new: &str) -> DeltaScript {
        if old == new {
            return DeltaScript::noop(old);
        }

        let mut script = DeltaScript::against(old);
        let diff = TextDiff::from_lines(old, new);

        for change in diff.iter_all_changes() {
            let value = change.value();
            match change.tag() {
                ChangeTag::Equal => script.push(DeltaOp::Copy(value.len())),
                ChangeTag::Delete => script.push(DeltaOp::Skip(value.len())),
                ChangeTag::Insert => script.push(DeltaOp::Insert(value.to_string())),
            }
        }

        script
    }
}

impl DeltaCodec for LineDeltaCodec {
    fn compute(&self, old: &str, new: &str) -> Delta {
        self.script(old, new).encode()
    }

    fn apply(&self, base: &str, delta: &Delta) -> Result<String, DeltaError> {
        DeltaScript::parse(delta)?.apply(base)
    }
}
