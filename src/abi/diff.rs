//! Line-based diff between two canonical ABI renderings.
//!
//! The comparison itself stays free of any output concern: it produces
//! ordered, tagged segments and leaves coloring to the renderers.

/// How a segment relates the manual rendering to the compiled one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffTag {
    /// Present in both renderings
    Unchanged,
    /// Present only in the compiled rendering
    Added,
    /// Present only in the manual rendering
    Removed,
}

/// A contiguous block of canonical lines sharing one tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSegment {
    /// Relation of this block to the two renderings
    pub tag: DiffTag,
    /// The block's lines, joined with `\n` and not newline-terminated
    pub text: String,
}

/// Diff `old` against `new` line by line, longest-common-subsequence based.
///
/// Runs of identically tagged lines are coalesced into one segment. Inside a
/// replaced region the removed lines always precede the added ones.
pub fn diff_lines(old: &str, new: &str) -> Vec<DiffSegment> {
    let a: Vec<&str> = old.lines().collect();
    let b: Vec<&str> = new.lines().collect();

    // LCS lengths of the suffix pairs, so the walk below can go forward
    let mut lcs = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in (0..a.len()).rev() {
        for j in (0..b.len()).rev() {
            lcs[i][j] = if a[i] == b[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut ops: Vec<(DiffTag, &str)> = Vec::with_capacity(a.len().max(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            ops.push((DiffTag::Unchanged, a[i]));
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            ops.push((DiffTag::Removed, a[i]));
            i += 1;
        } else {
            ops.push((DiffTag::Added, b[j]));
            j += 1;
        }
    }
    while i < a.len() {
        ops.push((DiffTag::Removed, a[i]));
        i += 1;
    }
    while j < b.len() {
        ops.push((DiffTag::Added, b[j]));
        j += 1;
    }

    coalesce(ops)
}

/// Merge consecutive equally-tagged lines into segments
fn coalesce(ops: Vec<(DiffTag, &str)>) -> Vec<DiffSegment> {
    let mut segments: Vec<DiffSegment> = Vec::new();
    for (tag, line) in ops {
        match segments.last_mut() {
            Some(segment) if segment.tag == tag => {
                segment.text.push('\n');
                segment.text.push_str(line);
            }
            _ => segments.push(DiffSegment {
                tag,
                text: line.to_string(),
            }),
        }
    }
    segments
}
