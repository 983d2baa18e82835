//! Leading-indent column arithmetic.
//!
//! A space contributes one column; a tab contributes `tab_width` columns,
//! where `tab_width` is the configured description indent. Byte offsets are
//! safe here: only ASCII space/tab participate in indentation.

/// Count leading indentation in columns.
///
/// Returns `(columns, byte index of the first non-indent character)`.
pub(crate) fn indent_cols(line: &str, tab_width: usize) -> (usize, usize) {
    let mut cols = 0;
    let mut idx = 0;
    for b in line.bytes() {
        match b {
            b' ' => cols += 1,
            b'\t' => cols += tab_width,
            _ => break,
        }
        idx += 1;
    }
    (cols, idx)
}

/// Strip up to `n_cols` columns of leading indentation.
///
/// A tab that would overshoot the remaining columns is still consumed whole,
/// consistent with tabs always weighing `tab_width`.
pub(crate) fn strip_cols(line: &str, n_cols: usize, tab_width: usize) -> &str {
    let mut cols = 0;
    let mut idx = 0;
    for b in line.bytes() {
        if cols >= n_cols {
            break;
        }
        match b {
            b' ' => cols += 1,
            b'\t' => cols += tab_width,
            _ => break,
        }
        idx += 1;
    }
    &line[idx..]
}

/// Strip up to `n` leading spaces. Tabs stop the scan.
pub(crate) fn strip_spaces(line: &str, n: usize) -> &str {
    let mut idx = 0;
    while idx < line.len() && idx < n && line.as_bytes()[idx] == b' ' {
        idx += 1;
    }
    &line[idx..]
}
