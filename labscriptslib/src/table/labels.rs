//! Header labels for the zmax data table.
//!
//! Column 0 is `zmax`. The remaining columns are named by three axis
//! positions drawn from `b`, `m`, `t` and a degree suffix `2` or `3`,
//! enumerated with the first axis outermost and the degree innermost:
//! `bbb2`, `bbb3`, `bbm2`, ..., `ttt3`.
//!
//! The data file is assumed to already be in this column order; nothing
//! checks that it is.

/// Label of the first column.
pub const ZMAX_LABEL: &str = "zmax";

/// Letters used for each of the three axis positions.
pub const AXIS_LABELS: [char; 3] = ['b', 'm', 't'];

/// Degree suffixes.
pub const DEGREE_LABELS: [char; 2] = ['2', '3'];

/// Number of columns every row must have: `zmax` plus one per label combination.
pub const COL_COUNT: usize =
    1 + DEGREE_LABELS.len() * AXIS_LABELS.len() * AXIS_LABELS.len() * AXIS_LABELS.len();

/// Build the full header row, `zmax` first.
pub fn header_labels() -> Vec<String> {
    let mut labels = Vec::with_capacity(COL_COUNT);
    labels.push(ZMAX_LABEL.to_string());

    for first in AXIS_LABELS {
        for second in AXIS_LABELS {
            for third in AXIS_LABELS {
                for degree in DEGREE_LABELS {
                    labels.push(format!("{first}{second}{third}{degree}"));
                }
            }
        }
    }

    labels
}
