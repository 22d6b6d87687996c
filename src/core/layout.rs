//! Column packing for the standard (grid) output.
//!
//! Names are stored column-major and emitted row by row: the cell at `(row, col)` shows
//! `names[row + col * rows]`. Columns are separated by tabs, and each column is as wide as
//! the widest name rounded up to the next tab stop.

use unicode_width::UnicodeWidthStr;

/// Width of one tab stop.
pub const TAB_WIDTH: usize = 8;

/// Display width of a name.
///
/// ASCII counts one column per byte and East Asian wide characters count two,
/// the same unit for every name in a listing.
#[inline]
pub fn display_width(name: &str) -> usize {
    UnicodeWidthStr::width(name)
}

/// Rounds `max_width` up to the next tab stop, always leaving at least one full stop of gap.
#[inline]
pub fn column_width_for(max_width: usize) -> usize {
    (max_width + TAB_WIDTH) & !(TAB_WIDTH - 1)
}

/// Grid geometry for one listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    columns: usize,
    rows: usize,
    column_width: usize,
    single_column: bool,
}

impl Layout {
    /// Computes the grid for `names` on a terminal `terminal_width` columns wide.
    ///
    /// When the terminal cannot fit two columns the layout degenerates to a single column
    /// with one name per line and no padding.
    pub fn compute<S: AsRef<str>>(names: &[S], terminal_width: usize) -> Self {
        let max_width = names
            .iter()
            .map(|n| display_width(n.as_ref()))
            .max()
            .unwrap_or(0);
        let column_width = column_width_for(max_width);
        let count = names.len();

        if terminal_width < 2 * column_width {
            return Layout {
                columns: 1,
                rows: count,
                column_width,
                single_column: true,
            };
        }

        let columns = terminal_width / column_width;
        let rows = count.div_ceil(columns);
        Layout {
            columns,
            rows,
            column_width,
            single_column: false,
        }
    }

    // Accessors

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn column_width(&self) -> usize {
        self.column_width
    }

    #[inline]
    pub fn is_single_column(&self) -> bool {
        self.single_column
    }

    /// Index into the name list shown at `(row, col)`, or `None` past the end of the list.
    #[inline]
    pub fn index_at(&self, row: usize, col: usize, count: usize) -> Option<usize> {
        let idx = row + col * self.rows;
        (idx < count).then_some(idx)
    }

    /// Name indices for every row, in emission order.
    pub fn row_order(&self, count: usize) -> Vec<Vec<usize>> {
        (0..self.rows)
            .map(|row| {
                (0..self.columns)
                    .filter_map(|col| self.index_at(row, col, count))
                    .collect()
            })
            .collect()
    }
}

/// Renders names as grid lines, one string per row.
pub fn grid_lines<S: AsRef<str>>(names: &[S], terminal_width: usize) -> Vec<String> {
    let layout = Layout::compute(names, terminal_width);
    log::debug!(
        "grid layout for {} names: {} columns x {} rows, column width {}{}",
        names.len(),
        layout.columns,
        layout.rows,
        layout.column_width,
        if layout.single_column { " (single column)" } else { "" }
    );

    if layout.single_column {
        return names.iter().map(|n| n.as_ref().to_string()).collect();
    }

    let mut lines = Vec::with_capacity(layout.rows);
    for row in layout.row_order(names.len()) {
        let mut line = String::with_capacity(layout.columns * layout.column_width);
        for (pos, idx) in row.iter().enumerate() {
            let name = names[*idx].as_ref();
            line.push_str(name);
            // the last column of a row gets no padding
            let is_last = pos + 1 == row.len() || pos + 1 == layout.columns;
            if !is_last {
                pad_to_column(&mut line, display_width(name), layout.column_width);
            }
        }
        lines.push(line);
    }
    lines
}

fn pad_to_column(line: &mut String, mut width: usize, column_width: usize) {
    while width < column_width {
        line.push('\t');
        width += TAB_WIDTH;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn column_width_rounds_to_tab_stops() {
        assert_eq!(column_width_for(0), 8);
        assert_eq!(column_width_for(3), 8);
        assert_eq!(column_width_for(7), 8);
        assert_eq!(column_width_for(8), 16);
        assert_eq!(column_width_for(15), 16);
        assert_eq!(column_width_for(16), 24);
    }

    #[test]
    fn three_short_names_on_wide_terminal() {
        let names = ["a", "bb", "ccc"];
        let layout = Layout::compute(&names, 80);
        assert_eq!(layout.column_width(), 8);
        assert_eq!(layout.columns(), 10);
        assert_eq!(layout.rows(), 1);
        assert!(!layout.is_single_column());
        assert_eq!(grid_lines(&names, 80), ["a\tbb\tccc"]);
    }

    #[test]
    fn narrow_terminal_degenerates_to_one_column() {
        let names = ["a", "bb", "ccc"];
        let layout = Layout::compute(&names, 10);
        assert!(layout.is_single_column());
        assert_eq!(grid_lines(&names, 10), ["a", "bb", "ccc"]);
    }

    #[test]
    fn column_major_placement() {
        // width 5 -> column 8, terminal 24 -> 3 columns, 7 names -> 3 rows
        let names = ["n0", "n1", "n2", "n3", "n4", "n5", "n6"];
        let layout = Layout::compute(&names, 24);
        assert_eq!((layout.columns(), layout.rows()), (3, 3));
        assert_eq!(
            layout.row_order(names.len()),
            vec![vec![0, 3, 6], vec![1, 4], vec![2, 5]]
        );
        assert_eq!(
            grid_lines(&names, 24),
            ["n0\tn3\tn6", "n1\tn4", "n2\tn5"]
        );
    }

    #[test]
    fn padding_reaches_the_next_column() {
        // max width 9 -> column width 16
        let names = ["a", "abcdefghi", "abcdefgh"];
        let lines = grid_lines(&names, 80);
        assert_eq!(lines, ["a\t\tabcdefghi\tabcdefgh"]);
    }

    #[test]
    fn name_ending_on_a_tab_stop_gets_one_tab() {
        // "abcdefgh" ends exactly at column 8; one tab reaches the 16-wide column
        let names = ["abcdefgh", "abcdefghi", "x"];
        assert_eq!(grid_lines(&names, 80), ["abcdefgh\tabcdefghi\tx"]);
    }

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("日本語"), 6);
        let layout = Layout::compute(&["日本語.txt"], 80);
        assert_eq!(layout.column_width(), 16);
    }

    #[test]
    fn empty_list_has_no_lines() {
        let names: [&str; 0] = [];
        assert!(grid_lines(&names, 80).is_empty());
        assert_eq!(Layout::compute(&names, 80).rows(), 0);
    }

    #[test]
    fn grid_is_just_large_enough() {
        let mut rng = rand::rng();
        for _ in 0..500 {
            let count = rng.random_range(1..=60);
            let names: Vec<String> = (0..count)
                .map(|_| "x".repeat(rng.random_range(1..=30)))
                .collect();
            let terminal_width = rng.random_range(1..=250);
            let layout = Layout::compute(&names, terminal_width);
            if layout.is_single_column() {
                assert!(terminal_width < 2 * layout.column_width());
                assert_eq!(grid_lines(&names, terminal_width).len(), count);
                continue;
            }
            let (cols, rows) = (layout.columns(), layout.rows());
            assert!(cols * rows >= count, "{} x {} < {}", cols, rows, count);
            assert!(cols * (rows - 1) < count, "{} x {} too large for {}", cols, rows, count);

            let order: Vec<usize> = layout.row_order(count).into_iter().flatten().collect();
            let mut sorted = order.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..count).collect::<Vec<_>>());
        }
    }
}
