//! Row and column insertion, deletion and concatenation.
//!
//! Every operation reports through its return value: `false` means the index
//! or the shapes were rejected and the matrix was left as it was.

use matrix::Matrix;

impl<T: Clone> Matrix<T> {
    /// Inserts a row filled with `value` before row `row`. `row == self.rows()`
    /// appends at the bottom.
    pub fn insert_row(&mut self, row: usize, value: T) -> bool {
        if row > self.rows {
            debug!("Rejecting row insertion at {} into {} rows", row, self.rows);
            return false;
        }

        self.data.insert(row, vec![value; self.columns]);
        self.rows += 1;
        self.collapse_if_degenerate();
        true
    }

    /// Inserts a column filled with `value` before column `column`.
    /// `column == self.columns()` appends on the right.
    pub fn insert_column(&mut self, column: usize, value: T) -> bool {
        if column > self.columns {
            debug!(
                "Rejecting column insertion at {} into {} columns",
                column, self.columns
            );
            return false;
        }

        for r in &mut self.data {
            r.insert(column, value.clone());
        }
        self.columns += 1;
        self.collapse_if_degenerate();
        true
    }

    /// Inserts the columns of `other` before column `column`. Both matrices
    /// must have the same number of rows.
    pub fn append_horizontally<K: Clone + Into<T>>(&mut self, other: &Matrix<K>, column: usize) -> bool {
        if column > self.columns || self.rows != other.rows {
            debug!(
                "Rejecting horizontal append of {}x{} at column {} into {}x{}",
                other.rows, other.columns, column, self.rows, self.columns
            );
            return false;
        }

        for (r, other_row) in self.data.iter_mut().zip(&other.data) {
            let tail = r.split_off(column);
            r.extend(other_row.iter().map(|x| x.clone().into()));
            r.extend(tail);
        }
        self.columns += other.columns;
        self.collapse_if_degenerate();
        true
    }

    /// Inserts the rows of `other` before row `row`. Both matrices must have
    /// the same number of columns.
    pub fn append_vertically<K: Clone + Into<T>>(&mut self, other: &Matrix<K>, row: usize) -> bool {
        if row > self.rows || self.columns != other.columns {
            debug!(
                "Rejecting vertical append of {}x{} at row {} into {}x{}",
                other.rows, other.columns, row, self.rows, self.columns
            );
            return false;
        }

        let tail = self.data.split_off(row);
        self.data.extend(
            other
                .data
                .iter()
                .map(|r| r.iter().map(|x| x.clone().into()).collect()),
        );
        self.data.extend(tail);
        self.rows += other.rows;
        self.collapse_if_degenerate();
        true
    }
}

impl<T> Matrix<T> {
    /// Removes row `row`.
    pub fn delete_row(&mut self, row: usize) -> bool {
        if row >= self.rows {
            debug!("Rejecting deletion of row {} from {} rows", row, self.rows);
            return false;
        }

        self.data.remove(row);
        self.rows -= 1;
        self.collapse_if_degenerate();
        true
    }

    /// Removes column `column`.
    pub fn delete_column(&mut self, column: usize) -> bool {
        if column >= self.columns {
            debug!(
                "Rejecting deletion of column {} from {} columns",
                column, self.columns
            );
            return false;
        }

        for r in &mut self.data {
            r.remove(column);
        }
        self.columns -= 1;
        self.collapse_if_degenerate();
        true
    }
}
