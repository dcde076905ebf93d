use super::DataFrame;
use crate::df::{ColumnVector, RowVector};
use crate::error::Result;
use ndarray::{ArrayView1, Axis};

impl DataFrame {
    pub fn get_value(&self, row: usize, column: &str) -> Result<f64> {
        self.check_row(row)?;
        let j = self.column_position(column)?;
        Ok(self.values[[row, j]])
    }

    /// overwrites a single cell, which is then visible through every accessor
    pub fn set_value(&mut self, row: usize, column: &str, value: f64) -> Result<()> {
        self.check_row(row)?;
        let j = self.column_position(column)?;
        self.values[[row, j]] = value;
        Ok(())
    }

    pub fn get_row(&self, row: usize) -> Result<RowVector> {
        self.check_row(row)?;
        Ok(RowVector::for_row(
            row,
            self.columns.clone(),
            self.values.row(row).to_vec(),
        ))
    }

    pub fn get_column(&self, column: &str) -> Result<ColumnVector> {
        Ok(ColumnVector::new(column, self.column_view(column)?.to_vec()))
    }

    pub fn get_rows(&self) -> Vec<RowVector> {
        self.values
            .axis_iter(Axis(0))
            .enumerate()
            .map(|(i, row)| RowVector::for_row(i, self.columns.clone(), row.to_vec()))
            .collect()
    }

    pub fn get_columns(&self) -> Vec<ColumnVector> {
        self.columns
            .iter()
            .zip(self.values.axis_iter(Axis(1)))
            .map(|(name, column)| ColumnVector::new(name, column.to_vec()))
            .collect()
    }

    pub(crate) fn column_view(&self, column: &str) -> Result<ArrayView1<f64>> {
        let j = self.column_position(column)?;
        Ok(self.values.column(j))
    }
}

#[cfg(test)]
mod tests {
    use super::super::meta::tests::get_test_df;
    use crate::df::row_name;
    use crate::error::FrameError;

    #[test]
    fn test_get_value() {
        let df = get_test_df();
        assert_eq!(df.get_value(0, "A").unwrap(), 1.);
        assert_eq!(df.get_value(2, "B").unwrap(), 8.);
        assert_eq!(
            df.get_value(3, "A"),
            Err(FrameError::RowOutOfRange { index: 3, rows: 3 })
        );
        assert_eq!(
            df.get_value(0, "D"),
            Err(FrameError::UnknownColumn("D".to_string()))
        );
    }

    #[test]
    fn test_row_index_checked_before_column() {
        let df = get_test_df();
        assert_eq!(
            df.get_value(5, "D"),
            Err(FrameError::RowOutOfRange { index: 5, rows: 3 })
        );
    }

    #[test]
    fn test_set_value() {
        let mut df = get_test_df();
        df.set_value(1, "C", -1.5).unwrap();
        assert_eq!(df.get_value(1, "C").unwrap(), -1.5);
        assert_eq!(df.get_row(1).unwrap().get_value("C").unwrap(), -1.5);
        assert_eq!(df.get_column("C").unwrap().values(), &[3., -1.5, 9.]);
    }

    #[test]
    fn test_failed_set_value_leaves_frame_untouched() {
        let mut df = get_test_df();
        let before = df.clone();
        assert!(df.set_value(3, "A", 0.).is_err());
        assert!(df.set_value(0, "Z", 0.).is_err());
        assert_eq!(df, before);
    }

    #[test]
    fn test_get_row() {
        let df = get_test_df();
        let row = df.get_row(1).unwrap();
        assert_eq!(row.name(), "row_1");
        assert_eq!(row.entry_names(), &["A", "B", "C"]);
        assert_eq!(row.values(), &[4., 5., 6.]);
        assert_eq!(
            df.get_row(3),
            Err(FrameError::RowOutOfRange { index: 3, rows: 3 })
        );
    }

    #[test]
    fn test_get_column() {
        let df = get_test_df();
        let column = df.get_column("B").unwrap();
        assert_eq!(column.name(), "B");
        assert_eq!(column.entry_names(), vec!["row_0", "row_1", "row_2"]);
        assert_eq!(column.values(), &[2., 5., 8.]);
        assert_eq!(
            df.get_column("b"),
            Err(FrameError::UnknownColumn("b".to_string()))
        );
    }

    #[test]
    fn test_vectors_are_detached() {
        let mut df = get_test_df();
        let row = df.get_row(0).unwrap();
        let column = df.get_column("A").unwrap();
        df.set_value(0, "A", 100.).unwrap();
        assert_eq!(row.get_value("A").unwrap(), 1.);
        assert_eq!(column.get(0).unwrap(), 1.);
    }

    #[test]
    fn test_get_rows_and_columns() {
        let df = get_test_df();
        let rows = df.get_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].name(), "row_2");
        assert_eq!(rows[2].values(), &[7., 8., 9.]);
        let columns = df.get_columns();
        let names: Vec<&str> = columns.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(columns[0].values(), &[1., 4., 7.]);
    }

    #[test]
    fn test_as_map_matches_get_value() {
        let df = get_test_df();
        for i in 0..df.row_count() {
            for (name, value) in df.get_row(i).unwrap().as_map() {
                assert_eq!(df.get_value(i, &name).unwrap(), value);
            }
        }
        for name in df.column_names() {
            let column = df.get_column(name).unwrap();
            let map = column.as_map();
            assert_eq!(map.len(), df.row_count());
            for i in 0..df.row_count() {
                assert_eq!(map[&row_name(i)], df.get_value(i, name).unwrap());
                assert_eq!(column.get(i).unwrap(), df.get_value(i, name).unwrap());
            }
        }
    }
}
