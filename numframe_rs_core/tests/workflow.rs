#![cfg(all(feature = "stats", feature = "random"))]

use anyhow::Result;
use approx::assert_relative_eq;
use numframe_core::{random::RandomFrameGenerator, DataFrame, DataVector};

#[test]
fn test_generate_transform_and_describe() -> Result<()> {
    let mut generator = RandomFrameGenerator::gaussian(0., 1.)?;
    let df = generator.generate(2024, 50, ["x", "y", "z"])?;

    let df = df.compute_column("total", |row| row.values().iter().sum())?;
    for i in 0..df.row_count() {
        let row = df.get_row(i)?;
        let expected = row.get_value("x")? + row.get_value("y")? + row.get_value("z")?;
        assert_relative_eq!(row.get_value("total")?, expected, epsilon = 1e-12);
    }

    let positive = df.select(|row| row.get_value("x").map_or(false, |x| x > 0.));
    assert!(positive.row_count() <= df.row_count());
    assert!(positive.get_column("x")?.values().iter().all(|&x| x > 0.));

    let projected = positive.project(&["total", "x"]);
    assert_eq!(projected.column_names(), &["x", "total"]);

    let description = df.statistics().describe("total")?;
    assert_eq!(description.n, 50);
    let sums = df.summarize("sums", |acc, x| acc + x);
    assert_relative_eq!(
        description.sum,
        sums.get_value("total")?,
        epsilon = 1e-9
    );
    let r = df.statistics().pearsons_correlation("x", "total")?;
    assert!((-1.0..=1.0).contains(&r));
    Ok(())
}

#[test]
fn test_vectors_round_trip_through_maps() -> Result<()> {
    let df = DataFrame::from_rows(["A", "B"], vec![vec![1., 2.], vec![3., 4.]])?;
    let vectors: Vec<DataVector> = df
        .get_rows()
        .into_iter()
        .map(DataVector::from)
        .chain(df.get_columns().into_iter().map(DataVector::from))
        .collect();
    for vector in &vectors {
        for (entry, value) in vector.as_map() {
            assert_eq!(vector.get_value(&entry)?, value);
        }
    }
    let column = vectors.iter().find(|v| !v.is_row() && v.name() == "B");
    assert_eq!(column.map(|v| v.values().to_vec()), Some(vec![2., 4.]));
    Ok(())
}
