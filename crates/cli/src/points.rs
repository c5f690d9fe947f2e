//! Point-set files: CSV with `x` and `y` columns.

use anyhow::{bail, Context, Result};
use hull2d::Vec2;
use polars::prelude::*;
use std::fs;
use std::path::Path;

/// Read a point CSV. Integer columns are accepted and cast to `f64`.
pub fn read_points(path: &Path) -> Result<Vec<Vec2<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Vec2::new(x, y)),
            _ => bail!("{}: row {row} has a missing coordinate", path.display()),
        })
        .collect()
}

/// Write points as a CSV with an `x,y` header, creating parent dirs.
pub fn write_points(path: &Path, points: &[Vec2<f64>]) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let mut file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_integer_columns_in_file_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("square.csv");
        fs::write(&path, "x,y\n0,0\n4,0\n4,4\n0,4\n2,2\n").unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[1], Vec2::new(4.0, 0.0));
        assert_eq!(pts[4], Vec2::new(2.0, 2.0));
    }

    #[test]
    fn written_points_read_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("pts.csv");
        let pts = vec![
            Vec2::new(0.25, -1.5),
            Vec2::new(3.0, 0.125),
            Vec2::new(-2.0, 8.0),
        ];
        write_points(&path, &pts).unwrap();
        assert_eq!(read_points(&path).unwrap(), pts);
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "x,z\n0,0\n1,1\n").unwrap();
        assert!(read_points(&path).is_err());
    }
}
