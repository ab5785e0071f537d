use polars::prelude::*;

use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::error::{BoostError, Result};
use super::sample_struct::Sample;


/// A struct that returns a training set `Vec<Sample>`.
/// Using this struct, one can read a CSV/SVMLIGHT format file.
/// Other formats are not supported yet.
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use weakboost::prelude::*;
///
/// let filename = "/path/to/csv/file.csv";
/// let samples = SampleReader::new()
///     .file(filename)
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
}


impl<P, S> SampleReader<P, S> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            has_header: false,
            target: None,
        }
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P, S> Default for SampleReader<P, S> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that is used for the class label.
    /// Each item of the column must be a non-negative integer.
    /// If no column is set, the last column is the label.
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file based on the arguments.
    /// A file with extension `.csv` is read as CSV,
    /// anything else as SVMLight.
    pub fn read(self) -> Result<Vec<Sample>> {
        let file = self.file
            .ok_or_else(|| std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "the file name for csv/svmlight is not set",
            ))?;
        let file = file.as_ref();

        if file.extension().is_some_and(|ext| ext == "csv") {
            let target = self.target.as_ref().map(S::as_ref);
            read_csv(file, self.has_header, target)
        } else {
            read_svmlight(file)
        }
    }
}


/// Read a CSV file into samples.
/// `target` names the label column (requires a header);
/// `None` takes the last column.
pub fn read_csv<P>(file: P, has_header: bool, target: Option<&str>)
    -> Result<Vec<Sample>>
    where P: AsRef<Path>
{
    let file = File::open(file)?;
    let mut lines = BufReader::new(file).lines();

    let mut target_pos = None;
    if has_header {
        if let Some(header) = lines.next() {
            let header = header?;
            let names = header.split(',')
                .map(|name| name.trim().to_string())
                .collect::<Vec<_>>();
            target_pos = match target {
                Some(t) => Some(
                    names.iter()
                        .position(|name| name == t)
                        .ok_or_else(|| BoostError::InvalidLabel(t.to_string()))?
                ),
                None => None,
            };
        }
    }

    let mut samples = Vec::new();
    for line in lines {
        let line = line?;
        if line.trim().is_empty() { continue; }

        let mut values = line.split(',')
            .map(|word| word.trim())
            .collect::<Vec<_>>();
        let pos = target_pos.unwrap_or(values.len() - 1);
        if pos >= values.len() {
            return Err(BoostError::DimensionMismatch {
                expected: pos + 1,
                actual: values.len(),
            });
        }
        let y = parse_label(values.remove(pos))?;
        let x = values.into_iter()
            .map(|word| parse_value(word))
            .collect::<Result<Vec<f32>>>()?;

        samples.push(Sample::new(x, y));
    }
    Ok(samples)
}


/// Read a SVMLight format file into samples.
///
/// Each line of SVMLight format file has the following form:
/// ```txt
/// y index:value index:value
/// ```
/// where `y` is the class label and `index` is the 0-indexed attribute.
/// Missing attributes are `0`.
pub fn read_svmlight<P: AsRef<Path>>(file: P) -> Result<Vec<Sample>> {
    let file = File::open(file)?;
    let lines = BufReader::new(file).lines();

    let mut rows = Vec::new();
    let mut n_attributes = 0_usize;
    for line in lines {
        let line = line?;
        let mut words = line.split_whitespace();
        let y = match words.next() {
            Some(word) => parse_label(word)?,
            None => continue,
        };

        let row = words.map(index_and_value)
            .collect::<Result<Vec<_>>>()?;
        n_attributes = row.iter()
            .map(|(i, _)| i + 1)
            .fold(n_attributes, usize::max);
        rows.push((y, row));
    }

    let samples = rows.into_iter()
        .map(|(y, row)| {
            let mut x = vec![0f32; n_attributes];
            row.into_iter().for_each(|(i, v)| { x[i] = v; });
            Sample::new(x, y)
        })
        .collect();
    Ok(samples)
}


/// Convert a `polars::DataFrame` and its label column into samples.
/// Every column of `data` is cast to `f32`; nulls become `0`.
pub fn from_dataframe(data: &DataFrame, target: &Series)
    -> Result<Vec<Sample>>
{
    let n_sample = data.height();
    if target.len() != n_sample {
        return Err(BoostError::DimensionMismatch {
            expected: n_sample,
            actual: target.len(),
        });
    }

    let columns = data.get_columns()
        .iter()
        .map(|series| -> Result<Vec<f32>> {
            let series = series.cast(&DataType::Float32)?;
            let values = series.f32()?
                .into_iter()
                .map(|v| v.unwrap_or(0f32))
                .collect();
            Ok(values)
        })
        .collect::<Result<Vec<_>>>()?;

    let target = target.cast(&DataType::Float64)?;
    let labels = target.f64()?
        .into_iter()
        .map(|y| match y {
            Some(y) => label_from_f64(y),
            None => Err(BoostError::InvalidLabel("null".into())),
        })
        .collect::<Result<Vec<usize>>>()?;

    let samples = labels.into_iter()
        .enumerate()
        .map(|(row, y)| {
            let x = columns.iter()
                .map(|col| col[row])
                .collect::<Vec<f32>>();
            Sample::new(x, y)
        })
        .collect();
    Ok(samples)
}


fn parse_value(word: &str) -> Result<f32> {
    word.parse::<f32>()
        .map_err(|_| BoostError::InvalidToken {
            field: "attribute",
            token: word.to_string(),
        })
}


fn parse_label(word: &str) -> Result<usize> {
    let y = word.trim()
        .parse::<f64>()
        .map_err(|_| BoostError::InvalidLabel(word.to_string()))?;
    label_from_f64(y)
}


fn label_from_f64(y: f64) -> Result<usize> {
    if y >= 0f64 && y.trunc() == y {
        Ok(y as usize)
    } else {
        Err(BoostError::InvalidLabel(y.to_string()))
    }
}


/// Parse `index:value` into `(usize, f32)`.
fn index_and_value(word: &str) -> Result<(usize, f32)> {
    let invalid = || BoostError::InvalidToken {
        field: "index:value",
        token: word.to_string(),
    };
    let (i, x) = word.split_once(':').ok_or_else(invalid)?;
    let i = i.trim().parse::<usize>().map_err(|_| invalid())?;
    let x = x.trim().parse::<f32>().map_err(|_| invalid())?;

    Ok((i, x))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_must_be_non_negative_integers() {
        assert_eq!(parse_label("3").unwrap(), 3);
        assert_eq!(parse_label("2.0").unwrap(), 2);
        assert!(parse_label("-1").is_err());
        assert!(parse_label("0.5").is_err());
        assert!(parse_label("class").is_err());
    }


    #[test]
    fn svmlight_pairs() {
        assert_eq!(index_and_value("3:0.5").unwrap(), (3, 0.5));
        assert!(index_and_value("3").is_err());
    }


    #[test]
    fn reads_csv_with_named_target() {
        let mut path = std::env::temp_dir();
        path.push("weakboost_reader_test.csv");
        std::fs::write(&path, "a,class,b\n1.0,0,2.0\n-1.0,1,0.5\n").unwrap();

        let samples = SampleReader::new()
            .file(&path)
            .has_header(true)
            .target_feature("class")
            .read()
            .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].x(), &[1.0, 2.0]);
        assert_eq!(samples[1].y(), 1);
    }


    #[test]
    fn converts_dataframe() {
        let s1 = Series::new("x", &[10.0, 14.0, 15.0]);
        let s2 = Series::new("y", &[5.0, 8.0, 3.0]);
        let df = DataFrame::new(vec![s1, s2]).unwrap();
        let target = Series::new("class", &[0i64, 2, 1]);

        let samples = from_dataframe(&df, &target).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[1].x(), &[14.0, 8.0]);
        assert_eq!(samples[1].y(), 2);
    }
}
