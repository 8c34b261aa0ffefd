//! Plain-text point sets: one `x,y` pair per line.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::Point;

/// Errors from reading or writing point files.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PointIoError {
    /// The underlying reader, writer or file failed.
    #[error("point file i/o failed: {0}")]
    Io(#[from] io::Error),

    /// A non-blank line that is not two comma-separated numbers.
    #[error(transparent)]
    Parse(#[from] Box<ParseError>),
}

/// Malformed line in a point file.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("line {line}: expected `x,y`, got {content:?}")]
pub struct ParseError {
    /// 1-based line number
    pub line: usize,
    /// Line as read, untrimmed
    pub content: String,
}

/// Reads points from `reader`. Blank lines are skipped.
///
/// # Errors
///
/// Returns [`PointIoError::Io`] if reading fails and [`PointIoError::Parse`]
/// for the first line that is not `x,y`.
///
/// # Example
/// ```
/// use gridnn::{Point, io::read_points};
/// let points = read_points("1,2\n-3.5, 4\n".as_bytes()).unwrap();
/// assert_eq!(points, vec![Point::new(1.0, 2.0), Point::new(-3.5, 4.0)]);
/// ```
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Point>, PointIoError> {
    let mut points = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let point = parse_point(trimmed).ok_or_else(|| {
            Box::new(ParseError {
                line: number + 1,
                content: line.clone(),
            })
        })?;
        points.push(point);
    }
    Ok(points)
}

fn parse_point(line: &str) -> Option<Point> {
    let (raw_x, raw_y) = line.split_once(',')?;
    let x = raw_x.trim().parse().ok()?;
    let y = raw_y.trim().parse().ok()?;
    Some(Point::new(x, y))
}

/// Writes one `x,y` line per point and flushes `writer`.
///
/// # Errors
///
/// Returns [`PointIoError::Io`] if writing or flushing fails.
pub fn write_points<W: Write>(mut writer: W, points: &[Point]) -> Result<(), PointIoError> {
    for point in points {
        writeln!(writer, "{},{}", point.x(), point.y())?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads a point file from `path`.
///
/// # Errors
///
/// Returns [`PointIoError::Io`] if the file cannot be opened or read, and
/// [`PointIoError::Parse`] for a malformed line.
pub fn load_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>, PointIoError> {
    let file = File::open(path)?;
    read_points(BufReader::new(file))
}

/// Writes `points` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`PointIoError::Io`] if the file cannot be created or written.
pub fn save_points<P: AsRef<Path>>(path: P, points: &[Point]) -> Result<(), PointIoError> {
    let file = File::create(path)?;
    write_points(BufWriter::new(file), points)
}
