// report.rs - CSV result files.
//
// One header line, then one line per trial:
//
//     multiplier,trial_index,max_streak_length,streak_start_offset,elapsed_seconds
//     1,1,12,0,0.000004211
//
// A missing streak start is written as -1.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::driver::{BenchRecord, RecordSink};
use crate::error::{BenchError, Result};
use crate::streak::Streak;

pub const HEADER: &str =
    "multiplier,trial_index,max_streak_length,streak_start_offset,elapsed_seconds";

/// Fractional digits written for `elapsed_seconds`.
pub const TIME_PRECISION: usize = 9;

/// Record sink writing CSV to any `Write`.
pub struct CsvReport<W: Write> {
    out: W,
    path: Option<PathBuf>,
}

impl CsvReport<BufWriter<File>> {
    /// Create (or truncate) `path` and write the header.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| BenchError::write(path, e))?;
        let mut report = CsvReport {
            out: BufWriter::new(file),
            path: Some(path.to_path_buf()),
        };
        report.write_header()?;
        Ok(report)
    }
}

impl<W: Write> CsvReport<W> {
    /// Wrap `out` and write the header.
    pub fn new(out: W) -> Result<Self> {
        let mut report = CsvReport { out, path: None };
        report.write_header()?;
        Ok(report)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_header(&mut self) -> Result<()> {
        let res = writeln!(self.out, "{HEADER}");
        self.check(res)
    }

    fn check(&self, res: io::Result<()>) -> Result<()> {
        res.map_err(|e| match &self.path {
            Some(path) => BenchError::write(path, e),
            None => BenchError::Sink(e),
        })
    }
}

impl<W: Write> RecordSink for CsvReport<W> {
    fn record(&mut self, r: &BenchRecord) -> Result<()> {
        let res = writeln!(
            self.out,
            "{},{},{},{},{:.*}",
            r.multiplier,
            r.trial,
            r.streak.length,
            r.streak.start_or_sentinel(),
            TIME_PRECISION,
            r.elapsed_secs()
        );
        self.check(res)
    }

    fn finish(&mut self) -> Result<()> {
        let res = self.out.flush();
        self.check(res)
    }
}

/// Read a results file written by [`CsvReport`].
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<BenchRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| BenchError::read(path, e))?;
    parse_records(BufReader::new(file), path)
}

/// Parse CSV results from `reader`; `path` is only used in error messages.
pub fn parse_records<R: BufRead>(reader: R, path: &Path) -> Result<Vec<BenchRecord>> {
    let malformed = |line: usize, reason: String| BenchError::MalformedRecord {
        path: path.to_path_buf(),
        line,
        reason,
    };

    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| BenchError::read(path, e))?;
        let lineno = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if lineno == 1 {
            if line.split(',').next() != Some("multiplier") {
                return Err(malformed(lineno, "missing header".to_string()));
            }
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 5 {
            return Err(malformed(
                lineno,
                format!("expected 5 fields, found {}", fields.len()),
            ));
        }
        let int = |i: usize, name: &str| {
            fields[i]
                .trim()
                .parse::<usize>()
                .map_err(|e| malformed(lineno, format!("{name}: {e}")))
        };
        let multiplier = int(0, "multiplier")?;
        let trial = int(1, "trial_index")?;
        let length = int(2, "max_streak_length")?;
        let start = fields[3]
            .trim()
            .parse::<i64>()
            .map_err(|e| malformed(lineno, format!("streak_start_offset: {e}")))?;
        let secs = fields[4]
            .trim()
            .parse::<f64>()
            .map_err(|e| malformed(lineno, format!("elapsed_seconds: {e}")))?;
        let elapsed = Duration::try_from_secs_f64(secs)
            .map_err(|e| malformed(lineno, format!("elapsed_seconds: {e}")))?;

        let start = match start {
            -1 => None,
            s if s >= 0 => Some(s as usize),
            s => return Err(malformed(lineno, format!("negative streak start {s}"))),
        };
        records.push(BenchRecord {
            multiplier,
            trial,
            streak: Streak { length, start },
            elapsed,
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(multiplier: usize, trial: usize, start: Option<usize>, nanos: u64) -> BenchRecord {
        BenchRecord {
            multiplier,
            trial,
            streak: Streak {
                length: if start.is_some() { 2 } else { 0 },
                start,
            },
            elapsed: Duration::from_nanos(nanos),
        }
    }

    #[test]
    fn writes_header_then_rows() {
        let mut report = CsvReport::new(Vec::new()).unwrap();
        report.record(&record(1, 1, Some(6), 4_211)).unwrap();
        report.record(&record(1, 2, None, 1_500_000_000)).unwrap();
        report.finish().unwrap();
        let out = String::from_utf8(report.into_inner()).unwrap();
        assert_eq!(
            out,
            format!("{HEADER}\n1,1,2,6,0.000004211\n1,2,0,-1,1.500000000\n")
        );
    }

    #[test]
    fn parse_written_output() {
        let mut report = CsvReport::new(Vec::new()).unwrap();
        report.record(&record(3, 7, Some(12), 987_654_321)).unwrap();
        report.record(&record(3, 8, None, 1)).unwrap();
        let bytes = report.into_inner();
        let records = parse_records(&bytes[..], Path::new("mem.csv")).unwrap();
        assert_eq!(records.len(), 2);
        let first = &records[0];
        assert_eq!((first.multiplier, first.trial), (3, 7));
        assert_eq!(first.streak, Streak { length: 2, start: Some(12) });
        assert!((first.elapsed_secs() - 0.987_654_321).abs() < 1e-9);
        assert_eq!(records[1].streak, Streak::NONE);
    }

    #[test]
    fn parse_accepts_original_header() {
        let csv = "multiplier,run,max_length,shift,time\n1,1,4,0,0.0000010\n";
        let records = parse_records(csv.as_bytes(), Path::new("old.csv")).unwrap();
        assert_eq!(records[0].streak.length, 4);
        assert!((records[0].elapsed_secs() - 1e-6).abs() < 1e-9);
    }

    #[test]
    fn parse_rejects_missing_header() {
        let err = parse_records("1,1,4,0,0.1\n".as_bytes(), Path::new("x.csv")).unwrap_err();
        assert!(err.to_string().contains("missing header"));
    }

    #[test]
    fn parse_rejects_short_row() {
        let csv = format!("{HEADER}\n1,1,4,0\n");
        let err = parse_records(csv.as_bytes(), Path::new("x.csv")).unwrap_err();
        match err {
            BenchError::MalformedRecord { line, .. } => assert_eq!(line, 2),
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn parse_rejects_negative_time() {
        let csv = format!("{HEADER}\n1,1,4,0,-0.5\n");
        assert!(parse_records(csv.as_bytes(), Path::new("x.csv")).is_err());
    }

    #[test]
    fn write_failure_is_sink_error() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        assert!(matches!(CsvReport::new(Broken), Err(BenchError::Sink(_))));
    }
}
