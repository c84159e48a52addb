use std::{env, fs::{self, File}, io::{self, BufWriter}, path::{Path, PathBuf}};
use math::Vector;
use pedometer::{Pedometer, Reading, WINDOW_SIZE};

mod error;
use error::ReplayError;

static RESULTS_DIR: &str = "analysis";

/// One row of a recorded accelerometer log.
///
#[derive(Debug, PartialEq)]
struct Record {
    time: f32,
    sample: Vector,
}

/// Rows are either `time,x,y,z` or just `x,y,z`, in which case the row number stands in for the
/// time. `line` is only used for error reporting.
///
fn parse_record(row: usize, line: usize, values: &[f32]) -> Result<Record, ReplayError> {
    match values {
        [x, y, z] => Ok(Record { time: row as f32, sample: Vector::new(*x, *y, *z) }),
        [time, x, y, z, ..] => Ok(Record { time: *time, sample: Vector::new(*x, *y, *z) }),
        _ => Err(ReplayError::MalformedRecord { line, columns: values.len() }),
    }
}

fn write_reading<W: io::Write>(writer: &mut csv::Writer<W>, time: f32, reading: &Reading) -> Result<(), ReplayError> {
    writer.write_record(&[
        time.to_string(),
        (reading.initialized as u8).to_string(),
        (reading.step as u8).to_string(),
        reading.step_count.to_string(),
        reading.tilt.as_str().to_string(),
    ])?;
    Ok(())
}

/// Totals of a finished replay.
///
#[derive(Debug, PartialEq, Eq)]
struct Summary {
    samples: usize,
    steps: u64,
}

/// Feeds every row of `input` through a freshly started pedometer and writes one output row per
/// sample, header included.
///
fn replay<R: io::Read, W: io::Write>(input: R, output: W) -> Result<Summary, ReplayError> {
    let mut reader = csv::Reader::from_reader(input);
    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(["time", "initialized", "step", "step_count", "tilt"])?;

    let mut pedometer = Pedometer::<WINDOW_SIZE>::default();
    pedometer.start();

    // Loop over every line in the input CSV, the header is line 1.
    let mut samples = 0;
    for (row, result) in reader.deserialize::<Vec<f32>>().enumerate() {
        let values = result?;
        let record = parse_record(row, row + 2, &values)?;
        let reading = pedometer.process(&record.sample);
        write_reading(&mut writer, record.time, &reading)?;
        samples += 1;
    }
    writer.flush()?;

    Ok(Summary { samples, steps: pedometer.step_count() })
}

fn run() -> Result<(), ReplayError> {
    let args: Vec<String> = env::args().collect();
    let in_path = args.get(1).map(PathBuf::from).ok_or(ReplayError::MissingInput)?;
    let results_dir = args.get(2).map(String::as_str).unwrap_or(RESULTS_DIR);

    // Every input CSV file gets its own folder in the results directory.
    let name = in_path.file_stem().and_then(|stem| stem.to_str()).unwrap_or("replay");
    let out_dir = Path::new(results_dir).join(name);
    fs::create_dir_all(&out_dir)?;

    let input = File::open(&in_path)?;
    let output = BufWriter::new(File::create(out_dir.join("steps.csv"))?);
    let summary = replay(input, output)?;

    log::info!(
        "Replayed {} samples from {}, counted {} steps",
        summary.samples, in_path.display(), summary.steps
    );
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
