use std::{error::Error, fmt, io};


#[derive(Debug)]
pub enum ReplayError
{
    MissingInput,
    Io(io::Error),
    Csv(csv::Error),
    MalformedRecord { line: usize, columns: usize },
}

impl Error for ReplayError {}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingInput => write!(f, "Expected CSV file to read samples from"),
            Self::Io(err) => write!(f, "IO error: {}", err),
            Self::Csv(err) => write!(f, "CSV error: {}", err),
            Self::MalformedRecord { line, columns } => write!(f, "Line {} has {} columns, expected at least x,y,z", line, columns),
        }
    }
}

impl From<io::Error> for ReplayError
{
    fn from(err: io::Error) -> Self {
        ReplayError::Io(err)
    }
}

impl From<csv::Error> for ReplayError
{
    fn from(err: csv::Error) -> Self {
        ReplayError::Csv(err)
    }
}
