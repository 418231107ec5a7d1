use std::fmt;

#[derive(Debug)]
pub enum RunionError {
    InvalidConfiguration(String),
    NoFit { available_width_en: f64 },
}

impl fmt::Display for RunionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunionError::InvalidConfiguration(message) => {
                write!(f, "invalid configuration: {}", message)
            }
            RunionError::NoFit { available_width_en } => {
                write!(
                    f,
                    "no column setup can be composed for an available width of {}en",
                    available_width_en
                )
            }
        }
    }
}

impl std::error::Error for RunionError {}
