use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayerError {
    #[error("no potion at inventory slot {index} (inventory holds {len})")]
    PotionIndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read player config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse player config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{stat} range is empty: min {min} > max {max}")]
    InvalidRange {
        stat: &'static str,
        min: u32,
        max: u32,
    },
    #[error("{stat} range must start above zero")]
    ZeroMinimum { stat: &'static str },
}
