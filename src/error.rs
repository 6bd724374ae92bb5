use thiserror::Error;
use tone_scale::{PaletteError, RecordFailure};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),

    #[error("Record failed: {0}")]
    Record(#[from] RecordFailure),
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tone_scale::ToneError;

    #[test]
    fn test_app_error_config() {
        let error = AppError::Config("bad scope".to_string());
        assert_eq!(error.to_string(), "Config error: bad scope");
    }

    #[test]
    fn test_app_error_palette() {
        let error: AppError = PaletteError::TooSmall {
            len: 3,
            required: 11,
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Palette error: anchor palette needs at least 11 colors, got 3"
        );
    }

    #[test]
    fn test_app_error_record() {
        let error: AppError = RecordFailure {
            photo_id: "face.jpg".to_string(),
            error: ToneError::EmptyTable,
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Record failed: face.jpg: reference table is empty"
        );
    }

    #[test]
    fn test_app_error_from_yaml() {
        let yaml_error = serde_yaml::from_str::<Vec<u8>>("{").unwrap_err();
        let error: AppError = yaml_error.into();
        match error {
            AppError::Config(_) => {}
            _ => panic!("Expected Config variant"),
        }
    }

    #[test]
    fn test_app_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: AppError = io.into();
        assert_eq!(error.to_string(), "IO error: missing");
    }
}
