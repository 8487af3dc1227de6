use std::path::PathBuf;

pub type IconResult<T> = Result<T, IconError>;

#[derive(thiserror::Error, Debug)]
pub enum IconError {
    #[error("invalid icon size {size}: {reason}")]
    InvalidSize { size: u32, reason: &'static str },

    #[error("io error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("encode error at '{path}': {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl IconError {
    pub fn invalid_size(size: u32, reason: &'static str) -> Self {
        Self::InvalidSize { size, reason }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn encode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Encode {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_size_and_reason() {
        let err = IconError::invalid_size(0, "size must be at least 1");
        let msg = err.to_string();
        assert!(msg.contains("invalid icon size 0"));
        assert!(msg.contains("size must be at least 1"));
    }

    #[test]
    fn io_preserves_path_and_source() {
        let base = std::io::Error::other("boom");
        let err = IconError::io("out/icon-16.png", base);
        let msg = err.to_string();
        assert!(msg.contains("out/icon-16.png"));
        assert!(msg.contains("boom"));
    }
}
