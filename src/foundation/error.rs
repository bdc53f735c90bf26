pub type CinescrollResult<T> = Result<T, CinescrollError>;

#[derive(thiserror::Error, Debug)]
pub enum CinescrollError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("timeline error: {0}")]
    Timeline(String),

    #[error("template error: {0}")]
    Template(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CinescrollError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }

    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            CinescrollError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            CinescrollError::timeline("x")
                .to_string()
                .contains("timeline error:")
        );
        assert!(
            CinescrollError::template("x")
                .to_string()
                .contains("template error:")
        );
        assert!(
            CinescrollError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = CinescrollError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
