use crate::core::{MatrixError, Result};
use crate::render::TableRenderer;

pub const CELL_WIDTH_ENV: &str = "RUSTMATRIX_CELL_WIDTH";
pub const LOG_ENV: &str = "RUSTMATRIX_LOG";
pub const DEFAULT_LOG_FILTER: &str = "rustmatrix=info";

/// Runtime settings of the command-line tool
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Width of one rendered cell
    pub cell_width: usize,

    /// `tracing` filter directive
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(CELL_WIDTH_ENV) {
            config.cell_width = match raw.trim().parse::<usize>() {
                Ok(width) if width > 0 => width,
                _ => {
                    return Err(MatrixError::Config(format!(
                        "{} must be a positive integer, got '{}'",
                        CELL_WIDTH_ENV, raw
                    )));
                }
            };
        }

        if let Some(filter) = lookup(LOG_ENV).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        Ok(config)
    }

    pub fn cell_width(mut self, width: usize) -> Self {
        self.cell_width = width;
        self
    }

    pub fn renderer(&self) -> TableRenderer {
        TableRenderer::new(self.cell_width)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cell_width: TableRenderer::DEFAULT_CELL_WIDTH,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
