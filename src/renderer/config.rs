//! Configuration for SVG rendering

/// Default number of decimal places for path coordinates (micrometers)
pub const DEFAULT_PRECISION: usize = 3;

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Document `<title>`
    pub title: String,

    /// Document `<desc>`
    pub description: String,

    /// Decimal places used for marker path coordinates
    pub precision: usize,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            title: "Plus texture".to_string(),
            description: "Generated texture for FAST corner detector".to_string(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the document description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the coordinate precision
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}
