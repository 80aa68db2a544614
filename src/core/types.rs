use serde::{Deserialize, Serialize};

/// One plottable sample. Both coordinates are finite by construction when
/// produced through `extract_points`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Chart axis selector. Also used as the column selector of the input table,
/// where column `X` holds x cells and column `Y` holds y cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const ALL: [Self; 2] = [Self::X, Self::Y];

    /// Lowercase identifier, used as the fallback symbol.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }

    /// Uppercase identifier, used as the fallback variable name.
    #[must_use]
    pub const fn upper_id(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
        }
    }
}

/// One row of the input table, kept as raw cell text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawRow {
    pub x_text: String,
    pub y_text: String,
}

impl RawRow {
    #[must_use]
    pub fn new(x_text: impl Into<String>, y_text: impl Into<String>) -> Self {
        Self {
            x_text: x_text.into(),
            y_text: y_text.into(),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cell(&self, column: Axis) -> &str {
        match column {
            Axis::X => &self.x_text,
            Axis::Y => &self.y_text,
        }
    }

    pub fn set_cell(&mut self, column: Axis, text: impl Into<String>) {
        match column {
            Axis::X => self.x_text = text.into(),
            Axis::Y => self.y_text = text.into(),
        }
    }
}
