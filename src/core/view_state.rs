use serde::{Deserialize, Serialize};

use crate::core::extract::parse_cell;
use crate::core::{Axis, DataExtent, ScaleType, sanitize_optional_bound};

pub const DEFAULT_TITLE: &str = "Title";

/// Symbol, display name and units of one plotted variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableMeta {
    pub symbol: String,
    pub name: String,
    pub units: String,
}

impl VariableMeta {
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        units: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            units: units.into(),
        }
    }

    /// Session default for `axis`, e.g. `x` / `X-Variable` / `units`.
    #[must_use]
    pub fn default_for(axis: Axis) -> Self {
        Self::new(axis.id(), format!("{}-Variable", axis.upper_id()), "units")
    }

    /// Trims every field and fills blanks: symbol falls back to the axis id,
    /// name to the uppercase axis id. Units may stay empty.
    #[must_use]
    pub fn normalized(&self, axis: Axis) -> Self {
        let symbol = self.symbol.trim();
        let name = self.name.trim();
        Self {
            symbol: if symbol.is_empty() { axis.id() } else { symbol }.to_owned(),
            name: if name.is_empty() { axis.upper_id() } else { name }.to_owned(),
            units: self.units.trim().to_owned(),
        }
    }

    /// Axis title: `name (symbol) [units]`, omitting the parts that are empty.
    #[must_use]
    pub fn axis_label(&self) -> String {
        let mut label = match (self.name.is_empty(), self.symbol.is_empty()) {
            (false, false) => format!("{} ({})", self.name, self.symbol),
            (false, true) => self.name.clone(),
            (true, _) => self.symbol.clone(),
        };
        if !self.units.is_empty() {
            label.push_str(" [");
            label.push_str(&self.units);
            label.push(']');
        }
        label
    }
}

/// Scale type and explicit bounds of one axis.
///
/// Bounds on a logarithmic axis are always strictly positive when present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(from = "AxisStateRepr")]
pub struct AxisState {
    scale_type: ScaleType,
    min: Option<f64>,
    max: Option<f64>,
}

/// Wire form of `AxisState`; bounds are sanitized on the way in.
#[derive(Deserialize)]
struct AxisStateRepr {
    #[serde(default)]
    scale_type: ScaleType,
    min: Option<f64>,
    max: Option<f64>,
}

impl From<AxisStateRepr> for AxisState {
    fn from(repr: AxisStateRepr) -> Self {
        Self::new(repr.scale_type, repr.min, repr.max)
    }
}

impl AxisState {
    #[must_use]
    pub fn new(scale_type: ScaleType, min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            scale_type,
            min: sanitize_optional_bound(min, scale_type),
            max: sanitize_optional_bound(max, scale_type),
        }
    }

    #[must_use]
    pub fn scale_type(self) -> ScaleType {
        self.scale_type
    }

    #[must_use]
    pub fn min(self) -> Option<f64> {
        self.min
    }

    #[must_use]
    pub fn max(self) -> Option<f64> {
        self.max
    }

    fn set_bounds(&mut self, min: Option<f64>, max: Option<f64>) {
        self.min = sanitize_optional_bound(min, self.scale_type);
        self.max = sanitize_optional_bound(max, self.scale_type);
    }

    fn set_scale_type(&mut self, scale_type: ScaleType) {
        self.scale_type = scale_type;
        self.set_bounds(self.min, self.max);
    }
}

/// Control-panel values for one axis, as read by "apply axes".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AxisControl {
    pub scale_type: ScaleType,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl AxisControl {
    #[must_use]
    pub fn new(scale_type: ScaleType, min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            scale_type,
            min,
            max,
        }
    }

    /// Reads bound fields as text; anything unparsable counts as unset.
    #[must_use]
    pub fn parse(scale_type: ScaleType, min_text: &str, max_text: &str) -> Self {
        Self::new(scale_type, parse_cell(min_text), parse_cell(max_text))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AxisControls {
    pub x: AxisControl,
    pub y: AxisControl,
}

impl AxisControls {
    #[must_use]
    pub fn new(x: AxisControl, y: AxisControl) -> Self {
        Self { x, y }
    }
}

/// Single source of truth for title, axis metadata, scale types and bounds.
///
/// Every setter re-validates the affected axis, so the state never holds a
/// bound its scale type cannot display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ViewStateRepr")]
pub struct ViewState {
    title: String,
    x_meta: VariableMeta,
    y_meta: VariableMeta,
    x_axis: AxisState,
    y_axis: AxisState,
}

/// Wire form of `ViewState`, replayed through the setters on the way in.
#[derive(Deserialize)]
struct ViewStateRepr {
    title: String,
    x_meta: VariableMeta,
    y_meta: VariableMeta,
    x_axis: AxisState,
    y_axis: AxisState,
}

impl From<ViewStateRepr> for ViewState {
    fn from(repr: ViewStateRepr) -> Self {
        let mut view = Self::new();
        view.set_title(&repr.title);
        view.set_variable_meta(Axis::X, &repr.x_meta);
        view.set_variable_meta(Axis::Y, &repr.y_meta);
        view.x_axis = repr.x_axis;
        view.y_axis = repr.y_axis;
        view
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            x_meta: VariableMeta::default_for(Axis::X),
            y_meta: VariableMeta::default_for(Axis::Y),
            x_axis: AxisState::default(),
            y_axis: AxisState::default(),
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn axis(&self, axis: Axis) -> AxisState {
        match axis {
            Axis::X => self.x_axis,
            Axis::Y => self.y_axis,
        }
    }

    #[must_use]
    pub fn meta(&self, axis: Axis) -> &VariableMeta {
        match axis {
            Axis::X => &self.x_meta,
            Axis::Y => &self.y_meta,
        }
    }

    #[must_use]
    pub fn axis_label(&self, axis: Axis) -> String {
        self.meta(axis).axis_label()
    }

    /// Sets the graph title; a blank title resets to `DEFAULT_TITLE`.
    pub fn set_title(&mut self, title: &str) {
        let trimmed = title.trim();
        self.title = if trimmed.is_empty() {
            DEFAULT_TITLE
        } else {
            trimmed
        }
        .to_owned();
    }

    pub fn set_axis_bounds(&mut self, axis: Axis, min: Option<f64>, max: Option<f64>) {
        self.axis_mut(axis).set_bounds(min, max);
    }

    /// Switches the scale type and drops any bound the new type rejects.
    pub fn set_scale_type(&mut self, axis: Axis, scale_type: ScaleType) {
        self.axis_mut(axis).set_scale_type(scale_type);
    }

    pub fn set_variable_meta(&mut self, axis: Axis, meta: &VariableMeta) {
        let normalized = meta.normalized(axis);
        match axis {
            Axis::X => self.x_meta = normalized,
            Axis::Y => self.y_meta = normalized,
        }
    }

    /// Applies both axis controls at once; bounds are sanitized against the
    /// incoming scale type, not the previous one.
    pub fn apply_axes(&mut self, controls: AxisControls) {
        self.x_axis = AxisState::new(controls.x.scale_type, controls.x.min, controls.x.max);
        self.y_axis = AxisState::new(controls.y.scale_type, controls.y.min, controls.y.max);
    }

    /// Writes data-derived bounds to both axes, keeping their scale types.
    pub fn apply_autoscale(&mut self, bounds: DataExtent) {
        self.set_axis_bounds(Axis::X, Some(bounds.x.min), Some(bounds.x.max));
        self.set_axis_bounds(Axis::Y, Some(bounds.y.min), Some(bounds.y.max));
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut AxisState {
        match axis {
            Axis::X => &mut self.x_axis,
            Axis::Y => &mut self.y_axis,
        }
    }
}
