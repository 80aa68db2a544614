use std::time::Instant;

use tracing::{debug, trace};

use crate::core::{
    Axis, AxisControls, DataExtent, RawRow, ScaleType, VariableMeta, ViewState, autoscale_bounds,
    intercept_view_bounds,
};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{
    FitChartEngineConfig, RecomputePass, RecomputeScheduler, StatusMessage, build_render_frame,
};

/// Main orchestration facade consumed by host applications.
///
/// `FitChartEngine` owns the input rows and the view state, runs one full
/// recompute pass per user action and hands the resulting frame to the
/// renderer. Cell edits are debounced; every other action syncs immediately
/// and supersedes any pending debounced pass.
pub struct FitChartEngine<R: Renderer> {
    renderer: R,
    config: FitChartEngineConfig,
    view: ViewState,
    rows: Vec<RawRow>,
    pass: RecomputePass,
    scheduler: RecomputeScheduler,
}

impl<R: Renderer> FitChartEngine<R> {
    pub fn new(renderer: R, config: FitChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;

        let mut view = ViewState::new();
        view.set_title(&config.title);
        view.set_variable_meta(Axis::X, &config.x_meta);
        view.set_variable_meta(Axis::Y, &config.y_meta);
        view.set_scale_type(Axis::X, config.x_scale_type);
        view.set_scale_type(Axis::Y, config.y_scale_type);

        let rows = vec![RawRow::empty(); config.blank_row_count];
        let scheduler = RecomputeScheduler::new(config.debounce_window());

        Ok(Self {
            renderer,
            config,
            view,
            rows,
            pass: RecomputePass::default(),
            scheduler,
        })
    }

    #[must_use]
    pub fn config(&self) -> &FitChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    /// Returns a detached copy of the view state.
    #[must_use]
    pub fn current_view_state(&self) -> ViewState {
        self.view.clone()
    }

    #[must_use]
    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    /// Result of the last completed pass.
    #[must_use]
    pub fn last_pass(&self) -> &RecomputePass {
        &self.pass
    }

    #[must_use]
    pub fn status(&self) -> &StatusMessage {
        &self.pass.status
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn has_pending_recompute(&self) -> bool {
        self.scheduler.is_pending()
    }

    #[must_use]
    pub fn pending_recompute_deadline(&self) -> Option<Instant> {
        self.scheduler.deadline()
    }

    /// Recomputes from the current rows and view state and redraws.
    pub fn plot(&mut self) -> ChartResult<()> {
        self.recompute_and_sync()
    }

    /// Replaces the whole table.
    pub fn set_rows(&mut self, rows: Vec<RawRow>) -> ChartResult<()> {
        debug!(count = rows.len(), "set rows");
        self.rows = rows;
        self.recompute_and_sync()
    }

    pub fn push_row(&mut self, row: RawRow) -> ChartResult<()> {
        self.rows.push(row);
        trace!(count = self.rows.len(), "push row");
        self.recompute_and_sync()
    }

    pub fn remove_row(&mut self, index: usize) -> ChartResult<RawRow> {
        self.check_row_index(index)?;
        let removed = self.rows.remove(index);
        trace!(index, count = self.rows.len(), "remove row");
        self.recompute_and_sync()?;
        Ok(removed)
    }

    /// Stores a cell edit and schedules a debounced pass at `now`.
    ///
    /// The edit is visible in `rows()` immediately; the chart catches up on
    /// the first `poll` after the debounce window or on `flush`.
    pub fn edit_cell(
        &mut self,
        index: usize,
        column: Axis,
        text: impl Into<String>,
        now: Instant,
    ) -> ChartResult<()> {
        self.check_row_index(index)?;
        self.rows[index].set_cell(column, text);
        self.scheduler.request(now);
        Ok(())
    }

    /// Runs the pending debounced pass if it is due at `now`.
    ///
    /// Returns whether a pass ran.
    pub fn poll(&mut self, now: Instant) -> ChartResult<bool> {
        if !self.scheduler.take_due(now) {
            return Ok(false);
        }
        self.recompute_and_sync()?;
        Ok(true)
    }

    /// Runs the pending debounced pass immediately, if any.
    pub fn flush(&mut self) -> ChartResult<bool> {
        if !self.scheduler.take_pending() {
            return Ok(false);
        }
        self.recompute_and_sync()?;
        Ok(true)
    }

    /// Empties the table back to blank rows and clears series, label and status.
    pub fn clear(&mut self) -> ChartResult<()> {
        self.rows = vec![RawRow::empty(); self.config.blank_row_count];
        debug!(blank_rows = self.rows.len(), "clear table");
        self.recompute_and_sync()
    }

    pub fn set_title(&mut self, title: &str) -> ChartResult<()> {
        self.view.set_title(title);
        self.recompute_and_sync()
    }

    pub fn set_variable_meta(&mut self, axis: Axis, meta: &VariableMeta) -> ChartResult<()> {
        self.view.set_variable_meta(axis, meta);
        debug!(axis = axis.id(), label = %self.view.axis_label(axis), "set variable meta");
        self.recompute_and_sync()
    }

    pub fn set_axis_bounds(
        &mut self,
        axis: Axis,
        min: Option<f64>,
        max: Option<f64>,
    ) -> ChartResult<()> {
        self.view.set_axis_bounds(axis, min, max);
        self.recompute_and_sync()
    }

    pub fn set_scale_type(&mut self, axis: Axis, scale_type: ScaleType) -> ChartResult<()> {
        self.view.set_scale_type(axis, scale_type);
        self.recompute_and_sync()
    }

    /// Applies the axis control panel: scale types and bounds for both axes.
    pub fn apply_axes(&mut self, controls: AxisControls) -> ChartResult<()> {
        self.view.apply_axes(controls);
        let x = self.view.axis(Axis::X);
        let y = self.view.axis(Axis::Y);
        debug!(
            x_scale = %x.scale_type(),
            x_min = ?x.min(),
            x_max = ?x.max(),
            y_scale = %y.scale_type(),
            y_min = ?y.min(),
            y_max = ?y.max(),
            "apply axes"
        );
        self.recompute_and_sync()
    }

    /// Fits both axes to the plotted points with padding.
    ///
    /// Returns `false` without touching the view when nothing is plotted; the
    /// chart is still redrawn from the latest rows.
    pub fn autoscale(&mut self) -> ChartResult<bool> {
        self.refresh();
        let bounds = autoscale_bounds(&self.pass.points, self.config.autoscale_tuning);
        self.apply_derived_bounds(bounds, "autoscale")
    }

    /// Widens both axes so the y axis and the fitted intercept are in view.
    ///
    /// Returns `false` without touching the view when there is no fit; the
    /// chart is still redrawn from the latest rows.
    pub fn show_y_intercept(&mut self) -> ChartResult<bool> {
        self.refresh();
        let bounds = self.pass.fit.and_then(|fit| {
            intercept_view_bounds(&self.pass.points, fit, self.config.autoscale_tuning)
        });
        self.apply_derived_bounds(bounds, "show y-intercept")
    }

    /// Asks the chart to drop its own pan/zoom.
    pub fn reset_zoom(&mut self) -> ChartResult<()> {
        trace!("reset zoom");
        self.renderer.reset_zoom()
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn apply_derived_bounds(
        &mut self,
        bounds: Option<DataExtent>,
        action: &'static str,
    ) -> ChartResult<bool> {
        let Some(bounds) = bounds else {
            debug!(action, "no points for derived bounds");
            // The refresh may have absorbed a pending edit; draw its result.
            self.sync()?;
            return Ok(false);
        };
        self.view.apply_autoscale(bounds);
        debug!(
            action,
            x_min = bounds.x.min,
            x_max = bounds.x.max,
            y_min = bounds.y.min,
            y_max = bounds.y.max,
            "derived bounds applied"
        );
        self.recompute_and_sync()?;
        Ok(true)
    }

    fn check_row_index(&self, index: usize) -> ChartResult<()> {
        if index >= self.rows.len() {
            return Err(ChartError::RowOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        Ok(())
    }

    /// Recomputes the pass from the latest rows and view state. Any pending
    /// debounced request is absorbed since this pass already covers it.
    fn refresh(&mut self) {
        self.scheduler.cancel();
        self.pass = RecomputePass::compute(&self.rows, &self.view, self.config.annotation_tuning);
    }

    fn sync(&mut self) -> ChartResult<()> {
        let frame = build_render_frame(&self.view, &self.pass);
        self.renderer.render(&frame)
    }

    fn recompute_and_sync(&mut self) -> ChartResult<()> {
        self.refresh();
        self.sync()
    }
}
