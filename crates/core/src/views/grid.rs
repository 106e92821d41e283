use techcal_protocol::{BlockGeometry, Point, Rect, Viewport};

/// Pixels per CSS `rem`, used to turn the layout gutter into pixels.
pub const REM_PX: f64 = 16.0;

/// Fixed chrome around the columns, in viewport units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    /// Width of the time axis on the left.
    pub axis_width: f64,
    /// Height of the technician name row.
    pub header_height: f64,
    /// Horizontal gap subtracted from each block's width.
    pub gutter: f64,
    /// Axis labels closer together than this are thinned out.
    pub min_label_spacing: f64,
    pub font_size: f64,
}

impl GridMetrics {
    /// Metrics for a pixel surface (canvas, SVG, browser).
    pub fn pixels(gutter_rem: f64) -> Self {
        Self {
            axis_width: 48.0,
            header_height: 24.0,
            gutter: gutter_rem * REM_PX,
            min_label_spacing: 40.0,
            font_size: 11.0,
        }
    }

    /// Metrics for a terminal, where one unit is one character cell.
    pub fn cells() -> Self {
        Self {
            axis_width: 6.0,
            header_height: 1.0,
            gutter: 1.0,
            min_label_spacing: 2.0,
            font_size: 1.0,
        }
    }
}

/// Where each technician column sits inside a viewport.
///
/// Shared by the renderer and by pointer handling so a click maps back to
/// exactly the column and time it was drawn at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGrid {
    viewport: Viewport,
    metrics: GridMetrics,
    columns: usize,
}

impl BoardGrid {
    pub fn new(viewport: Viewport, columns: usize, metrics: GridMetrics) -> Self {
        Self {
            viewport,
            metrics,
            columns,
        }
    }

    pub fn metrics(&self) -> &GridMetrics {
        &self.metrics
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Area below the header and right of the axis that holds the columns.
    pub fn body(&self) -> Rect {
        let vp = &self.viewport;
        Rect::new(
            vp.x + self.metrics.axis_width,
            vp.y + self.metrics.header_height,
            (vp.width - self.metrics.axis_width).max(0.0),
            (vp.height - self.metrics.header_height).max(0.0),
        )
    }

    /// The time axis strip, level with the body.
    pub fn axis(&self) -> Rect {
        let body = self.body();
        Rect::new(self.viewport.x, body.y, self.metrics.axis_width, body.h)
    }

    pub fn column_width(&self) -> f64 {
        if self.columns == 0 {
            return 0.0;
        }
        self.body().w / self.columns as f64
    }

    /// Body area of column `index`.
    pub fn column_rect(&self, index: usize) -> Option<Rect> {
        if index >= self.columns {
            return None;
        }
        let body = self.body();
        let w = self.column_width();
        Some(Rect::new(body.x + w * index as f64, body.y, w, body.h))
    }

    /// Header cell of column `index`.
    pub fn header_rect(&self, index: usize) -> Option<Rect> {
        let column = self.column_rect(index)?;
        Some(Rect::new(
            column.x,
            self.viewport.y,
            column.w,
            self.metrics.header_height,
        ))
    }

    /// Column under horizontal position `x`, if any.
    pub fn column_at(&self, x: f64) -> Option<usize> {
        let body = self.body();
        let w = self.column_width();
        if w <= 0.0 || x < body.x || x >= body.right() {
            return None;
        }
        let index = ((x - body.x) / w).floor() as usize;
        (index < self.columns).then_some(index)
    }

    /// Column under `point`, only when the point is inside the body.
    pub fn hit(&self, point: Point) -> Option<usize> {
        if !self.body().contains(point) {
            return None;
        }
        self.column_at(point.x)
    }

    /// Absolute rectangle of a block in column `index`, gutter removed.
    pub fn block_rect(&self, index: usize, geometry: &BlockGeometry) -> Option<Rect> {
        let column = self.column_rect(index)?;
        let w = (geometry.width / 100.0 * column.w - self.metrics.gutter).max(0.0);
        Some(Rect::new(
            column.x + geometry.left / 100.0 * column.w,
            column.y + geometry.top / 100.0 * column.h,
            w,
            geometry.height / 100.0 * column.h,
        ))
    }
}
