use crate::canvas::history::SnapshotHistory;
use crate::canvas::model::{Rgba, StrokeStyle};
use crate::canvas::raster::RgbaBuffer;
use crate::canvas::render::draw_segment;
use anyhow::{Context, Result};
use base64::{engine::general_purpose, Engine as _};
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};

/// Pointer input as delivered by the host. Mouse events carry device-native
/// surface offsets; touch contacts carry page coordinates and must be
/// normalized against the surface's on-page offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerInput {
    Mouse { offset_x: i32, offset_y: i32 },
    Touch { client_x: i32, client_y: i32 },
}

/// The raster drawing surface. Owns the pixel buffer exclusively; the undo
/// history only ever holds deep copies of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    raster: RgbaBuffer,
    style: StrokeStyle,
    background: Rgba,
    page_offset: (i32, i32),
    last_point: Option<(i32, i32)>,
    drawing_ready: bool,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            raster: RgbaBuffer::new(width, height, Rgba::TRANSPARENT),
            style: StrokeStyle::default(),
            background: Rgba::BLACK,
            page_offset: (0, 0),
            last_point: None,
            drawing_ready: false,
        }
    }

    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.style.color = color;
    }

    pub fn set_background(&mut self, background: Rgba) {
        self.background = background;
    }

    pub fn set_page_offset(&mut self, offset: (i32, i32)) {
        self.page_offset = offset;
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    /// True once the first stroke has begun; the host paints the surface
    /// background from this point on.
    pub fn drawing_ready(&self) -> bool {
        self.drawing_ready
    }

    pub fn stroke_active(&self) -> bool {
        self.last_point.is_some()
    }

    pub fn width(&self) -> u32 {
        self.raster.width
    }

    pub fn height(&self) -> u32 {
        self.raster.height
    }

    pub fn raster(&self) -> &RgbaBuffer {
        &self.raster
    }

    /// Resolve either pointer shape to surface-local coordinates. Touch
    /// contacts are reported in page coordinates and need the surface's
    /// on-page offset subtracted; mouse events already carry local offsets.
    pub fn resolve_point(&self, input: PointerInput) -> (i32, i32) {
        match input {
            PointerInput::Mouse { offset_x, offset_y } => (offset_x, offset_y),
            PointerInput::Touch { client_x, client_y } => (
                client_x - self.page_offset.0,
                client_y - self.page_offset.1,
            ),
        }
    }

    /// Start a stroke: push the current raster onto the undo history, then
    /// open a path at the resolved point. No-op while a stroke is active.
    pub fn begin_stroke(&mut self, history: &mut SnapshotHistory, input: PointerInput) {
        if self.last_point.is_some() {
            tracing::debug!("begin_stroke ignored: stroke already active");
            return;
        }
        history.push(self.raster.clone());
        self.drawing_ready = true;
        self.last_point = Some(self.resolve_point(input));
    }

    /// Extend the active stroke to the resolved point, painting the segment
    /// immediately. No-op without an active stroke.
    pub fn extend_stroke(&mut self, input: PointerInput) {
        let Some(last) = self.last_point else {
            tracing::debug!("extend_stroke ignored: no active stroke");
            return;
        };
        let point = self.resolve_point(input);
        draw_segment(last, point, self.style.color, self.style.width, &mut self.raster);
        self.last_point = Some(point);
    }

    /// Close the active stroke. Idempotent.
    pub fn end_stroke(&mut self) {
        self.last_point = None;
    }

    /// Reallocate the raster to the new dimensions. Reallocation clears
    /// pixel content; callers needing continuity snapshot-and-restore
    /// explicitly. An active stroke is ended.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.raster = RgbaBuffer::new(width, height, Rgba::TRANSPARENT);
        self.last_point = None;
    }

    /// Erase the raster back to the blank state.
    pub fn clear(&mut self) {
        self.raster.fill(Rgba::TRANSPARENT);
    }

    /// Replace the entire raster content with a snapshot, dimensions
    /// included. Used only by the undo history.
    pub(crate) fn apply_snapshot(&mut self, snapshot: RgbaBuffer) {
        self.raster = snapshot;
    }

    /// Encode the raster as a PNG. Pure read.
    pub fn export_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes)
            .write_image(
                &self.raster.pixels,
                self.raster.width,
                self.raster.height,
                ColorType::Rgba8,
            )
            .context("encode surface raster as png")?;
        Ok(bytes)
    }

    /// Encode the raster as a `data:image/png;base64,…` URL for transport.
    pub fn export_data_url(&self) -> Result<String> {
        let png = self.export_png()?;
        Ok(format!(
            "data:image/png;base64,{}",
            general_purpose::STANDARD.encode(png)
        ))
    }
}
