use crate::canvas::model::Rgba;
use crate::canvas::raster::RgbaBuffer;

/// Paint a stroke segment by walking the line with Bresenham and stamping a
/// round brush at every covered cell. Both endpoints are stamped, which is
/// what gives the stroke its round caps.
pub fn draw_segment(
    start: (i32, i32),
    end: (i32, i32),
    color: Rgba,
    stroke_width: u32,
    buffer: &mut RgbaBuffer,
) {
    let mut x0 = start.0;
    let mut y0 = start.1;
    let x1 = end.0;
    let y1 = end.1;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        draw_brush((x0, y0), color, stroke_width, buffer);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Stamp a filled disc of the stroke width centered on `center`.
pub fn draw_brush(center: (i32, i32), color: Rgba, stroke_width: u32, buffer: &mut RgbaBuffer) {
    let radius = (stroke_width.saturating_sub(1) / 2) as i32;
    for y in (center.1 - radius)..=(center.1 + radius) {
        for x in (center.0 - radius)..=(center.0 + radius) {
            let dx = x - center.0;
            let dy = y - center.1;
            if dx * dx + dy * dy <= radius * radius {
                set_pixel(buffer, x, y, color);
            }
        }
    }
}

fn set_pixel(buffer: &mut RgbaBuffer, x: i32, y: i32, color: Rgba) {
    if x < 0 || y < 0 || x >= buffer.width as i32 || y >= buffer.height as i32 {
        return;
    }
    let idx = ((y as u32 * buffer.width + x as u32) * 4) as usize;
    buffer.pixels[idx] = color.r;
    buffer.pixels[idx + 1] = color.g;
    buffer.pixels[idx + 2] = color.b;
    buffer.pixels[idx + 3] = color.a;
}
