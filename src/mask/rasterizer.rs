//! Polygon scan conversion
//!
//! Pixels are sampled at their centres. For each row the crossings of the
//! horizontal line through the row centre with the polygon edges are
//! collected, sorted, and turned into spans according to the fill rule. Edges
//! are treated as half-open in y (the lower end is included, the upper end is
//! not), so a vertex shared by two edges is counted once. The outline is then
//! drawn over the fill as straight pixel lines between consecutive vertices.

use image::{GrayImage, Luma};

use super::options::{MaskOptions, OutlineMode};

/// Rasterize a closed polygon in pixel coordinates into a 0/1 mask
///
/// # Arguments
/// * `pixels` - Polygon vertices in pixel space; the last connects back to the first
/// * `dims` - Mask size as (width, height)
/// * `options` - Fill rule and outline handling
///
/// # Returns
/// A single-channel image holding 1 inside the polygon and 0 elsewhere
pub fn rasterize_polygon(pixels: &[(i64, i64)], dims: (u32, u32), options: &MaskOptions) -> GrayImage {
    let mut mask = GrayImage::new(dims.0, dims.1);

    if pixels.len() >= 3 {
        fill_polygon(&mut mask, pixels, options);
    }

    let outline_value = match options.outline {
        OutlineMode::Background => 0,
        OutlineMode::Foreground => 1,
    };
    for (i, &start) in pixels.iter().enumerate() {
        let end = pixels[(i + 1) % pixels.len()];
        draw_line(&mut mask, start, end, outline_value);
    }

    mask
}

fn fill_polygon(mask: &mut GrayImage, pixels: &[(i64, i64)], options: &MaskOptions) {
    let mut crossings: Vec<(f64, i32)> = Vec::with_capacity(pixels.len());

    for row in 0..mask.height() {
        let yc = row as f64 + 0.5;
        crossings.clear();

        for (i, &(ax, ay)) in pixels.iter().enumerate() {
            let (bx, by) = pixels[(i + 1) % pixels.len()];
            let (ax, ay, bx, by) = (ax as f64, ay as f64, bx as f64, by as f64);

            let direction = if ay <= yc && yc < by {
                1
            } else if by <= yc && yc < ay {
                -1
            } else {
                continue;
            };
            let x = ax + (yc - ay) * (bx - ax) / (by - ay);
            crossings.push((x, direction));
        }

        crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut count = 0;
        let mut winding = 0;
        let mut span_start = None;
        for &(x, direction) in &crossings {
            count += 1;
            winding += direction;
            let inside = options.fill_rule.is_inside(count, winding);
            match (span_start, inside) {
                (None, true) => span_start = Some(x),
                (Some(start), false) => {
                    fill_span(mask, row, start, x);
                    span_start = None;
                }
                _ => {}
            }
        }
    }
}

/// Set every pixel of `row` whose centre lies in `[start, end)`
fn fill_span(mask: &mut GrayImage, row: u32, start: f64, end: f64) {
    let width = mask.width() as f64;
    let first = (start - 0.5).ceil().max(0.0).min(width) as u32;
    let last = (end - 0.5).ceil().max(0.0).min(width) as u32;

    for x in first..last {
        mask.put_pixel(x, row, Luma([1]));
    }
}

/// Bresenham line, clipped to the mask
fn draw_line(mask: &mut GrayImage, start: (i64, i64), end: (i64, i64), value: u8) {
    let Some((start, end)) = clip_segment(start, end, mask.dimensions()) else {
        return;
    };

    let (mut x, mut y) = start;
    let dx = (end.0 - x).abs();
    let dy = -(end.1 - y).abs();
    let step_x = if x < end.0 { 1 } else { -1 };
    let step_y = if y < end.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if x >= 0 && y >= 0 && x < mask.width() as i64 && y < mask.height() as i64 {
            mask.put_pixel(x as u32, y as u32, Luma([value]));
        }
        if (x, y) == end {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += step_x;
        }
        if e2 <= dx {
            err += dx;
            y += step_y;
        }
    }
}

/// Liang-Barsky clip of a segment to the frame `[-1, width] x [-1, height]`
///
/// The frame keeps a one pixel margin so that clipped endpoints round onto
/// pixels just outside the mask rather than onto its border. Endpoints inside
/// the frame are returned unchanged; `None` means the segment misses it.
fn clip_segment(start: (i64, i64), end: (i64, i64), dims: (u32, u32)) -> Option<((i64, i64), (i64, i64))> {
    let (x0, y0) = (start.0 as f64, start.1 as f64);
    let dx = end.0 as f64 - x0;
    let dy = end.1 as f64 - y0;
    let (min_x, min_y) = (-1.0, -1.0);
    let (max_x, max_y) = (dims.0 as f64, dims.1 as f64);

    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;
    for (p, q) in [(-dx, x0 - min_x), (dx, max_x - x0), (-dy, y0 - min_y), (dy, max_y - y0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let clipped_start = if t0 == 0.0 {
        start
    } else {
        ((x0 + t0 * dx).round() as i64, (y0 + t0 * dy).round() as i64)
    };
    let clipped_end = if t1 == 1.0 {
        end
    } else {
        ((x0 + t1 * dx).round() as i64, (y0 + t1 * dy).round() as i64)
    };
    Some((clipped_start, clipped_end))
}
