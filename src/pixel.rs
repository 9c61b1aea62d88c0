use crate::Cel;
use image::{Rgba, RgbaImage};

// From Aseprite file spec:
// PIXEL: One pixel, depending on the image pixel format:
// Grayscale: BYTE[2], each pixel have 2 bytes in the order Value, Alpha.
// Indexed: BYTE, Each pixel uses 1 byte (the index).
// RGBA: BYTE[4], each pixel have 4 bytes in this order Red, Green, Blue, Alpha.
//
// Indexed pixels are not resolved against the palette; the index is used as a
// gray value.

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Scale a pixel's alpha by a cel opacity: `alpha * opacity / 255`, rounded
/// down.
pub fn apply_opacity(alpha: u8, opacity: u8) -> u8 {
    ((alpha as u16 * opacity as u16) / 255) as u8
}

fn bytes_per_pixel(color_depth: u16) -> usize {
    match (color_depth / 8) as usize {
        0 => 1,
        n => n,
    }
}

fn resolve(src: &[u8], color_depth: u16) -> Rgba<u8> {
    match color_depth {
        32 => Rgba([src[0], src[1], src[2], src[3]]),
        16 => {
            let (value, alpha) = (src[0], src[1]);
            Rgba([value, value, value, alpha])
        }
        8 => {
            let value = src[0];
            Rgba([value, value, value, 255])
        }
        _ => TRANSPARENT,
    }
}

/// Paint a cel onto a canvas.
///
/// Pixels replace whatever is on the canvas; there is no blending between
/// cels, so later cels win where they overlap. Pixels outside the canvas and
/// pixels the cel has no data for are left untouched.
pub fn composite(canvas: &mut RgbaImage, cel: &Cel, color_depth: u16) {
    let bpp = bytes_per_pixel(color_depth);
    let (canvas_width, canvas_height) = canvas.dimensions();
    let x0 = cel.x as i32;
    let y0 = cel.y as i32;
    let width = cel.width as usize;

    for local_y in 0..cel.height as usize {
        let y = y0 + local_y as i32;
        for local_x in 0..width {
            let offset = (local_y * width + local_x) * bpp;
            let src = match cel.pixels.get(offset..offset + bpp) {
                Some(src) => src,
                None => continue,
            };
            let x = x0 + local_x as i32;
            // Cels may extend past the canvas.
            if x < 0 || y < 0 || x >= canvas_width as i32 || y >= canvas_height as i32 {
                continue;
            }
            let mut color = resolve(src, color_depth);
            color.0[3] = apply_opacity(color.0[3], cel.opacity);
            canvas.put_pixel(x as u32, y as u32, color);
        }
    }
}
