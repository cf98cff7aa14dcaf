use image::{DynamicImage, RgbaImage};
use tracing::debug;

// Decoded symbol
//------------------------------------------------------------------------------

/// Pixel coordinates of the located code, clockwise from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corners {
    pub top_left: (i32, i32),
    pub top_right: (i32, i32),
    pub bottom_right: (i32, i32),
    pub bottom_left: (i32, i32),
}

/// Text payload lifted from one QR symbol, with its location in the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSymbol {
    pub text: String,
    pub corners: Corners,
}

// Decoding
//------------------------------------------------------------------------------

/// Decodes the first readable QR symbol from a raw RGBA frame.
///
/// Pure function over the pixel input; used identically for live camera
/// frames and uploaded stills. Malformed buffers (zero dimensions, length
/// shorter than `width * height * 4`) yield `None`; a decode miss is never
/// an error, the caller just moves on to the next frame.
pub fn decode_rgba(width: u32, height: u32, rgba: &[u8]) -> Option<DecodedSymbol> {
    let frame = RgbaImage::from_raw(width, height, rgba.to_vec())?;
    decode_image(&DynamicImage::ImageRgba8(frame))
}

/// Decodes the first readable QR symbol from an already-loaded image.
pub fn decode_image(img: &DynamicImage) -> Option<DecodedSymbol> {
    let gray = img.to_luma8();
    if gray.width() == 0 || gray.height() == 0 {
        return None;
    }

    let mut prepared = rqrr::PreparedImage::prepare(gray);
    let grids = prepared.detect_grids();
    debug!(candidates = grids.len(), "located grid candidates");

    for grid in &grids {
        match grid.decode() {
            Ok((_, text)) => {
                let [tl, tr, br, bl] = grid.bounds;
                return Some(DecodedSymbol {
                    text,
                    corners: Corners {
                        top_left: (tl.x, tl.y),
                        top_right: (tr.x, tr.y),
                        bottom_right: (br.x, br.y),
                        bottom_left: (bl.x, bl.y),
                    },
                });
            }
            Err(err) => debug!(%err, "grid candidate failed to decode"),
        }
    }

    None
}

#[cfg(test)]
mod decoder_tests {
    use image::{DynamicImage, GrayImage, Luma};
    use qrcode::{Color, QrCode};

    use super::{decode_image, decode_rgba};

    // Renders a synthetic symbol: black on white, 8px modules, 4-module
    // quiet zone.
    fn render_qr(payload: &str) -> DynamicImage {
        let code = QrCode::new(payload.as_bytes()).unwrap();
        let modules = code.to_colors();
        let width = code.width();

        let scale = 8u32;
        let margin = 4u32;
        let side = (width as u32 + 2 * margin) * scale;
        let mut img = GrayImage::from_pixel(side, side, Luma([255]));

        for (i, module) in modules.iter().enumerate() {
            if *module == Color::Dark {
                let mx = (i % width) as u32 + margin;
                let my = (i / width) as u32 + margin;
                for dy in 0..scale {
                    for dx in 0..scale {
                        img.put_pixel(mx * scale + dx, my * scale + dy, Luma([0]));
                    }
                }
            }
        }

        DynamicImage::ImageLuma8(img)
    }

    #[test]
    fn test_round_trip_through_pixels() {
        let img = render_qr("550e8400-e29b-41d4-a716-446655440000");
        let symbol = decode_image(&img).expect("synthetic symbol decodes");
        assert_eq!(symbol.text, "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn test_corners_form_an_upright_quad() {
        let img = render_qr("welqo");
        let symbol = decode_image(&img).unwrap();
        let c = symbol.corners;
        assert!(c.top_left.0 < c.top_right.0);
        assert!(c.bottom_left.0 < c.bottom_right.0);
        assert!(c.top_left.1 < c.bottom_left.1);
        assert!(c.top_right.1 < c.bottom_right.1);
    }

    #[test]
    fn test_blank_frame_is_not_found() {
        let blank = DynamicImage::ImageLuma8(GrayImage::from_pixel(64, 64, Luma([255])));
        assert_eq!(decode_image(&blank), None);
    }

    #[test]
    fn test_malformed_buffers_are_not_found() {
        assert_eq!(decode_rgba(0, 0, &[]), None);
        assert_eq!(decode_rgba(16, 16, &[0u8; 7]), None);
        assert_eq!(decode_rgba(u32::MAX, u32::MAX, &[0u8; 64]), None);
    }

    #[test]
    fn test_rgba_frame_decodes() {
        let img = render_qr("pass");
        let rgba = img.to_rgba8();
        let (w, h) = (rgba.width(), rgba.height());
        let symbol = decode_rgba(w, h, rgba.as_raw()).expect("rgba frame decodes");
        assert_eq!(symbol.text, "pass");
    }
}
