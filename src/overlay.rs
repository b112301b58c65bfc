use image::{Rgb, RgbImage};
use std::path::Path;

use crate::error::Result;
use crate::mapper::CoordinateMapper;
use crate::pipeline::FrameOutput;
use crate::types::{FaceFrame, Point2};

const LANDMARK_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const IRIS_COLOR: Rgb<u8> = Rgb([0, 255, 255]);
const WINK_COLOR: Rgb<u8> = Rgb([255, 215, 0]);

/// Parse "#RRGGBB", red on anything else
pub fn parse_hex(hex: &str) -> Rgb<u8> {
    // Byte slicing below needs ASCII; anything else is user error
    if hex.len() == 7 && hex.is_ascii() && hex.starts_with('#') {
        let r = u8::from_str_radix(&hex[1..3], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[3..5], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[5..7], 16).unwrap_or(0);
        Rgb([r, g, b])
    } else {
        Rgb([255, 0, 0])
    }
}

/// Draws the virtual box and tracking state onto a camera-sized canvas.
pub struct Overlay {
    width: u32,
    height: u32,
    box_color: Rgb<u8>,
    dot_size: u32,
}

impl Overlay {
    pub fn new(width: u32, height: u32, box_color_hex: &str, dot_size: u32) -> Self {
        Self {
            width,
            height,
            box_color: parse_hex(box_color_hex),
            dot_size: dot_size.max(1),
        }
    }

    fn put(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
            img.put_pixel(x as u32, y as u32, color);
        }
    }

    fn to_pixels(&self, p: Point2) -> (i32, i32) {
        ((p.x * self.width as f64) as i32, (p.y * self.height as f64) as i32)
    }

    fn draw_rect(img: &mut RgbImage, (x1, y1): (i32, i32), (x2, y2): (i32, i32), color: Rgb<u8>) {
        for x in x1..=x2 {
            Self::put(img, x, y1, color);
            Self::put(img, x, y2, color);
        }
        for y in y1..=y2 {
            Self::put(img, x1, y, color);
            Self::put(img, x2, y, color);
        }
    }

    fn draw_dot(&self, img: &mut RgbImage, (x, y): (i32, i32), color: Rgb<u8>) {
        let size = self.dot_size as i32;
        for dy in 0..size {
            for dx in 0..size {
                Self::put(img, x + dx, y + dy, color);
            }
        }
    }

    fn draw_crosshair(img: &mut RgbImage, (x, y): (i32, i32), size: i32, color: Rgb<u8>) {
        for i in -size..=size {
            Self::put(img, x + i, y, color);
            Self::put(img, x, y + i, color);
        }
    }

    /// Black canvas with the virtual box, face landmarks and iris marker.
    /// The iris marker turns gold on frames that produced a wink.
    pub fn render(&self, mapper: &CoordinateMapper, frame: &FaceFrame, output: &FrameOutput) -> RgbImage {
        let mut img = RgbImage::new(self.width, self.height);

        let (top_left, bottom_right) = mapper.get_box_corners(self.width, self.height);
        Self::draw_rect(&mut img, top_left, bottom_right, self.box_color);

        if let Some(landmarks) = &frame.face_landmarks {
            for p in &landmarks.points {
                self.draw_dot(&mut img, self.to_pixels(*p), LANDMARK_COLOR);
            }
        }

        if let Some(iris) = output.iris {
            let color = if output.click().is_some() { WINK_COLOR } else { IRIS_COLOR };
            Self::draw_crosshair(&mut img, self.to_pixels(iris), 6, color);
        }

        img
    }

    pub fn save(img: &RgbImage, path: &Path) -> Result<()> {
        img.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gestures::GestureController;
    use crate::pipeline::GazePipeline;
    use crate::simulate::synthetic_face;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#FF0000"), Rgb([255, 0, 0]));
        assert_eq!(parse_hex("#00FF00"), Rgb([0, 255, 0]));
        assert_eq!(parse_hex("#0000FF"), Rgb([0, 0, 255]));
        assert_eq!(parse_hex("invalid"), Rgb([255, 0, 0])); // Fallback
        assert_eq!(parse_hex("#a\u{e9}000"), Rgb([255, 0, 0])); // 7 bytes, not ASCII
        assert_eq!(parse_hex("#\u{e9}\u{e9}\u{e9}"), Rgb([255, 0, 0]));
    }

    #[test]
    fn draws_box_at_mapper_corners() {
        let mapper = CoordinateMapper::new(1920, 1080, 0.2).unwrap();
        let overlay = Overlay::new(640, 480, "#00FF00", 2);
        let img = overlay.render(&mapper, &FaceFrame::default(), &FrameOutput::default());

        let green = Rgb([0, 255, 0]);
        assert_eq!(*img.get_pixel(128, 96), green);
        assert_eq!(*img.get_pixel(512, 384), green);
        assert_eq!(*img.get_pixel(320, 96), green);
        assert_eq!(*img.get_pixel(320, 240), Rgb([0, 0, 0]));
    }

    #[test]
    fn marks_the_iris() {
        let mapper = CoordinateMapper::new(1920, 1080, 0.2).unwrap();
        let pipeline = GazePipeline::new(mapper, GestureController::default());
        let frame = FaceFrame {
            face_landmarks: Some(synthetic_face(0.5, 0.5)),
            ..Default::default()
        };
        let output = pipeline.process(&frame);
        let overlay = Overlay::new(640, 480, "#00FF00", 1);
        let img = overlay.render(&mapper, &frame, &output);

        let iris = output.iris.unwrap();
        let (x, y) = ((iris.x * 640.0) as u32, (iris.y * 480.0) as u32);
        // Crosshair arm, clear of the landmark dot at the center
        assert_eq!(*img.get_pixel(x, y + 5), IRIS_COLOR);
    }
}
