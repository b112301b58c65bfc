use crate::error::{Error, Result};
use crate::types::ScreenPoint;

/// Maps normalized gaze ratios onto screen pixels through the "virtual box".
///
/// With a margin of 0.2 only the ratio range 0.2..0.8 is stretched over the
/// whole screen, so small eye movements give full-screen pointer travel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    screen_w: u32,
    screen_h: u32,
    margin: f64,
}

impl CoordinateMapper {
    pub const DEFAULT_MARGIN: f64 = 0.2;

    pub fn new(screen_w: u32, screen_h: u32, margin: f64) -> Result<Self> {
        if screen_w == 0 || screen_h == 0 {
            return Err(Error::InvalidConfig(format!(
                "screen size must be non-zero, got {}x{}",
                screen_w, screen_h
            )));
        }
        if !margin.is_finite() || !(0.0..0.5).contains(&margin) {
            return Err(Error::InvalidConfig(format!(
                "virtual box margin must be in [0, 0.5), got {}",
                margin
            )));
        }
        Ok(Self {
            screen_w,
            screen_h,
            margin,
        })
    }

    /// Linear map of `value` from [margin, 1 - margin] onto [0, extent].
    /// Clamps explicitly at both ends; truncates toward zero.
    fn interp(&self, value: f64, extent: u32) -> i32 {
        let v_min = self.margin;
        let v_max = 1.0 - self.margin;
        let extent = extent as f64;

        if value.is_nan() || value <= v_min {
            return 0;
        }
        if value >= v_max {
            return extent as i32;
        }
        let slope = extent / (v_max - v_min);
        (slope * (value - v_min)) as i32
    }

    pub fn map_to_screen(&self, x_norm: f64, y_norm: f64) -> ScreenPoint {
        ScreenPoint {
            x: self.interp(x_norm, self.screen_w),
            y: self.interp(y_norm, self.screen_h),
        }
    }

    /// Pixel rectangle of the virtual box on a camera frame, for drawing only.
    pub fn get_box_corners(&self, frame_w: u32, frame_h: u32) -> ((i32, i32), (i32, i32)) {
        let (w, h) = (frame_w as f64, frame_h as f64);
        let x1 = (self.margin * w) as i32;
        let y1 = (self.margin * h) as i32;
        let x2 = ((1.0 - self.margin) * w) as i32;
        let y2 = ((1.0 - self.margin) * h) as i32;
        ((x1, y1), (x2, y2))
    }
}
