use enigo::{Coordinate, Direction, Enigo, Mouse, Settings};

use crate::error::{Error, Result};
use crate::types::{Button, ScreenPoint};

/// Where screen points and clicks end up.
pub trait PointerSink {
    fn name(&self) -> String;
    fn move_to(&mut self, point: ScreenPoint) -> Result<()>;
    fn click(&mut self, button: Button) -> Result<()>;
}

/// Keep a point on screen. The mapper may emit `width`/`height` itself
/// at its upper clamp, which is one pixel past the last column/row.
pub fn clamp_to_screen(point: ScreenPoint, width: u32, height: u32) -> ScreenPoint {
    let max_x = (width as i32 - 1).max(0);
    let max_y = (height as i32 - 1).max(0);
    ScreenPoint {
        x: point.x.clamp(0, max_x),
        y: point.y.clamp(0, max_y),
    }
}

/// True when the cursor sits in the top-left corner and this program did
/// not put it there. A gaze mapped to (0, 0) must not abort the session.
pub fn fail_safe_tripped(cursor: (i32, i32), last_injected: Option<ScreenPoint>) -> bool {
    cursor == (0, 0) && last_injected != Some(ScreenPoint::new(0, 0))
}

/// Injects real OS pointer events.
pub struct EnigoPointer {
    enigo: Enigo,
    width: u32,
    height: u32,
    fail_safe: bool,
    last_injected: Option<ScreenPoint>,
}

impl EnigoPointer {
    pub fn new(fail_safe: bool) -> Result<Self> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| Error::Injection(format!("failed to connect to input system: {:?}", e)))?;
        let mut pointer = Self {
            enigo,
            width: 0,
            height: 0,
            fail_safe,
            last_injected: None,
        };
        let (w, h) = pointer.display_size()?;
        pointer.width = w;
        pointer.height = h;
        Ok(pointer)
    }

    /// Size of the main display as the input system sees it
    pub fn display_size(&self) -> Result<(u32, u32)> {
        let (w, h) = self
            .enigo
            .main_display()
            .map_err(|e| Error::Injection(format!("failed to query display size: {:?}", e)))?;
        Ok((w.max(0) as u32, h.max(0) as u32))
    }

    /// Restrict moves to a screen size other than the detected one
    pub fn set_bounds(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn check_fail_safe(&self) -> Result<()> {
        if !self.fail_safe {
            return Ok(());
        }
        let cursor = self
            .enigo
            .location()
            .map_err(|e| Error::Injection(format!("failed to read cursor: {:?}", e)))?;
        if fail_safe_tripped(cursor, self.last_injected) {
            return Err(Error::FailSafe);
        }
        Ok(())
    }
}

impl PointerSink for EnigoPointer {
    fn name(&self) -> String {
        format!("OS pointer ({}x{})", self.width, self.height)
    }

    fn move_to(&mut self, point: ScreenPoint) -> Result<()> {
        self.check_fail_safe()?;
        let p = clamp_to_screen(point, self.width, self.height);
        self.enigo
            .move_mouse(p.x, p.y, Coordinate::Abs)
            .map_err(|e| Error::Injection(format!("{:?}", e)))?;
        self.last_injected = Some(p);
        Ok(())
    }

    fn click(&mut self, button: Button) -> Result<()> {
        self.check_fail_safe()?;
        let button = match button {
            Button::Left => enigo::Button::Left,
            Button::Right => enigo::Button::Right,
        };
        self.enigo
            .button(button, Direction::Click)
            .map_err(|e| Error::Injection(format!("{:?}", e)))
    }
}

/// Dry-run sink: logs what would have been injected.
pub struct LogPointer {
    width: u32,
    height: u32,
}

impl LogPointer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl PointerSink for LogPointer {
    fn name(&self) -> String {
        format!("Dry run ({}x{})", self.width, self.height)
    }

    fn move_to(&mut self, point: ScreenPoint) -> Result<()> {
        let p = clamp_to_screen(point, self.width, self.height);
        log::debug!("move -> ({}, {})", p.x, p.y);
        Ok(())
    }

    fn click(&mut self, button: Button) -> Result<()> {
        log::info!("click {:?}", button);
        Ok(())
    }
}
