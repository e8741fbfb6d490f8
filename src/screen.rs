use std::io::{self, Write};

use rayon::prelude::*;

use crate::{tracer, Ray, Scene, Vec3};

/// Glyphs ordered from sparse (dark) to dense (bright)
pub const RAMP: &[u8] = b" .,:;ox%&#@";
/// Written as the max-value line of grayscale images
pub const PGM_MAX_VALUE: u16 = 256;
/// Blank rows printed after each ASCII frame
const FRAME_SEPARATOR_ROWS: usize = 2;

/// Quantizes an intensity to `0..=255`, where 255 is full brightness.
/// Negative and NaN intensities are black.
pub fn channel(intensity: f64) -> u8 {
    if !(intensity > 0.) {
        return 0;
    }
    (intensity * 255.).round().min(255.) as u8
}

pub fn glyph(intensity: f64) -> char {
    let level = channel(intensity) as usize * RAMP.len() / 256;
    RAMP[level] as char
}

pub struct Screen {
    pub width: usize,
    pub height: usize,
    /// Flat row-major buffer of intensities with length of `width * height`
    pub buffer: Box<[f64]>,
}
impl Screen {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            buffer: vec![0.; width * height].into(),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.iter_mut().for_each(|cell| *cell = 0.);
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Writes outside of the screen are ignored.
    pub fn set(&mut self, x: usize, y: usize, intensity: f64) {
        if let Some(i) = self.index(x, y) {
            self.buffer[i] = intensity;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        self.index(x, y).map(|i| self.buffer[i])
    }

    pub fn rows(&self) -> std::slice::ChunksExact<f64> {
        self.buffer.chunks_exact(self.width.max(1))
    }

    pub fn par_rows_mut(&mut self) -> rayon::slice::ChunksExactMut<f64> {
        self.buffer.par_chunks_exact_mut(self.width.max(1))
    }

    /// Clears the screen and traces one ray per cell.
    pub fn render(&mut self, scene: &Scene, camera: &Camera) {
        self.clear();
        let (width, height) = (self.width, self.height);
        self.par_rows_mut().enumerate().for_each(|(y, row)| {
            for (x, cell) in row.iter_mut().enumerate() {
                let ray = camera.get_ray(x, y, width, height);
                *cell = tracer::trace(&ray, scene);
            }
        });
    }

    /// One line of glyphs per row, followed by blank rows separating frames.
    pub fn write_ascii<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut line = String::with_capacity(self.width);
        for row in self.rows() {
            line.clear();
            line.extend(row.iter().map(|&i| glyph(i)));
            writeln!(out, "{}", line)?;
        }

        let blank = " ".repeat(self.width);
        for _ in 0..FRAME_SEPARATOR_ROWS {
            writeln!(out, "{}", blank)?;
        }
        Ok(())
    }

    /// Plain text grayscale image (`P2`).
    pub fn write_pgm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "P2")?;
        writeln!(out, "{} {}", self.width, self.height)?;
        writeln!(out, "{}", PGM_MAX_VALUE)?;
        for row in self.rows() {
            for (x, &intensity) in row.iter().enumerate() {
                if x > 0 {
                    out.write_all(b" ")?;
                }
                write!(out, "{}", channel(intensity))?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Projection {
    /// Every ray starts at the camera origin and passes through the image plane at `z = 1`
    Perspective,
    /// Parallel rays along `+z`, starting on the image plane at `z = 0`
    Orthographic,
}

#[derive(Copy, Clone, Debug)]
pub struct Camera {
    pub origin: Vec3,
    pub projection: Projection,
}
impl Camera {
    pub fn new(origin: Vec3, projection: Projection) -> Self {
        Self { origin, projection }
    }

    /// Ray through cell `(x, y)` of a `width` by `height` screen.
    /// Cells map onto `[-1, 1]` on both axes with `+y` pointing up.
    pub fn get_ray(&self, x: usize, y: usize, width: usize, height: usize) -> Ray {
        let i = to_unit_range(x, width);
        let j = -to_unit_range(y, height);
        match self.projection {
            Projection::Perspective => Ray::new(self.origin, Vec3::new(i, j, 1.)),
            Projection::Orthographic => {
                Ray::new(self.origin + Vec3::new(i, j, 0.), Vec3::UNIT_Z)
            }
        }
    }
}
impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ORIGIN, Projection::Perspective)
    }
}

fn to_unit_range(n: usize, len: usize) -> f64 {
    if len < 2 {
        return 0.;
    }
    2. * (n as f64 / (len - 1) as f64) - 1.
}
