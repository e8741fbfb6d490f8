use std::f64::consts::TAU;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};
use once_cell::sync::OnceCell;
use rand::{Rng, SeedableRng};
use structopt::StructOpt;
use strum::VariantNames;
use strum_macros::Display as StrumDisplay;
use strum_macros::{EnumString, EnumVariantNames};

use crate::{CrateRng, Light, Projection, Scene, Sphere, Vec3};

/// Grid used by the interactive ASCII mode
pub const ASCII_SIZE: (usize, usize) = (40, 20);
/// Image mode renders this many times more cells along each axis
pub const IMAGE_SCALE: usize = 10;

static CONFIG: OnceCell<Config> = OnceCell::new();

#[allow(non_snake_case)]
/// Return a `Config` built from command line args
pub fn GLOBAL() -> &'static Config {
    CONFIG.get_or_init(Config::from_args)
}

#[derive(Clone, Debug, StructOpt)]
pub struct Config {
    #[structopt(parse(from_os_str))]
    /// Render a single grayscale image to this file ("-" for stdout) instead of animating
    /// in the terminal
    pub output: Option<PathBuf>,

    #[structopt(short, long, display_order = 0)]
    /// Width of render. Defaults to 40 in the terminal and 400 for images
    pub width: Option<NonZeroUsize>,

    #[structopt(short, long, display_order = 1)]
    /// Height of render. Defaults to 20 in the terminal and 200 for images
    pub height: Option<NonZeroUsize>,

    #[structopt(
        short,
        long,
        default_value = "100",
        parse(try_from_str = parse_millis),
    )]
    /// Milliseconds between frames in the terminal
    pub delay: Duration,

    #[structopt(short, long)]
    /// Stop the terminal animation after this many frames
    pub frames: Option<u64>,

    #[structopt(short, long)]
    /// Use parallel rays instead of a perspective projection
    pub orthographic: bool,

    #[structopt(short = "r", long = "rng")]
    /// Use a specific seed for the rng.
    pub seed: Option<u64>,

    #[structopt(
        short,
        long,
        default_value = "Pulse",
        // Using this instead of possible_values because possible_values doesn't wrap properly
        parse(try_from_str = parse_preset),
    )]
    /// The scene to render
    pub scene: Preset,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Mode {
    /// Animate in the terminal until interrupted
    Ascii,
    /// Render one frame to a grayscale image
    Image,
}

impl Config {
    pub fn mode(&self) -> Mode {
        if self.output.is_some() {
            Mode::Image
        } else {
            Mode::Ascii
        }
    }

    /// `(width, height)` of the render, after applying the defaults of the mode
    pub fn size(&self) -> (usize, usize) {
        let (w, h) = match self.mode() {
            Mode::Ascii => ASCII_SIZE,
            Mode::Image => (ASCII_SIZE.0 * IMAGE_SCALE, ASCII_SIZE.1 * IMAGE_SCALE),
        };
        (
            self.width.map_or(w, NonZeroUsize::get),
            self.height.map_or(h, NonZeroUsize::get),
        )
    }

    pub fn projection(&self) -> Projection {
        if self.orthographic {
            Projection::Orthographic
        } else {
            Projection::Perspective
        }
    }
}

fn parse_millis(s: &str) -> Result<Duration> {
    let ms = s
        .parse::<u64>()
        .map_err(|err| anyhow!("\"{}\" isn't a number of milliseconds: {}", s, err))?;
    Ok(Duration::from_millis(ms))
}

fn parse_preset(s: &str) -> Result<Preset> {
    s.parse::<Preset>().map_err(|_| {
        anyhow!(
            "\"{}\" isn't a Scene.\nPossible values: {:#?}",
            s,
            Preset::VARIANTS
        )
    })
}

#[derive(Copy, Clone, Debug, StrumDisplay, EnumString, EnumVariantNames, PartialEq)]
pub enum Preset {
    /// A sphere bobbing toward and away from the camera
    Pulse,
    /// A small sphere passing between a light and a larger sphere
    Eclipse,
    /// A light circling a sphere
    Orbit,
    /// Randomly placed spheres drifting up and down
    Scatter,
}

impl Preset {
    /// Builds the scene as it looks at `time`. `seed` only matters for `Scatter`, and the
    /// same seed always places the spheres in the same spots.
    pub fn scene(self, time: f64, seed: u64) -> Scene {
        use Preset::*;

        let mut scene = Scene::new();
        match self {
            Pulse => {
                scene
                    .push_sphere(Sphere::from([0., 0., 4.5 + time.sin()], 2.5))
                    .push_light(Light::from([-1., 1., 0.], 1.));
            }
            Eclipse => {
                let (left, right) = (Vec3::new(-3., 1.5, 2.5), Vec3::new(3., 1.5, 2.5));
                let moon = Vec3::lerp(left, right, 0.5 + 0.5 * time.sin());
                scene
                    .push_sphere(Sphere::from([0., 0., 6.], 2.))
                    .push_sphere(Sphere::new(moon, 0.6))
                    .push_light(Light::from([0., 4., 0.], 1.))
                    .push_light(Light::from([-3., -2., 1.], 0.4));
            }
            Orbit => {
                let (sin, cos) = time.sin_cos();
                scene
                    .push_sphere(Sphere::from([0., 0., 5.], 2.))
                    .push_light(Light::from([3.5 * cos, 1., 5. - 3.5 * sin], 1.5));
            }
            Scatter => {
                let mut rng = CrateRng::seed_from_u64(seed);
                for _ in 0..6 {
                    let (x, y) = (rng.gen_range(-3., 3.), rng.gen_range(-1.5, 1.5));
                    let z = rng.gen_range(5., 10.);
                    let radius = rng.gen_range(0.4, 1.2);
                    let phase = rng.gen_range(0., TAU);
                    scene.push_sphere(Sphere::from([x, y + 0.5 * (time + phase).sin(), z], radius));
                }
                scene
                    .push_light(Light::from([-2., 3., 1.], 1.))
                    .push_light(Light::from([3., 0., 2.], 0.5));
            }
        }
        scene
    }
}
