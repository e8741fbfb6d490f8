use std::f64::consts::TAU;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::config::{Config, Mode};
use crate::{Camera, Scene, Screen, Vec3};

/// Animation time added between frames
pub const TIME_STEP: f64 = TAU / 30.;

pub fn run(config: &Config) -> Result<()> {
    let (width, height) = config.size();
    let seed = config.seed.unwrap_or_else(rand::random);
    let camera = Camera::new(Vec3::ORIGIN, config.projection());
    let mut screen = Screen::new(width, height);
    info!(
        "{:?} mode, {}x{} cells, scene {} (seed {}), {:?} projection",
        config.mode(),
        width,
        height,
        config.scene,
        seed,
        camera.projection,
    );

    match config.mode() {
        Mode::Ascii => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            animate(config, seed, &camera, &mut screen, &mut out)
        }
        Mode::Image => {
            let scene = config.scene.scene(0., seed);
            log_scene(&scene);
            screen.render(&scene, &camera);
            match &config.output {
                Some(path) if path != Path::new("-") => {
                    info!("Writing {}", path.display());
                    let file = File::create(path)
                        .with_context(|| format!("Couldn't create {}", path.display()))?;
                    let mut out = BufWriter::new(file);
                    write_image(&screen, &mut out)
                        .with_context(|| format!("Couldn't write {}", path.display()))
                }
                _ => {
                    let stdout = io::stdout();
                    let mut out = BufWriter::new(stdout.lock());
                    write_image(&screen, &mut out).context("Couldn't write image to stdout")
                }
            }
        }
    }
}

fn log_scene(scene: &Scene) {
    for sphere in &scene.spheres {
        debug!("Sphere at {} with radius {}", sphere.center, sphere.radius);
    }
    for light in &scene.lights {
        debug!("Light at {} with intensity {}", light.position, light.intensity);
    }
}

fn write_image<W: Write>(screen: &Screen, out: &mut W) -> io::Result<()> {
    screen.write_pgm(out)?;
    out.flush()
}

/// Renders frames to `out` until `config.frames` frames have been written. Without a frame
/// limit this only returns on error.
pub fn animate<W: Write>(
    config: &Config,
    seed: u64,
    camera: &Camera,
    screen: &mut Screen,
    out: &mut W,
) -> Result<()> {
    let mut time = 0.;
    let mut frame = 0u64;
    while config.frames.map_or(true, |limit| frame < limit) {
        let start = Instant::now();
        let scene = config.scene.scene(time, seed);
        if frame == 0 {
            log_scene(&scene);
        }
        screen.render(&scene, camera);
        screen
            .write_ascii(out)
            .and_then(|_| out.flush())
            .context("Couldn't write frame")?;
        debug!("Frame {} rendered in {:?}", frame, start.elapsed());

        frame += 1;
        time += TIME_STEP;
        if config.frames.map_or(true, |limit| frame < limit) {
            thread::sleep(config.delay);
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use structopt::StructOpt;

    fn config(args: &[&str]) -> Config {
        Config::from_iter_safe(std::iter::once("ascii_raytracer").chain(args.iter().cloned()))
            .unwrap()
    }

    #[test]
    fn animation_writes_each_frame() {
        let config = config(&["--frames", "3", "--delay", "0"]);
        let mut screen = Screen::new(40, 20);
        let mut out = Vec::new();
        animate(&config, 0, &Camera::default(), &mut screen, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3 * 22);
        assert!(lines.iter().all(|l| l.chars().count() == 40));
        // The sphere fills the middle of every frame
        for frame in lines.chunks(22) {
            assert_ne!(frame[10].trim(), "");
            assert_eq!(frame[20].trim(), "");
            assert_eq!(frame[21].trim(), "");
        }
    }

    #[test]
    fn zero_frames_writes_nothing() {
        let config = config(&["--frames", "0"]);
        let mut screen = Screen::new(4, 4);
        let mut out = Vec::new();
        animate(&config, 0, &Camera::default(), &mut screen, &mut out).unwrap();
        assert!(out.is_empty());
    }

    struct Broken;
    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn output_errors_are_fatal() {
        let config = config(&["--delay", "0"]);
        let mut screen = Screen::new(4, 4);
        let err = animate(&config, 0, &Camera::default(), &mut screen, &mut Broken).unwrap_err();
        assert!(err.to_string().contains("frame"));
    }

    #[test]
    fn image_file() {
        let path = std::env::temp_dir().join(format!("ascii_raytracer_{}.pgm", std::process::id()));
        let config = config(&["-w", "20", "-h", "10", path.to_str().unwrap()]);
        run(&config).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(&lines[..3], &["P2", "20 10", "256"]);
        assert_eq!(lines.len(), 3 + 10);
        for row in &lines[3..] {
            let values: Vec<u16> = row.split(' ').map(|v| v.parse().unwrap()).collect();
            assert_eq!(values.len(), 20);
            assert!(values.iter().all(|&v| v <= 255));
        }
        assert!(lines[3..].iter().any(|row| row.split(' ').any(|v| v != "0")));
    }

    #[test]
    fn unwritable_image_is_an_error() {
        let path = std::env::temp_dir().join("no_such_dir").join("x").join("out.pgm");
        let config = config(&[path.to_str().unwrap()]);
        assert!(run(&config).is_err());
    }
}
