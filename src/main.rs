//! Headless orbicam demo: drives a desktop camera through a scripted
//! session at the configured tick rate and logs the poses it passes
//! through.
//!
//! ```text
//! RUST_LOG=info orbicam [preset.toml] [--schema out.json]
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use glam::Vec3;
use orbicam::input::InputEvent;
use orbicam::util::frame_timing::FrameTiming;
use orbicam::{CameraController, Options, ScreenInfo};

/// Upper bound on ticks spent waiting for the camera to settle.
const SETTLE_LIMIT: u32 = 2000;

struct Args {
    preset: Option<PathBuf>,
    schema_out: Option<PathBuf>,
}

fn parse_args() -> Args {
    let mut args = Args {
        preset: None,
        schema_out: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--schema" {
            args.schema_out = iter.next().map(PathBuf::from);
        } else {
            args.preset = Some(PathBuf::from(arg));
        }
    }
    args
}

fn load_options(path: Option<&Path>) -> Options {
    let Some(path) = path else {
        return Options::default();
    };
    match Options::load(path) {
        Ok(options) => {
            log::info!("loaded options from {}", path.display());
            options
        }
        Err(e) => {
            log::warn!("{}: {e}; using defaults", path.display());
            Options::default()
        }
    }
}

fn write_schema(path: &Path) {
    let result = serde_json::to_string_pretty(&Options::json_schema())
        .map_err(|e| e.to_string())
        .and_then(|json| std::fs::write(path, json).map_err(|e| e.to_string()));
    match result {
        Ok(()) => log::info!("options schema written to {}", path.display()),
        Err(e) => log::error!("failed to write schema: {e}"),
    }
}

struct Session {
    camera: CameraController,
    timing: FrameTiming,
}

impl Session {
    fn tick(&mut self) -> bool {
        while !self.timing.should_tick() {
            std::thread::sleep(Duration::from_millis(1));
        }
        let changed = self.camera.do_move();
        self.timing.end_frame();
        changed
    }

    fn key(&mut self, code: &str, pressed: bool) {
        let _ = self.camera.handle_event(&InputEvent::Key {
            code: code.to_owned(),
            pressed,
        });
    }

    fn hold(&mut self, code: &str, ticks: u32) {
        self.key(code, true);
        for _ in 0..ticks {
            let _ = self.tick();
        }
        self.key(code, false);
    }

    fn settle(&mut self) -> u32 {
        let mut ticks = 0;
        while ticks < SETTLE_LIMIT && self.tick() {
            ticks += 1;
        }
        ticks
    }

    fn report(&self, label: &str) {
        let state = self.camera.state();
        log::info!(
            "{label}: center ({:.2}, {:.2}, {:.2}) phi {:.2} theta {:.2} zoom {:.2} ({:.1} fps)",
            state.center.x,
            state.center.y,
            state.center.z,
            state.phi,
            state.theta,
            state.zoom,
            self.timing.fps()
        );
    }
}

fn main() {
    env_logger::init();

    let args = parse_args();
    if let Some(path) = &args.schema_out {
        write_schema(path);
    }

    let options = load_options(args.preset.as_deref());
    let screen = ScreenInfo::new(1280, 720, 1.0, &options.display);
    let mut session = Session {
        camera: CameraController::desktop(
            options.camera,
            &screen,
            options.keybindings,
        ),
        timing: FrameTiming::new(options.display.target_fps),
    };
    session.report("start");
    session.camera.push();

    session.hold("ArrowUp", 30);
    let ticks = session.settle();
    session.report(&format!("zoomed in (coasted {ticks} ticks)"));

    session.hold("ArrowLeft", 15);
    let _ = session.settle();
    session.report("rotated");

    session.camera.set_target(Vec3::new(4.0, 0.0, -2.0), 90.0, 30.0, 12.0);
    let ticks = session.settle();
    session.report(&format!("glided to target ({ticks} ticks)"));

    session.camera.pop(true);
    let ticks = session.settle();
    session.report(&format!("returned to saved pose ({ticks} ticks)"));
}
