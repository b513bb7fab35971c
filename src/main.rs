//! Replays a recorded input script through the orbit camera and writes the
//! resulting placement for every frame as CSV.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use orbitcam::camera::{Camera, OrbitCamera};
use orbitcam::input::InputScript;
use orbitcam::options::{ButtonBindings, CameraOptions, Options};
use orbitcam::OrbitCamError;

#[derive(Parser)]
#[command(name = "orbitcam", about = "Replay an input script through the orbit camera")]
struct Cli {
    /// TOML input script with one `[[frame]]` per update.
    script: PathBuf,
    /// TOML options file; defaults are used when omitted. Only `[camera]`
    /// applies: script frames already say which buttons are held, so
    /// `[bindings]` is ignored.
    #[arg(long)]
    options: Option<PathBuf>,
}

/// Camera tunables for a replay. Button bindings have no effect on scripts.
fn replay_camera_options(options: &Options) -> CameraOptions {
    if options.bindings != ButtonBindings::default() {
        log::debug!(
            "[bindings] does not apply to replays; script frames set orbit/pan directly"
        );
    }
    options.camera
}

fn run(cli: &Cli) -> Result<(), OrbitCamError> {
    let options = match &cli.options {
        Some(path) => {
            let options = Options::load(path)?;
            log::info!("Loaded options from {}", path.display());
            options
        }
        None => Options::default(),
    };
    let script = InputScript::load(&cli.script)?;
    log::info!(
        "Replaying {} frames from {}",
        script.frames.len(),
        cli.script.display()
    );

    let mut camera = OrbitCamera::new(
        glam::Vec3::ZERO,
        replay_camera_options(&options),
        script.player(),
        Camera::default(),
    );

    let mut out = BufWriter::new(io::stdout().lock());
    writeln!(
        out,
        "frame,eye_x,eye_y,eye_z,target_x,target_y,target_z,up_x,up_y,up_z"
    )?;
    while let Some(elapsed) = camera.input().next_elapsed() {
        let frame = camera.input().position();
        camera.update(elapsed);
        let view = camera.sink();
        writeln!(
            out,
            "{frame},{},{},{},{},{},{},{},{},{}",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.target.x,
            view.target.y,
            view.target.z,
            view.up.x,
            view.up.y,
            view.up.z
        )?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use orbitcam::input::MouseButton;

    use super::*;

    #[test]
    fn replay_uses_camera_section_only() {
        let options = Options::from_toml(
            r#"
[camera]
pivot_distance = 4.0

[bindings]
orbit = "right"
pan = "left"
"#,
        )
        .unwrap();
        assert_eq!(options.bindings.orbit, MouseButton::Right);

        let camera = replay_camera_options(&options);
        assert_eq!(camera, options.camera);
        assert_eq!(camera.pivot_distance, 4.0);
    }

    #[test]
    fn options_help_mentions_ignored_bindings() {
        use clap::CommandFactory;

        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("[bindings]"));
    }
}
