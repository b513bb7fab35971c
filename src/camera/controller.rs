use glam::Vec3;

use super::core::CameraSink;
use super::orbit;
use super::state::CameraState;
use crate::input::InputSource;
use crate::options::CameraOptions;

/// Orbit/zoom/pan camera controller.
///
/// Each [`update`](Self::update) reads one [`InputSample`] from the bound
/// input source, advances the rotation and zoom accumulators, recomputes the
/// eye position around the pivot, applies any pan, and pushes
/// `(eye, pivot, up)` to the sink.
///
/// [`InputSample`]: crate::input::InputSample
pub struct OrbitCamera<I, S> {
    state: CameraState,
    options: CameraOptions,
    input: I,
    sink: S,
}

impl<I: InputSource, S: CameraSink> OrbitCamera<I, S> {
    /// Orbit around `pivot`. The eye starts at the origin until the first
    /// update places it.
    pub fn new(pivot: Vec3, options: CameraOptions, input: I, sink: S) -> Self {
        Self::from_state(CameraState::new(Vec3::ZERO, pivot), options, input, sink)
    }

    /// Start at `position` looking at `target`, which becomes the pivot.
    pub fn looking_at(
        position: Vec3,
        target: Vec3,
        options: CameraOptions,
        input: I,
        sink: S,
    ) -> Self {
        Self::from_state(CameraState::new(position, target), options, input, sink)
    }

    /// Wrap an existing state. The current placement is pushed to the sink
    /// straight away.
    pub fn from_state(
        state: CameraState,
        options: CameraOptions,
        input: I,
        sink: S,
    ) -> Self {
        let mut camera = Self {
            state,
            options,
            input,
            sink,
        };
        camera.push_view();
        camera
    }

    /// Advance one frame.
    ///
    /// `elapsed` is the time since the previous frame; it only scales
    /// rotation; zoom and pan use the raw deltas.
    pub fn update(&mut self, elapsed: f32) {
        let sample = self.input.sample();

        let angles = orbit::accumulate_angles(
            self.state.horizontal_accum,
            self.state.vertical_accum,
            &sample,
            elapsed,
            self.options.rotation_speed,
        );
        if angles.reset {
            log::debug!(
                "vertical rotation overflowed at {:.3}, resetting",
                angles.raw_vertical
            );
        }
        self.state.horizontal_accum = angles.horizontal;
        self.state.vertical_accum = angles.vertical;
        self.state.up = orbit::resolve_up(angles.rot_x);

        self.state.zoom_accum = orbit::apply_zoom(
            self.state.zoom_accum,
            self.options.zoom_factor,
            sample.wheel,
        );
        let distance = self.distance();

        let transform =
            orbit::compose_orbit(distance, angles.rot_x, angles.rot_y, self.state.pivot);
        self.state.eye = orbit::eye_from_transform(&transform);

        if sample.pan_held {
            match orbit::pan_offset(
                self.state.eye,
                self.state.pivot,
                self.state.up,
                sample.delta,
                self.options.pan_speed,
                distance,
            ) {
                Some(offset) => {
                    self.state.eye += offset;
                    self.state.pivot += offset;
                }
                None => log::debug!("skipping pan: view direction is degenerate"),
            }
        }

        log::trace!(
            "orbit update: rot_x={:.4} rot_y={:.4} distance={distance:.3} eye={} pivot={}",
            angles.rot_x,
            angles.rot_y,
            self.state.eye,
            self.state.pivot
        );
        self.push_view();
    }

    /// Place the camera directly and push it to the sink.
    ///
    /// The accumulators are left alone, so the next update snaps back to
    /// the orbit they describe, now around `target`. Call
    /// [`reset_accumulators`](Self::reset_accumulators) as well if that is
    /// not wanted.
    pub fn set_camera(&mut self, position: Vec3, target: Vec3) {
        log::debug!("camera set directly: eye={position} target={target}");
        self.state.eye = position;
        self.state.pivot = target;
        self.push_view();
    }

    fn push_view(&mut self) {
        self.sink
            .set_view(self.state.eye, self.state.pivot, self.state.up);
    }
}

// ── Accessors ──

impl<I, S> OrbitCamera<I, S> {
    /// Current camera state.
    #[must_use]
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// Current tunables.
    #[must_use]
    pub fn options(&self) -> &CameraOptions {
        &self.options
    }

    /// Replace all tunables at once.
    pub fn set_options(&mut self, options: CameraOptions) {
        self.options = options;
    }

    /// Last computed eye position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.state.eye
    }

    /// Up vector chosen by the last update.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.state.up
    }

    /// Orbit pivot.
    #[must_use]
    pub fn pivot(&self) -> Vec3 {
        self.state.pivot
    }

    /// Move the pivot. Takes effect on the next update.
    pub fn set_pivot(&mut self, pivot: Vec3) {
        self.state.pivot = pivot;
    }

    /// Signed orbit distance for the current zoom (never positive).
    #[must_use]
    pub fn distance(&self) -> f32 {
        orbit::resolve_distance(self.options.pivot_distance, self.state.zoom_accum)
    }

    /// Base orbit radius.
    #[must_use]
    pub fn pivot_distance(&self) -> f32 {
        self.options.pivot_distance
    }

    /// Set the base orbit radius.
    pub fn set_pivot_distance(&mut self, pivot_distance: f32) {
        self.options.pivot_distance = pivot_distance;
    }

    /// Wheel-to-zoom sensitivity.
    #[must_use]
    pub fn zoom_factor(&self) -> f32 {
        self.options.zoom_factor
    }

    /// Set the wheel-to-zoom sensitivity.
    pub fn set_zoom_factor(&mut self, zoom_factor: f32) {
        self.options.zoom_factor = zoom_factor;
    }

    /// Pointer-to-rotation sensitivity.
    #[must_use]
    pub fn rotation_speed(&self) -> f32 {
        self.options.rotation_speed
    }

    /// Set the pointer-to-rotation sensitivity.
    pub fn set_rotation_speed(&mut self, rotation_speed: f32) {
        self.options.rotation_speed = rotation_speed;
    }

    /// Pan sensitivity.
    #[must_use]
    pub fn pan_speed(&self) -> f32 {
        self.options.pan_speed
    }

    /// Set the pan sensitivity.
    pub fn set_pan_speed(&mut self, pan_speed: f32) {
        self.options.pan_speed = pan_speed;
    }

    /// Integrated horizontal rotation input.
    #[must_use]
    pub fn horizontal_accum(&self) -> f32 {
        self.state.horizontal_accum
    }

    /// Overwrite the horizontal rotation accumulator.
    pub fn set_horizontal_accum(&mut self, value: f32) {
        self.state.horizontal_accum = value;
    }

    /// Integrated vertical rotation input.
    #[must_use]
    pub fn vertical_accum(&self) -> f32 {
        self.state.vertical_accum
    }

    /// Overwrite the vertical rotation accumulator.
    pub fn set_vertical_accum(&mut self, value: f32) {
        self.state.vertical_accum = value;
    }

    /// Integrated wheel input (`1.0` = unzoomed).
    #[must_use]
    pub fn zoom_accum(&self) -> f32 {
        self.state.zoom_accum
    }

    /// Overwrite the zoom accumulator.
    pub fn set_zoom_accum(&mut self, value: f32) {
        self.state.zoom_accum = value;
    }

    /// Zero rotation and undo zoom. Never called implicitly.
    pub fn reset_accumulators(&mut self) {
        self.state.reset_accumulators();
    }

    /// Bound input source.
    #[must_use]
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Mutable access to the input source, e.g. to feed it events.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Bound camera sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the camera sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Tear down the controller, returning its parts.
    pub fn into_parts(self) -> (CameraState, CameraOptions, I, S) {
        (self.state, self.options, self.input, self.sink)
    }
}
