//! Camera/viewport model - zoom, visible world area, follow requests.
//!
//! Headless math only: the host feeds wheel deltas and canvas resizes in,
//! and reads the derived viewport back. The actual scene-graph camera,
//! sprite culling, and damped follow live in the rendering host.

use hecs::Entity;
use serde::Serialize;

use starhelm_logic::constants::camera::{
    FOLLOW_LERP_X, FOLLOW_LERP_Y, MAX_ZOOM, MIN_ZOOM, ZOOM_SPEED,
};
use starhelm_logic::units::pixels_to_meters;

/// Visible area in pixels at the current zoom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Follow instruction forwarded to the rendering host: keep `target`
/// centered with the given damping factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowRequest {
    pub target: Entity,
    pub lerp_x: f32,
    pub lerp_y: f32,
}

/// Collaborator notified whenever the derived viewport changes — the
/// parallax background resizes its tiled layers from this.
pub trait ViewportListener {
    fn resize(&mut self, width: f32, height: f32);
}

/// Per-scene camera state. Zoom is clamped to [`MIN_ZOOM`, `MAX_ZOOM`];
/// the viewport is derived and never independently mutated.
pub struct CameraModel {
    zoom: f32,
    canvas_width: f32,
    canvas_height: f32,
    viewport: Viewport,
    follow: Option<FollowRequest>,
    listener: Option<Box<dyn ViewportListener>>,
}

impl CameraModel {
    pub fn new(canvas_width: f32, canvas_height: f32) -> Self {
        let mut camera = Self {
            zoom: 1.0,
            canvas_width,
            canvas_height,
            viewport: Viewport::default(),
            follow: None,
            listener: None,
        };
        camera.recompute();
        camera
    }

    /// Attach the parallax collaborator; it is immediately brought up to
    /// date with the current viewport.
    pub fn attach_listener(&mut self, mut listener: Box<dyn ViewportListener>) {
        listener.resize(self.viewport.width, self.viewport.height);
        self.listener = Some(listener);
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The same visible extent expressed in simulation meters.
    pub fn world_view_size(&self) -> (f32, f32) {
        (
            pixels_to_meters(self.viewport.width),
            pixels_to_meters(self.viewport.height),
        )
    }

    /// Scroll-wheel zoom. Positive deltas (wheel down) zoom out.
    pub fn on_zoom_delta(&mut self, delta_y: f32) {
        self.zoom = (self.zoom - delta_y * ZOOM_SPEED / 1000.0).clamp(MIN_ZOOM, MAX_ZOOM);
        self.recompute();
    }

    /// Host canvas was resized; zoom is untouched.
    pub fn on_resize(&mut self, canvas_width: f32, canvas_height: f32) {
        self.canvas_width = canvas_width;
        self.canvas_height = canvas_height;
        self.recompute();
    }

    /// Ask the host to keep a world object centered, with damping.
    pub fn follow(&mut self, target: Entity) {
        self.follow = Some(FollowRequest {
            target,
            lerp_x: FOLLOW_LERP_X,
            lerp_y: FOLLOW_LERP_Y,
        });
    }

    /// Hand the pending follow request to the host, if any.
    pub fn take_follow_request(&mut self) -> Option<FollowRequest> {
        self.follow.take()
    }

    /// Higher zoom shows a smaller world area. The `zoom <= 0` guard is
    /// unreachable under the clamp floor and deliberately a no-op.
    fn recompute(&mut self) {
        if self.zoom > 0.0 {
            self.viewport = Viewport {
                width: self.canvas_width / self.zoom,
                height: self.canvas_height / self.zoom,
            };
        }
        if let Some(listener) = self.listener.as_mut() {
            listener.resize(self.viewport.width, self.viewport.height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct RecordingListener(Rc<RefCell<Vec<(f32, f32)>>>);

    impl ViewportListener for RecordingListener {
        fn resize(&mut self, width: f32, height: f32) {
            self.0.borrow_mut().push((width, height));
        }
    }

    #[test]
    fn test_initial_viewport_matches_canvas() {
        let camera = CameraModel::new(1920.0, 1080.0);
        assert_eq!(camera.zoom(), 1.0);
        assert_eq!(camera.viewport().width, 1920.0);
        assert_eq!(camera.viewport().height, 1080.0);
    }

    #[test]
    fn test_zoom_in_shrinks_world_area() {
        let mut camera = CameraModel::new(1000.0, 500.0);
        camera.on_zoom_delta(-2000.0); // wheel up: 1.0 + 2000 * 0.5 / 1000
        assert_eq!(camera.zoom(), 2.0);
        assert_eq!(camera.viewport().width, 500.0);
        assert_eq!(camera.viewport().height, 250.0);
    }

    #[test]
    fn test_zoom_clamped_under_extreme_deltas() {
        let mut camera = CameraModel::new(1000.0, 500.0);
        camera.on_zoom_delta(1.0e9);
        assert_eq!(camera.zoom(), MIN_ZOOM);
        camera.on_zoom_delta(-1.0e9);
        assert_eq!(camera.zoom(), MAX_ZOOM);
    }

    #[test]
    fn test_resize_keeps_zoom() {
        let mut camera = CameraModel::new(1000.0, 500.0);
        camera.on_zoom_delta(-2000.0);
        camera.on_resize(800.0, 600.0);
        assert_eq!(camera.zoom(), 2.0);
        assert_eq!(camera.viewport().width, 400.0);
        assert_eq!(camera.viewport().height, 300.0);
    }

    #[test]
    fn test_listener_notified_on_zoom_and_resize() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut camera = CameraModel::new(1000.0, 500.0);
        camera.attach_listener(Box::new(RecordingListener(calls.clone())));

        camera.on_zoom_delta(-2000.0);
        camera.on_resize(2000.0, 1000.0);

        let calls = calls.borrow();
        // Initial sync, zoom, resize
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0], (1000.0, 500.0));
        assert_eq!(calls[1], (500.0, 250.0));
        assert_eq!(calls[2], (1000.0, 500.0));
    }

    #[test]
    fn test_world_view_size_in_meters() {
        let camera = CameraModel::new(1000.0, 500.0);
        let (w, h) = camera.world_view_size();
        assert!((w - 100_000.0).abs() < 1.0);
        assert!((h - 50_000.0).abs() < 1.0);
    }

    #[test]
    fn test_follow_request_handoff() {
        let mut world = hecs::World::new();
        let target = world.spawn((crate::components::Position::new(0.0, 0.0),));

        let mut camera = CameraModel::new(1000.0, 500.0);
        camera.follow(target);

        let request = camera.take_follow_request().unwrap();
        assert_eq!(request.target, target);
        assert_eq!(request.lerp_x, 0.75);
        assert_eq!(request.lerp_y, 0.75);
        assert!(camera.take_follow_request().is_none());
    }
}
