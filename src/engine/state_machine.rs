//! Mode state machine
//!
//! Owns every piece of cross-frame state (cooldowns, cursor smoothing,
//! viewer drag/zoom, selection and hold tracking) and turns each frame
//! observation into a list of actions. Two modes:
//!
//! - **Cursor**: one hand drives the pointer, clicks, text selection and
//!   maximize; a two-hand clap minimizes the window.
//! - **Image**: two pinched hands zoom, a clap advances the image, a lone
//!   right hand drags.
//!
//! The machine is strictly frame-synchronous. Cooldowns and smoothing count
//! processed frames, so their real-time length follows the capture rate.

use crate::actions::dispatcher::{Action, ActionDispatcher, GestureIntent};
use crate::capture::landmarks::types::{FrameObservation, Handedness, TrackedHand};
use crate::config::{ConfigResult, GestureConfig};
use crate::gesture::classifier::{Gesture, GestureClassifier};
use crate::processing::cooldown::{CooldownKey, CooldownManager};
use crate::processing::cursor::CursorMapper;
use crate::processing::geometry::distance;
use crate::viewer::drag_zoom::{DragZoomController, ViewTransform, ZoomDirection};
use crate::viewer::placement::{compute_placement, Placement};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    #[default]
    Cursor,
    Image,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Cursor => Self::Image,
            Self::Image => Self::Cursor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cursor => "cursor",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct ModeStateMachine {
    config: GestureConfig,
    cooldown_frames: u32,
    classifier: GestureClassifier,
    dispatcher: ActionDispatcher,
    mode: Mode,
    cooldowns: CooldownManager,
    cursor: CursorMapper,
    viewer: DragZoomController,
    /// Mouse button held down for text selection
    selecting: bool,
    /// Consecutive frames the secondary pinch has been held
    secondary_hold_frames: u32,
    /// Inter-index distance on the previous two-pinch frame
    prev_zoom_distance: Option<f64>,
    frame_index: u64,
}

impl ModeStateMachine {
    /// Build a machine in cursor mode. Fails if `config` does not validate.
    pub fn new(config: GestureConfig) -> ConfigResult<Self> {
        config.validate()?;

        Ok(Self {
            cooldown_frames: config.cooldown.effective_frames(),
            classifier: GestureClassifier::new(config.thresholds.clone())?,
            dispatcher: ActionDispatcher::new(),
            mode: Mode::Cursor,
            cooldowns: CooldownManager::new(),
            cursor: CursorMapper::new(config.screen, config.smoothing.cursor_alpha)?,
            viewer: DragZoomController::new(&config.viewer, config.smoothing.viewer_alpha)?,
            selecting: false,
            secondary_hold_frames: 0,
            prev_zoom_distance: None,
            frame_index: 0,
            config,
        })
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn cooldowns(&self) -> &CooldownManager {
        &self.cooldowns
    }

    pub fn viewer(&self) -> &DragZoomController {
        &self.viewer
    }

    /// Current smoothed view for the renderer
    pub fn view(&self) -> ViewTransform {
        self.viewer.view()
    }

    /// Where the current view lands on a `display_width` x `display_height`
    /// surface, keeping `viewer.minVisiblePx` on screen per axis.
    pub fn placement(&self, display_width: u32, display_height: u32) -> Placement {
        compute_placement(
            display_width,
            display_height,
            self.view(),
            self.config.viewer.min_visible_px,
        )
    }

    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    pub fn prev_zoom_distance(&self) -> Option<f64> {
        self.prev_zoom_distance
    }

    pub fn frames_processed(&self) -> u64 {
        self.frame_index
    }

    /// Flip between cursor and image mode.
    ///
    /// Gesture state from the old mode is dropped: a held selection is
    /// released and any drag ends.
    pub fn toggle_mode(&mut self) -> Vec<Action> {
        let mut intents = Vec::new();
        if self.selecting {
            self.selecting = false;
            intents.push(GestureIntent::SelectionReleased);
        }
        self.viewer.stop_drag();
        self.prev_zoom_distance = None;
        self.secondary_hold_frames = 0;

        self.mode = self.mode.toggled();
        tracing::info!("Switched to {} mode", self.mode);

        self.dispatcher.dispatch_all(intents)
    }

    /// Run one frame through the pipeline
    pub fn process_frame(&mut self, frame: &FrameObservation) -> Vec<Action> {
        self.frame_index += 1;
        self.cooldowns.tick();

        let hands = frame.usable_hands();
        let mut intents = Vec::new();

        match self.mode {
            Mode::Cursor => self.cursor_frame(&hands, frame, &mut intents),
            Mode::Image => self.image_frame(&hands, &mut intents),
        }

        self.viewer.advance();

        self.dispatcher.dispatch_all(intents)
    }

    fn cursor_frame(
        &mut self,
        hands: &[TrackedHand],
        frame: &FrameObservation,
        intents: &mut Vec<GestureIntent>,
    ) {
        match hands {
            [hand] => {
                self.cursor
                    .track(hand.landmarks.index_tip(), frame.frame_width, frame.frame_height);
                if let Some(position) = self.cursor.step() {
                    intents.push(GestureIntent::CursorMoved(position));
                }
                self.single_hand_gestures(hand, intents);
            }
            [first, second] => {
                self.secondary_hold_frames = 0;
                self.glide_cursor(intents);
                self.clap(first, second, CooldownKey::MinimizeWindow, intents);
            }
            _ => {
                self.secondary_hold_frames = 0;
                self.glide_cursor(intents);
            }
        }
    }

    /// Keep the cursor easing toward its last target on frames without a
    /// driving hand.
    fn glide_cursor(&mut self, intents: &mut Vec<GestureIntent>) {
        let was_settled = self.cursor.is_settled();
        if let Some(position) = self.cursor.step() {
            if !was_settled {
                intents.push(GestureIntent::CursorMoved(position));
            }
        }
    }

    fn single_hand_gestures(&mut self, hand: &TrackedHand, intents: &mut Vec<GestureIntent>) {
        let gestures = self.classifier.classify_hand(&hand.landmarks);

        // Left click every frame the pinch persists, like a held button
        match gestures.click {
            Gesture::Pinch { .. } => {
                self.secondary_hold_frames = 0;
                intents.push(GestureIntent::PrimaryPinch);
            }
            Gesture::RightPinch { .. } => {
                self.secondary_hold_frames = self.secondary_hold_frames.saturating_add(1);
                if self.secondary_hold_frames < self.config.maximize_hold_frames {
                    intents.push(GestureIntent::SecondaryPinch);
                }
            }
            _ => self.secondary_hold_frames = 0,
        }

        // Selection follows the bridge test exactly, every frame
        let bridged = !gestures.bridge.is_none();
        if bridged != self.selecting {
            self.selecting = bridged;
            intents.push(if bridged {
                GestureIntent::SelectionEngaged
            } else {
                GestureIntent::SelectionReleased
            });
        }

        // A long secondary pinch means maximize, once per cooldown
        if self.secondary_hold_frames >= self.config.maximize_hold_frames
            && self.cooldowns.is_ready(CooldownKey::MaximizeWindow)
        {
            intents.push(GestureIntent::SecondaryPinchHeld);
            self.cooldowns
                .start(CooldownKey::MaximizeWindow, self.cooldown_frames);
        }
    }

    /// Two hands zoom and clap, a lone Right hand drags, a lone Left hand
    /// stops the drag.
    ///
    /// Frames with zero or two hands leave the drag anchored where it was.
    /// The next lone Right-hand frame therefore pans by the whole distance
    /// the fingertip moved in between.
    fn image_frame(&mut self, hands: &[TrackedHand], intents: &mut Vec<GestureIntent>) {
        match hands {
            [first, second] => {
                self.pinch_zoom(first, second, intents);
                self.clap(first, second, CooldownKey::NextImage, intents);
            }
            [hand] => {
                self.prev_zoom_distance = None;
                match hand.handedness {
                    Handedness::Right => {
                        let tip = hand.landmarks.index_tip();
                        if let Some(delta) = self.viewer.begin_or_continue_drag(tip, tip) {
                            if delta.x != 0.0 || delta.y != 0.0 {
                                intents.push(GestureIntent::Dragged(delta));
                            }
                        }
                    }
                    // A lone left hand always ends the drag, even mid-gesture
                    Handedness::Left => self.viewer.stop_drag(),
                }
            }
            _ => self.prev_zoom_distance = None,
        }
    }

    fn pinch_zoom(
        &mut self,
        first: &TrackedHand,
        second: &TrackedHand,
        intents: &mut Vec<GestureIntent>,
    ) {
        let (left, right) = match (first.handedness, second.handedness) {
            (Handedness::Left, Handedness::Right) => (first, second),
            (Handedness::Right, Handedness::Left) => (second, first),
            _ => {
                self.prev_zoom_distance = None;
                return;
            }
        };

        let both_pinched =
            self.classifier.is_pinch(&left.landmarks) && self.classifier.is_pinch(&right.landmarks);
        if !both_pinched {
            self.prev_zoom_distance = None;
            return;
        }

        let spread = distance(left.landmarks.index_tip(), right.landmarks.index_tip());
        if let Some(prev) = self.prev_zoom_distance {
            let diff = spread - prev;
            if diff.abs() > self.config.viewer.zoom_delta_px {
                let direction = if diff > 0.0 {
                    ZoomDirection::In
                } else {
                    ZoomDirection::Out
                };
                self.viewer.zoom(direction);
                intents.push(GestureIntent::PinchSpread(direction));
            }
        }
        self.prev_zoom_distance = Some(spread);
    }

    fn clap(
        &mut self,
        first: &TrackedHand,
        second: &TrackedHand,
        key: CooldownKey,
        intents: &mut Vec<GestureIntent>,
    ) {
        if self.classifier.clap(&first.landmarks, &second.landmarks).is_none() {
            return;
        }
        if !self.cooldowns.is_ready(key) {
            return;
        }

        intents.push(GestureIntent::Clap(self.mode));
        self.cooldowns.start(key, self.cooldown_frames);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::dispatcher::MouseButton;
    use crate::capture::landmarks::types::{HandObservation, Landmark, Point2D, LANDMARK_COUNT};

    const FRAME_W: u32 = 1280;
    const FRAME_H: u32 = 720;

    /// Relaxed hand: fingertips well apart, wrist at `wrist`.
    fn hand_points(wrist: (f64, f64)) -> Vec<Point2D> {
        let (wx, wy) = wrist;
        let mut points = vec![Point2D::new(wx, wy - 100.0); LANDMARK_COUNT];
        points[Landmark::Wrist.index()] = Point2D::new(wx, wy);
        points[Landmark::ThumbTip.index()] = Point2D::new(wx - 120.0, wy - 150.0);
        points[Landmark::IndexTip.index()] = Point2D::new(wx - 20.0, wy - 300.0);
        points[Landmark::MiddleTip.index()] = Point2D::new(wx + 80.0, wy - 310.0);
        points
    }

    fn with(mut points: Vec<Point2D>, landmark: Landmark, at: (f64, f64)) -> Vec<Point2D> {
        points[landmark.index()] = Point2D::new(at.0, at.1);
        points
    }

    fn frame(hands: Vec<(Vec<Point2D>, Handedness)>) -> FrameObservation {
        FrameObservation::new(
            FRAME_W,
            FRAME_H,
            hands
                .into_iter()
                .map(|(points, handedness)| HandObservation::new(points, handedness))
                .collect(),
        )
    }

    fn machine() -> ModeStateMachine {
        ModeStateMachine::new(GestureConfig::default()).unwrap()
    }

    fn discrete(actions: &[Action]) -> Vec<Action> {
        actions
            .iter()
            .copied()
            .filter(|a| !a.is_continuous())
            .collect()
    }

    fn pinching_hand(wrist: (f64, f64), index_tip: (f64, f64)) -> Vec<Point2D> {
        let points = with(hand_points(wrist), Landmark::IndexTip, index_tip);
        with(points, Landmark::ThumbTip, (index_tip.0 - 10.0, index_tip.1))
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = GestureConfig::default();
        config.thresholds.clap_px = 0.0;
        assert!(ModeStateMachine::new(config).is_err());

        let mut config = GestureConfig::default();
        config.smoothing.viewer_alpha = 0.0;
        assert!(ModeStateMachine::new(config).is_err());
    }

    #[test]
    fn test_drag_survives_frames_without_lone_hand() {
        let mut sm = machine().with_mode(Mode::Image);
        let right = |x: f64| {
            frame(vec![(
                with(hand_points((500.0, 700.0)), Landmark::IndexTip, (x, 300.0)),
                Handedness::Right,
            )])
        };

        sm.process_frame(&right(400.0));
        sm.process_frame(&FrameObservation::empty(FRAME_W, FRAME_H));
        assert!(sm.viewer().is_dragging());

        // Anchor is still the last Right-hand fingertip, so the gap lands as one pan
        let actions = sm.process_frame(&right(700.0));
        assert!(actions.contains(&Action::Pan { dx: 300.0, dy: 0.0 }));
        assert_eq!(sm.viewer().target_offset(), Point2D::new(300.0, 0.0));
    }

    #[test]
    fn test_placement_uses_configured_min_visible() {
        let mut config = GestureConfig::default();
        config.viewer.min_visible_px = 250;
        let mut sm = ModeStateMachine::new(config).unwrap().with_mode(Mode::Image);

        let right = |x: f64| {
            frame(vec![(
                with(hand_points((500.0, 700.0)), Landmark::IndexTip, (x, 300.0)),
                Handedness::Right,
            )])
        };
        sm.process_frame(&right(0.0));
        sm.process_frame(&right(5000.0));
        for _ in 0..100 {
            sm.process_frame(&FrameObservation::empty(FRAME_W, FRAME_H));
        }

        let placement = sm.placement(FRAME_W, FRAME_H);
        assert_eq!(placement.origin_x, FRAME_W as i64 - 250);
        assert_eq!(placement.destination.width, 250);
    }

    #[test]
    fn test_toggle_flips_mode() {
        let mut sm = machine();
        assert_eq!(sm.mode(), Mode::Cursor);
        assert!(sm.toggle_mode().is_empty());
        assert_eq!(sm.mode(), Mode::Image);
        sm.toggle_mode();
        assert_eq!(sm.mode(), Mode::Cursor);
    }

    #[test]
    fn test_single_hand_moves_cursor() {
        let mut sm = machine();
        let points = with(hand_points((400.0, 650.0)), Landmark::IndexTip, (640.0, 360.0));

        let actions = sm.process_frame(&frame(vec![(points, Handedness::Right)]));
        assert_eq!(actions[0], Action::MoveCursor { x: 960.0, y: 540.0 });
        assert!(discrete(&actions).is_empty());
    }

    #[test]
    fn test_pinch_left_clicks_every_frame() {
        let mut sm = machine();
        let points = with(hand_points((200.0, 500.0)), Landmark::ThumbTip, (100.0, 100.0));
        let points = with(points, Landmark::IndexTip, (110.0, 100.0));
        let f = frame(vec![(points, Handedness::Right)]);

        for _ in 0..3 {
            assert_eq!(
                discrete(&sm.process_frame(&f)),
                vec![Action::Click {
                    button: MouseButton::Left
                }]
            );
        }
    }

    #[test]
    fn test_short_secondary_pinch_right_clicks() {
        let mut sm = machine();
        let points = with(hand_points((400.0, 600.0)), Landmark::ThumbTip, (470.0, 290.0));
        let f = frame(vec![(points, Handedness::Right)]);

        let actions = sm.process_frame(&f);
        assert_eq!(
            discrete(&actions),
            vec![Action::Click {
                button: MouseButton::Right
            }]
        );
    }

    #[test]
    fn test_held_secondary_pinch_promotes_to_maximize() {
        let mut config = GestureConfig::default();
        config.maximize_hold_frames = 3;
        let mut sm = ModeStateMachine::new(config).unwrap();

        let points = with(hand_points((400.0, 600.0)), Landmark::ThumbTip, (470.0, 290.0));
        let f = frame(vec![(points, Handedness::Right)]);

        let right = Action::Click {
            button: MouseButton::Right,
        };
        assert_eq!(discrete(&sm.process_frame(&f)), vec![right]);
        assert_eq!(discrete(&sm.process_frame(&f)), vec![right]);
        assert_eq!(discrete(&sm.process_frame(&f)), vec![Action::MaximizeWindow]);
        assert_eq!(sm.cooldowns().remaining(CooldownKey::MaximizeWindow), 25);

        // Still held: no right clicks, no repeat maximize during cooldown
        for _ in 0..24 {
            assert!(discrete(&sm.process_frame(&f)).is_empty());
        }
        assert_eq!(discrete(&sm.process_frame(&f)), vec![Action::MaximizeWindow]);
    }

    #[test]
    fn test_release_resets_hold() {
        let mut config = GestureConfig::default();
        config.maximize_hold_frames = 2;
        let mut sm = ModeStateMachine::new(config).unwrap();

        let pinched = frame(vec![(
            with(hand_points((400.0, 600.0)), Landmark::ThumbTip, (470.0, 290.0)),
            Handedness::Right,
        )]);
        let open = frame(vec![(hand_points((400.0, 600.0)), Handedness::Right)]);

        sm.process_frame(&pinched);
        sm.process_frame(&open);
        assert_eq!(
            discrete(&sm.process_frame(&pinched)),
            vec![Action::Click {
                button: MouseButton::Right
            }]
        );
    }

    #[test]
    fn test_selection_is_level_triggered() {
        let mut sm = machine();
        let bridged = frame(vec![(
            with(hand_points((400.0, 600.0)), Landmark::MiddleTip, (400.0, 300.0)),
            Handedness::Right,
        )]);
        let open = frame(vec![(hand_points((400.0, 600.0)), Handedness::Right)]);

        assert_eq!(discrete(&sm.process_frame(&bridged)), vec![Action::MouseDown]);
        assert!(sm.is_selecting());
        assert!(discrete(&sm.process_frame(&bridged)).is_empty());
        assert!(sm.is_selecting());

        assert_eq!(discrete(&sm.process_frame(&open)), vec![Action::MouseUp]);
        assert!(!sm.is_selecting());
    }

    #[test]
    fn test_lost_hand_keeps_selection() {
        let mut sm = machine();
        let bridged = frame(vec![(
            with(hand_points((400.0, 600.0)), Landmark::MiddleTip, (400.0, 300.0)),
            Handedness::Right,
        )]);

        sm.process_frame(&bridged);
        sm.process_frame(&FrameObservation::empty(FRAME_W, FRAME_H));
        assert!(sm.is_selecting());

        // Toggling away releases the button
        assert_eq!(sm.toggle_mode(), vec![Action::MouseUp]);
        assert!(!sm.is_selecting());
    }

    #[test]
    fn test_clap_minimizes_with_cooldown() {
        let mut sm = machine();
        let clap = frame(vec![
            (hand_points((200.0, 300.0)), Handedness::Left),
            (hand_points((350.0, 300.0)), Handedness::Right),
        ]);

        assert_eq!(discrete(&sm.process_frame(&clap)), vec![Action::MinimizeWindow]);
        assert_eq!(sm.cooldowns().remaining(CooldownKey::MinimizeWindow), 25);

        for _ in 0..24 {
            assert!(discrete(&sm.process_frame(&clap)).is_empty());
        }
        assert_eq!(discrete(&sm.process_frame(&clap)), vec![Action::MinimizeWindow]);
    }

    #[test]
    fn test_cursor_glides_without_hand() {
        let mut sm = machine();
        let at = |x, y| {
            frame(vec![(
                with(hand_points((600.0, 700.0)), Landmark::IndexTip, (x, y)),
                Handedness::Right,
            )])
        };

        sm.process_frame(&at(0.0, 0.0));
        sm.process_frame(&at(1280.0, 720.0));

        let actions = sm.process_frame(&FrameObservation::empty(FRAME_W, FRAME_H));
        assert!(matches!(actions.as_slice(), [Action::MoveCursor { .. }]));

        // Eventually settles and goes quiet
        for _ in 0..100 {
            sm.process_frame(&FrameObservation::empty(FRAME_W, FRAME_H));
        }
        assert!(sm
            .process_frame(&FrameObservation::empty(FRAME_W, FRAME_H))
            .is_empty());
    }

    #[test]
    fn test_image_zoom_from_spread() {
        let mut sm = machine().with_mode(Mode::Image);
        let spread = |gap: f64| {
            frame(vec![
                (pinching_hand((300.0, 700.0), (400.0, 300.0)), Handedness::Left),
                (
                    pinching_hand((300.0 + gap, 700.0), (400.0 + gap, 300.0)),
                    Handedness::Right,
                ),
            ])
        };

        assert!(discrete(&sm.process_frame(&spread(200.0))).is_empty());
        assert_eq!(sm.prev_zoom_distance(), Some(200.0));

        assert_eq!(
            discrete(&sm.process_frame(&spread(215.0))),
            vec![Action::Zoom {
                direction: ZoomDirection::In
            }]
        );

        // Small tremor is ignored
        assert!(discrete(&sm.process_frame(&spread(220.0))).is_empty());

        assert_eq!(
            discrete(&sm.process_frame(&spread(190.0))),
            vec![Action::Zoom {
                direction: ZoomDirection::Out
            }]
        );
    }

    #[test]
    fn test_zoom_baseline_resets_when_pinch_released() {
        let mut sm = machine().with_mode(Mode::Image);
        let pinched = frame(vec![
            (pinching_hand((300.0, 700.0), (400.0, 300.0)), Handedness::Left),
            (pinching_hand((500.0, 700.0), (600.0, 300.0)), Handedness::Right),
        ]);
        let one_open = frame(vec![
            (pinching_hand((300.0, 700.0), (400.0, 300.0)), Handedness::Left),
            (hand_points((500.0, 700.0)), Handedness::Right),
        ]);

        sm.process_frame(&pinched);
        assert!(sm.prev_zoom_distance().is_some());
        sm.process_frame(&one_open);
        assert_eq!(sm.prev_zoom_distance(), None);
    }

    #[test]
    fn test_image_clap_next_image() {
        let mut sm = machine().with_mode(Mode::Image);
        let clap = frame(vec![
            (hand_points((200.0, 300.0)), Handedness::Left),
            (hand_points((350.0, 300.0)), Handedness::Right),
        ]);

        assert_eq!(discrete(&sm.process_frame(&clap)), vec![Action::NextImage]);
        assert!(discrete(&sm.process_frame(&clap)).is_empty());
        assert_eq!(sm.cooldowns().remaining(CooldownKey::NextImage), 24);
        assert!(sm.cooldowns().is_ready(CooldownKey::MinimizeWindow));
    }

    #[test]
    fn test_right_hand_drags_left_hand_stops() {
        let mut sm = machine().with_mode(Mode::Image);
        let right_at = |x, y| {
            frame(vec![(
                with(hand_points((500.0, 700.0)), Landmark::IndexTip, (x, y)),
                Handedness::Right,
            )])
        };

        assert!(sm.process_frame(&right_at(500.0, 300.0)).is_empty());
        assert!(sm.viewer().is_dragging());

        assert_eq!(
            sm.process_frame(&right_at(530.0, 320.0)),
            vec![Action::Pan { dx: 30.0, dy: 20.0 }]
        );
        assert_eq!(sm.viewer().target_offset(), Point2D::new(30.0, 20.0));

        sm.process_frame(&frame(vec![(hand_points((500.0, 700.0)), Handedness::Left)]));
        assert!(!sm.viewer().is_dragging());
        assert_eq!(sm.viewer().target_offset(), Point2D::new(30.0, 20.0));
    }

    #[test]
    fn test_viewer_advances_every_frame() {
        let mut sm = machine().with_mode(Mode::Image);
        let right_at = |x| {
            frame(vec![(
                with(hand_points((500.0, 700.0)), Landmark::IndexTip, (x, 300.0)),
                Handedness::Right,
            )])
        };
        sm.process_frame(&right_at(500.0));
        sm.process_frame(&right_at(600.0));
        let offset_after_drag = sm.view().offset_x;

        sm.process_frame(&FrameObservation::empty(FRAME_W, FRAME_H));
        assert!(sm.view().offset_x > offset_after_drag);
    }

    #[test]
    fn test_malformed_hand_is_skipped() {
        let mut sm = machine();
        let short: Vec<Point2D> = hand_points((400.0, 600.0)).into_iter().take(10).collect();
        let clap_partner = hand_points((350.0, 600.0));

        // Only one usable hand: cursor path, not a clap
        let actions = sm.process_frame(&frame(vec![
            (short, Handedness::Left),
            (clap_partner, Handedness::Right),
        ]));
        assert!(matches!(actions.as_slice(), [Action::MoveCursor { .. }]));
        assert_eq!(sm.frames_processed(), 1);
    }
}
