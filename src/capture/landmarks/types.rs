use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of landmarks the detector reports per hand.
pub const LANDMARK_COUNT: usize = 21;

/// Errors raised while turning a raw observation into a tracked hand
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LandmarkError {
    #[error("Expected {expected} landmarks, got {actual}")]
    WrongLandmarkCount { expected: usize, actual: usize },

    #[error("Unknown handedness label: {0:?}")]
    UnknownHandedness(String),
}

/// A position in capture-frame pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Landmarks the gesture vocabulary reads, by detector index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Landmark {
    Wrist = 0,
    ThumbTip = 4,
    IndexTip = 8,
    MiddleTip = 12,
}

impl Landmark {
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Which hand the detector believes a landmark set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Handedness {
    type Err = LandmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            l if l.eq_ignore_ascii_case("left") => Ok(Self::Left),
            r if r.eq_ignore_ascii_case("right") => Ok(Self::Right),
            other => Err(LandmarkError::UnknownHandedness(other.to_string())),
        }
    }
}

/// Exactly 21 landmarks for one detected hand.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSet {
    points: [Point2D; LANDMARK_COUNT],
}

impl LandmarkSet {
    pub fn point(&self, landmark: Landmark) -> Point2D {
        self.points[landmark.index()]
    }

    pub fn wrist(&self) -> Point2D {
        self.point(Landmark::Wrist)
    }

    pub fn thumb_tip(&self) -> Point2D {
        self.point(Landmark::ThumbTip)
    }

    pub fn index_tip(&self) -> Point2D {
        self.point(Landmark::IndexTip)
    }

    pub fn middle_tip(&self) -> Point2D {
        self.point(Landmark::MiddleTip)
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }
}

impl TryFrom<Vec<Point2D>> for LandmarkSet {
    type Error = LandmarkError;

    fn try_from(points: Vec<Point2D>) -> Result<Self, Self::Error> {
        let actual = points.len();
        let points: [Point2D; LANDMARK_COUNT] =
            points
                .try_into()
                .map_err(|_| LandmarkError::WrongLandmarkCount {
                    expected: LANDMARK_COUNT,
                    actual,
                })?;
        Ok(Self { points })
    }
}

/// A validated hand: landmark set and label, never separated.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedHand {
    pub landmarks: LandmarkSet,
    pub handedness: Handedness,
}

/// One hand as reported by the detector, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandObservation {
    pub landmarks: Vec<Point2D>,
    pub label: String,
}

impl HandObservation {
    pub fn new(landmarks: Vec<Point2D>, handedness: Handedness) -> Self {
        Self {
            landmarks,
            label: handedness.as_str().to_string(),
        }
    }

    pub fn to_tracked(&self) -> Result<TrackedHand, LandmarkError> {
        let handedness = self.label.parse()?;
        let landmarks = LandmarkSet::try_from(self.landmarks.clone())?;
        Ok(TrackedHand {
            landmarks,
            handedness,
        })
    }
}

/// Everything the detector saw in one capture frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameObservation {
    pub frame_width: u32,
    pub frame_height: u32,
    #[serde(default)]
    pub hands: Vec<HandObservation>,
}

impl FrameObservation {
    pub fn new(frame_width: u32, frame_height: u32, hands: Vec<HandObservation>) -> Self {
        Self {
            frame_width,
            frame_height,
            hands,
        }
    }

    pub fn empty(frame_width: u32, frame_height: u32) -> Self {
        Self::new(frame_width, frame_height, Vec::new())
    }

    /// Hands with usable data, in detector order, at most two.
    ///
    /// Malformed hands are dropped rather than failing the frame.
    pub fn usable_hands(&self) -> Vec<TrackedHand> {
        let mut usable = Vec::with_capacity(2);
        for (i, hand) in self.hands.iter().enumerate() {
            match hand.to_tracked() {
                Ok(tracked) => usable.push(tracked),
                Err(e) => tracing::debug!("Skipping hand {}: {}", i, e),
            }
        }

        if usable.len() > 2 {
            tracing::warn!("Detector reported {} hands, keeping the first two", usable.len());
            usable.truncate(2);
        }
        usable
    }
}

/// Discrete inputs driving a gesture session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InputEvent {
    Frame(FrameObservation),
    ToggleMode,
    Quit,
}
