//! Gesture classification from landmark geometry
//!
//! Every test here is a plain distance threshold evaluated fresh each frame;
//! the classifier keeps no state between frames. Debouncing and hold
//! tracking belong to the state machine.

use crate::capture::landmarks::types::LandmarkSet;
use crate::config::{ConfigResult, GestureThresholds};
use crate::processing::geometry::distance;

/// A gesture recognized in the current frame, with the distance behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Thumb tip touching index tip
    Pinch { distance: f64 },
    /// Thumb tip touching middle tip
    RightPinch { distance: f64 },
    /// Index and middle tips held together
    TwoFingerBridge { distance: f64 },
    /// Both wrists close together
    Clap { distance: f64 },
    None,
}

impl Gesture {
    pub fn distance(&self) -> Option<f64> {
        match *self {
            Self::Pinch { distance }
            | Self::RightPinch { distance }
            | Self::TwoFingerBridge { distance }
            | Self::Clap { distance } => Some(distance),
            Self::None => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Everything the classifier reads from a single hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandGestures {
    /// `Pinch`, `RightPinch` or `None`, after the click priority rule
    pub click: Gesture,
    /// `TwoFingerBridge` or `None`
    pub bridge: Gesture,
}

#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    thresholds: GestureThresholds,
}

impl GestureClassifier {
    /// Fails on a non-positive or non-finite threshold.
    pub fn new(thresholds: GestureThresholds) -> ConfigResult<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &GestureThresholds {
        &self.thresholds
    }

    pub fn is_pinch(&self, hand: &LandmarkSet) -> bool {
        distance(hand.thumb_tip(), hand.index_tip()) < self.thresholds.pinch_px
    }

    pub fn is_secondary_pinch(&self, hand: &LandmarkSet) -> bool {
        distance(hand.thumb_tip(), hand.middle_tip()) < self.thresholds.secondary_pinch_px
    }

    /// Click gesture for one hand.
    ///
    /// Thumb+index wins over thumb+middle: the secondary pinch is only
    /// tested when the primary pinch fails, so a thumb touching both
    /// fingers is always a left click.
    pub fn click(&self, hand: &LandmarkSet) -> Gesture {
        let primary = distance(hand.thumb_tip(), hand.index_tip());
        if primary < self.thresholds.pinch_px {
            return Gesture::Pinch { distance: primary };
        }

        let secondary = distance(hand.thumb_tip(), hand.middle_tip());
        if secondary < self.thresholds.secondary_pinch_px {
            Gesture::RightPinch {
                distance: secondary,
            }
        } else {
            Gesture::None
        }
    }

    /// Level-triggered text-selection gate.
    pub fn bridge(&self, hand: &LandmarkSet) -> Gesture {
        let d = distance(hand.index_tip(), hand.middle_tip());
        if d < self.thresholds.bridge_px {
            Gesture::TwoFingerBridge { distance: d }
        } else {
            Gesture::None
        }
    }

    pub fn clap(&self, first: &LandmarkSet, second: &LandmarkSet) -> Gesture {
        let d = distance(first.wrist(), second.wrist());
        if d < self.thresholds.clap_px {
            Gesture::Clap { distance: d }
        } else {
            Gesture::None
        }
    }

    pub fn classify_hand(&self, hand: &LandmarkSet) -> HandGestures {
        HandGestures {
            click: self.click(hand),
            bridge: self.bridge(hand),
        }
    }
}
