//! Forward kinematics for a planar two-link revolute arm.
//!
//! The model is the textbook chain: link 1 of length `a1` rotated by `q1` about the
//! origin, link 2 of length `a2` rotated by `q2` relative to link 1. Angles are in
//! radians and are deliberately not normalized to a canonical range.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A point in the arm's workspace plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Exact Euclidean distance. The solver compares this against thresholds in
    /// physical units, so it must never be replaced by the squared distance.
    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

/// Computes the elbow and end-effector positions for link lengths `a1`, `a2` and
/// joint angles `q1`, `q2` (`q2` is relative to link 1's orientation).
///
/// Pure function of its inputs; any finite reals are accepted.
pub fn forward_kinematics(a1: f64, a2: f64, q1: f64, q2: f64) -> (Point2D, Point2D) {
    let elbow = Point2D::new(a1 * q1.cos(), a1 * q1.sin());
    let end_effector = Point2D::new(
        elbow.x + a2 * (q1 + q2).cos(),
        elbow.y + a2 * (q1 + q2).sin(),
    );
    (elbow, end_effector)
}

/// The three joint positions of a posed arm, for consumption by a display layer.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ArmPose {
    pub joint1: Point2D,
    pub joint2: Point2D,
    pub end_effector: Point2D,
}

/// A two-link arm with a current pose.
///
/// The link lengths are fixed at construction; the joint angles are a scratch
/// register for replaying solutions at the display boundary. Fitness evaluation goes
/// through [`forward_kinematics`] directly and neither reads nor writes the pose.
#[derive(Debug, Clone)]
pub struct Arm2D {
    a1: f64,
    a2: f64,
    q1: f64,
    q2: f64,
}

impl Arm2D {
    pub fn new(a1: f64, a2: f64) -> Result<Self, Error> {
        if !(a1.is_finite() && a1 > 0.0) || !(a2.is_finite() && a2 > 0.0) {
            return Err(format!("link lengths must be positive, got a1={a1}, a2={a2}").into());
        }
        Ok(Self {
            a1,
            a2,
            q1: 0.0,
            q2: 0.0,
        })
    }

    pub fn a1(&self) -> f64 {
        self.a1
    }

    pub fn a2(&self) -> f64 {
        self.a2
    }

    /// The farthest distance from the origin the end effector can reach.
    pub fn reach(&self) -> f64 {
        self.a1 + self.a2
    }

    pub fn set_joint_angles(&mut self, q1: f64, q2: f64) {
        self.q1 = q1;
        self.q2 = q2;
    }

    pub fn joint_angles(&self) -> (f64, f64) {
        (self.q1, self.q2)
    }

    /// The base joint, fixed at the origin.
    pub fn joint1_position(&self) -> Point2D {
        Point2D::new(0.0, 0.0)
    }

    /// The elbow joint at the end of link 1.
    pub fn joint2_position(&self) -> Point2D {
        let (elbow, _) = forward_kinematics(self.a1, self.a2, self.q1, self.q2);
        elbow
    }

    pub fn end_effector_position(&self) -> Point2D {
        let (_, end_effector) = forward_kinematics(self.a1, self.a2, self.q1, self.q2);
        end_effector
    }

    pub fn pose(&self) -> ArmPose {
        let (joint2, end_effector) = forward_kinematics(self.a1, self.a2, self.q1, self.q2);
        ArmPose {
            joint1: self.joint1_position(),
            joint2,
            end_effector,
        }
    }
}
