//! Contains the objects that are meant to be renderered.
//!
//! Only spheres for now, but everything downstream of intersection goes through
//! the [Shape] trait so aggregates can hold any of them.

pub mod sphere;

pub use sphere::Sphere;

use crate::ray::Ray;

/// An abstracted shape to be rendered by raytracing.
///
/// To render a shape we only need to know whether a ray intersect it and if so,
///  some information about the shape at the intersection point
pub trait Shape: Sync + Send {
    /// Check whether `ray` intersect the shape defined by `self` if so, gives all the information needed
    fn intersection_full(&self, ray: Ray) -> FullIntersectionResult;

    /// Check whether `ray` intersect the shape defined by `self` if so, return the minimal amount of information
    /// It is often used to cast shadow rays
    fn intersect_bare(&self, ray: Ray) -> MinIntersectionResult;
}

pub mod local_info {
    use crate::{material::MaterialId, math::point::Point};
    use glam::Vec3;

    /// Contains all the local information that could be needed
    ///
    /// Note that all the information is computed. If not all information is needed, prefer other kinds of local_info.
    #[derive(Debug, Clone, Copy)]
    pub struct Full {
        pub pos: Point,
        /// Unit length, pointing outwards
        pub normal: Vec3,
        pub material: MaterialId,
    }

    /// Contains only the pure geometrical information needed to locate the point.
    #[derive(Debug, Clone, Copy)]
    pub struct Minimum {
        pub pos: Point,
    }
}

/// Holds local informations and the time of a colision between a ray and a shape.
#[derive(Debug, Clone, Copy)]
pub struct RayIntersection<LocalInfo> {
    pub t: f32,
    pub local_info: LocalInfo,
}

/// A `Result`-like type that takes care of intersections data.
#[derive(Debug, Clone, Copy)]
pub enum IntersectionResult<LocalInfo> {
    Intersection(RayIntersection<LocalInfo>),
    NoIntersection,
}

impl<T> IntersectionResult<T> {
    pub fn is_intersection(&self) -> bool {
        matches!(self, Self::Intersection(_))
    }

    pub fn t(&self) -> Option<f32> {
        match self {
            Self::Intersection(isect) => Some(isect.t),
            Self::NoIntersection => None,
        }
    }

    /// Keep the closest of two intersections.
    ///
    /// `other` only wins when it is strictly closer: on a tie, `self` is kept.
    pub fn min(self, other: Self) -> Self {
        let Self::Intersection(RayIntersection { t: t1, .. }) = self else {
            return other;
        };
        let Self::Intersection(RayIntersection { t: t2, .. }) = other else {
            return self;
        };

        if t2 < t1 {
            other
        } else {
            self
        }
    }

    /// Drop the intersection if it lies beyond what `ray` can reach.
    pub fn within(self, ray: &Ray) -> Self {
        match self {
            Self::Intersection(RayIntersection { t, .. }) if !ray.reaches(t) => {
                Self::NoIntersection
            }
            _ => self,
        }
    }
}

pub type MinIntersectionResult = IntersectionResult<local_info::Minimum>;
pub type FullIntersectionResult = IntersectionResult<local_info::Full>;
