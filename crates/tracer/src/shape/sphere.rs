use crate::{
    material::MaterialId, math::point::Point, ray::Ray, utils::counter::counter,
};

use super::{
    local_info, FullIntersectionResult, IntersectionResult, MinIntersectionResult,
    RayIntersection, Shape,
};

/// A simple sphere shape. Normals are pointing outwards.
///
/// `radius` should be positive, results are unspecified otherwise.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Point,
    pub radius: f32,
    pub material: MaterialId,
}

impl Sphere {
    pub fn new(center: Point, radius: f32, material: MaterialId) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Distance along `ray` to the near side of the sphere.
    ///
    /// A ray starting inside the sphere sees nothing: the far root is never used,
    /// even though the ray does cross the surface on its way out.
    pub fn ray_intersect(&self, ray: &Ray) -> Option<f32> {
        counter!("Ray-sphere tests");
        let l = self.center - ray.origin;
        let tca = l.dot(ray.direction);
        let d2 = l.length_squared() - tca * tca;
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            return None;
        }

        let thc = f32::sqrt(r2 - d2);
        let t0 = tca - thc;
        (t0 >= 0.0).then_some(t0)
    }
}

impl Shape for Sphere {
    fn intersection_full(&self, ray: Ray) -> FullIntersectionResult {
        let IntersectionResult::Intersection(RayIntersection {
            t,
            local_info: local_info::Minimum { pos },
        }) = self.intersect_bare(ray)
        else {
            return IntersectionResult::NoIntersection;
        };

        IntersectionResult::Intersection(RayIntersection {
            t,
            local_info: local_info::Full {
                pos,
                normal: (pos - self.center).normalize(),
                material: self.material,
            },
        })
    }

    fn intersect_bare(&self, ray: Ray) -> MinIntersectionResult {
        match self.ray_intersect(&ray) {
            Some(t) => IntersectionResult::Intersection(RayIntersection {
                t,
                local_info: local_info::Minimum { pos: ray.at(t) },
            }),
            None => IntersectionResult::NoIntersection,
        }
    }
}
