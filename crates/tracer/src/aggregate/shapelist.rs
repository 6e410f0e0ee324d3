use crate::{
    ray::Ray,
    shape::{FullIntersectionResult, IntersectionResult, MinIntersectionResult, Shape},
};

/// Brute-force aggregate: every ray is tested against every shape.
///
/// The closest hit wins, the first shape inserted wins ties. A hit that the ray
/// cannot reach (see [Ray::reaches]) is reported as no intersection, this is how
/// the visibility horizon is enforced.
#[derive(Default)]
pub struct ShapeList(pub Vec<Box<dyn Shape>>);

impl ShapeList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Shape for ShapeList {
    fn intersection_full(&self, ray: Ray) -> FullIntersectionResult {
        self.0
            .iter()
            .map(|shape| shape.intersection_full(ray))
            .fold(IntersectionResult::NoIntersection, IntersectionResult::min)
            .within(&ray)
    }

    fn intersect_bare(&self, ray: Ray) -> MinIntersectionResult {
        self.0
            .iter()
            .map(|shape| shape.intersect_bare(ray))
            .fold(IntersectionResult::NoIntersection, IntersectionResult::min)
            .within(&ray)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::{
        material::MaterialId,
        math::point::Point,
        ray::Ray,
        shape::{IntersectionResult, Shape, Sphere},
    };

    use super::ShapeList;

    fn list(spheres: &[(Point, f32, usize)]) -> ShapeList {
        ShapeList(
            spheres
                .iter()
                .map(|&(center, radius, material)| {
                    Box::new(Sphere::new(center, radius, MaterialId(material))) as Box<dyn Shape>
                })
                .collect(),
        )
    }

    fn hit_material(list: &ShapeList, ray: Ray) -> Option<MaterialId> {
        match list.intersection_full(ray) {
            IntersectionResult::Intersection(isect) => Some(isect.local_info.material),
            IntersectionResult::NoIntersection => None,
        }
    }

    #[test]
    fn nearest_sphere_wins() {
        let ray = Ray::new(Point::ORIGIN, Vec3::NEG_Z);
        let spheres = list(&[
            (Point::new(0.0, 0.0, -10.0), 2.0, 0),
            (Point::new(0.0, 0.0, -7.0), 2.0, 1),
        ]);
        assert_eq!(hit_material(&spheres, ray), Some(MaterialId(1)));

        let IntersectionResult::Intersection(isect) = spheres.intersection_full(ray) else {
            panic!("expected an intersection");
        };
        assert!((isect.t - 5.0).abs() < 1e-5);
        assert!(isect.local_info.normal.distance(Vec3::Z) < 1e-5);
    }

    #[test]
    fn first_sphere_wins_ties() {
        let ray = Ray::new(Point::ORIGIN, Vec3::NEG_Z);
        let spheres = list(&[
            (Point::new(0.0, 0.0, -5.0), 1.0, 0),
            (Point::new(0.0, 0.0, -5.0), 1.0, 1),
        ]);
        assert_eq!(hit_material(&spheres, ray), Some(MaterialId(0)));
    }

    #[test]
    fn horizon_hides_far_spheres() {
        let spheres = list(&[(Point::new(0.0, 0.0, -50.0), 1.0, 0)]);

        let far = Ray::new_with_range(Point::ORIGIN, Vec3::NEG_Z, 0.0..100.0);
        assert_eq!(hit_material(&spheres, far), Some(MaterialId(0)));
        assert!(spheres.intersect_bare(far).is_intersection());

        let near = Ray::new_with_range(Point::ORIGIN, Vec3::NEG_Z, 0.0..20.0);
        assert_eq!(hit_material(&spheres, near), None);
        assert!(!spheres.intersect_bare(near).is_intersection());
    }

    #[test]
    fn empty_list_never_hits() {
        let spheres = ShapeList::default();
        assert!(spheres.is_empty());
        assert_eq!(hit_material(&spheres, Ray::new(Point::ORIGIN, Vec3::X)), None);
    }

    #[test]
    fn bare_and_full_agree() {
        let ray = Ray::new(Point::new(0.3, -0.2, 0.0), Vec3::new(-0.1, 0.05, -1.0));
        let spheres = list(&[
            (Point::new(-4.0, 0.0, -16.0), 2.0, 0),
            (Point::new(0.0, 0.0, -20.0), 3.0, 1),
        ]);
        assert_eq!(spheres.len(), 2);

        let full = spheres.intersection_full(ray).t();
        let bare = spheres.intersect_bare(ray).t();
        assert!(full.is_some());
        assert_eq!(full, bare);
    }
}
