//! Particle shapes and their outline geometry.
//!
//! Every shape maps to an [`Outline`]: what a [`Surface`](crate::Surface)
//! has to fill to draw a particle of that shape at a given position and size.
//!
//! | Shape | Outline |
//! |-------|---------|
//! | [`ParticleShape::Circle`] | Disc of radius `size` centered on the position |
//! | [`ParticleShape::Square`] | `size`×`size` square whose **top-left** corner is the position |
//! | [`ParticleShape::Triangle`] | Apex `size` above, base corners `size` below and to either side |
//! | [`ParticleShape::Star`] | Fixed 10-point stylized star |
//! | [`ParticleShape::Hexagon`] | Regular hexagon, first vertex on the +x axis |

use std::f32::consts::FRAC_PI_3;
use std::fmt;
use std::str::FromStr;

use glam::{IVec2, Vec2};

use crate::error::ShapeParseError;

/// Vertex offsets of the star, in units of particle size.
///
/// This is a stylized star, not a regular star polygon.
const STAR_OFFSETS: [[f32; 2]; 10] = [
    [0.0, -1.0],
    [0.5, -0.3],
    [1.0, -1.0],
    [0.5, 0.3],
    [1.0, 1.0],
    [0.0, 0.5],
    [-1.0, 1.0],
    [-0.5, 0.3],
    [-1.0, -1.0],
    [-0.5, -0.3],
];

/// Shape used to draw a particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParticleShape {
    /// Filled disc (default).
    #[default]
    Circle,
    /// Axis-aligned square anchored at its top-left corner.
    Square,
    /// Isosceles triangle pointing up.
    Triangle,
    /// 10-point stylized star.
    Star,
    /// Regular hexagon.
    Hexagon,
}

/// Geometry to fill for one particle.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// Filled disc around an integer pixel center.
    Disc { center: IVec2, radius: f32 },
    /// Filled axis-aligned rectangle starting at `origin`.
    Rect { origin: IVec2, size: IVec2 },
    /// Filled polygon, vertices in drawing order.
    Polygon(Vec<Vec2>),
}

impl ParticleShape {
    /// All shapes, in dropdown order.
    pub const ALL: [ParticleShape; 5] = [
        ParticleShape::Circle,
        ParticleShape::Square,
        ParticleShape::Triangle,
        ParticleShape::Star,
        ParticleShape::Hexagon,
    ];

    /// Lowercase name shown in the shape dropdown.
    pub fn label(self) -> &'static str {
        match self {
            ParticleShape::Circle => "circle",
            ParticleShape::Square => "square",
            ParticleShape::Triangle => "triangle",
            ParticleShape::Star => "star",
            ParticleShape::Hexagon => "hexagon",
        }
    }

    /// Outline of this shape for a particle at `position` with the given `size`.
    pub fn outline(self, position: Vec2, size: f32) -> Outline {
        match self {
            ParticleShape::Circle => Outline::Disc {
                center: position.round().as_ivec2(),
                radius: size,
            },
            ParticleShape::Square => Outline::Rect {
                origin: position.round().as_ivec2(),
                size: IVec2::splat(size.round() as i32),
            },
            ParticleShape::Triangle => Outline::Polygon(vec![
                position + Vec2::new(0.0, -size),
                position + Vec2::new(-size, size),
                position + Vec2::new(size, size),
            ]),
            ParticleShape::Star => Outline::Polygon(
                STAR_OFFSETS
                    .iter()
                    .map(|&[dx, dy]| position + Vec2::new(dx, dy) * size)
                    .collect(),
            ),
            ParticleShape::Hexagon => Outline::Polygon(
                (0..6)
                    .map(|k| position + Vec2::from_angle(FRAC_PI_3 * k as f32) * size)
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for ParticleShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ParticleShape {
    type Err = ShapeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParticleShape::ALL
            .into_iter()
            .find(|shape| shape.label() == s)
            .ok_or_else(|| ShapeParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polygon(outline: Outline) -> Vec<Vec2> {
        match outline {
            Outline::Polygon(points) => points,
            other => panic!("expected polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_labels_round_trip() {
        for shape in ParticleShape::ALL {
            assert_eq!(shape.label().parse::<ParticleShape>(), Ok(shape));
            assert_eq!(shape.to_string(), shape.label());
        }
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        assert_eq!(
            "pentagon".parse::<ParticleShape>(),
            Err(ShapeParseError("pentagon".into()))
        );
        // Labels are case-sensitive, like the dropdown text they come from
        assert!("Circle".parse::<ParticleShape>().is_err());
    }

    #[test]
    fn test_circle_rounds_center() {
        let outline = ParticleShape::Circle.outline(Vec2::new(10.6, 20.4), 7.0);
        assert_eq!(
            outline,
            Outline::Disc {
                center: IVec2::new(11, 20),
                radius: 7.0
            }
        );
    }

    #[test]
    fn test_square_is_anchored_at_top_left() {
        let outline = ParticleShape::Square.outline(Vec2::new(100.0, 50.0), 10.0);
        assert_eq!(
            outline,
            Outline::Rect {
                origin: IVec2::new(100, 50),
                size: IVec2::splat(10),
            }
        );
    }

    #[test]
    fn test_triangle_vertices() {
        let points = polygon(ParticleShape::Triangle.outline(Vec2::new(50.0, 50.0), 5.0));
        assert_eq!(
            points,
            vec![
                Vec2::new(50.0, 45.0),
                Vec2::new(45.0, 55.0),
                Vec2::new(55.0, 55.0)
            ]
        );
    }

    #[test]
    fn test_star_uses_literal_offsets() {
        let points = polygon(ParticleShape::Star.outline(Vec2::ZERO, 10.0));
        assert_eq!(points.len(), 10);
        assert_eq!(points[0], Vec2::new(0.0, -10.0));
        assert_eq!(points[1], Vec2::new(5.0, -3.0));
        assert_eq!(points[2], Vec2::new(10.0, -10.0));
        assert_eq!(points[5], Vec2::new(0.0, 5.0));
        assert_eq!(points[9], Vec2::new(-5.0, -3.0));
    }

    #[test]
    fn test_hexagon_vertices_on_radius() {
        let center = Vec2::new(200.0, 100.0);
        let points = polygon(ParticleShape::Hexagon.outline(center, 10.0));
        assert_eq!(points.len(), 6);

        for (k, point) in points.iter().enumerate() {
            let offset = *point - center;
            assert!((offset.length() - 10.0).abs() < 1e-4);

            let expected = (60.0 * k as f32).to_radians();
            let angle = offset.y.atan2(offset.x).rem_euclid(std::f32::consts::TAU);
            assert!((angle - expected).abs() < 1e-4, "vertex {} at {}", k, angle);
        }
        // Angle 0 lies on the +x axis
        assert!((points[0] - Vec2::new(210.0, 100.0)).length() < 1e-4);
    }
}
