use crate::foundation::{
    core::{Affine, Point, Rect},
    error::{SeaglassError, SeaglassResult},
};

const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Four-vertex, two-triangle mesh with unit UV mapping.
///
/// Vertices run clockwise in y-down space starting at the top-left corner, with UVs
/// `(0,0) (1,0) (1,1) (0,1)`. The quad must be a non-degenerate parallelogram so that the
/// position-to-UV map is affine.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QuadMesh {
    /// `aVertexPosition` attribute.
    pub positions: Vec<[f32; 2]>,
    /// `aUvs` attribute.
    pub uvs: Vec<[f32; 2]>,
    /// Triangle list.
    pub indices: Vec<u16>,
}

impl QuadMesh {
    /// Axis-aligned square spanning `[-half_extent, half_extent]²`.
    pub fn centered(half_extent: f32) -> SeaglassResult<Self> {
        let e = half_extent;
        let mesh = Self {
            positions: vec![[-e, -e], [e, -e], [e, e], [-e, e]],
            uvs: vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
            indices: QUAD_INDICES.to_vec(),
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Check the topology contract the UV mapping depends on.
    pub fn validate(&self) -> SeaglassResult<()> {
        if self.positions.len() != 4 || self.uvs.len() != 4 {
            return Err(SeaglassError::validation(format!(
                "quad mesh needs 4 positions and 4 uvs, got {} and {}",
                self.positions.len(),
                self.uvs.len()
            )));
        }
        if self.indices != QUAD_INDICES {
            return Err(SeaglassError::validation(
                "quad mesh indices must be [0, 1, 2, 0, 2, 3]",
            ));
        }
        let unit = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        if self.uvs != unit {
            return Err(SeaglassError::validation(
                "quad mesh uvs must map the unit square",
            ));
        }
        if self.positions.iter().flatten().any(|v| !v.is_finite()) {
            return Err(SeaglassError::validation(
                "quad mesh positions must be finite",
            ));
        }

        let [p0, p1, p2, p3] = self.points();
        let diagonal_error = ((p0 + (p2 - p1)) - p3).hypot();
        let scale = (p1 - p0).hypot().max((p3 - p0).hypot());
        if diagonal_error > 1e-4 * scale.max(1.0) {
            return Err(SeaglassError::validation(
                "quad mesh positions must form a parallelogram",
            ));
        }
        if self.uv_to_local().determinant().abs() < 1e-9 {
            return Err(SeaglassError::validation("quad mesh is degenerate"));
        }
        Ok(())
    }

    fn points(&self) -> [Point; 4] {
        let p = |i: usize| {
            let [x, y] = self.positions[i];
            Point::new(f64::from(x), f64::from(y))
        };
        [p(0), p(1), p(2), p(3)]
    }

    /// Map from UV space to local mesh space.
    pub fn uv_to_local(&self) -> Affine {
        let [p0, p1, _, p3] = self.points();
        let u = p1 - p0;
        let v = p3 - p0;
        Affine::new([u.x, u.y, v.x, v.y, p0.x, p0.y])
    }

    /// Map from local mesh space to UV space.
    pub fn local_to_uv(&self) -> Affine {
        self.uv_to_local().inverse()
    }

    /// Bounding box in local space.
    pub fn local_bounds(&self) -> Rect {
        let pts = self.points();
        let mut r = Rect::from_points(pts[0], pts[2]);
        for p in &pts {
            r = r.union_pt(*p);
        }
        r
    }
}

#[cfg(test)]
#[path = "../../tests/unit/water/mesh.rs"]
mod tests;
