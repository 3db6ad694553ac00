//! Static SVG rendering of Bloch-sphere trajectories.
//!
//! A [`BlochFigure`] holds every appearance option; [`BlochFigure::render`]
//! draws a [`Trajectory`] onto an orthographic projection of the unit sphere
//! and returns the finished document as a [`BlochPlot`].

use std::{ f64::consts::TAU, fs, path::Path };
use serde::{ Deserialize, Serialize };
use crate::{
    bloch::{ BlochVector, Trajectory },
    error::{ RabiError, RabiResult },
};

// segments per great circle
const CIRCLE_SEGMENTS: usize = 96;
// points further than this from the unit sphere are reported
const RADIUS_TOL: f64 = 1e-6;
// sphere radius as a fraction of the canvas size
const SPHERE_SCALE: f64 = 0.36;

/// Appearance of a Bloch-sphere figure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlochFigure {
    /// Labels for the north (+z) and south (-z) poles.
    pub labels: [String; 2],
    /// Positions of the pole labels along the z-axis, in units of the sphere
    /// radius.
    pub label_pos: [f64; 2],
    /// Width and height of the square canvas, in pixels.
    pub size: u32,
    /// Viewing azimuth and elevation, in degrees.
    pub view: [f64; 2],
    /// Fill colour of trajectory markers.
    pub point_color: String,
    /// Radius of trajectory markers, in pixels.
    pub point_radius: f64,
}

impl Default for BlochFigure {
    fn default() -> Self {
        Self {
            labels: ["|g,n⟩".into(), "|e,n−1⟩".into()],
            label_pos: [1.25, -1.35],
            size: 480,
            view: [-60.0, 30.0],
            point_color: "#1f77b4".into(),
            point_radius: 4.0,
        }
    }
}

/// A rendered figure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlochPlot {
    svg: String,
    points: usize,
}

impl BlochPlot {
    /// The SVG document.
    pub fn svg(&self) -> &str { &self.svg }

    /// Number of trajectory points drawn.
    pub fn num_points(&self) -> usize { self.points }

    /// Consume `self`, returning the SVG document.
    pub fn into_svg(self) -> String { self.svg }

    /// Write the SVG document to a file.
    pub fn save<P>(&self, path: P) -> RabiResult<()>
    where P: AsRef<Path>
    {
        fs::write(path, &self.svg)?;
        Ok(())
    }
}

// orthographic camera; `depth > 0` faces the viewer
#[derive(Copy, Clone, Debug)]
struct Camera {
    right: [f64; 3],
    up: [f64; 3],
    toward: [f64; 3],
    center: f64,
    scale: f64,
}

impl Camera {
    fn new(figure: &BlochFigure) -> Self {
        let az = figure.view[0].to_radians();
        let el = figure.view[1].to_radians();
        let (saz, caz) = az.sin_cos();
        let (sel, cel) = el.sin_cos();
        let size = f64::from(figure.size);
        Self {
            right: [-saz, caz, 0.0],
            up: [-sel * caz, -sel * saz, cel],
            toward: [cel * caz, cel * saz, sel],
            center: size / 2.0,
            scale: SPHERE_SCALE * size,
        }
    }

    // (screen x, screen y, depth)
    fn project(&self, p: [f64; 3]) -> (f64, f64, f64) {
        let dot = |a: [f64; 3]| a[0] * p[0] + a[1] * p[1] + a[2] * p[2];
        (
            self.center + self.scale * dot(self.right),
            self.center - self.scale * dot(self.up),
            dot(self.toward),
        )
    }
}

fn escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '\'' => "&apos;".to_string(),
            '"' => "&quot;".to_string(),
            c => c.to_string(),
        })
        .collect()
}

fn great_circle<F>(camera: &Camera, f: F) -> Vec<String>
where F: Fn(f64) -> [f64; 3]
{
    (0..CIRCLE_SEGMENTS)
        .map(|k| {
            let t0 = TAU * k as f64 / CIRCLE_SEGMENTS as f64;
            let t1 = TAU * (k + 1) as f64 / CIRCLE_SEGMENTS as f64;
            let (x0, y0, d0) = camera.project(f(t0));
            let (x1, y1, d1) = camera.project(f(t1));
            let dash = if d0 + d1 < 0.0 { " stroke-dasharray='3,3'" } else { "" };
            format!(
                "<line x1='{:.2}' y1='{:.2}' x2='{:.2}' y2='{:.2}' \
                stroke='#888888' stroke-width='1'{} />",
                x0, y0, x1, y1, dash,
            )
        })
        .collect()
}

impl BlochFigure {
    /// Draw `trajectory` on the sphere.
    ///
    /// Fails if any point is not finite. Points more than `1e-6` away from the
    /// unit sphere are still drawn, but a warning is logged.
    pub fn render(&self, trajectory: &Trajectory) -> RabiResult<BlochPlot> {
        let mut points: Vec<BlochVector> = Vec::with_capacity(trajectory.len());
        for (k, v) in trajectory.points().enumerate() {
            if !v.is_finite() { return Err(RabiError::NonFinitePoint(k)); }
            if !v.is_pure(RADIUS_TOL) {
                log::warn!(
                    "point {} lies off the unit sphere (|v| = {:.9})",
                    k, v.magnitude(),
                );
            }
            points.push(v);
        }

        let camera = Camera::new(self);
        let mut parts = vec![format!(
            "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{w}' \
            viewBox='0 0 {w} {w}'>",
            w = self.size,
        )];
        parts.push(format!(
            "<rect width='{w}' height='{w}' fill='#ffffff' />",
            w = self.size,
        ));
        parts.push(format!(
            "<circle cx='{c:.2}' cy='{c:.2}' r='{r:.2}' fill='#f0f0f5' \
            fill-opacity='0.6' stroke='#555555' stroke-width='1.5' />",
            c = camera.center,
            r = camera.scale,
        ));

        parts.extend(great_circle(&camera, |t| [t.cos(), t.sin(), 0.0]));
        parts.extend(great_circle(&camera, |t| [t.cos(), 0.0, t.sin()]));
        parts.extend(great_circle(&camera, |t| [0.0, t.cos(), t.sin()]));

        for axis in [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]] {
            let (x0, y0, _) = camera.project(axis.map(|a: f64| -a));
            let (x1, y1, _) = camera.project(axis);
            parts.push(format!(
                "<line x1='{:.2}' y1='{:.2}' x2='{:.2}' y2='{:.2}' \
                stroke='#555555' stroke-width='0.8' />",
                x0, y0, x1, y1,
            ));
        }

        for (label, &z) in self.labels.iter().zip(self.label_pos.iter()) {
            let (x, y, _) = camera.project([0.0, 0.0, z]);
            parts.push(format!(
                "<text x='{:.2}' y='{:.2}' font-family='serif' font-size='18' \
                text-anchor='middle' dominant-baseline='middle'>{}</text>",
                x, y, escape(label),
            ));
        }

        // far side first so near markers overlap it
        let mut projected: Vec<(f64, f64, f64)>
            = points.iter()
            .map(|v| camera.project([v.x, v.y, v.z]))
            .collect();
        projected.sort_by(|a, b| a.2.total_cmp(&b.2));
        for (x, y, depth) in projected {
            let opacity = if depth < 0.0 { 0.35 } else { 1.0 };
            parts.push(format!(
                "<circle cx='{:.2}' cy='{:.2}' r='{:.2}' fill='{}' \
                fill-opacity='{:.2}' />",
                x, y, self.point_radius, escape(&self.point_color), opacity,
            ));
        }

        parts.push("</svg>".into());
        log::debug!("rendered {} points", points.len());
        Ok(BlochPlot { svg: parts.join(""), points: points.len() })
    }
}

#[cfg(test)]
mod test {
    use ndarray as nd;
    use super::*;

    fn two_points() -> Trajectory {
        Trajectory::from_components(
            nd::array![0.0, 1.0],
            nd::array![1.0, 0.0],
            nd::array![0.0, 0.0],
            nd::array![0.0, -1.0],
        ).unwrap()
    }

    #[test]
    fn draws_every_point_and_label() {
        let figure = BlochFigure::default();
        let plot = figure.render(&two_points()).unwrap();
        assert_eq!(plot.num_points(), 2);
        let svg = plot.svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("|g,n⟩"));
        assert!(svg.contains("|e,n−1⟩"));
        assert_eq!(svg.matches("fill='#1f77b4'").count(), 2);
    }

    #[test]
    fn escapes_labels() {
        let figure = BlochFigure {
            labels: ["<g>".into(), "a & b".into()],
            ..BlochFigure::default()
        };
        let svg = figure.render(&two_points()).unwrap().into_svg();
        assert!(svg.contains("&lt;g&gt;"));
        assert!(svg.contains("a &amp; b"));
    }

    #[test]
    fn rejects_non_finite_points() {
        let traj = Trajectory::from_components(
            nd::array![0.0, 1.0],
            nd::array![0.0, f64::NAN],
            nd::array![0.0, 0.0],
            nd::array![1.0, 0.0],
        ).unwrap();
        assert!(matches!(
            BlochFigure::default().render(&traj),
            Err(RabiError::NonFinitePoint(1)),
        ));
    }

    #[test]
    fn north_pole_projects_above_center() {
        let figure = BlochFigure::default();
        let camera = Camera::new(&figure);
        let (x, y, _) = camera.project([0.0, 0.0, 1.0]);
        assert!((x - camera.center).abs() < 1e-9);
        assert!(y < camera.center);
    }

    #[test]
    fn empty_trajectory_draws_sphere_only() {
        let traj = Trajectory::from_components(
            nd::Array1::zeros(0),
            nd::Array1::zeros(0),
            nd::Array1::zeros(0),
            nd::Array1::zeros(0),
        ).unwrap();
        let plot = BlochFigure::default().render(&traj).unwrap();
        assert_eq!(plot.num_points(), 0);
        assert!(plot.svg().contains("<circle"));
    }
}
