//! Hotspot projection onto the fixed map canvas.

/// Virtual canvas the web front end draws on; the map panel scales it
/// down to its cell rectangle.
pub const CANVAS_W: f64 = 800.0;
pub const CANVAS_H: f64 = 400.0;

const LNG_MIN: f64 = 65.0;
const LNG_MAX: f64 = 80.0;
const LAT_MIN: f64 = 25.0;
const LAT_MAX: f64 = 35.0;

/// Affine projection over the fixed bounding box. Points outside the box
/// project outside the canvas; callers cull them rather than clamping.
pub fn project(lat: f64, lng: f64) -> (f64, f64) {
    let x = (lng - LNG_MIN) / (LNG_MAX - LNG_MIN) * CANVAS_W;
    let y = (LAT_MAX - lat) / (LAT_MAX - LAT_MIN) * CANVAS_H;
    (x, y)
}

pub fn on_canvas(x: f64, y: f64) -> bool {
    (0.0..=CANVAS_W).contains(&x) && (0.0..=CANVAS_H).contains(&y)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub color: &'static str,
    pub size: u16,
}

/// Intensity buckets drive both marker color and footprint. Anything
/// outside the three known levels gets the neutral marker.
pub fn classify(intensity: &str) -> Marker {
    match intensity {
        "high" => Marker { color: "#ff1744", size: 20 },
        "medium" => Marker { color: "#ff9800", size: 16 },
        "low" => Marker { color: "#4caf50", size: 12 },
        _ => Marker { color: "#2196f3", size: 10 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_box_corners_and_center() {
        assert_eq!(project(35.0, 65.0), (0.0, 0.0));
        assert_eq!(project(25.0, 80.0), (800.0, 400.0));
        assert_eq!(project(30.0, 72.5), (400.0, 200.0));
    }

    #[test]
    fn out_of_box_points_project_off_canvas() {
        // Mumbai: south and west of the box
        let (x, y) = project(19.076, 72.8777);
        assert!(y > CANVAS_H);
        assert!(!on_canvas(x, y));
        // no clamping
        let (x, _) = project(30.0, 90.0);
        assert!(x > CANVAS_W);
    }

    #[test]
    fn classifies_intensity_levels() {
        assert_eq!(classify("high"), Marker { color: "#ff1744", size: 20 });
        assert_eq!(classify("medium"), Marker { color: "#ff9800", size: 16 });
        assert_eq!(classify("low"), Marker { color: "#4caf50", size: 12 });
        assert_eq!(classify("unknown"), Marker { color: "#2196f3", size: 10 });
        assert_eq!(classify(""), Marker { color: "#2196f3", size: 10 });
    }
}
