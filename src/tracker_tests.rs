#[cfg(test)]
mod tests {
    use crate::simulate::{synthetic_blendshapes, synthetic_face};
    use crate::topology::{IRIS_RING, LEFT_EYE_SOCKET, RIGHT_EYE_SOCKET};
    use crate::tracker::{average_iris_position, blink_scores, gaze_ratio, guard_denominator, SOCKET_EPSILON};
    use crate::types::{Blendshapes, BlinkScores, LandmarkSet, Point2};

    // =========================================================================
    // Direction conventions
    // h grows from the outer toward the inner reference corner of each eye.
    // v is inverted: iris at the top of the socket reads as 1.0.
    // =========================================================================

    #[test]
    fn test_iris_average_of_centered_ring() {
        let mut points = vec![Point2::new(0.1, 0.9); 478];
        for &i in IRIS_RING.iter() {
            points[i] = Point2::new(0.5, 0.5);
        }
        let set = LandmarkSet::new(points);
        assert_eq!(average_iris_position(Some(&set)), Some(Point2::new(0.5, 0.5)));
    }

    #[test]
    fn test_absent_face_is_none() {
        assert_eq!(average_iris_position(None), None);
        assert_eq!(gaze_ratio(None), None);

        // A mesh without iris refinement stops at 468 points
        let short = LandmarkSet::new(vec![Point2::default(); 468]);
        assert_eq!(average_iris_position(Some(&short)), None);
        assert_eq!(gaze_ratio(Some(&short)), None);
    }

    #[test]
    fn test_blink_defaults_to_open() {
        assert_eq!(blink_scores(None), BlinkScores { left: 0.0, right: 0.0 });

        let scores = blink_scores(Some(&synthetic_blendshapes(0.7, 0.2)));
        assert_eq!(scores, BlinkScores { left: 0.7, right: 0.2 });

        // Truncated output: only the left channel present
        let mut ten = vec![0.0; 10];
        ten[9] = 0.4;
        assert_eq!(
            blink_scores(Some(&Blendshapes::new(ten))),
            BlinkScores { left: 0.4, right: 0.0 }
        );
    }

    #[test]
    fn test_centered_gaze() {
        let g = gaze_ratio(Some(&synthetic_face(0.5, 0.5))).unwrap();
        assert!((g.h - 0.5).abs() < 1e-9, "h = {}", g.h);
        assert!((g.v - 0.5).abs() < 1e-9, "v = {}", g.v);
    }

    #[test]
    fn test_gaze_direction() {
        // Toward the inner reference corner -> larger h
        let toward_inner = gaze_ratio(Some(&synthetic_face(0.8, 0.5))).unwrap();
        let toward_outer = gaze_ratio(Some(&synthetic_face(0.2, 0.5))).unwrap();
        assert!(toward_inner.h > toward_outer.h);

        // Iris high in the socket -> larger v after inversion
        let up = gaze_ratio(Some(&synthetic_face(0.5, 0.1))).unwrap();
        let down = gaze_ratio(Some(&synthetic_face(0.5, 0.9))).unwrap();
        assert!(up.v > down.v, "up {} down {}", up.v, down.v);
        assert!((up.v - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_gaze_not_clamped() {
        let g = gaze_ratio(Some(&synthetic_face(1.3, -0.2))).unwrap();
        assert!(g.h > 1.0, "h = {}", g.h);
        assert!(g.v > 1.0, "v = {}", g.v);
    }

    #[test]
    fn test_gaze_idempotent() {
        let face = synthetic_face(0.37, 0.61);
        assert_eq!(gaze_ratio(Some(&face)), gaze_ratio(Some(&face)));
    }

    #[test]
    fn test_collapsed_socket_stays_finite() {
        let mut face = synthetic_face(0.5, 0.5);
        // Closed eyes: top and bottom lids meet, corners coincide
        for socket in [LEFT_EYE_SOCKET, RIGHT_EYE_SOCKET] {
            let top = face.points[socket.top];
            face.points[socket.bottom] = top;
            let outer = face.points[socket.outer];
            face.points[socket.inner] = outer;
        }
        let g = gaze_ratio(Some(&face)).unwrap();
        assert!(g.h.is_finite() && g.v.is_finite(), "{:?}", g);
    }

    #[test]
    fn test_guard_keeps_sign_of_tiny_spans() {
        assert_eq!(guard_denominator(-1e-9), -SOCKET_EPSILON);
        assert_eq!(guard_denominator(1e-9), SOCKET_EPSILON);
        assert_eq!(guard_denominator(0.0), SOCKET_EPSILON);
        assert_eq!(guard_denominator(-0.0), SOCKET_EPSILON);
    }

    #[test]
    fn test_guard_passes_spans_at_or_above_epsilon() {
        assert_eq!(guard_denominator(SOCKET_EPSILON), SOCKET_EPSILON);
        assert_eq!(guard_denominator(-SOCKET_EPSILON), -SOCKET_EPSILON);
        assert_eq!(guard_denominator(0.5), 0.5);
        assert_eq!(guard_denominator(-0.25), -0.25);
    }
}
