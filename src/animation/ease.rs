#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    /// Slow-in/slow-out curve used by autoplay: a gentler shoulder than
    /// `InOutCubic`, close to CSS `cubic-bezier(0.45, 0.05, 0.55, 0.95)`.
    CinematicInOut,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            // Blend of smoothstep and its own square keeps the middle fast
            // without the hard shoulders of the cubic pair.
            Self::CinematicInOut => {
                let s = t * t * (3.0 - 2.0 * t);
                0.6 * s + 0.4 * s * s * (3.0 - 2.0 * s)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 8] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::CinematicInOut,
    ];

    #[test]
    fn endpoints_are_stable() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn non_decreasing_across_sampled_grid() {
        for ease in ALL {
            let mut prev = ease.apply(0.0);
            for i in 1..=200 {
                let v = ease.apply(i as f64 / 200.0);
                assert!(v >= prev, "{ease:?} decreased at sample {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        for ease in ALL {
            assert_eq!(ease.apply(-3.0), 0.0);
            assert_eq!(ease.apply(7.5), 1.0);
        }
    }

    #[test]
    fn cinematic_is_slow_at_the_edges() {
        let e = Ease::CinematicInOut;
        assert!(e.apply(0.1) < 0.1);
        assert!(e.apply(0.9) > 0.9);
    }
}
