/// Gap used by draw-in patterns; paths up to this long hide completely.
pub const DRAW_IN_GAP: f64 = 1000.0;

/// A two-part stroke dash pattern (`stroke-dasharray: dash gap`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DashPattern {
    pub dash: f64,
    pub gap: f64,
}

impl DashPattern {
    pub fn new(dash: f64, gap: f64) -> Self {
        Self {
            dash: dash.max(0.0),
            gap: gap.max(0.0),
        }
    }

    /// Pattern for a "drawn in" stroke: one dash as long as the path, then a long gap.
    ///
    /// Animating the offset from [`DashPattern::hidden_offset`] to `0` draws the path.
    pub fn draw_in(path_length: f64) -> Self {
        Self::new(path_length.ceil(), DRAW_IN_GAP.max(path_length.ceil()))
    }

    pub fn period(&self) -> f64 {
        self.dash + self.gap
    }

    /// Offset at which a path no longer than `gap` shows no dash at all.
    pub fn hidden_offset(&self) -> f64 {
        self.gap
    }

    /// Length of a `path_length` stroke covered by dashes at `offset`.
    pub fn visible_length(&self, path_length: f64, offset: f64) -> f64 {
        let period = self.period();
        if path_length <= 0.0 || self.dash <= 0.0 {
            return 0.0;
        }
        if self.gap <= 0.0 || period <= 0.0 {
            return path_length;
        }

        // Arc position s is painted when (s + offset) mod period < dash.
        let mut pos = offset.rem_euclid(period);
        let mut remaining = path_length;
        let mut covered = 0.0;
        while remaining > 0.0 {
            let (span_end, painted) = if pos < self.dash {
                (self.dash, true)
            } else {
                (period, false)
            };
            let step = (span_end - pos).min(remaining);
            if painted {
                covered += step;
            }
            remaining -= step;
            pos += step;
            if pos >= period {
                pos -= period;
            }
        }
        covered
    }

    /// Value for the `stroke-dasharray` attribute.
    pub fn svg_array(&self) -> String {
        format!("{} {}", fmt_len(self.dash), fmt_len(self.gap))
    }
}

fn fmt_len(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.3}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/dash.rs"]
mod tests;
