// An "en" is half an em. All internal measurement (line length, gaps,
// padding) happens in en; pixels only appear at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct En(f64);

impl En {
    pub const ZERO: En = En(0.0);

    pub fn new(value: f64) -> En {
        En(value)
    }

    pub fn from_em(em: f64) -> En {
        En(em * 2.0)
    }

    pub fn from_px(px: f64, em_px: f64) -> En {
        En(px / (em_px / 2.0))
    }

    pub fn to_f64(self) -> f64 {
        self.0
    }

    pub fn to_em(self) -> f64 {
        self.0 / 2.0
    }

    pub fn to_px(self, em_px: f64) -> f64 {
        self.0 * (em_px / 2.0)
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    pub fn max(self, other: En) -> En {
        if self >= other { self } else { other }
    }

    pub fn min(self, other: En) -> En {
        if self <= other { self } else { other }
    }

    pub fn clamp(self, lower: En, upper: En) -> En {
        self.max(lower).min(upper)
    }
}

impl std::ops::Add for En {
    type Output = En;
    fn add(self, rhs: En) -> En {
        En(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for En {
    fn add_assign(&mut self, rhs: En) {
        *self = *self + rhs;
    }
}

impl std::ops::Sub for En {
    type Output = En;
    fn sub(self, rhs: En) -> En {
        En(self.0 - rhs.0)
    }
}

impl std::ops::SubAssign for En {
    fn sub_assign(&mut self, rhs: En) {
        *self = *self - rhs;
    }
}

impl std::ops::Mul<f64> for En {
    type Output = En;
    fn mul(self, rhs: f64) -> En {
        En(self.0 * rhs)
    }
}

impl std::ops::Div<f64> for En {
    type Output = En;
    fn div(self, rhs: f64) -> En {
        En(self.0 / rhs)
    }
}

// Dividing two lengths yields a plain ratio.
impl std::ops::Div<En> for En {
    type Output = f64;
    fn div(self, rhs: En) -> f64 {
        self.0 / rhs.0
    }
}

impl std::ops::Neg for En {
    type Output = En;
    fn neg(self) -> En {
        En(-self.0)
    }
}

impl std::iter::Sum for En {
    fn sum<I: Iterator<Item = En>>(iter: I) -> En {
        iter.fold(En::ZERO, |acc, v| acc + v)
    }
}

impl std::fmt::Display for En {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}en", self.0)
    }
}
