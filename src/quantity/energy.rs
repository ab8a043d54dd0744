use std::ops::Mul;

quantity!(KilowattHours, "kWh");

impl Mul<f64> for KilowattHours {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}
