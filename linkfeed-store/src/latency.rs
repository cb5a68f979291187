use std::time::Duration;

/// Artificial delays applied before each service operation resolves.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub struct Latency {
    pub login: Duration,
    pub register: Duration,
    pub posts: Duration,
    pub user_lookup: Duration,
    pub bio_update: Duration,
}

impl Latency {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            login: Duration::ZERO,
            register: Duration::ZERO,
            posts: Duration::ZERO,
            user_lookup: Duration::ZERO,
            bio_update: Duration::ZERO,
        }
    }

    /// Multiplies every delay by `factor`. Non-finite or negative factors yield `None`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Option<Self> {
        if !factor.is_finite() || factor < 0.0 {
            return None;
        }

        Some(Self {
            login: self.login.mul_f64(factor),
            register: self.register.mul_f64(factor),
            posts: self.posts.mul_f64(factor),
            user_lookup: self.user_lookup.mul_f64(factor),
            bio_update: self.bio_update.mul_f64(factor),
        })
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            login: Duration::from_millis(1000),
            register: Duration::from_millis(1000),
            posts: Duration::from_millis(500),
            user_lookup: Duration::from_millis(300),
            bio_update: Duration::from_millis(500),
        }
    }
}

pub(crate) async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use crate::latency::Latency;
    use std::time::Duration;

    #[test]
    fn scaling() {
        let halved = Latency::default().scaled(0.5).unwrap();
        assert_eq!(halved.login, Duration::from_millis(500));
        assert_eq!(halved.register, Duration::from_millis(500));

        assert_eq!(Latency::default().scaled(0.0), Some(Latency::none()));
        assert_eq!(Latency::default().scaled(-1.0), None);
        assert_eq!(Latency::default().scaled(f64::NAN), None);
    }
}
