//! Random unit vectors.
//!
//! [`Vector3::random_2d`] and [`Vector3::random_3d`] use the global thread-local generator
//! provided by [`fastrand`], which can be reseeded with [`seed`]. For full control over the
//! sequence of generated vectors, pass a [`RandomSource`] (such as a seeded [`fastrand::Rng`]) to
//! [`Vector3::random_2d_with`] or [`Vector3::random_3d_with`] instead.

use std::f64::consts::TAU;

use crate::Vector3;

/// A source of uniformly distributed random numbers.
pub trait RandomSource {
    /// Returns a random number in the range `0.0..1.0`.
    fn next_f64(&mut self) -> f64;
}

impl RandomSource for fastrand::Rng {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.f64()
    }
}

/// The global, thread-local generator of [`fastrand`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRng;

impl RandomSource for ThreadRng {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        fastrand::f64()
    }
}

/// Reseeds the global generator of the current thread.
///
/// After calling this, [`Vector3::random_2d`] and [`Vector3::random_3d`] produce the same sequence
/// of vectors every time.
pub fn seed(seed: u64) {
    log::debug!("reseeding thread-local generator with {seed:#x}");
    fastrand::seed(seed);
}

impl Vector3 {
    /// Returns a 2D unit vector pointing in a random direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectored::*;
    /// let v = Vector3::random_2d();
    /// assert!((v.length() - 1.0).abs() < 1e-12);
    /// assert_eq!(v.z, 0.0);
    /// ```
    pub fn random_2d() -> Self {
        Self::random_2d_with(&mut ThreadRng)
    }

    /// Returns a 2D unit vector pointing in a random direction, drawn from `rng`.
    pub fn random_2d_with<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self::from_angle(rng.next_f64() * TAU)
    }

    /// Returns a 3D unit vector uniformly distributed on the unit sphere.
    pub fn random_3d() -> Self {
        Self::random_3d_with(&mut ThreadRng)
    }

    /// Returns a 3D unit vector uniformly distributed on the unit sphere, drawn from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectored::*;
    /// let mut rng = fastrand::Rng::with_seed(0x3024b6663d843ca2);
    /// let v = Vector3::random_3d_with(&mut rng);
    /// assert!((v.length() - 1.0).abs() < 1e-12);
    /// ```
    pub fn random_3d_with<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        // Archimedes: a uniform height on the sphere's axis yields a uniform point on its surface
        let z = rng.next_f64() * 2.0 - 1.0;
        let ring = (1.0 - z * z).sqrt();
        let azimuth = rng.next_f64() * TAU;
        let (sin, cos) = azimuth.sin_cos();
        Self::new(ring * cos, ring * sin, z)
    }
}
