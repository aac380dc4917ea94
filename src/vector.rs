use std::fmt;

mod ops;
mod parse;
mod record;

pub use ops::Operand;
pub use parse::ParseVectorError;
pub use record::Record;

/// A point or direction in 2D or 3D space, stored as three [`f64`] components.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector3`]:
///
/// - [`Vector3::new`] and the freestanding [`vec3`] and [`vec2`] functions directly create
///   vectors from provided values. [`vec2`] sets the Z component to 0.
/// - The [`Default`] implementation returns [`Vector3::ZERO`].
/// - The associated constants [`Vector3::UP`], [`Vector3::RIGHT`], [`Vector3::FORWARD`] (and
///   their opposites), as well as [`Vector3::ZERO`] and [`Vector3::ONE`], provide presets.
/// - [`Vector3::from_array`] reads components out of a slice, [`Vector3::from_object`] converts
///   from a [`Record`].
/// - [`Vector3::from_angle`] and [`Vector3::from_angles`] convert from polar and spherical
///   coordinates.
/// - [`Vector3::random_2d`] and [`Vector3::random_3d`] create random unit vectors.
///
/// # Mutation
///
/// Apart from [`Vector3::set`], [`Vector3::set_x`], [`Vector3::set_y`], [`Vector3::set_z`] and
/// the compound assignment operators, all operations take `self` by value and return a new
/// vector. Since [`Vector3`] is [`Copy`], the original value is left unchanged:
///
/// ```
/// # use vectored::*;
/// let a = vec3(3.0, 4.0, 0.0);
/// let b = a.normalize();
/// assert_eq!(a, vec3(3.0, 4.0, 0.0));
/// assert_eq!(b, vec3(0.6, 0.8, 0.0));
/// ```
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[repr(C)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

unsafe impl bytemuck::Zeroable for Vector3 {}
unsafe impl bytemuck::Pod for Vector3 {}

impl Vector3 {
    /// A vector with each component set to 0.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// A vector with each component set to 1.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// A unit vector pointing up (+Y).
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    /// A unit vector pointing down (-Y).
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    /// A unit vector pointing left (-X).
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    /// A unit vector pointing right (+X).
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    /// A unit vector pointing forward (+Z).
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    /// A unit vector pointing back (-Z).
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);

    /// Creates a vector from its three components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Reads up to three components from `values`, starting at index `offset`.
    ///
    /// Components that lie past the end of `values` are set to 0, so this never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectored::*;
    /// assert_eq!(Vector3::from_array(&[10.0, 20.0, 5.0], 0), vec3(10.0, 20.0, 5.0));
    /// assert_eq!(Vector3::from_array(&[1.0, 2.0, 3.0, 4.0, 5.0], 2), vec3(3.0, 4.0, 5.0));
    /// assert_eq!(Vector3::from_array(&[7.0], 0), vec3(7.0, 0.0, 0.0));
    /// assert_eq!(Vector3::from_array(&[], 0), Vector3::ZERO);
    /// ```
    pub fn from_array(values: &[f64], offset: usize) -> Self {
        let get = |i: usize| {
            offset
                .checked_add(i)
                .and_then(|index| values.get(index))
                .copied()
                .unwrap_or(0.0)
        };
        Self::new(get(0), get(1), get(2))
    }

    /// Creates a 2D vector of unit length pointing at `angle` (in radians, counterclockwise from
    /// the X axis).
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectored::*;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let v = Vector3::from_angle(FRAC_PI_2);
    /// assert!(v.x.abs() < 1e-15);
    /// assert_eq!(v.y, 1.0);
    /// assert_eq!(v.z, 0.0);
    /// ```
    pub fn from_angle(angle: f64) -> Self {
        Self::from_angle_with_length(angle, 1.0)
    }

    /// Creates a 2D vector of the given `length` pointing at `angle` (in radians).
    pub fn from_angle_with_length(angle: f64, length: f64) -> Self {
        Self::new(angle.cos() * length, angle.sin() * length, 0.0)
    }

    /// Creates a unit vector from a pair of ISO spherical angles.
    ///
    /// `theta` is the polar angle (a `theta` of 0 points down the Y axis), `phi` the azimuthal
    /// angle, both in radians.
    pub fn from_angles(theta: f64, phi: f64) -> Self {
        Self::from_angles_with_length(theta, phi, 1.0)
    }

    /// Creates a vector of the given `length` from a pair of ISO spherical angles.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectored::*;
    /// let v = Vector3::from_angles_with_length(1.5, 2.0, 5.0);
    /// assert!((v.x - 4.535).abs() < 1e-3);
    /// assert!((v.y - -0.354).abs() < 1e-3);
    /// assert!((v.z - -2.075).abs() < 1e-3);
    /// ```
    pub fn from_angles_with_length(theta: f64, phi: f64, length: f64) -> Self {
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        Self::new(
            length * sin_theta * sin_phi,
            -length * cos_theta,
            length * sin_theta * cos_phi,
        )
    }

    /// Assigns new component values, leaving components passed as [`None`] unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectored::*;
    /// let mut v = vec3(1.0, 2.0, 3.0);
    /// v.set(10.0, None, 0.0);
    /// assert_eq!(v, vec3(10.0, 2.0, 0.0));
    /// ```
    pub fn set(
        &mut self,
        x: impl Into<Option<f64>>,
        y: impl Into<Option<f64>>,
        z: impl Into<Option<f64>>,
    ) -> &mut Self {
        if let Some(x) = x.into() {
            self.x = x;
        }
        if let Some(y) = y.into() {
            self.y = y;
        }
        if let Some(z) = z.into() {
            self.z = z;
        }
        self
    }

    #[inline]
    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.x = x;
        self
    }

    #[inline]
    pub fn set_y(&mut self, y: f64) -> &mut Self {
        self.y = y;
        self
    }

    #[inline]
    pub fn set_z(&mut self, z: f64) -> &mut Self {
        self.z = z;
        self
    }

    /// Returns a copy of `self` with the X component replaced by `x`.
    #[inline]
    pub const fn with_x(self, x: f64) -> Self {
        Self::new(x, self.y, self.z)
    }

    /// Returns a copy of `self` with the Y component replaced by `y`.
    #[inline]
    pub const fn with_y(self, y: f64) -> Self {
        Self::new(self.x, y, self.z)
    }

    /// Returns a copy of `self` with the Z component replaced by `z`.
    #[inline]
    pub const fn with_z(self, z: f64) -> Self {
        Self::new(self.x, self.y, z)
    }

    /// Applies a closure to each component, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectored::*;
    /// let v = vec3(1.0, 2.0, 3.0).map(|c| c * 10.0);
    /// assert_eq!(v, vec3(10.0, 20.0, 30.0));
    /// ```
    pub fn map<F>(self, mut f: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    fn zip_with<F>(self, other: Self, mut f: F) -> Self
    where
        F: FnMut(f64, f64) -> f64,
    {
        Self::new(f(self.x, other.x), f(self.y, other.y), f(self.z, other.z))
    }

    /// Returns a reference to the components as an array.
    #[inline]
    pub fn as_array(&self) -> &[f64; 3] {
        bytemuck::cast_ref(self)
    }

    /// Returns a mutable reference to the components as an array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectored::*;
    /// let mut v = vec3(1.0, 2.0, 3.0);
    /// v.as_mut_array()[1] = 777.0;
    /// assert_eq!(v, [1.0, 777.0, 3.0]);
    /// ```
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f64; 3] {
        bytemuck::cast_mut(self)
    }

    /// Returns the components as an `[x, y, z]` array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns an independent duplicate of `self`.
    ///
    /// This is equivalent to copying the value, and exists for symmetry with [`Vector3::equals`].
    #[inline]
    pub const fn copy(&self) -> Self {
        *self
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectored::*;
    /// assert_eq!(vec3(10.0, 20.0, 5.0).dot(vec3(5.0, 15.0, 10.0)), 400.0);
    /// assert_eq!(Vector3::UP.dot(Vector3::RIGHT), 0.0);
    /// ```
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the right-handed cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs. Swapping the arguments inverts its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectored::*;
    /// assert_eq!(Vector3::RIGHT.cross(Vector3::UP), Vector3::FORWARD);
    /// assert_eq!(Vector3::UP.cross(Vector3::RIGHT), Vector3::BACK);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        let [a1, a2, a3] = self.to_array();
        let [b1, b2, b3] = other.to_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }

    /// Returns the squared length of this vector.
    pub fn length_sq(self) -> f64 {
        self.dot(self)
    }

    /// Returns the length (Euclidean norm) of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectored::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(self) -> f64 {
        self.length_sq().sqrt()
    }

    /// Alias of [`Vector3::length`].
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.length()
    }

    /// Returns the squared distance between the points `self` and `other`.
    pub fn distance_sq(self, other: Self) -> f64 {
        (self - other).length_sq()
    }

    /// Returns the distance between the points `self` and `other`.
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Splits this vector into its direction and its length.
    ///
    /// The components are scaled by the largest magnitude first, so the squared length can neither
    /// overflow nor underflow. Returns [`None`] for the zero vector.
    fn direction_and_length(self) -> Option<(Self, f64)> {
        let scale = self.as_array().iter().fold(0.0, |max: f64, c| {
            if max.is_nan() || c.is_nan() {
                f64::NAN
            } else {
                max.max(c.abs())
            }
        });
        if scale == 0.0 {
            return None;
        }
        let scaled = self / scale;
        let scaled_length = scaled.length();
        Some((scaled / scaled_length, scale * scaled_length))
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// A vector of length 0 is returned unchanged instead of being turned into `NaN`s. Vectors
    /// whose squared length exceeds the range of [`f64`] are normalized as well.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectored::*;
    /// assert_eq!(vec3(0.0, 0.0, 4.0).normalize(), Vector3::FORWARD);
    /// assert_eq!(vec3(1e200, 0.0, 0.0).normalize(), Vector3::RIGHT);
    /// assert_eq!(Vector3::ZERO.normalize(), Vector3::ZERO);
    /// ```
    pub fn normalize(self) -> Self {
        match self.direction_and_length() {
            Some((direction, _)) => direction,
            None => {
                log::trace!("not normalizing zero-length vector");
                self
            }
        }
    }

    /// Scales this vector to the given length, preserving its direction.
    ///
    /// Zero-length vectors have no direction and stay at zero.
    pub fn set_length(self, length: f64) -> Self {
        match self.direction_and_length() {
            Some((direction, _)) => direction * length,
            None => {
                log::trace!("not rescaling zero-length vector");
                self
            }
        }
    }

    /// Scales this vector so that its length lies in `min..=max`, preserving its direction.
    ///
    /// Zero-length vectors stay at zero. The caller is responsible for passing `min <= max`; if
    /// `min` is larger, the resulting length will be `min`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectored::*;
    /// assert_eq!(vec2(3.0, 4.0).clamp_length(0.0, 2.5), vec2(1.5, 2.0));
    /// assert_eq!(vec2(3.0, 4.0).clamp_length(10.0, 20.0), vec2(6.0, 8.0));
    /// assert_eq!(vec2(3.0, 4.0).clamp_length(1.0, 10.0), vec2(3.0, 4.0));
    /// ```
    pub fn clamp_length(self, min: f64, max: f64) -> Self {
        match self.direction_and_length() {
            Some((direction, length)) => direction * length.min(max).max(min),
            None => {
                log::trace!("not rescaling zero-length vector");
                self
            }
        }
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// `t` is not clamped: values outside of `0.0..=1.0` extrapolate past either end.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectored::*;
    /// let a = vec2(1.0, 3.0);
    /// let b = vec2(4.0, 2.0);
    /// assert_eq!(a.lerp(b, 0.5), vec2(2.5, 2.5));
    /// assert_eq!(a.lerp(b, 2.0), vec2(7.0, 1.0));
    /// ```
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    /// Computes the smallest angle between `self` and `other`, in radians.
    ///
    /// Both vectors must have non-zero length for the result to be meaningful. Otherwise the
    /// result is `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectored::*;
    /// use std::f64::consts::{FRAC_PI_2, PI};
    ///
    /// assert_eq!(Vector3::UP.angle_to(Vector3::RIGHT), FRAC_PI_2);
    /// assert_eq!(Vector3::UP.angle_to(Vector3::DOWN), PI);
    /// ```
    pub fn angle_to(self, other: Self) -> f64 {
        let cos = self.dot(other) / (self.length() * other.length());
        // rounding can push `cos` slightly out of acos' domain
        cos.clamp(-1.0, 1.0).acos()
    }

    /// Returns the heading of this vector in the XY plane, in radians counterclockwise from the X
    /// axis.
    pub fn angle_2d(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Rotates this vector counterclockwise around the Z axis by `radians`.
    ///
    /// The Z component is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectored::*;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let v = vec2(100.0, 0.0).rotate_2d(FRAC_PI_2);
    /// assert!(v.x.abs() < 1e-12);
    /// assert_eq!(v.y, 100.0);
    /// ```
    pub fn rotate_2d(self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
            self.z,
        )
    }

    /// Points this vector at `radians` in the XY plane, keeping its length in that plane.
    ///
    /// The Z component is left unchanged.
    pub fn rotate_to_2d(self, radians: f64) -> Self {
        let planar = self.x.hypot(self.y);
        Self::from_angle_with_length(radians, planar).with_z(self.z)
    }

    /// Component-wise minimum of `self` and `other`.
    ///
    /// A `NaN` in either input yields `NaN` for that component.
    pub fn min(self, other: Self) -> Self {
        self.zip_with(other, |a, b| if a.is_nan() || b.is_nan() { f64::NAN } else { a.min(b) })
    }

    /// Component-wise maximum of `self` and `other`.
    ///
    /// A `NaN` in either input yields `NaN` for that component.
    pub fn max(self, other: Self) -> Self {
        self.zip_with(other, |a, b| if a.is_nan() || b.is_nan() { f64::NAN } else { a.max(b) })
    }

    /// Component-wise clamp of `self` between `min` and `max`.
    ///
    /// The caller is responsible for `min <= max` on every axis. On an axis where that doesn't
    /// hold, the result is the `min` component. `NaN` components, in `self` or in either bound,
    /// are propagated.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectored::*;
    /// let v = vec3(-5.0, 40.0, 5.0).clamp(vec3(0.0, 20.0, 0.0), vec3(20.0, 20.0, 10.0));
    /// assert_eq!(v, vec3(0.0, 20.0, 5.0));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.min(max).max(min)
    }

    /// Rounds each component to the nearest integer, rounding half-way cases away from 0.
    pub fn round(self) -> Self {
        self.map(f64::round)
    }

    /// Rounds each component down.
    pub fn floor(self) -> Self {
        self.map(f64::floor)
    }

    /// Rounds each component up.
    pub fn ceil(self) -> Self {
        self.map(f64::ceil)
    }

    /// Flips the sign of each component.
    pub fn negate(self) -> Self {
        -self
    }

    /// Returns whether all components of `self` and `other` are exactly equal.
    ///
    /// No tolerance is applied. Use the [`approx`] traits for approximate comparisons.
    pub fn equals(self, other: Self) -> bool {
        self == other
    }

    /// Returns whether any component of `self` differs from `other`.
    pub fn not_equals(self, other: Self) -> bool {
        self != other
    }
}

impl From<[f64; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    #[inline]
    fn from(value: Vector3) -> Self {
        value.to_array()
    }
}

impl AsRef<[f64]> for Vector3 {
    #[inline]
    fn as_ref(&self) -> &[f64] {
        self.as_array()
    }
}

impl AsMut<[f64]> for Vector3 {
    #[inline]
    fn as_mut(&mut self) -> &mut [f64] {
        self.as_mut_array()
    }
}

impl fmt::Debug for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("")
            .field(&self.x)
            .field(&self.y)
            .field(&self.z)
            .finish()
    }
}

/// Formats the vector as `x:<x> y:<y> z:<z>`.
///
/// The output can be parsed back via [`FromStr`][std::str::FromStr].
impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x:{} y:{} z:{}", self.x, self.y, self.z)
    }
}

/// Constructs a [`Vector3`] from its three components.
#[inline]
pub const fn vec3(x: f64, y: f64, z: f64) -> Vector3 {
    Vector3::new(x, y, z)
}

/// Constructs a 2D [`Vector3`], with a Z component of 0.
#[inline]
pub const fn vec2(x: f64, y: f64) -> Vector3 {
    Vector3::new(x, y, 0.0)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn presets() {
        assert_eq!(Vector3::UP, [0.0, 1.0, 0.0]);
        assert_eq!(Vector3::DOWN, [0.0, -1.0, 0.0]);
        assert_eq!(Vector3::LEFT, [-1.0, 0.0, 0.0]);
        assert_eq!(Vector3::RIGHT, [1.0, 0.0, 0.0]);
        assert_eq!(Vector3::FORWARD, [0.0, 0.0, 1.0]);
        assert_eq!(Vector3::BACK, [0.0, 0.0, -1.0]);
        assert_eq!(Vector3::ZERO, [0.0, 0.0, 0.0]);
        assert_eq!(Vector3::ONE, [1.0, 1.0, 1.0]);
        assert_eq!(Vector3::default(), Vector3::ZERO);
        assert_eq!(vec2(10.0, 20.0), vec3(10.0, 20.0, 0.0));
    }

    #[test]
    fn from_array() {
        assert_eq!(Vector3::from_array(&[10.0, 20.0, 5.0], 0), [10.0, 20.0, 5.0]);
        assert_eq!(Vector3::from_array(&[], 0), Vector3::ZERO);
        assert_eq!(Vector3::from_array(&[1.0, 2.0, 3.0, 4.0, 5.0], 2), [3.0, 4.0, 5.0]);
        assert_eq!(Vector3::from_array(&[1.0, 2.0, 3.0], 2), [3.0, 0.0, 0.0]);
        assert_eq!(Vector3::from_array(&[1.0, 2.0, 3.0], 7), Vector3::ZERO);
        assert_eq!(Vector3::from_array(&[1.0], usize::MAX), Vector3::ZERO);

        // explicit zeroes are kept as-is
        assert_eq!(Vector3::from_array(&[0.0, -0.0, 3.0], 0), [0.0, -0.0, 3.0]);
    }

    #[test]
    fn set() {
        let mut v = vec3(1.0, 2.0, 3.0);
        v.set(None, None, None);
        assert_eq!(v, [1.0, 2.0, 3.0]);
        v.set(0.0, None, -1.0);
        assert_eq!(v, [0.0, 2.0, -1.0]);
        v.set_x(7.0).set_y(8.0).set_z(9.0);
        assert_eq!(v, [7.0, 8.0, 9.0]);

        assert_eq!(v.with_x(0.0), [0.0, 8.0, 9.0]);
        assert_eq!(v.with_y(0.0), [7.0, 0.0, 9.0]);
        assert_eq!(v.with_z(0.0), [7.0, 8.0, 0.0]);
    }

    #[test]
    fn array_access() {
        let mut v = vec3(1.0, 2.0, 3.0);
        assert_eq!(v.as_array(), &[1.0, 2.0, 3.0]);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(<[f64; 3]>::from(v), [1.0, 2.0, 3.0]);
        assert_eq!(AsRef::<[f64]>::as_ref(&v), &[1.0, 2.0, 3.0]);

        AsMut::<[f64]>::as_mut(&mut v)[2] = -3.0;
        assert_eq!(v.z, -3.0);
    }

    #[test]
    fn copy_is_independent() {
        let a = vec3(10.0, 20.0, 0.0);
        let mut b = a.copy();
        assert_eq!(a, b);
        b.set_x(99.0);
        assert_eq!(a.x, 10.0);
        assert_eq!(b.x, 99.0);
    }

    #[test]
    fn angles() {
        assert_relative_eq!(Vector3::from_angle(0.0), Vector3::RIGHT);
        assert_relative_eq!(Vector3::from_angle(FRAC_PI_2), Vector3::UP);
        assert_relative_eq!(Vector3::from_angle(PI), Vector3::LEFT);
        assert_relative_eq!(
            Vector3::from_angle_with_length(FRAC_PI_4, 2.0),
            vec2(2.0f64.sqrt(), 2.0f64.sqrt())
        );

        assert_relative_eq!(Vector3::from_angles(0.0, 0.0), Vector3::DOWN);
        assert_relative_eq!(Vector3::from_angles(PI, 0.0), Vector3::UP);
        assert_relative_eq!(Vector3::from_angles(FRAC_PI_2, 0.0), Vector3::FORWARD);
        assert_relative_eq!(Vector3::from_angles(FRAC_PI_2, FRAC_PI_2), Vector3::RIGHT);
        assert_relative_eq!(
            Vector3::from_angles_with_length(1.5, 2.0, 5.0).length(),
            5.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(10.0, 20.0, 5.0).dot(vec3(5.0, 15.0, 10.0)), 400.0);
        assert_eq!(vec3(1.0, 3.0, -5.0).dot(vec3(4.0, -2.0, -1.0)), 3.0);
        assert_eq!(Vector3::RIGHT.dot(Vector3::RIGHT), 1.0);
        assert_eq!(Vector3::RIGHT.dot(Vector3::UP), 0.0);
        assert_eq!(Vector3::UP.dot(Vector3::DOWN), -1.0);
    }

    #[test]
    fn cross() {
        let a = vec3(10.0, 20.0, 5.0);
        let b = vec3(5.0, 15.0, 10.0);
        assert_eq!(a.cross(b), [125.0, -75.0, 50.0]);
        assert_eq!(b.cross(a), [-125.0, 75.0, -50.0]);

        // perpendicular to both inputs
        assert_eq!(a.cross(b).dot(a), 0.0);
        assert_eq!(a.cross(b).dot(b), 0.0);

        // inputs are left untouched
        assert_eq!(a, [10.0, 20.0, 5.0]);
    }

    #[test]
    fn length() {
        let v = vec2(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.length_sq(), 25.0);
        assert_eq!(Vector3::ZERO.distance(v), 5.0);
        assert_eq!(v.distance(Vector3::ZERO), 5.0);
        assert_eq!(Vector3::ZERO.distance_sq(v), 25.0);
        assert_eq!(vec2(3.0, 5.0).distance_sq(vec2(2.0, 1.0)), 17.0);
    }

    #[test]
    fn normalize() {
        assert_eq!(Vector3::ZERO.normalize(), Vector3::ZERO);
        assert_eq!(vec3(0.0, -2.0, 0.0).normalize(), Vector3::DOWN);
        assert_relative_eq!(vec3(4.0, 6.0, 5.0).normalize().length(), 1.0);
        assert_relative_eq!(
            vec3(4.0, 6.0, 5.0).normalize(),
            vec3(0.455, 0.683, 0.569),
            epsilon = 1e-3
        );

        // the squared length leaves the range of `f64`, the direction doesn't
        assert_eq!(vec3(1e200, 0.0, 0.0).normalize(), Vector3::RIGHT);
        assert_eq!(vec3(0.0, -1e200, 0.0).normalize(), Vector3::DOWN);
        assert_eq!(vec3(1e-300, 0.0, 0.0).normalize(), Vector3::RIGHT);
        assert_relative_eq!(
            vec3(1e200, 1e200, 0.0).normalize(),
            vec2(0.5f64.sqrt(), 0.5f64.sqrt())
        );
        assert_relative_eq!(vec3(f64::MAX, f64::MAX, f64::MAX).normalize().length(), 1.0);

        assert!(vec3(f64::NAN, 0.0, 0.0).normalize().x.is_nan());
        assert!(vec3(0.0, f64::NAN, 0.0).normalize().x.is_nan());
    }

    #[test]
    fn set_length() {
        assert_relative_eq!(
            vec3(4.0, 6.0, 5.0).set_length(4.0),
            vec3(1.823, 2.735, 2.279),
            epsilon = 1e-3
        );
        assert_relative_eq!(vec3(4.0, 6.0, 5.0).set_length(4.0).length(), 4.0);
        assert_eq!(Vector3::ZERO.set_length(4.0), Vector3::ZERO);
        assert_eq!(vec3(0.0, 0.0, 1e250).set_length(2.0), vec3(0.0, 0.0, 2.0));
    }

    #[test]
    fn clamp_length() {
        let v = vec2(3.0, 4.0);
        assert_eq!(v.clamp_length(0.0, 1.0), vec2(0.6, 0.8));
        assert_eq!(v.clamp_length(5.0, 5.0), v);
        assert_eq!(Vector3::ZERO.clamp_length(1.0, 2.0), Vector3::ZERO);

        // inverted bounds: `min` wins
        assert_eq!(v.clamp_length(10.0, 1.0), vec2(6.0, 8.0));

        let huge = vec3(3e200, 4e200, 0.0);
        assert_relative_eq!(huge.clamp_length(0.0, 5.0), vec2(3.0, 4.0));
        assert_relative_eq!(huge.clamp_length(0.0, f64::INFINITY), huge);
    }

    #[test]
    fn lerp() {
        let a = vec2(1.0, 3.0);
        let b = vec2(4.0, 2.0);
        assert_eq!(a.lerp(b, 0.5), vec2(2.5, 2.5));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, -1.0), vec2(-2.0, 4.0));
    }

    #[test]
    fn angle_to() {
        assert_relative_eq!(Vector3::UP.angle_to(Vector3::RIGHT), FRAC_PI_2);
        assert_relative_eq!(Vector3::RIGHT.angle_to(Vector3::UP), FRAC_PI_2);
        assert_relative_eq!(Vector3::UP.angle_to(Vector3::UP), 0.0);
        assert_relative_eq!(Vector3::UP.angle_to(Vector3::DOWN), PI);
        assert_relative_eq!(vec2(1.0, 1.0).angle_to(vec2(1.0, -1.0)), FRAC_PI_2);
        assert_relative_eq!(vec2(0.0, 2.0).angle_to(vec2(-3.0, 0.0)), FRAC_PI_2);
        assert!(Vector3::ZERO.angle_to(Vector3::UP).is_nan());
    }

    #[test]
    fn rotate() {
        assert_eq!(Vector3::RIGHT.angle_2d(), 0.0);
        assert_eq!(Vector3::UP.angle_2d(), FRAC_PI_2);
        assert_eq!(Vector3::LEFT.angle_2d(), PI);

        assert_abs_diff_eq!(
            vec2(100.0, 0.0).rotate_2d(FRAC_PI_2),
            vec2(0.0, 100.0),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            vec3(1.0, 0.0, 7.0).rotate_2d(PI),
            vec3(-1.0, 0.0, 7.0),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            vec3(1.0, 2.0, 3.0).rotate_2d(TAU),
            vec3(1.0, 2.0, 3.0),
            epsilon = 1e-12
        );

        assert_abs_diff_eq!(
            vec2(100.0, 0.0).rotate_to_2d(-PI),
            vec2(-100.0, 0.0),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            vec3(0.0, 3.0, 4.0).rotate_to_2d(0.0),
            vec3(3.0, 0.0, 4.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn min_max_clamp() {
        let a = vec3(-1.0, 2.0, 5.0);
        let b = vec3(3.0, f64::NEG_INFINITY, 0.0);
        assert_eq!(a.min(b), [-1.0, f64::NEG_INFINITY, 0.0]);
        assert_eq!(a.max(b), [3.0, 2.0, 5.0]);
        assert_eq!(a.min(b), b.min(a));

        let v = vec3(-5.0, 40.0, 5.0);
        assert_eq!(
            v.clamp(vec3(0.0, 20.0, 0.0), vec3(20.0, 20.0, 10.0)),
            [0.0, 20.0, 5.0]
        );

        // inverted bounds don't panic, `min` wins
        assert_eq!(v.clamp(Vector3::ONE, Vector3::ZERO), Vector3::ONE);

        // NaN is propagated, never replaced by the other operand
        let nan = vec3(f64::NAN, 0.0, 0.0);
        assert!(nan.min(Vector3::ONE).x.is_nan());
        assert!(nan.max(Vector3::ONE).x.is_nan());
        assert!(Vector3::ONE.min(nan).x.is_nan());
        assert_eq!(nan.min(Vector3::ONE).y, 0.0);
        assert!(nan.clamp(Vector3::ZERO, Vector3::ONE).x.is_nan());
        assert!(Vector3::ONE.clamp(nan, Vector3::ONE).x.is_nan());
    }

    #[test]
    fn rounding() {
        let v = vec3(1.5, -1.5, 2.4);
        assert_eq!(v.round(), [2.0, -2.0, 2.0]);
        assert_eq!(v.floor(), [1.0, -2.0, 2.0]);
        assert_eq!(v.ceil(), [2.0, -1.0, 3.0]);
        assert_eq!(v.negate(), [-1.5, 1.5, -2.4]);
    }

    #[test]
    fn equality() {
        let a = vec3(10.0, 20.0, 5.0);
        let b = vec3(10.0, 20.0, 5.0);
        let c = vec3(30.0, 10.0, 15.0);
        assert!(a.equals(a));
        assert!(a.equals(b));
        assert!(b.equals(a));
        assert!(!a.equals(c));
        assert!(!a.not_equals(b));
        assert!(a.not_equals(c));

        // exact comparison, no tolerance
        assert!(!a.equals(a + vec3(f64::EPSILON * 16.0, 0.0, 0.0)));
        assert!(!vec3(f64::NAN, 0.0, 0.0).equals(vec3(f64::NAN, 0.0, 0.0)));
        assert!(vec3(0.0, 0.0, 0.0).equals(vec3(-0.0, 0.0, 0.0)));
    }

    #[test]
    fn fmt() {
        assert_eq!(vec3(10.0, 20.0, 5.0).to_string(), "x:10 y:20 z:5");
        assert_eq!(vec2(0.5, -1.25).to_string(), "x:0.5 y:-1.25 z:0");
        assert_eq!(format!("{:?}", Vector3::FORWARD), "(0.0, 0.0, 1.0)");
    }
}
