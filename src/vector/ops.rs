//! Arithmetic: the [`Operand`]-based methods and implementations of `std::ops`.

use std::{
    iter::Sum,
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Rem, RemAssign, Sub,
        SubAssign,
    },
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::Vector3;

/// Right-hand side of the arithmetic methods [`Vector3::add`], [`Vector3::sub`],
/// [`Vector3::multiply`], [`Vector3::divide`] and [`Vector3::remainder`].
///
/// An operand is either another vector, which is applied component-wise, or up to three
/// per-axis scalars. Axes without a scalar are left unchanged by the operation.
///
/// Operands are usually created through one of the [`From`] impls:
///
/// | Argument | Operand |
/// |---|---|
/// | `Vector3` / `&Vector3` | [`Operand::Vector`] |
/// | `x: f64` | `Components([Some(x), None, None])` |
/// | `(x, y)` | `Components([Some(x), Some(y), None])` |
/// | `(x, y, z)` | `Components([Some(x), Some(y), Some(z)])` |
/// | `[Option<f64>; 3]` | [`Operand::Components`] |
///
/// An explicit `0.0` is applied like any other value, so `multiply((0.0, 2.0))` zeroes the X
/// component. To apply the same scalar to every component, use the `*_scalar` methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Vector(Vector3),
    Components([Option<f64>; 3]),
}

impl Operand {
    fn apply<F>(self, lhs: Vector3, mut op: F) -> Vector3
    where
        F: FnMut(f64, f64) -> f64,
    {
        match self {
            Operand::Vector(rhs) => lhs.zip_with(rhs, op),
            Operand::Components(rhs) => {
                let mut out = lhs;
                for (l, r) in out.as_mut_array().iter_mut().zip(rhs) {
                    if let Some(r) = r {
                        *l = op(*l, r);
                    }
                }
                out
            }
        }
    }
}

impl From<Vector3> for Operand {
    #[inline]
    fn from(v: Vector3) -> Self {
        Self::Vector(v)
    }
}

impl From<&Vector3> for Operand {
    #[inline]
    fn from(v: &Vector3) -> Self {
        Self::Vector(*v)
    }
}

impl From<f64> for Operand {
    #[inline]
    fn from(x: f64) -> Self {
        Self::Components([Some(x), None, None])
    }
}

impl From<(f64, f64)> for Operand {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::Components([Some(x), Some(y), None])
    }
}

impl From<(f64, f64, f64)> for Operand {
    #[inline]
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::Components([Some(x), Some(y), Some(z)])
    }
}

impl From<[Option<f64>; 3]> for Operand {
    #[inline]
    fn from(components: [Option<f64>; 3]) -> Self {
        Self::Components(components)
    }
}

impl Vector3 {
    /// Adds a vector or per-axis scalars to `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectored::*;
    /// let v = vec3(1.0, 5.0, 2.0);
    /// assert_eq!(v.add(vec3(8.0, 3.0, 3.0)), vec3(9.0, 8.0, 5.0));
    /// assert_eq!(v.add((1.0, 2.0, 3.0)), vec3(2.0, 7.0, 5.0));
    /// assert_eq!(v.add(10.0), vec3(11.0, 5.0, 2.0));
    /// assert_eq!(v.add([None, None, Some(-2.0)]), vec3(1.0, 5.0, 0.0));
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, rhs: impl Into<Operand>) -> Self {
        rhs.into().apply(self, |l, r| l + r)
    }

    /// Subtracts a vector or per-axis scalars from `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectored::*;
    /// let v = vec3(2.0, 5.0, 3.0);
    /// assert_eq!(v.sub(vec3(1.0, 3.0, 2.0)), vec3(1.0, 2.0, 1.0));
    /// assert_eq!(v.sub((2.0, 5.0)), vec3(0.0, 0.0, 3.0));
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn sub(self, rhs: impl Into<Operand>) -> Self {
        rhs.into().apply(self, |l, r| l - r)
    }

    /// Alias of [`Vector3::sub`].
    #[inline]
    pub fn subtract(self, rhs: impl Into<Operand>) -> Self {
        self.sub(rhs)
    }

    /// Multiplies `self` by a vector or by per-axis scalars.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectored::*;
    /// let v = vec3(2.0, 8.0, 1.0);
    /// assert_eq!(v.multiply(vec3(4.0, 2.0, 3.0)), vec3(8.0, 16.0, 3.0));
    /// assert_eq!(v.multiply((0.5, 0.0)), vec3(1.0, 0.0, 1.0));
    /// ```
    pub fn multiply(self, rhs: impl Into<Operand>) -> Self {
        rhs.into().apply(self, |l, r| l * r)
    }

    /// Divides `self` by a vector or by per-axis scalars.
    ///
    /// Division by zero follows IEEE-754 semantics and produces infinities or `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectored::*;
    /// let v = vec3(5.0, 10.0, 9.0);
    /// assert_eq!(v.divide(vec3(2.0, 5.0, 3.0)), vec3(2.5, 2.0, 3.0));
    /// assert_eq!(v.divide((1.0, 0.0)), vec3(5.0, f64::INFINITY, 9.0));
    /// ```
    pub fn divide(self, rhs: impl Into<Operand>) -> Self {
        rhs.into().apply(self, |l, r| l / r)
    }

    /// Computes the remainder of dividing `self` by a vector or by per-axis scalars.
    ///
    /// The result has the sign of the dividend, like Rust's `%` operator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectored::*;
    /// let v = vec3(7.0, -7.0, 7.5);
    /// assert_eq!(v.remainder(vec3(3.0, 3.0, 2.0)), vec3(1.0, -1.0, 1.5));
    /// assert_eq!(v.remainder(4.0), vec3(3.0, -7.0, 7.5));
    /// ```
    pub fn remainder(self, rhs: impl Into<Operand>) -> Self {
        rhs.into().apply(self, |l, r| l % r)
    }

    /// Adds `s` to every component.
    pub fn add_scalar(self, s: f64) -> Self {
        self + s
    }

    /// Subtracts `s` from every component.
    pub fn sub_scalar(self, s: f64) -> Self {
        self - s
    }

    /// Multiplies every component by `s`.
    pub fn multiply_scalar(self, s: f64) -> Self {
        self * s
    }

    /// Divides every component by `s`.
    pub fn divide_scalar(self, s: f64) -> Self {
        self / s
    }

    /// Replaces every component by its remainder when divided by `s`.
    pub fn remainder_scalar(self, s: f64) -> Self {
        self % s
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_array()[index]
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_array()[index]
    }
}

impl PartialEq<[f64; 3]> for Vector3 {
    fn eq(&self, other: &[f64; 3]) -> bool {
        self.as_array() == other
    }
}

impl PartialEq<Vector3> for [f64; 3] {
    fn eq(&self, other: &Vector3) -> bool {
        self == other.as_array()
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Vector3 {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}

/// Component-wise negation.
impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(f64::neg)
    }
}

// Every operator comes in a component-wise vector-vector flavor and a vector-scalar flavor that
// applies the scalar to all components.
macro_rules! binary_ops {
    ($($op:ident::$method:ident, $assign_op:ident::$assign_method:ident, $tok:tt;)+) => {
        $(
            impl $op for Vector3 {
                type Output = Self;

                fn $method(self, rhs: Self) -> Self::Output {
                    self.zip_with(rhs, |l, r| l $tok r)
                }
            }

            impl $op<f64> for Vector3 {
                type Output = Self;

                fn $method(self, rhs: f64) -> Self::Output {
                    self.map(|elem| elem $tok rhs)
                }
            }

            impl $assign_op for Vector3 {
                fn $assign_method(&mut self, rhs: Self) {
                    *self = *self $tok rhs;
                }
            }

            impl $assign_op<f64> for Vector3 {
                fn $assign_method(&mut self, rhs: f64) {
                    *self = *self $tok rhs;
                }
            }
        )+
    };
}

binary_ops! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
    Rem::rem, RemAssign::rem_assign, %;
}

/// Scalar-Vector multiplication (scaling).
impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Self::Output {
        rhs * self
    }
}

impl Sum for Vector3 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, v| acc + v)
    }
}

impl<'a> Sum<&'a Vector3> for Vector3 {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
