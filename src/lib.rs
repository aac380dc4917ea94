//! A small 2D and 3D vector math library.
//!
//! The crate revolves around a single type, [`Vector3`]: three [`f64`] components with the
//! arithmetic, geometric, and conversion operations commonly needed by graphics, simulation, and
//! physics code.
//!
//! # Goals & Non-Goals
//!
//! - Keep the API small. There is exactly one vector type. 2D vectors are [`Vector3`]s with a Z
//!   component of 0, which is what [`vec2`] and [`Vector3::from_angle`] produce.
//! - Operations never mutate their receiver. [`Vector3`] is [`Copy`], and every method takes
//!   `self` by value and returns the result. The only exceptions are the component setters
//!   ([`Vector3::set`] and friends) and the compound assignment operators (`+=` etc.).
//! - Follow IEEE-754 semantics. Dividing by zero produces infinities or `NaN` instead of an error,
//!   and nothing in this crate panics on unusual numeric input. The only guarded operation is
//!   [`Vector3::normalize`], which leaves zero-length vectors untouched.
//! - Don't support matrices, quaternions, or vectors of other dimensions.
//!
//! # Randomness
//!
//! [`Vector3::random_2d`] and [`Vector3::random_3d`] draw from a global, thread-local generator
//! that can be reseeded via [`random::seed`]. The `*_with` variants accept any
//! [`random::RandomSource`] instead, which makes them deterministic for a seeded source.
//!
//! # Crate Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for [`Vector3`] and [`Record`].

pub mod random;
mod vector;

pub use vector::*;
