use super::Vector3;

/// A plain `{x, y, z}` record, the object form of a [`Vector3`].
///
/// Fields that aren't specified default to 0, both when constructing a record with
/// `..Default::default()` and when deserializing one with the `serde` feature enabled.
///
/// # Examples
///
/// ```
/// # use vectored::*;
/// let record = Record { x: 10.0, y: 20.0, ..Default::default() };
/// assert_eq!(Vector3::from_object(record), vec3(10.0, 20.0, 0.0));
/// assert_eq!(vec3(1.0, 2.0, 3.0).to_object(), Record { x: 1.0, y: 2.0, z: 3.0 });
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Record {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Creates a vector from the fields of a [`Record`].
    #[inline]
    pub const fn from_object(record: Record) -> Self {
        Self::new(record.x, record.y, record.z)
    }

    /// Returns the components as a [`Record`].
    #[inline]
    pub const fn to_object(self) -> Record {
        Record {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
}

impl From<Record> for Vector3 {
    #[inline]
    fn from(record: Record) -> Self {
        Self::from_object(record)
    }
}

impl From<Vector3> for Record {
    #[inline]
    fn from(v: Vector3) -> Self {
        v.to_object()
    }
}
