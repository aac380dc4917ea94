use std::{num::ParseFloatError, str::FromStr};

use super::Vector3;

/// An error returned when parsing a [`Vector3`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseVectorError {
    #[error("missing `{0}` component")]
    MissingComponent(char),
    #[error("expected `{expected}` component, found `{found}`")]
    UnexpectedComponent { expected: char, found: String },
    #[error("invalid value for `{component}` component: {source}")]
    InvalidNumber {
        component: char,
        #[source]
        source: ParseFloatError,
    },
    #[error("unexpected trailing input `{0}`")]
    TrailingInput(String),
}

/// Parses the format produced by the [`Display`][std::fmt::Display] impl, `x:<x> y:<y> z:<z>`.
///
/// Components must appear in order and are separated by whitespace.
///
/// # Examples
///
/// ```
/// # use vectored::*;
/// let v: Vector3 = "x:10 y:-2.5 z:0".parse().unwrap();
/// assert_eq!(v, vec3(10.0, -2.5, 0.0));
///
/// let v = vec3(0.1, 1e-20, 3.0);
/// assert_eq!(v.to_string().parse::<Vector3>(), Ok(v));
/// ```
impl FromStr for Vector3 {
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let mut components = [0.0; 3];
        for (component, label) in components.iter_mut().zip(['x', 'y', 'z']) {
            let token = tokens
                .next()
                .ok_or(ParseVectorError::MissingComponent(label))?;
            let value = token
                .strip_prefix(label)
                .and_then(|rest| rest.strip_prefix(':'))
                .ok_or_else(|| ParseVectorError::UnexpectedComponent {
                    expected: label,
                    found: token.to_string(),
                })?;
            *component = value
                .parse()
                .map_err(|source| ParseVectorError::InvalidNumber {
                    component: label,
                    source,
                })?;
        }

        if let Some(rest) = tokens.next() {
            return Err(ParseVectorError::TrailingInput(rest.to_string()));
        }

        Ok(components.into())
    }
}
