//! Text parsing for [`Quaternion`].
//!
//! Accepts the rendered form `"t + ui + vj + wk"` produced by `Display`, or a
//! comma-separated list of 1, 2 or 4 components read with the same arity
//! rules as the constructors (real, complex, full).

use std::str::FromStr;

use super::Quaternion;
use crate::error::{QuaternionError, QuaternionResult};
use crate::scalar::Scalar;

const TERM_SEPARATOR: &str = " + ";
const UNIT_SUFFIXES: [&str; 4] = ["", "i", "j", "k"];

impl<T: Scalar + FromStr> FromStr for Quaternion<T> {
    type Err = QuaternionError;

    fn from_str(s: &str) -> QuaternionResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(QuaternionError::Parse("empty input".to_string()));
        }

        if s.contains(',') {
            parse_components(s)
        } else if s.contains(TERM_SEPARATOR) {
            parse_rendered(s)
        } else {
            parse_component::<T>(s).map(Quaternion::from_real)
        }
    }
}

fn parse_component<T: FromStr>(value: &str) -> QuaternionResult<T> {
    let value = value.trim();
    value
        .parse::<T>()
        .map_err(|_| QuaternionError::Parse(format!("invalid component '{value}'")))
}

fn parse_components<T: Scalar + FromStr>(s: &str) -> QuaternionResult<Quaternion<T>> {
    let parts: Vec<&str> = s.split(',').collect();

    match parts.as_slice() {
        [x] => Ok(Quaternion::from_real(parse_component(x)?)),
        [x, y] => Ok(Quaternion::from_complex(
            parse_component(x)?,
            parse_component(y)?,
        )),
        [t, u, v, w] => Ok(Quaternion::new(
            parse_component(t)?,
            parse_component(u)?,
            parse_component(v)?,
            parse_component(w)?,
        )),
        _ => Err(QuaternionError::Parse(format!(
            "expected 1, 2 or 4 components, got {}",
            parts.len()
        ))),
    }
}

fn parse_rendered<T: Scalar + FromStr>(s: &str) -> QuaternionResult<Quaternion<T>> {
    let terms: Vec<&str> = s.split(TERM_SEPARATOR).collect();
    if terms.len() != UNIT_SUFFIXES.len() {
        return Err(QuaternionError::Parse(format!(
            "expected 4 terms in '{s}', got {}",
            terms.len()
        )));
    }

    let mut coords = [T::zero(); 4];
    for ((coord, term), suffix) in coords.iter_mut().zip(&terms).zip(UNIT_SUFFIXES) {
        let term = term.trim();
        let value = term.strip_suffix(suffix).ok_or_else(|| {
            QuaternionError::Parse(format!("term '{term}' is missing its '{suffix}' unit"))
        })?;
        *coord = parse_component(value)?;
    }

    Ok(Quaternion::from(coords))
}
