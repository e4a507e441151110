//! Proxy inputs and the validation routine shared by every model entry point.
//!
//! Callers hand the facades anything implementing [`ProxySource`]: Rust numeric
//! scalars, slices/vectors/arrays of them, an already validated [`ProxyInput`],
//! or a dynamically typed `serde_json::Value`. Each source describes itself as a
//! [`RawProxy`] and [`validate_proxy`] decides, in one place, whether that shape
//! and every element in it is acceptable.

use super::{NusinovError, NusinovResult};
use serde_json::Value;

/// One observation point or an ordered sequence of them.
#[derive(Debug, Clone, PartialEq)]
pub enum ProxyInput {
    Scalar(f64),
    Sequence(Vec<f64>),
}

impl ProxyInput {
    pub fn values(&self) -> &[f64] {
        match self {
            Self::Scalar(value) => std::slice::from_ref(value),
            Self::Sequence(values) => values,
        }
    }

    pub fn len(&self) -> usize {
        self.values().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Applies `f` elementwise, keeping the scalar/sequence shape.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        match self {
            Self::Scalar(value) => Self::Scalar(f(*value)),
            Self::Sequence(values) => Self::Sequence(values.iter().map(|value| f(*value)).collect()),
        }
    }

    /// Combines two proxies elementwise. A scalar operand broadcasts against a
    /// sequence; two sequences must have the same length.
    pub fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> NusinovResult<Self> {
        match (self, other) {
            (Self::Scalar(left), Self::Scalar(right)) => Ok(Self::Scalar(f(*left, *right))),
            (Self::Scalar(left), Self::Sequence(right)) => Ok(Self::Sequence(
                right.iter().map(|value| f(*left, *value)).collect(),
            )),
            (Self::Sequence(left), Self::Scalar(right)) => Ok(Self::Sequence(
                left.iter().map(|value| f(*value, *right)).collect(),
            )),
            (Self::Sequence(left), Self::Sequence(right)) => {
                if left.len() != right.len() {
                    return Err(NusinovError::invalid_input_type(
                        "INPUT.PROXY_BROADCAST",
                        format!(
                            "proxy sequences cannot be combined: lengths {} and {} differ",
                            left.len(),
                            right.len()
                        ),
                    ));
                }
                Ok(Self::Sequence(
                    left.iter()
                        .zip(right)
                        .map(|(left, right)| f(*left, *right))
                        .collect(),
                ))
            }
        }
    }
}

/// A single element as reported by a proxy source, before validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue {
    Float(f64),
    Integer(i128),
    /// Anything that is not a number; carries the offending type name.
    Other(&'static str),
}

impl RawValue {
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Float(_) => "float",
            Self::Integer(_) => "int",
            Self::Other(name) => name,
        }
    }
}

/// Shape of a proxy source before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum RawProxy {
    Scalar(RawValue),
    Sequence(Vec<RawValue>),
    Unsupported(&'static str),
}

/// Numeric kinds a validation pass accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptedKinds {
    pub floats: bool,
    pub integers: bool,
}

impl AcceptedKinds {
    pub const NUMERIC: Self = Self {
        floats: true,
        integers: true,
    };

    fn accepts(self, value: RawValue) -> Option<f64> {
        match value {
            RawValue::Float(value) if self.floats => Some(value),
            RawValue::Integer(value) if self.integers => Some(value as f64),
            _ => None,
        }
    }

    fn describe(self) -> &'static str {
        match (self.floats, self.integers) {
            (true, true) => "float and int",
            (true, false) => "float",
            (false, true) => "int",
            (false, false) => "no",
        }
    }
}

impl Default for AcceptedKinds {
    fn default() -> Self {
        Self::NUMERIC
    }
}

pub trait ProxySource {
    fn raw_proxy(&self) -> RawProxy;
}

/// Scalar types allowed as proxy elements.
pub trait ProxyScalar {
    fn raw_value(&self) -> RawValue;
}

macro_rules! float_proxy_scalar {
    ($($ty:ty),*) => {$(
        impl ProxyScalar for $ty {
            fn raw_value(&self) -> RawValue {
                RawValue::Float(f64::from(*self))
            }
        }

        impl ProxySource for $ty {
            fn raw_proxy(&self) -> RawProxy {
                RawProxy::Scalar(self.raw_value())
            }
        }
    )*};
}

macro_rules! integer_proxy_scalar {
    ($($ty:ty),*) => {$(
        impl ProxyScalar for $ty {
            fn raw_value(&self) -> RawValue {
                RawValue::Integer(*self as i128)
            }
        }

        impl ProxySource for $ty {
            fn raw_proxy(&self) -> RawProxy {
                RawProxy::Scalar(self.raw_value())
            }
        }
    )*};
}

float_proxy_scalar!(f32, f64);
integer_proxy_scalar!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

impl<T: ProxyScalar> ProxySource for [T] {
    fn raw_proxy(&self) -> RawProxy {
        RawProxy::Sequence(self.iter().map(ProxyScalar::raw_value).collect())
    }
}

impl<T: ProxyScalar> ProxySource for Vec<T> {
    fn raw_proxy(&self) -> RawProxy {
        self.as_slice().raw_proxy()
    }
}

impl<T: ProxyScalar, const N: usize> ProxySource for [T; N] {
    fn raw_proxy(&self) -> RawProxy {
        self.as_slice().raw_proxy()
    }
}

impl ProxySource for ProxyInput {
    fn raw_proxy(&self) -> RawProxy {
        match self {
            Self::Scalar(value) => RawProxy::Scalar(RawValue::Float(*value)),
            Self::Sequence(values) => {
                RawProxy::Sequence(values.iter().map(|value| RawValue::Float(*value)).collect())
            }
        }
    }
}

impl ProxySource for Value {
    fn raw_proxy(&self) -> RawProxy {
        match self {
            Value::Number(_) => RawProxy::Scalar(json_raw_value(self)),
            Value::Array(items) => RawProxy::Sequence(items.iter().map(json_raw_value).collect()),
            other => RawProxy::Unsupported(json_type_name(other)),
        }
    }
}

fn json_raw_value(value: &Value) -> RawValue {
    match value {
        Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                RawValue::Integer(i128::from(integer))
            } else if let Some(integer) = number.as_u64() {
                RawValue::Integer(i128::from(integer))
            } else {
                number
                    .as_f64()
                    .map_or(RawValue::Other("number"), RawValue::Float)
            }
        }
        other => RawValue::Other(json_type_name(other)),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// Validates a proxy source against `kinds`. Nothing is coerced or dropped:
/// the first unacceptable element fails the whole input.
pub fn validate_proxy_with<P>(proxy: &P, kinds: AcceptedKinds) -> NusinovResult<ProxyInput>
where
    P: ProxySource + ?Sized,
{
    let input = match proxy.raw_proxy() {
        RawProxy::Scalar(value) => ProxyInput::Scalar(kinds.accepts(value).ok_or_else(|| {
            NusinovError::invalid_input_type(
                "INPUT.PROXY_TYPE",
                format!(
                    "only {} scalars or sequences of them are allowed; proxy was {}",
                    kinds.describe(),
                    value.type_name()
                ),
            )
        })?),
        RawProxy::Sequence(values) => {
            if values.is_empty() {
                return Err(NusinovError::invalid_input_type(
                    "INPUT.PROXY_EMPTY",
                    "proxy sequence must contain at least one value",
                ));
            }
            let mut accepted = Vec::with_capacity(values.len());
            for (index, value) in values.into_iter().enumerate() {
                let converted = kinds.accepts(value).ok_or_else(|| {
                    NusinovError::invalid_input_type(
                        "INPUT.PROXY_ELEMENT_TYPE",
                        format!(
                            "only {} types are allowed in a proxy sequence; element {} was {}",
                            kinds.describe(),
                            index,
                            value.type_name()
                        ),
                    )
                })?;
                accepted.push(converted);
            }
            ProxyInput::Sequence(accepted)
        }
        RawProxy::Unsupported(type_name) => {
            return Err(NusinovError::invalid_input_type(
                "INPUT.PROXY_TYPE",
                format!(
                    "only {} scalars or sequences of them are allowed; proxy was {}",
                    kinds.describe(),
                    type_name
                ),
            ));
        }
    };

    if input.values().iter().any(|value| !value.is_finite()) {
        tracing::warn!(
            observations = input.len(),
            "proxy contains non-finite values; they propagate into the result"
        );
    }

    Ok(input)
}

pub fn validate_proxy<P>(proxy: &P) -> NusinovResult<ProxyInput>
where
    P: ProxySource + ?Sized,
{
    validate_proxy_with(proxy, AcceptedKinds::NUMERIC)
}

#[cfg(test)]
mod tests {
    use super::{AcceptedKinds, ProxyInput, validate_proxy, validate_proxy_with};
    use crate::domain::NusinovErrorCategory;
    use serde_json::json;

    #[test]
    fn scalars_and_sequences_keep_their_shape() {
        assert_eq!(
            validate_proxy(&100.0).expect("float scalar"),
            ProxyInput::Scalar(100.0)
        );
        assert_eq!(
            validate_proxy(&150_i32).expect("int scalar"),
            ProxyInput::Scalar(150.0)
        );
        assert_eq!(
            validate_proxy(&[3.0, 1.0, 2.0]).expect("array"),
            ProxyInput::Sequence(vec![3.0, 1.0, 2.0])
        );
        assert_eq!(
            validate_proxy(&json!([1, 2.5])).expect("mixed numeric json"),
            ProxyInput::Sequence(vec![1.0, 2.5])
        );
    }

    #[test]
    fn non_numeric_inputs_are_rejected_with_their_type() {
        let error = validate_proxy(&json!("100")).expect_err("string must fail");
        assert_eq!(error.category(), NusinovErrorCategory::InvalidInputType);
        assert!(error.message().contains("string"), "{}", error.message());

        let error = validate_proxy(&json!({"f107": 100})).expect_err("object must fail");
        assert!(error.message().contains("object"));

        let error = validate_proxy(&json!([100, "x", 120])).expect_err("mixed list must fail");
        assert_eq!(error.placeholder(), "INPUT.PROXY_ELEMENT_TYPE");
        assert!(error.message().contains("element 1 was string"));

        let error = validate_proxy(&json!([[1.0], [2.0]])).expect_err("nested list must fail");
        assert!(error.message().contains("list"));

        let error = validate_proxy(&json!(true)).expect_err("bool must fail");
        assert!(error.message().contains("bool"));
    }

    #[test]
    fn empty_sequences_are_rejected() {
        let empty: Vec<f64> = Vec::new();
        let error = validate_proxy(&empty).expect_err("empty must fail");
        assert_eq!(error.placeholder(), "INPUT.PROXY_EMPTY");
    }

    #[test]
    fn accepted_kinds_restrict_validation() {
        let floats_only = AcceptedKinds {
            floats: true,
            integers: false,
        };
        assert!(validate_proxy_with(&1.5, floats_only).is_ok());
        let error = validate_proxy_with(&2_u8, floats_only).expect_err("int must fail");
        assert!(error.message().contains("only float scalars"));
    }

    #[test]
    fn nan_is_accepted_and_kept() {
        let input = validate_proxy(&f64::NAN).expect("nan is numeric");
        assert!(input.values()[0].is_nan());
    }

    #[test]
    fn zip_with_broadcasts_scalars_and_checks_lengths() {
        let left = ProxyInput::Sequence(vec![1.0, 2.0, 3.0]);
        let sum = left
            .zip_with(&ProxyInput::Scalar(10.0), |a, b| a + b)
            .expect("broadcast");
        assert_eq!(sum, ProxyInput::Sequence(vec![11.0, 12.0, 13.0]));

        let error = left
            .zip_with(&ProxyInput::Sequence(vec![1.0]), |a, b| a + b)
            .expect_err("length mismatch");
        assert_eq!(error.placeholder(), "INPUT.PROXY_BROADCAST");
    }
}
