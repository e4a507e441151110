pub mod errors;
pub mod proxy;

pub use errors::{ExitPlaceholder, NusinovError, NusinovErrorCategory, NusinovResult};
pub use proxy::{
    AcceptedKinds, ProxyInput, ProxyScalar, ProxySource, RawProxy, RawValue, validate_proxy,
    validate_proxy_with,
};

use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelVariant {
    Euvn1984,
    Euvn1992,
    Euvt2021,
    Fuvt2019,
    Fuvt2021,
    Xuv1986,
    Xuv1992,
}

impl ModelVariant {
    pub const ALL: [ModelVariant; 7] = [
        Self::Euvn1984,
        Self::Euvn1992,
        Self::Euvt2021,
        Self::Fuvt2019,
        Self::Fuvt2021,
        Self::Xuv1986,
        Self::Xuv1992,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Euvn1984 => "euvn1984",
            Self::Euvn1992 => "euvn1992",
            Self::Euvt2021 => "euvt2021",
            Self::Fuvt2019 => "fuvt2019",
            Self::Fuvt2021 => "fuvt2021",
            Self::Xuv1986 => "xuv1986",
            Self::Xuv1992 => "xuv1992",
        }
    }

    pub const fn family(self) -> ModelFamily {
        match self {
            Self::Euvn1984 | Self::Euvn1992 => ModelFamily::Euvn,
            Self::Euvt2021 => ModelFamily::Euvt,
            Self::Fuvt2019 | Self::Fuvt2021 => ModelFamily::Fuvt,
            Self::Xuv1986 | Self::Xuv1992 => ModelFamily::Xuv,
        }
    }

    pub const fn has_lines(self) -> bool {
        matches!(self.family(), ModelFamily::Euvn | ModelFamily::Euvt)
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Euvn1984 => "1984 Nusinov EUV model (10-105 nm), driven by the He I 58.4 nm index",
            Self::Euvn1992 => "1992 Nusinov EUV model (10-105 nm), driven by the He I 58.4 nm index",
            Self::Euvt2021 => "2021 EUVT model (10-105 nm), driven by Lyman-alpha flux",
            Self::Fuvt2019 => "2019 FUVT model (115-242 nm), driven by Lyman-alpha flux",
            Self::Fuvt2021 => "2021 FUVT model (115-242 nm), driven by Lyman-alpha flux",
            Self::Xuv1986 => "1986 XUV power-law model, driven by F10.7",
            Self::Xuv1992 => "1992 XUV power-law model, driven by F10.7",
        }
    }
}

impl Display for ModelVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

impl FromStr for ModelVariant {
    type Err = NusinovError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let normalized = token.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| {
                NusinovError::invalid_input_type(
                    "INPUT.MODEL_VARIANT",
                    format!(
                        "unknown model variant '{}'; expected one of {}",
                        token,
                        Self::ALL.map(ModelVariant::as_str).join(", ")
                    ),
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelFamily {
    Euvn,
    Euvt,
    Fuvt,
    Xuv,
}

/// Which coefficient table of a variant a computation reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Bands,
    Lines,
    Full,
}

impl TableKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bands => "bands",
            Self::Lines => "lines",
            Self::Full => "full",
        }
    }
}

impl Display for TableKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}
