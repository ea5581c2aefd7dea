use qrcode::types::QrError;
use qrcode::QrCode;

use crate::error::{Error, Result};
use crate::types::{ECLevel, SymbolVersion};

// Encoder configuration
//------------------------------------------------------------------------------

/// Minimum quiet zone width in modules. Anything narrower corrupts the
/// symbol format's scan margin.
pub const MIN_BORDER: u32 = 4;

/// Validated encoder parameters for a single invocation. Constructed once,
/// consumed by value, never mutated afterwards.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct EncoderConfig {
    pub version: Option<SymbolVersion>,
    pub ec_level: ECLevel,
    /// Pixels per module.
    pub box_size: u32,
    /// Quiet zone width in modules.
    pub border: u32,
}

// Symbol builder
//------------------------------------------------------------------------------

pub struct SymbolBuilder<'a> {
    data: &'a str,
    version: Option<SymbolVersion>,
    ec_level: ECLevel,
    box_size: u32,
    border: u32,
}

impl<'a> SymbolBuilder<'a> {
    pub fn new(data: &'a str) -> Self {
        Self { data, version: None, ec_level: ECLevel::Q, box_size: 10, border: 5 }
    }

    pub fn data(&mut self, data: &'a str) -> &mut Self {
        self.data = data;
        self
    }

    pub fn version(&mut self, version: SymbolVersion) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn unset_version(&mut self) -> &mut Self {
        self.version = None;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn box_size(&mut self, box_size: u32) -> &mut Self {
        self.box_size = box_size;
        self
    }

    pub fn border(&mut self, border: u32) -> &mut Self {
        self.border = border;
        self
    }

    pub fn metadata(&self) -> String {
        match self.version {
            Some(v) => format!(
                "{{ Version: {}, Ec level: {:?}, Box size: {}, Border: {} }}",
                v.number(),
                self.ec_level,
                self.box_size,
                self.border
            ),
            None => format!(
                "{{ Version: Auto, Ec level: {:?}, Box size: {}, Border: {} }}",
                self.ec_level, self.box_size, self.border
            ),
        }
    }

    /// Validates the sizing parameters and hands the payload to the encoder.
    ///
    /// With no version set the encoder picks the smallest version that fits
    /// the payload at the requested level. With a fixed version there is no
    /// fitting: a payload that does not fit fails with
    /// [`Error::CapacityExceeded`] rather than silently overriding the
    /// caller's version choice.
    pub fn build(&self) -> Result<EncodedSymbol> {
        if self.border < MIN_BORDER {
            return Err(Error::InvalidParameter(format!(
                "border {} is below the minimum quiet zone width {MIN_BORDER}",
                self.border
            )));
        }
        if self.box_size == 0 {
            return Err(Error::InvalidParameter("box size must be at least 1 pixel".into()));
        }

        let ec_level = self.ec_level.into();
        let code = match self.version {
            Some(v) => QrCode::with_version(self.data, v.into(), ec_level)
                .map_err(|e| self.encode_error(e))?,
            None => QrCode::with_error_correction_level(self.data, ec_level)
                .map_err(|e| self.encode_error(e))?,
        };

        let config = EncoderConfig {
            version: self.version,
            ec_level: self.ec_level,
            box_size: self.box_size,
            border: self.border,
        };
        Ok(EncodedSymbol { code, config })
    }

    fn encode_error(&self, err: QrError) -> Error {
        match (err, self.version) {
            (QrError::DataTooLong, Some(v)) => {
                Error::CapacityExceeded { version: v.number(), ec_level: self.ec_level }
            }
            (QrError::DataTooLong, None) => Error::InvalidParameter(format!(
                "data is too long for any version at error correction level {:?}",
                self.ec_level
            )),
            (other, _) => Error::InvalidParameter(format!("data cannot be encoded: {other:?}")),
        }
    }
}

// Encoded symbol
//------------------------------------------------------------------------------

/// Generated module matrix together with the configuration that produced it.
pub struct EncodedSymbol {
    code: QrCode,
    config: EncoderConfig,
}

impl std::fmt::Debug for EncodedSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodedSymbol")
            .field("width", &self.code.width())
            .field("config", &self.config)
            .finish()
    }
}

impl EncodedSymbol {
    /// Width of the symbol in modules, quiet zone excluded.
    pub fn width(&self) -> usize {
        self.code.width()
    }

    /// Version the encoder settled on.
    pub fn version(&self) -> i16 {
        match self.code.version() {
            qrcode::Version::Normal(v) | qrcode::Version::Micro(v) => v,
        }
    }

    pub fn ec_level(&self) -> ECLevel {
        self.config.ec_level
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Module colors in row-major order.
    pub(crate) fn modules(&self) -> Vec<qrcode::Color> {
        self.code.to_colors()
    }
}

#[cfg(test)]
mod builder_util_tests {
    use super::SymbolBuilder;
    use crate::types::{ECLevel, SymbolVersion};

    #[test]
    fn test_metadata() {
        let mut builder = SymbolBuilder::new("Hello, world!");
        builder.version(SymbolVersion::new(1).unwrap()).ec_level(ECLevel::L);
        assert_eq!(builder.metadata(), "{ Version: 1, Ec level: L, Box size: 10, Border: 5 }");
        builder.unset_version();
        assert_eq!(builder.metadata(), "{ Version: Auto, Ec level: L, Box size: 10, Border: 5 }");
    }
}
