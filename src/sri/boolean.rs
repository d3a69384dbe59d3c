use super::codec::{ScalarCodec, impl_codec_serde};
use super::error::SriError;

/// Boolean written as `SI` / `NO` in SRI documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SriBool(pub bool);

impl From<bool> for SriBool {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<SriBool> for bool {
    fn from(value: SriBool) -> Self {
        value.0
    }
}

impl ScalarCodec for SriBool {
    fn encode(&self) -> Result<String, SriError> {
        Ok(if self.0 { "SI" } else { "NO" }.to_string())
    }

    fn decode(&mut self, text: &str) -> Result<(), SriError> {
        self.0 = match text {
            "SI" => true,
            "NO" => false,
            other => return Err(SriError::InvalidBool(other.into())),
        };
        Ok(())
    }
}

impl_codec_serde!(SriBool);
