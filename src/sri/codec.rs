//! Text codec for scalar values carried inside SRI documents.
//!
//! A document layer (serde, the XML adapter) never needs to know how an
//! access key or an SRI boolean is laid out: it asks the value to encode
//! itself to text on write and to decode element text on read.

use super::error::SriError;

/// Two-way conversion between a value and its SRI text form.
pub trait ScalarCodec {
    /// Render the value as the text stored in a document.
    fn encode(&self) -> Result<String, SriError>;

    /// Replace `self` with the value parsed from `text`.
    ///
    /// On error `self` is left unchanged.
    fn decode(&mut self, text: &str) -> Result<(), SriError>;

    /// Decode into a fresh default value.
    fn from_text(text: &str) -> Result<Self, SriError>
    where
        Self: Default + Sized,
    {
        let mut value = Self::default();
        value.decode(text)?;
        Ok(value)
    }
}

/// Implement `Serialize`/`Deserialize` through [`ScalarCodec`], so a value
/// travels as its text form and invalid text is rejected at deserialization.
macro_rules! impl_codec_serde {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                let text = $crate::sri::ScalarCodec::encode(self)
                    .map_err(<S::Error as serde::ser::Error>::custom)?;
                serializer.serialize_str(&text)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                <$ty as $crate::sri::ScalarCodec>::from_text(&raw)
                    .map_err(<D::Error as serde::de::Error>::custom)
            }
        }
    };
}

pub(crate) use impl_codec_serde;
