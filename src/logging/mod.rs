//! Logging endpoint resources.
//!
//! Each third-party logging integration is a sub-resource of a service
//! version, living under `/service/{id}/version/{n}/logging/{kind}`. Records
//! are keyed by name within that scope; renaming via update changes the key.

pub mod loggly;

pub(crate) mod field {
    //! Deserializers for numeric fields the API serves as number or string.

    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(u64),
        Str(String),
    }

    pub fn u64_flexible<'de, D: Deserializer<'de>>(de: D) -> Result<u64, D::Error> {
        match NumOrStr::deserialize(de)? {
            NumOrStr::Num(n) => Ok(n),
            NumOrStr::Str(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }

    pub fn u32_flexible<'de, D: Deserializer<'de>>(de: D) -> Result<u32, D::Error> {
        let n = u64_flexible(de)?;
        u32::try_from(n).map_err(serde::de::Error::custom)
    }
}
