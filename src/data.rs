use crate::attrs::ResolvedAttrs;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Data {
    /// The source URL. This uniquely identifies the entry in the data file
    pub key: String,
    /// When this entry was generated, RFC 3339 local time
    pub generated: String,
    pub attrs: ResolvedAttrs,
}
