use serde::{Deserialize, Serialize};

/// Read-only build facts handed to every merge callback and customizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    /// Production build (hashed names, no sourcemaps, treeshaking)
    pub is_prod: bool,

    /// A server bundle is being assembled
    pub ssr: bool,
}

impl Context {
    pub fn new(is_prod: bool) -> Self {
        Self {
            is_prod,
            ssr: false,
        }
    }
}
