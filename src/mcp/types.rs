use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================
// Tool Parameters
// ============================================================

/// Parameters shared by every audit tool.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct PagesDirParams {
    /// Path to report's definition/pages folder
    pub pages_dir: String,
}
