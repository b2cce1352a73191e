//! Glyphs prefixed to CLI messages

pub struct Icons;

impl Icons {
    pub const CHECK: &str = "✅";
    pub const WARN: &str = "⚠️";
    pub const INFO: &str = "ℹ️";
    pub const PACKAGE: &str = "📦";
}
